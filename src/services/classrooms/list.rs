use tracing::debug;

use super::ClassroomService;
use crate::errors::Result;
use crate::models::classrooms::entities::ClassroomView;
use crate::models::classrooms::responses::{ClassroomListPage, LIST_TITLE};
use crate::services::outcome::Outcome;
use crate::session::{IdentityLookup, SessionGate};

pub async fn list_classrooms(
    service: &ClassroomService,
    session: &dyn IdentityLookup,
) -> Result<Outcome<ClassroomListPage>> {
    let Some(identity) = SessionGate::check(session).identity() else {
        return Ok(Outcome::login());
    };

    let classrooms: Vec<ClassroomView> = service
        .storage()
        .list_classrooms()
        .await?
        .into_iter()
        .map(ClassroomView::from)
        .collect();

    debug!(
        "Account {} listed {} classrooms",
        identity.account_id,
        classrooms.len()
    );

    Ok(Outcome::Render(ClassroomListPage {
        title: LIST_TITLE.to_string(),
        classrooms,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::outcome::Redirect;
    use crate::session::SessionState;
    use crate::test_support::{UntouchableStorage, seeded_storage, signed_in};

    #[tokio::test]
    async fn test_lists_all_classrooms_in_insertion_order() {
        let service = ClassroomService::new(Arc::new(seeded_storage().await));

        let page = service
            .list_classrooms(&signed_in("1"))
            .await
            .unwrap()
            .page()
            .expect("list page");

        assert_eq!(page.title, "Class Rooms");
        let names: Vec<_> = page.classrooms.iter().map(|c| c.class_name.as_str()).collect();
        assert_eq!(names, ["Math Class", "Physics Class"]);
        assert_eq!(page.classrooms[0].location, "Room 101");
    }

    #[tokio::test]
    async fn test_without_session_redirects_to_login() {
        let service = ClassroomService::new(Arc::new(UntouchableStorage));

        let outcome = service
            .list_classrooms(&SessionState::default())
            .await
            .unwrap();
        assert_eq!(outcome.redirect(), Some(Redirect::Login));
    }

    #[tokio::test]
    async fn test_malformed_token_redirects_to_login() {
        let service = ClassroomService::new(Arc::new(UntouchableStorage));

        let outcome = service.list_classrooms(&signed_in("abc")).await.unwrap();
        assert_eq!(outcome.redirect(), Some(Redirect::Login));
    }
}
