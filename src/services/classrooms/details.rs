use super::ClassroomService;
use crate::errors::Result;
use crate::models::classrooms::entities::ClassroomView;
use crate::models::classrooms::responses::{ClassroomDetailsPage, DETAILS_TITLE};
use crate::models::students::entities::StudentView;
use crate::services::outcome::Outcome;
use crate::session::{IdentityLookup, SessionGate};

pub async fn get_details(
    service: &ClassroomService,
    session: &dyn IdentityLookup,
    classroom_id: i64,
) -> Result<Outcome<ClassroomDetailsPage>> {
    if SessionGate::check(session).identity().is_none() {
        return Ok(Outcome::login());
    }

    let storage = service.storage();
    let Some(classroom) = storage.get_classroom_by_id(classroom_id).await? else {
        return Ok(Outcome::NotFound);
    };

    let students = storage
        .list_classroom_students(classroom.id)
        .await?
        .into_iter()
        .map(StudentView::from)
        .collect();
    let course_name = storage
        .get_course_by_id(classroom.course_id)
        .await?
        .map(|course| course.name);
    let teacher_name = storage
        .get_teacher_by_id(classroom.teacher_id)
        .await?
        .map(|teacher| teacher.full_name);

    Ok(Outcome::Render(ClassroomDetailsPage {
        title: DETAILS_TITLE.to_string(),
        classroom: ClassroomView::from(classroom),
        students,
        course_name,
        teacher_name,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::outcome::Redirect;
    use crate::session::SessionState;
    use crate::storage::Storage;
    use crate::test_support::{UntouchableStorage, seeded_storage, signed_in};

    #[tokio::test]
    async fn test_details_resolve_course_and_teacher() {
        let service = ClassroomService::new(Arc::new(seeded_storage().await));

        let page = service
            .get_details(&signed_in("1"), 1)
            .await
            .unwrap()
            .page()
            .expect("details page");

        assert_eq!(page.classroom.class_name, "Math Class");
        assert_eq!(page.course_name.as_deref(), Some("Math"));
        assert_eq!(page.teacher_name.as_deref(), Some("John Doe"));
        assert!(page.students.is_empty());
    }

    #[tokio::test]
    async fn test_details_list_enrolled_students() {
        let storage = Arc::new(seeded_storage().await);
        storage.replace_classroom_students(2, &[2]).await.unwrap();
        let service = ClassroomService::new(storage);

        let page = service
            .get_details(&signed_in("1"), 2)
            .await
            .unwrap()
            .page()
            .unwrap();
        assert_eq!(page.students.len(), 1);
        assert_eq!(page.students[0].full_name, "Tran Thi B");
    }

    #[tokio::test]
    async fn test_details_unknown_id_is_not_found() {
        let service = ClassroomService::new(Arc::new(seeded_storage().await));
        let outcome = service.get_details(&signed_in("1"), 999).await.unwrap();
        assert!(outcome.is_not_found());
    }

    #[tokio::test]
    async fn test_details_without_session_redirects() {
        let service = ClassroomService::new(Arc::new(UntouchableStorage));
        let outcome = service
            .get_details(&SessionState::default(), 1)
            .await
            .unwrap();
        assert_eq!(outcome.redirect(), Some(Redirect::Login));
    }
}
