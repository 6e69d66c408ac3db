use tracing::{info, warn};

use super::{ClassroomService, DUPLICATE_NAME_MESSAGE};
use crate::errors::{Result, SimsError};
use crate::models::classrooms::requests::ClassroomForm;
use crate::models::classrooms::responses::{ClassroomFormPage, EDIT_TITLE};
use crate::models::common::field_errors::FieldErrors;
use crate::services::outcome::{Outcome, Redirect};
use crate::session::{IdentityLookup, SessionGate};

pub async fn prepare_edit(
    service: &ClassroomService,
    session: &dyn IdentityLookup,
    classroom_id: i64,
) -> Result<Outcome<ClassroomFormPage>> {
    if SessionGate::check(session).identity().is_none() {
        return Ok(Outcome::login());
    }

    let Some(classroom) = service.storage().get_classroom_by_id(classroom_id).await? else {
        return Ok(Outcome::NotFound);
    };

    let page = service
        .form_page(EDIT_TITLE, ClassroomForm::from(classroom), FieldErrors::new())
        .await?;
    Ok(Outcome::Render(page))
}

pub async fn edit(
    service: &ClassroomService,
    session: &dyn IdentityLookup,
    classroom_id: i64,
    mut form: ClassroomForm,
) -> Result<Outcome<ClassroomFormPage>> {
    let Some(identity) = SessionGate::check(session).identity() else {
        return Ok(Outcome::login());
    };

    if service
        .storage()
        .get_classroom_by_id(classroom_id)
        .await?
        .is_none()
    {
        return Ok(Outcome::NotFound);
    }
    // 以路径中的ID为准
    form.id = Some(classroom_id);

    let request = match service.validate_form(&form, Some(classroom_id)).await? {
        Ok(request) => request,
        Err(errors) => {
            warn!(
                "Classroom {} update rejected for account {}: {:?}",
                classroom_id, identity.account_id, errors
            );
            return Ok(Outcome::Render(
                service.form_page(EDIT_TITLE, form, errors).await?,
            ));
        }
    };

    match service.storage().update_classroom(classroom_id, request).await {
        Ok(Some(classroom)) => {
            info!(
                "Classroom {} ({}) updated by account {}",
                classroom.class_name, classroom.id, identity.account_id
            );
            Ok(Outcome::Redirect(Redirect::ClassroomIndex))
        }
        Ok(None) => Ok(Outcome::NotFound),
        Err(SimsError::Conflict(detail)) => {
            warn!("Classroom name conflict on update: {}", detail);
            let mut errors = FieldErrors::new();
            errors.add("class_name", DUPLICATE_NAME_MESSAGE);
            Ok(Outcome::Render(
                service.form_page(EDIT_TITLE, form, errors).await?,
            ))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::SessionState;
    use crate::storage::Storage;
    use crate::test_support::{UntouchableStorage, seeded_storage, signed_in};

    #[tokio::test]
    async fn test_prepare_edit_loads_existing_classroom() {
        let service = ClassroomService::new(Arc::new(seeded_storage().await));

        let page = service
            .prepare_edit(&signed_in("1"), 1)
            .await
            .unwrap()
            .page()
            .expect("edit page");

        assert_eq!(page.title, "Edit Class Room");
        assert_eq!(page.classroom.id, Some(1));
        assert_eq!(page.classroom.class_name.as_deref(), Some("Math Class"));
        assert_eq!(page.courses.len(), 2);
        assert_eq!(page.teachers.len(), 2);
    }

    #[tokio::test]
    async fn test_prepare_edit_unknown_id_is_not_found() {
        let service = ClassroomService::new(Arc::new(seeded_storage().await));
        let outcome = service.prepare_edit(&signed_in("1"), 999).await.unwrap();
        assert!(outcome.is_not_found());
    }

    #[tokio::test]
    async fn test_edit_keeps_own_name_and_updates_fields() {
        let storage = Arc::new(seeded_storage().await);
        let service = ClassroomService::new(storage.clone());

        let mut form = service
            .prepare_edit(&signed_in("1"), 1)
            .await
            .unwrap()
            .page()
            .unwrap()
            .classroom;
        form.location = Some("Room 201".to_string());

        let outcome = service.edit(&signed_in("1"), 1, form).await.unwrap();
        assert_eq!(outcome.redirect(), Some(Redirect::ClassroomIndex));

        let updated = storage.get_classroom_by_id(1).await.unwrap().unwrap();
        assert_eq!(updated.class_name, "Math Class");
        assert_eq!(updated.location.as_deref(), Some("Room 201"));
    }

    #[tokio::test]
    async fn test_edit_to_another_existing_name_is_rejected() {
        let storage = Arc::new(seeded_storage().await);
        let service = ClassroomService::new(storage.clone());

        let mut form = ClassroomForm::from(storage.get_classroom_by_id(1).await.unwrap().unwrap());
        form.class_name = Some("Physics Class".to_string());

        let page = service
            .edit(&signed_in("1"), 1, form)
            .await
            .unwrap()
            .page()
            .expect("form page with errors");
        assert_eq!(page.errors.errors_for("class_name"), ["Class name already exists."]);

        let unchanged = storage.get_classroom_by_id(1).await.unwrap().unwrap();
        assert_eq!(unchanged.class_name, "Math Class");
    }

    #[tokio::test]
    async fn test_edit_without_session_redirects() {
        let service = ClassroomService::new(Arc::new(UntouchableStorage));
        let outcome = service
            .edit(&SessionState::default(), 1, ClassroomForm::default())
            .await
            .unwrap();
        assert_eq!(outcome.redirect(), Some(Redirect::Login));
    }

    #[tokio::test]
    async fn test_prepare_edit_without_session_redirects() {
        let service = ClassroomService::new(Arc::new(UntouchableStorage));
        let outcome = service
            .prepare_edit(&SessionState::default(), 1)
            .await
            .unwrap();
        assert_eq!(outcome.redirect(), Some(Redirect::Login));
    }
}
