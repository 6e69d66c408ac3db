use tracing::{info, warn};

use super::{ClassroomService, DUPLICATE_NAME_MESSAGE};
use crate::errors::{Result, SimsError};
use crate::models::classrooms::requests::ClassroomForm;
use crate::models::classrooms::responses::{CREATE_TITLE, ClassroomFormPage};
use crate::models::common::field_errors::FieldErrors;
use crate::services::outcome::{Outcome, Redirect};
use crate::session::{IdentityLookup, SessionGate};

pub async fn prepare_create(
    service: &ClassroomService,
    session: &dyn IdentityLookup,
) -> Result<Outcome<ClassroomFormPage>> {
    if SessionGate::check(session).identity().is_none() {
        return Ok(Outcome::login());
    }

    let page = service
        .form_page(CREATE_TITLE, ClassroomForm::default(), FieldErrors::new())
        .await?;
    Ok(Outcome::Render(page))
}

pub async fn create(
    service: &ClassroomService,
    session: &dyn IdentityLookup,
    mut form: ClassroomForm,
) -> Result<Outcome<ClassroomFormPage>> {
    let Some(identity) = SessionGate::check(session).identity() else {
        return Ok(Outcome::login());
    };
    // 新建时忽略客户端提交的ID
    form.id = None;

    let request = match service.validate_form(&form, None).await? {
        Ok(request) => request,
        Err(errors) => {
            warn!(
                "Classroom creation rejected for account {}: {:?}",
                identity.account_id, errors
            );
            return Ok(Outcome::Render(
                service.form_page(CREATE_TITLE, form, errors).await?,
            ));
        }
    };

    match service.storage().create_classroom(request).await {
        Ok(classroom) => {
            info!(
                "Classroom {} ({}) created by account {}",
                classroom.class_name, classroom.id, identity.account_id
            );
            Ok(Outcome::Redirect(Redirect::ClassroomIndex))
        }
        // 检查与插入之间被并发请求抢先
        Err(SimsError::Conflict(detail)) => {
            warn!("Classroom name conflict on insert: {}", detail);
            let mut errors = FieldErrors::new();
            errors.add("class_name", DUPLICATE_NAME_MESSAGE);
            Ok(Outcome::Render(
                service.form_page(CREATE_TITLE, form, errors).await?,
            ))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;

    use super::*;
    use crate::services::outcome::Redirect;
    use crate::session::SessionState;
    use crate::storage::Storage;
    use crate::models::RecordStatus;
    use crate::test_support::{
        UntouchableStorage, classroom_request, seeded_storage, signed_in, today,
    };

    fn form(name: &str) -> ClassroomForm {
        ClassroomForm {
            class_name: Some(name.to_string()),
            course_id: Some(1),
            teacher_id: Some(1),
            start_date: Some(today()),
            end_date: Some(today() + Duration::days(30)),
            schedule: Some("Mon-Wed 9:00-11:00".to_string()),
            location: Some("Room 104".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_prepare_create_returns_empty_form_with_references() {
        let service = ClassroomService::new(Arc::new(seeded_storage().await));

        let page = service
            .prepare_create(&signed_in("1"))
            .await
            .unwrap()
            .page()
            .expect("form page");

        assert_eq!(page.title, "Create Class Room");
        assert!(page.classroom.class_name.is_none());
        assert_eq!(page.courses.len(), 2);
        assert_eq!(page.teachers.len(), 2);
        assert!(page.errors.is_valid());
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected_without_persisting() {
        let storage = Arc::new(seeded_storage().await);
        let service = ClassroomService::new(storage.clone());

        let page = service
            .create(&signed_in("1"), form("Math Class"))
            .await
            .unwrap()
            .page()
            .expect("form page with errors");

        assert_eq!(page.errors.errors_for("class_name"), ["Class name already exists."]);
        assert_eq!(page.classroom.class_name.as_deref(), Some("Math Class"));
        assert_eq!(page.courses.len(), 2);
        assert_eq!(storage.count_classrooms().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_inactive_classroom_name_cannot_be_reused() {
        let storage = Arc::new(seeded_storage().await);
        let mut retired = classroom_request("Biology Class", 1, 1);
        retired.status = RecordStatus::Inactive;
        storage.create_classroom(retired).await.unwrap();
        let service = ClassroomService::new(storage.clone());

        let page = service
            .create(&signed_in("1"), form("Biology Class"))
            .await
            .unwrap()
            .page()
            .expect("form page with errors");

        assert_eq!(page.errors.errors_for("class_name"), ["Class name already exists."]);
        assert_eq!(storage.count_classrooms().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unique_name_is_persisted_and_redirects() {
        let storage = Arc::new(seeded_storage().await);
        let service = ClassroomService::new(storage.clone());

        let outcome = service
            .create(&signed_in("1"), form("Chemistry Class"))
            .await
            .unwrap();

        assert_eq!(outcome.redirect(), Some(Redirect::ClassroomIndex));
        assert_eq!(storage.count_classrooms().await.unwrap(), 3);
        let created = storage.list_classrooms().await.unwrap().pop().unwrap();
        assert_eq!(created.class_name, "Chemistry Class");
        assert_eq!(created.location.as_deref(), Some("Room 104"));
    }

    #[tokio::test]
    async fn test_missing_fields_and_unknown_references() {
        let storage = Arc::new(seeded_storage().await);
        let service = ClassroomService::new(storage.clone());

        let page = service
            .create(&signed_in("1"), ClassroomForm::default())
            .await
            .unwrap()
            .page()
            .unwrap();
        assert_eq!(page.errors.errors_for("class_name"), ["Class name is required."]);

        let mut bad = form("Biology Class");
        bad.course_id = Some(99);
        bad.end_date = Some(today() - Duration::days(1));
        let page = service
            .create(&signed_in("1"), bad)
            .await
            .unwrap()
            .page()
            .unwrap();
        assert_eq!(page.errors.errors_for("course_id").len(), 1);
        assert_eq!(page.errors.errors_for("end_date").len(), 1);
        assert_eq!(storage.count_classrooms().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unauthenticated_create_touches_nothing() {
        let service = ClassroomService::new(Arc::new(UntouchableStorage));

        let outcome = service
            .create(&SessionState::default(), form("Chemistry Class"))
            .await
            .unwrap();
        assert_eq!(outcome.redirect(), Some(Redirect::Login));

        let outcome = service.prepare_create(&SessionState::default()).await.unwrap();
        assert_eq!(outcome.redirect(), Some(Redirect::Login));
    }
}
