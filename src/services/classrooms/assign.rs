use std::collections::HashSet;

use tracing::{info, warn};

use super::ClassroomService;
use crate::errors::Result;
use crate::models::classrooms::entities::Classroom;
use crate::models::classrooms::requests::AssignStudentsRequest;
use crate::models::classrooms::responses::{ASSIGN_TITLE, AssignStudentsPage, StudentSelection};
use crate::models::common::field_errors::FieldErrors;
use crate::services::outcome::{Outcome, Redirect};
use crate::session::{IdentityLookup, SessionGate};

/// 全部学生，按给定集合标记选中状态
async fn assignment_page(
    service: &ClassroomService,
    classroom: Classroom,
    selected: &HashSet<i64>,
    errors: FieldErrors,
) -> Result<AssignStudentsPage> {
    let students = service
        .storage()
        .list_students()
        .await?
        .into_iter()
        .map(|student| StudentSelection {
            is_selected: selected.contains(&student.id),
            student_id: student.id,
            full_name: student.full_name,
            email: student.email,
        })
        .collect();

    Ok(AssignStudentsPage {
        title: ASSIGN_TITLE.to_string(),
        classroom_id: classroom.id,
        classroom_name: classroom.class_name,
        students,
        errors,
    })
}

pub async fn prepare_assign_students(
    service: &ClassroomService,
    session: &dyn IdentityLookup,
    classroom_id: i64,
) -> Result<Outcome<AssignStudentsPage>> {
    if SessionGate::check(session).identity().is_none() {
        return Ok(Outcome::login());
    }

    let storage = service.storage();
    let Some(classroom) = storage.get_classroom_by_id(classroom_id).await? else {
        return Ok(Outcome::NotFound);
    };

    let enrolled: HashSet<i64> = storage
        .list_classroom_students(classroom.id)
        .await?
        .into_iter()
        .map(|student| student.id)
        .collect();

    let page = assignment_page(service, classroom, &enrolled, FieldErrors::new()).await?;
    Ok(Outcome::Render(page))
}

pub async fn assign_students(
    service: &ClassroomService,
    session: &dyn IdentityLookup,
    classroom_id: i64,
    request: AssignStudentsRequest,
) -> Result<Outcome<AssignStudentsPage>> {
    let Some(identity) = SessionGate::check(session).identity() else {
        return Ok(Outcome::login());
    };

    let storage = service.storage();
    let Some(classroom) = storage.get_classroom_by_id(classroom_id).await? else {
        return Ok(Outcome::NotFound);
    };

    let roster: HashSet<i64> = storage
        .list_students()
        .await?
        .into_iter()
        .map(|student| student.id)
        .collect();

    let mut student_ids = Vec::with_capacity(request.student_ids.len());
    let mut errors = FieldErrors::new();
    for id in request.student_ids {
        if !roster.contains(&id) {
            errors.add("student_ids", format!("Student {id} does not exist."));
        } else if !student_ids.contains(&id) {
            student_ids.push(id);
        }
    }

    if !errors.is_valid() {
        warn!(
            "Student assignment for classroom {} rejected: {:?}",
            classroom_id, errors
        );
        let selected: HashSet<i64> = student_ids.into_iter().collect();
        let page = assignment_page(service, classroom, &selected, errors).await?;
        return Ok(Outcome::Render(page));
    }

    storage
        .replace_classroom_students(classroom_id, &student_ids)
        .await?;
    info!(
        "Classroom {} now has {} students (assigned by account {})",
        classroom_id,
        student_ids.len(),
        identity.account_id
    );

    Ok(Outcome::Redirect(Redirect::ClassroomDetails(classroom_id)))
}
