//! 工作流结果到 HTTP 响应的转换

use actix_web::{HttpResponse, http::header::LOCATION};
use serde::Serialize;
use tracing::error;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::classrooms::responses::{
    AssignStudentsPage, ClassroomDetailsPage, ClassroomFormPage, ClassroomListPage,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::outcome::{Outcome, Redirect};

/// 页面是否携带字段级错误
pub(crate) trait PageErrors {
    fn has_errors(&self) -> bool {
        false
    }
}

impl PageErrors for ClassroomListPage {}

impl PageErrors for ClassroomDetailsPage {}

impl PageErrors for ClassroomFormPage {
    fn has_errors(&self) -> bool {
        !self.errors.is_valid()
    }
}

impl PageErrors for AssignStudentsPage {
    fn has_errors(&self) -> bool {
        !self.errors.is_valid()
    }
}

pub(crate) fn redirect(target: Redirect) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, target.location()))
        .finish()
}

pub(crate) fn internal_error(context: &str, err: impl std::fmt::Display) -> HttpResponse {
    error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        context,
    ))
}

pub(crate) fn respond<T>(result: Result<Outcome<T>>, message: &str) -> HttpResponse
where
    T: Serialize + TS + PageErrors,
{
    match result {
        Ok(Outcome::Render(page)) if page.has_errors() => HttpResponse::BadRequest().json(
            ApiResponse::error(ErrorCode::ValidationFailed, page, "Validation failed"),
        ),
        Ok(Outcome::Render(page)) => HttpResponse::Ok().json(ApiResponse::success(page, message)),
        Ok(Outcome::Redirect(target)) => redirect(target),
        Ok(Outcome::NotFound) => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        )),
        Err(e) => internal_error("Classroom request failed", e),
    }
}
