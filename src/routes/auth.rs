use actix_web::{HttpRequest, HttpResponse, web};

use crate::middlewares::LoadSession;
use crate::models::auth::LoginRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::routes::respond::{internal_error, redirect};
use crate::services::auth::{LoginResult, login::BAD_CREDENTIALS};
use crate::services::{AuthService, Redirect};

pub async fn login_entry(service: web::Data<AuthService>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(service.login_entry(), "Login required"))
}

pub async fn login(
    req: HttpRequest,
    service: web::Data<AuthService>,
    login_data: web::Json<LoginRequest>,
) -> HttpResponse {
    let previous = LoadSession::extract_session_id(&req);

    match service
        .login(login_data.into_inner(), previous.as_deref())
        .await
    {
        Ok(LoginResult::SignedIn {
            session_id,
            response,
        }) => HttpResponse::Ok()
            .cookie(service.sessions().session_cookie(&session_id))
            .json(ApiResponse::success(response, "Login successful")),
        Ok(LoginResult::Invalid(msg)) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)),
        Ok(LoginResult::Rejected) => HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::AuthFailed, BAD_CREDENTIALS)),
        Err(e) => internal_error("Login failed", e),
    }
}

pub async fn logout(req: HttpRequest, service: web::Data<AuthService>) -> HttpResponse {
    let session_id = LoadSession::extract_session_id(&req);
    service.logout(session_id.as_deref()).await;

    let mut response = redirect(Redirect::Login);
    if let Err(e) = response.add_cookie(&service.sessions().expired_cookie()) {
        return internal_error("Failed to clear session cookie", e);
    }
    response
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(LoadSession::default())
            .service(
                web::resource("/login")
                    .route(web::get().to(login_entry))
                    .route(web::post().to(login)),
            )
            .route("/logout", web::post().to(logout)),
    );
}
