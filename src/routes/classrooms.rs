use actix_web::{HttpRequest, HttpResponse, web};

use crate::middlewares::LoadSession;
use crate::models::classrooms::requests::{AssignStudentsRequest, ClassroomForm};
use crate::routes::respond::respond;
use crate::services::ClassroomService;
use crate::utils::SafeClassroomId;

// HTTP处理程序
pub async fn list_classrooms(
    req: HttpRequest,
    service: web::Data<ClassroomService>,
) -> HttpResponse {
    let session = LoadSession::extract_session(&req);
    respond(
        service.list_classrooms(&session).await,
        "Classrooms retrieved successfully",
    )
}

pub async fn prepare_create(
    req: HttpRequest,
    service: web::Data<ClassroomService>,
) -> HttpResponse {
    let session = LoadSession::extract_session(&req);
    respond(service.prepare_create(&session).await, "Create form")
}

pub async fn create_classroom(
    req: HttpRequest,
    service: web::Data<ClassroomService>,
    form: web::Json<ClassroomForm>,
) -> HttpResponse {
    let session = LoadSession::extract_session(&req);
    respond(
        service.create(&session, form.into_inner()).await,
        "Classroom created successfully",
    )
}

pub async fn prepare_edit(
    req: HttpRequest,
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomId,
) -> HttpResponse {
    let session = LoadSession::extract_session(&req);
    respond(service.prepare_edit(&session, classroom_id.0).await, "Edit form")
}

pub async fn edit_classroom(
    req: HttpRequest,
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomId,
    form: web::Json<ClassroomForm>,
) -> HttpResponse {
    let session = LoadSession::extract_session(&req);
    respond(
        service.edit(&session, classroom_id.0, form.into_inner()).await,
        "Classroom updated successfully",
    )
}

pub async fn get_details(
    req: HttpRequest,
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomId,
) -> HttpResponse {
    let session = LoadSession::extract_session(&req);
    respond(
        service.get_details(&session, classroom_id.0).await,
        "Classroom details retrieved successfully",
    )
}

pub async fn prepare_assign_students(
    req: HttpRequest,
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomId,
) -> HttpResponse {
    let session = LoadSession::extract_session(&req);
    respond(
        service
            .prepare_assign_students(&session, classroom_id.0)
            .await,
        "Student roster retrieved successfully",
    )
}

pub async fn assign_students(
    req: HttpRequest,
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomId,
    request: web::Json<AssignStudentsRequest>,
) -> HttpResponse {
    let session = LoadSession::extract_session(&req);
    respond(
        service
            .assign_students(&session, classroom_id.0, request.into_inner())
            .await,
        "Students assigned successfully",
    )
}

// 配置路由
pub fn configure_classroom_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/classrooms")
            .wrap(LoadSession::require_sign_in())
            .service(web::resource("").route(web::get().to(list_classrooms)))
            // 固定路径需在 {id} 之前注册
            .service(
                web::resource("/create")
                    .route(web::get().to(prepare_create))
                    .route(web::post().to(create_classroom)),
            )
            .service(
                web::resource("/{id}/edit")
                    .route(web::get().to(prepare_edit))
                    .route(web::post().to(edit_classroom)),
            )
            .service(
                web::resource("/{id}/students")
                    .route(web::get().to(prepare_assign_students))
                    .route(web::post().to(assign_students)),
            )
            .service(web::resource("/{id}").route(web::get().to(get_details))),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::http::{
        StatusCode,
        header::{CONTENT_TYPE, LOCATION},
    };
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::session::{SessionState, SessionStore};
    use crate::storage::Storage;
    use crate::test_support::seeded_storage;

    async fn fixtures() -> (web::Data<ClassroomService>, web::Data<SessionStore>, Cookie<'static>) {
        let storage: Arc<dyn Storage> = Arc::new(seeded_storage().await);
        let sessions = SessionStore::new(
            Arc::new(MokaCacheWrapper::with_settings(64, 60)),
            "sims_session",
            60,
            false,
        );

        let id = SessionStore::new_session_id();
        let mut state = SessionState::default();
        state.sign_in(1);
        sessions.save(&id, &state).await.unwrap();
        let cookie = sessions.session_cookie(&id);

        (
            web::Data::new(ClassroomService::new(storage)),
            web::Data::new(sessions),
            cookie,
        )
    }

    macro_rules! app {
        ($service:expr, $sessions:expr) => {
            test::init_service(
                App::new()
                    .app_data($service.clone())
                    .app_data($sessions.clone())
                    .configure(configure_classroom_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_anonymous_request_is_redirected_to_login() {
        let (service, sessions, _) = fixtures().await;
        let app = app!(service, sessions);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/classrooms").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_anonymous_malformed_requests_redirect_before_parsing() {
        let (service, sessions, _) = fixtures().await;
        let app = app!(service, sessions);

        let req = test::TestRequest::get().uri("/classrooms/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");

        let req = test::TestRequest::post()
            .uri("/classrooms/create")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");

        let req = test::TestRequest::post()
            .uri("/classrooms/abc/students")
            .set_json(json!({ "student_ids": "oops" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_signed_in_invalid_body_is_bad_request() {
        let (service, sessions, cookie) = fixtures().await;
        let app = app!(service, sessions);

        let req = test::TestRequest::post()
            .uri("/classrooms/create")
            .cookie(cookie)
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_signed_in_list_returns_page_json() {
        let (service, sessions, cookie) = fixtures().await;
        let app = app!(service, sessions);

        let req = test::TestRequest::get()
            .uri("/classrooms")
            .cookie(cookie)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["title"], "Class Rooms");
        assert_eq!(body["data"]["classrooms"][0]["class_name"], "Math Class");
        assert_eq!(body["data"]["classrooms"][1]["class_name"], "Physics Class");
    }

    #[actix_web::test]
    async fn test_duplicate_create_is_bad_request_with_field_error() {
        let (service, sessions, cookie) = fixtures().await;
        let app = app!(service, sessions);

        let req = test::TestRequest::post()
            .uri("/classrooms/create")
            .cookie(cookie)
            .set_json(json!({
                "class_name": "Math Class",
                "course_id": 1,
                "teacher_id": 1,
                "start_date": "2025-03-01",
                "end_date": "2025-06-30"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 1022);
        assert_eq!(
            body["data"]["errors"]["class_name"][0],
            "Class name already exists."
        );
    }

    #[actix_web::test]
    async fn test_create_redirects_to_index() {
        let (service, sessions, cookie) = fixtures().await;
        let app = app!(service, sessions);

        let req = test::TestRequest::post()
            .uri("/classrooms/create")
            .cookie(cookie)
            .set_json(json!({
                "class_name": "Chemistry Class",
                "course_id": 2,
                "teacher_id": 1,
                "start_date": "2025-03-01",
                "end_date": "2025-06-30",
                "location": "Lab 3"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/classrooms");
    }

    #[actix_web::test]
    async fn test_unknown_or_malformed_ids_are_not_found() {
        let (service, sessions, cookie) = fixtures().await;
        let app = app!(service, sessions);

        for uri in ["/classrooms/999", "/classrooms/abc", "/classrooms/0/edit"] {
            let req = test::TestRequest::get()
                .uri(uri)
                .cookie(cookie.clone())
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_assign_redirects_to_details() {
        let (service, sessions, cookie) = fixtures().await;
        let app = app!(service, sessions);

        let req = test::TestRequest::post()
            .uri("/classrooms/1/students")
            .cookie(cookie.clone())
            .set_json(json!({ "student_ids": [1] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/classrooms/1");

        let req = test::TestRequest::get()
            .uri("/classrooms/1")
            .cookie(cookie)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["students"][0]["full_name"], "Nguyen Van A");
        assert_eq!(body["data"]["course_name"], "Math");
    }
}
