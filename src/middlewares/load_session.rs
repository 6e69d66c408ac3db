/*!
 * 会话加载中间件
 *
 * 从会话 Cookie 读取会话ID，在对象缓存中取出会话数据并放入请求扩展。
 * 默认不拒绝任何请求，是否登录由各工作流通过 `SessionGate` 判定。
 * `LoadSession::require_sign_in()` 在路径和请求体解析之前把匿名请求重定向到登录页。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::LoadSession;
 *
 * App::new()
 *     .app_data(web::Data::new(session_store))
 *     .service(
 *         web::scope("/classrooms")
 *             .wrap(LoadSession::require_sign_in())
 *             .route("", web::get().to(list_classrooms))
 *     )
 * ```
 *
 * 处理程序中：
 *
 * ```rust,ignore
 * let session = LoadSession::extract_session(&req);
 * ```
 */

use crate::services::Redirect;
use crate::session::{GateDecision, SessionGate, SessionState, SessionStore};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::LOCATION,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadSession {
    require_sign_in: bool,
}

/// 请求扩展中保存的会话
#[derive(Debug, Clone, Default)]
pub struct LoadedSession {
    pub id: Option<String>,
    pub state: SessionState,
}

async fn load(req: &ServiceRequest) -> LoadedSession {
    let Some(store) = req.app_data::<web::Data<SessionStore>>() else {
        error!("SessionStore not found in app data, treating request as anonymous");
        return LoadedSession::default();
    };

    let Some(session_id) = req
        .cookie(store.cookie_name())
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
    else {
        return LoadedSession::default();
    };

    match store.load(&session_id).await {
        Some(state) => {
            debug!("Session {} loaded for {}", session_id, req.path());
            LoadedSession {
                id: Some(session_id),
                state,
            }
        }
        None => LoadedSession::default(),
    }
}

impl<S, B> Transform<S, ServiceRequest> for LoadSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = LoadSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoadSessionMiddleware {
            service: Rc::new(service),
            require_sign_in: self.require_sign_in,
        }))
    }
}

pub struct LoadSessionMiddleware<S> {
    service: Rc<S>,
    require_sign_in: bool,
}

impl<S, B> Service<ServiceRequest> for LoadSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let require_sign_in = self.require_sign_in;
        Box::pin(async move {
            let session = load(&req).await;

            let anonymous = SessionGate::check(&session.state) == GateDecision::Unauthenticated;
            if require_sign_in && anonymous {
                debug!("Anonymous request to {} redirected to login", req.path());
                return Ok(req.into_response(
                    HttpResponse::Found()
                        .insert_header((LOCATION, Redirect::Login.location()))
                        .finish()
                        .map_into_right_body(),
                ));
            }

            req.extensions_mut().insert(session);
            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

impl LoadSession {
    /// 匿名请求在进入处理程序前重定向到登录页
    pub fn require_sign_in() -> Self {
        Self {
            require_sign_in: true,
        }
    }

    /// 当前请求的会话数据，未加载时为空会话
    pub fn extract_session(req: &actix_web::HttpRequest) -> SessionState {
        req.extensions()
            .get::<LoadedSession>()
            .map(|loaded| loaded.state.clone())
            .unwrap_or_default()
    }

    pub fn extract_session_id(req: &actix_web::HttpRequest) -> Option<String> {
        req.extensions()
            .get::<LoadedSession>()
            .and_then(|loaded| loaded.id.clone())
    }
}
