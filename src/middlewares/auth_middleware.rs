//! 세션 쿠키 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 `auth_token` 쿠키를 읽어 세션을 해석하고
//! 사용자 정보를 요청 extensions에 넣습니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 세션 인증 미들웨어
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};

    use crate::config::{AppConfig, SessionCookieConfig};
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
    use crate::state::AppState;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        match user.0 {
            Some(user) => HttpResponse::Ok().body(user.user_id),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::for_tests(AppConfig::for_tests()))
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_missing_cookie() {
        let app = test::init_service(
            App::new().app_data(state()).service(
                web::scope("/p")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/p").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unauthorized");
    }

    #[actix_web::test]
    async fn test_required_mode_accepts_valid_cookie() {
        let state = state();
        let user_id = mongodb::bson::oid::ObjectId::new().to_hex();
        let token = state
            .token_service
            .generate_token(&user_id, "ada", "ada@example.com")
            .unwrap();

        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/p")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/p")
            .cookie(Cookie::new(SessionCookieConfig::NAME, token))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, user_id.as_bytes());
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_tampered_cookie() {
        let app = test::init_service(
            App::new().app_data(state()).service(
                web::scope("/p")
                    .wrap(AuthMiddleware::required())
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/p")
            .cookie(Cookie::new(SessionCookieConfig::NAME, "a.b.c"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_optional_mode_passes_anonymous_requests() {
        let app = test::init_service(
            App::new().app_data(state()).service(
                web::scope("/o")
                    .wrap(AuthMiddleware::optional())
                    .route("", web::get().to(maybe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/o")
            .cookie(Cookie::new(SessionCookieConfig::NAME, "garbage"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }
}
