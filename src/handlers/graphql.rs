//! GraphQL HTTP 엔드포인트
//!
//! `/graphql`은 선택적 인증 미들웨어 뒤에 있으며, 세션이 있으면
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 데이터로 넘겨 `me` 쿼리가 사용할 수 있게 합니다.

use actix_web::{HttpResponse, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::domain::models::auth::OptionalUser;
use crate::graphql::UsersSchema;

pub async fn graphql_handler(
    schema: web::Data<UsersSchema>,
    user: OptionalUser,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(user) = user.0 {
        request = request.data(user);
    }

    schema.execute(request).await.into()
}

pub async fn playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
