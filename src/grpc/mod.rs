//! # gRPC Module
//!
//! 다른 마이크로서비스가 사용자 프로필을 조회하기 위한 내부 API입니다.
//! `proto/users.proto`에서 생성된 tonic 코드를 사용하며, HTTP 서버와 별도의
//! 포트(`GRPC_PORT`)에서 같은 런타임 위에 실행됩니다.
//!
//! | RPC | 동작 |
//! |-----|------|
//! | `GetUser` | ID로 단일 사용자 조회 |
//! | `GetUsers` | 여러 ID 일괄 조회 (없는 ID는 생략) |

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::rt::net::TcpListener;
use tonic::transport::server::TcpIncoming;
use tonic::{Request, Response, Status};

use crate::domain::dto::users::response::UserResponse;
use crate::services::users::UserService;

pub mod proto {
    tonic::include_proto!("users");
}

use proto::users_service_server::{UsersService, UsersServiceServer};
use proto::{GetUserRequest, GetUsersRequest, UsersResponse};

impl From<UserResponse> for proto::UserResponse {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

pub struct UsersGrpcService {
    user_service: Arc<UserService>,
}

impl UsersGrpcService {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}

#[tonic::async_trait]
impl UsersService for UsersGrpcService {
    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<proto::UserResponse>, Status> {
        let GetUserRequest { user_id } = request.into_inner();
        log::debug!("📡 gRPC GetUser: {}", user_id);

        let user = self.user_service.get_user(&user_id).await?;
        Ok(Response::new(user.into()))
    }

    async fn get_users(
        &self,
        request: Request<GetUsersRequest>,
    ) -> Result<Response<UsersResponse>, Status> {
        let GetUsersRequest { user_ids } = request.into_inner();
        log::debug!("📡 gRPC GetUsers: {}건", user_ids.len());

        let users = self.user_service.get_users_by_ids(&user_ids).await?;
        Ok(Response::new(UsersResponse {
            users: users.into_iter().map(proto::UserResponse::from).collect(),
        }))
    }
}

/// gRPC 포트를 미리 바인딩합니다.
///
/// 바인딩 실패는 HTTP 서버가 뜨기 전에 호출자에게 전달됩니다.
/// 실제로 바인딩된 주소를 함께 반환합니다 (포트 0 지원).
pub async fn bind(addr: SocketAddr) -> std::io::Result<(SocketAddr, TcpIncoming)> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    let incoming = TcpIncoming::from_listener(listener, true, None).map_err(std::io::Error::other)?;

    Ok((local_addr, incoming))
}

/// 바인딩된 리스너 위에서 gRPC 서버를 실행합니다. 서버가 종료될 때까지 반환하지 않습니다.
pub async fn serve(incoming: TcpIncoming, user_service: Arc<UserService>) -> Result<(), tonic::transport::Error> {
    tonic::transport::Server::builder()
        .add_service(UsersServiceServer::new(UsersGrpcService::new(user_service)))
        .serve_with_incoming(incoming)
        .await
}
