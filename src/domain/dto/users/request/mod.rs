pub mod register_request;
pub mod login_request;
pub mod update_user_request;

pub use register_request::RegisterRequest;
pub use login_request::LoginRequest;
pub use update_user_request::UpdateUserRequest;
