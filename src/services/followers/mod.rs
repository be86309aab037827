pub mod follower_service;

pub use follower_service::FollowerService;
