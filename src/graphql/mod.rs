//! # GraphQL Module
//!
//! `async-graphql` 기반 스키마입니다. HTTP 엔드포인트(`POST /graphql`,
//! `GET /playground`)는 [`crate::handlers::graphql`]에 있습니다.

pub mod schema;
pub mod types;

pub use schema::{MutationRoot, QueryRoot, UsersSchema, build_schema};
