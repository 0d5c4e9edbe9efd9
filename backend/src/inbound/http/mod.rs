//! HTTP inbound adapter exposing the REST endpoints.

pub mod account;
pub mod auth;
pub mod error;
pub mod health;
pub mod navigation;
pub mod plan;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
