//! codegen-service: HTTP gateway that turns code requests into upstream chat completions.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
