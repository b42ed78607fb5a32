//! HTTP handlers for codegen-service.

pub mod code;
pub mod files;
pub mod health;
pub mod landing;

pub use code::{explain_code, generate_code, optimize_code};
pub use files::{create_file, upload_file};
pub use health::{api_health_check, health_check, metrics, readiness_check};
pub use landing::{hello, index};
