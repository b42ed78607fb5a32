pub mod gateway;
pub mod providers;
pub mod shaping;

pub use gateway::{CompletionGateway, GatewayError};
pub use shaping::{shape_generated, ShapedResponse};
