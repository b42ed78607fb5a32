pub mod code;
pub mod files;

pub use code::*;
pub use files::*;
