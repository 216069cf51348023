//! CLI command implementations

pub mod encode;
pub mod render;
pub mod timing;
