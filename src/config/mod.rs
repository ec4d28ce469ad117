//! Configuration for the SEO gateway

pub mod builder;
pub mod types;

pub use builder::GatewayConfigBuilder;
pub use types::GatewayConfig;
