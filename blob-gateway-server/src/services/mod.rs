pub mod blob_service;

pub use blob_service::{configure, GatewayState};
