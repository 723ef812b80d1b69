//! Orchestrator-facing REST facade of the southbridge driver.
//!
//! Thin by design: handlers validate path parameters, delegate to the
//! device-operation services in `southbridge-core`, and wrap results in the
//! [`ResultRsp`](southbridge_core::ResultRsp) envelope. Driver-level
//! failures travel inside that envelope with the failed error code; HTTP
//! status codes are reserved for malformed requests.

pub mod config;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use routes::build_router;
pub use state::AppState;
