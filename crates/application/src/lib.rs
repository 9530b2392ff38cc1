//! Stratus DNS Application Layer
//!
//! Ports (traits) for the provider clients, the two caches, and the
//! resolve-override use case that ties them together.
pub mod ports;
pub mod services;
pub mod use_cases;
