//! Stratus DNS Infrastructure Layer
//!
//! Provider HTTP clients and the hickory-server request handler.
pub mod dns;
pub mod provider;
