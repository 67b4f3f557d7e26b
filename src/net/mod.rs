//! Networking modules for the roster REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns authorization and failure normalization for every outbound
//! call, `api` exposes one typed function per endpoint, and `types` defines
//! the wire schema.

pub mod api;
pub mod client;
pub mod types;
