//! Networking modules for the console's REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the credentialed request gateway and `types` defines the
//! `/api/auth/` wire schema.

pub mod http;
pub mod types;
