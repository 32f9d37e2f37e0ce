//! Utility helpers shared across pages.

pub mod auth;
