//! Shell chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session snapshot signal from Leptos context. Only the
//! nav bar talks to the session controller, and only from clicks.

pub mod error_banner;
pub mod footer;
pub mod nav_bar;
