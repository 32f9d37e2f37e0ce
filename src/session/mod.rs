//! Session lifecycle: probe, sign-in delegation, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! `controller` is the only writer of `state::session::SessionStore`.
//! `lifecycle` lets the shell invalidate in-flight operations on teardown, and
//! `navigator` abstracts the full-page navigation used to hand sign-in over to
//! the identity provider.

pub mod controller;
pub mod lifecycle;
pub mod navigator;

pub use controller::{ProbeOutcome, SessionController, SignInOutcome, SignOutOutcome};
pub use lifecycle::{Generation, Lifecycle};
pub use navigator::{BrowserNavigator, Navigator};
