//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The console has a single piece of shared state, the session store. It is
//! written only by `session::controller` and read through subscriptions.

pub mod session;
