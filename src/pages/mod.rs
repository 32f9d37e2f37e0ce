//! Route-level views.
//!
//! ARCHITECTURE
//! ============
//! Pages are consumers of the session snapshot only. Their business content
//! (token management, upload listings, user administration) is served by the
//! backend and rendered elsewhere; here each page gates on the session and
//! frames its section.

pub mod help;
pub mod home;
pub mod not_found;
pub mod tokens;
pub mod uploads;
pub mod users;
