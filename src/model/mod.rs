//! API data transfer objects.
//!
//! These are the request and response shapes exchanged over HTTP. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
