//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates lifecycle
//! signalling to `components`. Auth-flow pages (login, signup) mount an
//! `AuthPageMarker`; protected pages install an unauthenticated redirect.

pub mod dashboard;
pub mod login;
pub mod signup;
