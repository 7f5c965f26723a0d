//! Lifecycle sensor components.
//!
//! ARCHITECTURE
//! ============
//! None of these render anything. Each wraps one `tabguard` sensor and ties
//! it to the mount/cleanup cycle of the component tree.

pub mod auth_page_marker;
pub mod route_tracker;
pub mod session_bootstrap;
