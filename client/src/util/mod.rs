//! Small UI helpers shared by pages.

pub mod auth;
