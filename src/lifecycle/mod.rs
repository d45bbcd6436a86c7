//! # System Lifecycle
//!
//! Starting and stopping the actors behind the console, plus logging setup.
//!
//! 1. **Create** the actor and its service ([`AdminSystem::new`]).
//! 2. **Hand out** service clones to views.
//! 3. **Shut down**: drop every view, then [`AdminSystem::shutdown`], which drops
//!    the last service clone and awaits the actor task.

pub mod admin_system;
pub mod tracing;

pub use admin_system::*;
pub use tracing::*;
