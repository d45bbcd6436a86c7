//! Generic resource actor framework.
//!
//! One [`ResourceActor`] owns the store for one entity type and publishes snapshots
//! of it. The rest of the crate talks to it through a [`ResourceClient`] or a
//! [`Snapshots`] subscription.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the store
//! - [`ResourceClient`] - Typed request sender
//! - [`ActorClient`] - Shared operations for domain-specific wrappers
//! - [`Snapshots`] - Observer handle for the snapshot feed
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] for utilities to test code without spawning a real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod subscription;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response, Snapshot};
pub use subscription::{Published, Snapshots};
