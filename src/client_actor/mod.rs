//! # Client Actor
//!
//! The collection provider behind the client list: a [`ResourceActor`] over
//! [`Client`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Client`]
//! - [`error`] - [`ClientError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and its service
//!
//! ## Usage
//!
//! ```rust
//! use client_admin::client_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, service) = client_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let id = service.create_client().await?;
//!     assert_eq!(id.to_string(), "1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::ResourceActor;
use crate::model::Client;
use crate::services::ClientService;

/// Creates a new Client actor and its service.
pub fn new(buffer_size: usize) -> (ResourceActor<Client>, ClientService) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ClientService::new(generic_client))
}
