//! # ActorEntity Trait
//!
//! The contract every resource must satisfy to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
//! It fixes the identifier type, the create/update payloads, the error type, and the
//! lifecycle hooks the actor calls around each mutation.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// The store is ordered by `Id`, and ids are allocated from a `u32` counter, so
/// snapshots come out in creation order.
///
/// # Provided Methods (Hooks)
/// - [`ActorEntity::on_create`]
/// - [`ActorEntity::on_delete`]
///
/// Both default to `Ok(())`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the allocated id and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is built and before it is stored.
    async fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
