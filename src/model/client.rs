use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier allocated by the client store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub u32);

impl From<u32> for ClientId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A client record as listed and edited in the admin console.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Client`](#impl-ActorEntity-for-Client) for details on:
/// - Creation parameters ([`ClientCreate`])
/// - Update parameters ([`ClientUpdate`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Client {
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Payload for creating a new client.
///
/// The console creates blank records and fills them in from the edit view, so the
/// default draft is what "new" sends.
#[derive(Debug, Clone, Default)]
pub struct ClientCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Payload for updating an existing client. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
