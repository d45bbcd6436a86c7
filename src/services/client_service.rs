//! # Client Service
//!
//! The create-record service and collection provider used by the client list.
//! It wraps a `ResourceClient<Client>` and exposes domain-specific methods.
use crate::client_actor::ClientError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient, Snapshot};
use crate::model::{Client, ClientCreate, ClientId, ClientUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Client actor.
#[derive(Clone)]
pub struct ClientService {
    inner: ResourceClient<Client>,
}

impl ClientService {
    pub fn new(inner: ResourceClient<Client>) -> Self {
        Self { inner }
    }

    /// Allocates a blank client record and returns its id.
    #[instrument(skip(self))]
    pub async fn create_client(&self) -> Result<ClientId, ClientError> {
        debug!("Sending request");
        self.inner
            .create(ClientCreate::default())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_client(
        &self,
        id: ClientId,
        update: ClientUpdate,
    ) -> Result<Client, ClientError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn list_clients(&self) -> Result<Snapshot<Client>, ClientError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Client> for ClientService {
    type Error = ClientError;

    fn inner(&self) -> &ResourceClient<Client> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ClientError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<ClientError>() {
                Ok(client_error) => *client_error,
                Err(other) => ClientError::ActorCommunicationError(other.to_string()),
            },
            other => ClientError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_update, MockClient};

    #[tokio::test]
    async fn test_create_client_returns_allocated_id() {
        let mut mock = MockClient::<Client>::new();
        mock.expect_create().return_ok(ClientId(42));

        let service = ClientService::new(mock.client());
        assert_eq!(service.create_client().await, Ok(ClientId(42)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_framework_errors_map_to_client_errors() {
        let mut mock = MockClient::<Client>::new();
        mock.expect_update()
            .return_err(FrameworkError::NotFound("9".into()));
        mock.expect_update().return_err(FrameworkError::EntityError(Box::new(
            ClientError::ValidationError("bad".into()),
        )));
        mock.expect_create().return_err(FrameworkError::ActorClosed);

        let service = ClientService::new(mock.client());
        let missing = service.update_client(ClientId(9), ClientUpdate::default()).await;
        assert_eq!(missing, Err(ClientError::NotFound("9".into())));

        let invalid = service.update_client(ClientId(1), ClientUpdate::default()).await;
        assert_eq!(invalid, Err(ClientError::ValidationError("bad".into())));

        let closed = service.create_client().await;
        assert_eq!(
            closed,
            Err(ClientError::ActorCommunicationError("Actor closed".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_subscribe_sees_published_snapshots() {
        let mock = MockClient::<Client>::new();
        let service = ClientService::new(mock.client());
        let mut snapshots = service.subscribe();
        assert!(snapshots.current().is_none());

        mock.publish(vec![Client::new(ClientId(1), "Bob", "b@x.com", "1")]);
        let published = snapshots.changed().await.unwrap().unwrap();
        assert_eq!(published[0].name, "Bob");
    }

    #[tokio::test]
    async fn test_list_get_and_delete_go_through_the_store() {
        let bob = Client::new(ClientId(1), "Bob", "b@x.com", "1");
        let mut mock = MockClient::<Client>::new();
        mock.expect_list().return_ok(vec![bob.clone()].into());
        mock.expect_get().return_ok(Some(bob.clone()));
        mock.expect_get().return_ok(None);
        mock.expect_delete().return_ok(());
        mock.expect_delete()
            .return_err(FrameworkError::NotFound("1".into()));

        let service = ClientService::new(mock.client());
        let listed = service.list_clients().await.unwrap();
        assert_eq!(&*listed, &[bob.clone()]);
        assert_eq!(service.get(ClientId(1)).await, Ok(Some(bob)));
        assert_eq!(service.get(ClientId(2)).await, Ok(None));
        assert_eq!(service.delete(ClientId(1)).await, Ok(()));
        assert_eq!(
            service.delete(ClientId(1)).await,
            Err(ClientError::NotFound("1".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_client_sends_the_partial_update() {
        let (client, mut channels) = create_mock_client::<Client>(4);
        let service = ClientService::new(client);

        let pending = tokio::spawn(async move {
            let update = ClientUpdate {
                phone: Some("555".into()),
                ..ClientUpdate::default()
            };
            service.update_client(ClientId(3), update).await
        });

        let (id, update, respond_to) = expect_update(&mut channels.requests)
            .await
            .expect("Expected Update request");
        assert_eq!(id, ClientId(3));
        assert_eq!(update.phone.as_deref(), Some("555"));
        assert!(update.name.is_none() && update.email.is_none());

        let updated = Client::new(ClientId(3), "", "", "555");
        respond_to.send(Ok(updated.clone())).unwrap();
        assert_eq!(pending.await.unwrap(), Ok(updated));
    }
}
