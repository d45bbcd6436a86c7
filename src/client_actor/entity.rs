//! ActorEntity trait implementation for the [`Client`] record.

use crate::client_actor::ClientError;
use crate::framework::ActorEntity;
use crate::model::{Client, ClientCreate, ClientId, ClientUpdate};
use async_trait::async_trait;

fn check_email(email: &str) -> Result<(), ClientError> {
    if !email.is_empty() && !email.contains('@') {
        return Err(ClientError::ValidationError(format!(
            "invalid email address: {email}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Client {
    type Id = ClientId;
    type Create = ClientCreate;
    type Update = ClientUpdate;
    type Error = ClientError;

    /// Builds the record. Blank drafts are allowed.
    fn from_create_params(id: ClientId, params: ClientCreate) -> Result<Self, Self::Error> {
        check_email(&params.email)?;
        Ok(Self::new(id, params.name, params.email, params.phone))
    }

    /// Applies the fields present in the update.
    ///
    /// # Fields Updated
    /// - `name`
    /// - `email` (an empty value clears it; otherwise it must contain `@`)
    /// - `phone`
    async fn on_update(&mut self, update: ClientUpdate) -> Result<(), Self::Error> {
        if let Some(email) = update.email {
            check_email(&email)?;
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_is_accepted() {
        let client = Client::from_create_params(ClientId(3), ClientCreate::default()).unwrap();
        assert_eq!(client, Client::new(ClientId(3), "", "", ""));
    }

    #[tokio::test]
    async fn test_update_rejects_malformed_email_without_partial_changes() {
        let mut client = Client::new(ClientId(1), "Bob", "b@x.com", "1");
        let update = ClientUpdate {
            name: Some("Robert".into()),
            email: Some("not-an-email".into()),
            phone: None,
        };

        let result = client.on_update(update).await;
        assert!(matches!(result, Err(ClientError::ValidationError(_))));
        assert_eq!(client.name, "Bob");
    }
}
