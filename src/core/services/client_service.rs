//! Validated CRUD helpers for the client roster.

use uuid::Uuid;

use crate::core::services::ServiceResult;
use crate::errors::DealerError;
use crate::inventory::client::Client;
use crate::inventory::common::Displayable;
use crate::inventory::dealership::Dealership;

/// Provides validated CRUD helpers for the client collection.
pub struct ClientService;

impl ClientService {
    /// Adds a new client and returns its identifier.
    ///
    /// `purchase_history` must be empty: no sale can reference a client that
    /// does not exist yet, and the field is only ever appended to by the
    /// sale-completion path.
    pub fn create(dealership: &mut Dealership, client: Client) -> ServiceResult<Uuid> {
        Self::validate(&client)?;
        if !client.purchase_history.is_empty() {
            return Err(DealerError::Validation(
                "purchase history starts empty and is populated by sale completion".into(),
            ));
        }
        tracing::debug!(client = %client.display_label(), "client created");
        Ok(dealership.add_client(client))
    }

    /// Looks up a client by id.
    pub fn get(dealership: &Dealership, id: Uuid) -> ServiceResult<&Client> {
        dealership
            .client(id)
            .ok_or_else(|| DealerError::not_found("client", id))
    }

    /// Returns all clients in insertion order.
    pub fn list(dealership: &Dealership) -> Vec<&Client> {
        dealership.clients.iter().collect()
    }

    /// Applies `patch` to the client identified by `id` and returns the
    /// updated record.
    ///
    /// `purchase_history` is deliberately not patchable; it is appended to by
    /// the sale-completion path only.
    pub fn update(
        dealership: &mut Dealership,
        id: Uuid,
        patch: ClientPatch,
    ) -> ServiceResult<Client> {
        let current = dealership
            .client(id)
            .ok_or_else(|| DealerError::not_found("client", id))?;

        let mut updated = current.clone();
        patch.apply(&mut updated);
        Self::validate(&updated)?;

        if let Some(client) = dealership.client_mut(id) {
            *client = updated.clone();
        }
        dealership.touch();
        Ok(updated)
    }

    fn validate(client: &Client) -> ServiceResult<()> {
        if client.name.trim().is_empty() {
            return Err(DealerError::Validation("client name is required".into()));
        }
        if !client.email.contains('@') {
            return Err(DealerError::Validation(format!(
                "`{}` is not a valid email",
                client.email
            )));
        }
        if client.phone.trim().is_empty() {
            return Err(DealerError::Validation("client phone is required".into()));
        }
        Ok(())
    }
}

/// Partial update for a client record. Absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub id_number: Option<String>,
    pub notes: Option<String>,
    pub avatar: Option<Option<String>>,
}

impl ClientPatch {
    fn apply(self, client: &mut Client) {
        if let Some(name) = self.name {
            client.name = name;
        }
        if let Some(email) = self.email {
            client.email = email;
        }
        if let Some(phone) = self.phone {
            client.phone = phone;
        }
        if let Some(address) = self.address {
            client.address = address;
        }
        if let Some(id_number) = self.id_number {
            client.id_number = id_number;
        }
        if let Some(notes) = self.notes {
            client.notes = notes;
        }
        if let Some(avatar) = self.avatar {
            client.avatar = avatar;
        }
    }
}
