use super::subscription_state::SubscriptionState;
use crate::adapters::{Contact, ElomentaryApi, SearchOptions, SearchResults};
use anyhow::Context as _;
use tracing::{debug, info};

/// Query matching every subscription of a contact
const ALL_SUBSCRIPTIONS: &str = "*";

/// Subscription-center lookups on top of an Elomentary client
pub struct SubscriptionCenter<C>
where
    C: ElomentaryApi,
{
    client: C,
}

impl<C> SubscriptionCenter<C>
where
    C: ElomentaryApi,
{
    /// Create a new SubscriptionCenter
    ///
    /// # Arguments
    ///
    /// * `client` - The Elomentary client used for every lookup
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Access the underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Look up a contact by id
    ///
    /// # Returns
    ///
    /// * `Ok(Some(contact))` - The contact exists
    /// * `Ok(None)` - The API returned an empty record
    /// * `Err(_)` - The client failed or returned an unreadable record
    pub fn load_contact(&mut self, contact_id: &str) -> anyhow::Result<Option<Contact>> {
        let record = self
            .client
            .api("contact")
            .show(contact_id, None, None)
            .with_context(|| format!("Fetching contact {contact_id}"))?;

        if record.is_empty() {
            debug!(%contact_id, "Contact not found");
            return Ok(None);
        }

        let contact = serde_json::from_value(serde_json::Value::Object(record))
            .with_context(|| format!("Decoding contact {contact_id}"))?;
        Ok(Some(contact))
    }

    /// List the subscriptions of a contact
    pub fn subscriptions_for(&mut self, contact_id: &str) -> anyhow::Result<SearchResults> {
        self.client
            .subscriptions(contact_id)
            .search(ALL_SUBSCRIPTIONS, &SearchOptions::default())
            .with_context(|| format!("Searching subscriptions of contact {contact_id}"))
    }

    /// Build the subscription-center view of a contact
    ///
    /// Returns `Ok(None)` when the contact does not exist; subscriptions are
    /// not queried in that case.
    pub fn build_state(&mut self, contact_id: &str) -> anyhow::Result<Option<SubscriptionState>> {
        let Some(contact) = self.load_contact(contact_id)? else {
            return Ok(None);
        };

        let results = self.subscriptions_for(contact_id)?;

        info!(
            %contact_id,
            subscriptions = results.elements.len(),
            "Built subscription state"
        );

        Ok(Some(SubscriptionState {
            contact_id: contact_id.to_string(),
            email_address: contact.email_address,
            subscriptions: results.elements,
        }))
    }
}
