use super::client_error::ClientError;
use super::facade::Facade;
use super::records::{Depth, Record, SearchOptions, SearchResults};

/// Interface of the Elomentary client consumed by the subscription center
///
/// Calls are made in two steps: select a facade with [`api`](Self::api) or
/// [`subscriptions`](Self::subscriptions), then issue a read against it.
pub trait ElomentaryApi {
    /// Select the active API facade
    ///
    /// # Arguments
    ///
    /// * `kind` - Facade name (e.g., "contact", "contacts"), stored verbatim
    fn api(&mut self, kind: &str) -> &mut Self;

    /// Select the subscriptions facade of a contact
    ///
    /// # Arguments
    ///
    /// * `contact_id` - The contact whose subscriptions are addressed
    fn subscriptions(&mut self, contact_id: &str) -> &mut Self;

    /// Currently selected facade
    fn active_facade(&self) -> &Facade;

    /// Fetch a single resource from the active facade
    ///
    /// # Returns
    ///
    /// * `Ok(record)` - The resource, or an empty record when it does not exist
    /// * `Err(_)` - The active facade does not support `show`
    fn show(
        &self,
        id: &str,
        depth: Option<Depth>,
        extensions: Option<&[String]>,
    ) -> Result<Record, ClientError>;

    /// Search the active facade
    ///
    /// # Returns
    ///
    /// * `Ok(results)` - Matching elements
    /// * `Err(_)` - The active facade does not support `search`
    fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResults, ClientError>;
}
