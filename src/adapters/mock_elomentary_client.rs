use super::client_error::ClientError;
use super::elomentary_api::ElomentaryApi;
use super::facade::Facade;
use super::records::{Contact, Depth, Record, SearchOptions, SearchResults};
use crate::params::Params;
use anyhow::Context as _;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Contact table served when no fixtures are supplied
fn default_contacts() -> BTreeMap<String, Contact> {
    BTreeMap::from([(
        "1".to_string(),
        Contact::new("data", "foobar@example.com"),
    )])
}

/// Elomentary client double returning canned data without network calls
///
/// The contact table is fixed at construction. Only the selected facade
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct MockElomentaryClient {
    active: Facade,
    contacts: BTreeMap<String, Contact>,
}

impl Default for MockElomentaryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockElomentaryClient {
    /// Create a client serving the default contact table
    pub fn new() -> Self {
        Self::with_contacts(default_contacts())
    }

    /// Create a client serving the given contacts instead of the defaults
    pub fn with_contacts<I>(contacts: I) -> Self
    where
        I: IntoIterator<Item = (String, Contact)>,
    {
        Self {
            active: Facade::default(),
            contacts: contacts.into_iter().collect(),
        }
    }

    /// Create a client from a JSON fixture file
    ///
    /// The file holds an object keyed by contact id:
    ///
    /// ```json
    /// { "7": { "stored": "x", "emailAddress": "seven@example.com" } }
    /// ```
    pub fn from_fixture_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|source| ClientError::FixtureRead {
            path: path.to_path_buf(),
            source,
        })?;
        let contacts: BTreeMap<String, Contact> =
            serde_json::from_str(&raw).map_err(|source| ClientError::FixtureParse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            path = %path.display(),
            contacts = contacts.len(),
            "Loaded contact fixtures"
        );

        Ok(Self::with_contacts(contacts))
    }

    /// Create a client configured from [`Params`]
    ///
    /// Uses the fixture file when one is configured and preselects the
    /// configured facade, if any.
    pub fn from_params(params: &Params) -> anyhow::Result<Self> {
        let mut client = match &params.elomentary_mock_fixtures {
            Some(path) => Self::from_fixture_file(path)
                .with_context(|| format!("Loading ELOMENTARY_MOCK_FIXTURES ({path})"))?,
            None => Self::new(),
        };

        if let Some(facade) = &params.elomentary_mock_default_facade {
            client.api(facade);
        }

        Ok(client)
    }

    /// Number of contacts in the table
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    fn unsupported(&self, operation: &'static str) -> ClientError {
        warn!(
            facade = %self.active,
            operation,
            "Operation not supported by the selected facade"
        );
        ClientError::UnsupportedOperation {
            facade: self.active.clone(),
            operation,
        }
    }
}

impl ElomentaryApi for MockElomentaryClient {
    fn api(&mut self, kind: &str) -> &mut Self {
        debug!(facade = %kind, "Selecting API facade");
        self.active = Facade::from(kind);
        self
    }

    fn subscriptions(&mut self, contact_id: &str) -> &mut Self {
        debug!(%contact_id, "Selecting contact subscriptions facade");
        self.active = Facade::Subscriptions;
        self
    }

    fn active_facade(&self) -> &Facade {
        &self.active
    }

    fn show(
        &self,
        id: &str,
        depth: Option<Depth>,
        extensions: Option<&[String]>,
    ) -> Result<Record, ClientError> {
        match &self.active {
            Facade::Contact | Facade::Contacts => {
                let record = self
                    .contacts
                    .get(id)
                    .map(Contact::to_record)
                    .unwrap_or_default();
                debug!(
                    %id,
                    ?depth,
                    ?extensions,
                    found = !record.is_empty(),
                    "Served contact lookup"
                );
                Ok(record)
            }
            Facade::Subscriptions | Facade::Unknown(_) => Err(self.unsupported("show")),
        }
    }

    fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResults, ClientError> {
        match &self.active {
            Facade::Subscriptions => {
                debug!(%query, ?options, "Served subscription search");
                Ok(SearchResults::default())
            }
            Facade::Contact | Facade::Contacts | Facade::Unknown(_) => {
                Err(self.unsupported("search"))
            }
        }
    }
}
