use anyhow::Context as _;
use serde::Deserialize;

/// Configuration for seeding the mock client, read from the environment
///
/// | Variable                          | Meaning                                 |
/// |-----------------------------------|-----------------------------------------|
/// | `ELOMENTARY_MOCK_FIXTURES`        | JSON contact table replacing the default |
/// | `ELOMENTARY_MOCK_DEFAULT_FACADE`  | Facade selected right after construction |
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Params {
    #[serde(default)]
    pub elomentary_mock_fixtures: Option<String>,
    #[serde(default)]
    pub elomentary_mock_default_facade: Option<String>,
}

impl Params {
    /// Load parameters from the process environment
    ///
    /// A `.env` file in the working directory is applied first, if present.
    pub fn new() -> anyhow::Result<Params> {
        let _ = dotenvy::dotenv();
        envy::from_env::<Params>().context("Failed to load configuration")
    }

    /// Load parameters from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Params>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Params>(vars).context("Failed to load configuration")
    }

    /// Check if a fixture file replaces the default contact table
    pub fn has_fixtures(&self) -> bool {
        self.elomentary_mock_fixtures.is_some()
    }
}
