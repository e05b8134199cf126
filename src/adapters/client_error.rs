use super::facade::Facade;
use std::path::PathBuf;

/// Errors surfaced by Elomentary clients
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The operation is not served by the currently selected facade
    #[error("`{operation}` is not supported by facade \"{facade}\"")]
    UnsupportedOperation {
        facade: Facade,
        operation: &'static str,
    },

    /// A contact fixture file could not be read
    #[error("failed to read contact fixtures from {}", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A contact fixture file is not a valid contact table
    #[error("failed to parse contact fixtures from {}", path.display())]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
