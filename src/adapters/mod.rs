// Trait definitions
pub mod elomentary_api;

// Type definitions
pub mod client_error;
pub mod facade;
pub mod records;

// Implementations
pub mod mock_elomentary_client;

// Re-exports for convenience
pub use client_error::ClientError;
pub use elomentary_api::ElomentaryApi;
pub use facade::Facade;
pub use mock_elomentary_client::MockElomentaryClient;
pub use records::{Contact, Depth, Record, SearchOptions, SearchResults};
