//! In-memory stand-in for the Elomentary marketing-automation client.
//!
//! - `adapters`: the `ElomentaryApi` seam plus the canned `MockElomentaryClient`
//! - `center`: subscription-center logic written against that seam
//! - `params`: environment configuration for seeding the mock

pub mod adapters;
pub mod center;
pub mod params;
