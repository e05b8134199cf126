// Scripted client implementations for subscription-center testing

pub mod scripted_client;

pub use scripted_client::{RecordedCall, ScriptedClient};
