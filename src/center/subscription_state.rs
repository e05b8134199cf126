use serde::Serialize;
use serde_json::Value;

/// What the subscription center renders for one contact
///
/// JSON structure:
/// ```json
/// {
///   "contact_id": "1",
///   "email_address": "foobar@example.com",
///   "subscriptions": [ /* Elomentary subscription elements */ ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionState {
    pub contact_id: String,
    pub email_address: String,
    pub subscriptions: Vec<Value>,
}

impl SubscriptionState {
    /// Whether the contact is subscribed to anything
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
