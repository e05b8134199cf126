mod subscription_center;
mod subscription_state;

// Re-export public API
pub use subscription_center::SubscriptionCenter;
pub use subscription_state::SubscriptionState;
