pub mod aggregate;

pub use aggregate::{Webhook, WebhookInput, WEBHOOK_TOPICS};
