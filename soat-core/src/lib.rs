pub mod formatting;
pub mod manager;
pub mod models;
pub mod options;
pub mod parsing;
pub mod sinks;
pub mod store;

pub use manager::{AddOutcome, QuoteManager};
pub use models::*;
pub use sinks::{ClipboardError, ClipboardSink, Notification, NotificationSink, Severity};
pub use store::QuoteStore;
