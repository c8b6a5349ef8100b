mod form_state;
mod provider;
mod quote;

pub use form_state::{DATE_FORMAT, FormState, QuoteInputs, today};
pub use provider::{Provider, UnknownProviderError};
pub use quote::{Quote, display_order};
