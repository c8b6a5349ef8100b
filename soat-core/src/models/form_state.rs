use chrono::{Local, NaiveDate};

use super::Provider;

/// ISO format used by the start date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Client and vehicle metadata consumed by the formatters.
///
/// Every field is free text. Empty strings are legal and simply produce
/// blank (or placeholder) output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub client: String,
    pub nro: String,
    pub reference: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    pub vehicle_class: String,
    pub usage: String,
    pub circulation: String,
}

impl FormState {
    /// Empty form whose start date is `date`.
    pub fn starting_on(date: NaiveDate) -> Self {
        Self {
            client: String::new(),
            nro: String::new(),
            reference: String::new(),
            start_date: date.format(DATE_FORMAT).to_string(),
            vehicle_class: String::new(),
            usage: String::new(),
            circulation: String::new(),
        }
    }

    /// The start date, if it is a valid `YYYY-MM-DD` date.
    pub fn start_date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, DATE_FORMAT).ok()
    }

    /// Returns `true` when the start date parses and lies before `today`.
    ///
    /// Unparseable dates are never reported as past.
    pub fn starts_before(
        &self,
        today: NaiveDate,
    ) -> bool {
        self.start_date_value().is_some_and(|date| date < today)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::starting_on(today())
    }
}

/// Transient provider picker and price field contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteInputs {
    pub selected_provider: Option<Provider>,
    pub price: String,
}

impl QuoteInputs {
    pub fn clear(&mut self) {
        self.selected_provider = None;
        self.price.clear();
    }
}
