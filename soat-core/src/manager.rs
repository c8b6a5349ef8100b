//! The quote manager: form fields, quote list and the user actions that act
//! on them.
//!
//! Every handler runs synchronously to completion. Output goes to the
//! [`ClipboardSink`] and [`NotificationSink`] passed in by the caller, so the
//! manager itself holds no handles to the host UI.

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::{
    formatting::{format_subject, format_summary},
    models::{DATE_FORMAT, FormState, Provider, Quote, QuoteInputs, today},
    parsing::coerce_price,
    sinks::{ClipboardSink, Notification, NotificationSink},
    store::QuoteStore,
};

mod messages {
    pub const COPIED_TITLE: &str = "Cotizaciones copiadas";
    pub const COPIED: &str = "Las cotizaciones han sido copiadas al portapapeles.";
    pub const SUBJECT_TITLE: &str = "Asunto creado";
    pub const SUBJECT: &str = "El asunto ha sido copiado al portapapeles.";
    pub const COPY_FAILED_TITLE: &str = "Error al copiar";
    pub const COPY_QUOTES_FAILED: &str =
        "No se pudieron copiar las cotizaciones. Por favor, inténtalo de nuevo.";
    pub const COPY_SUBJECT_FAILED: &str =
        "No se pudo copiar el asunto. Por favor, inténtalo de nuevo.";
    pub const DATA_CLEARED_TITLE: &str = "Datos eliminados";
    pub const DATA_CLEARED: &str = "Los datos del cliente y vehículo han sido eliminados.";
    pub const QUOTES_CLEARED_TITLE: &str = "Cotizaciones eliminadas";
    pub const QUOTES_CLEARED: &str = "Todas las cotizaciones han sido eliminadas.";
    pub const ALL_CLEARED_TITLE: &str = "Todo eliminado";
    pub const ALL_CLEARED: &str = "Todos los datos y cotizaciones han sido eliminados.";
}

/// Result of an add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The quote was stored and the picker inputs were cleared. The UI should
    /// move focus back to the price field.
    Added(Quote),
    /// No provider was selected; nothing changed.
    NoProvider,
    /// The provider already has a quote; nothing changed.
    AlreadyQuoted(Provider),
}

#[derive(Debug, Clone)]
pub struct QuoteManager {
    form: FormState,
    store: QuoteStore,
    inputs: QuoteInputs,
    clock: fn() -> NaiveDate,
}

impl Default for QuoteManager {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteManager {
    pub fn new() -> Self {
        Self::with_clock(today)
    }

    /// Uses `clock` whenever the start date falls back to "today".
    pub fn with_clock(clock: fn() -> NaiveDate) -> Self {
        Self {
            form: FormState::starting_on(clock()),
            store: QuoteStore::new(),
            inputs: QuoteInputs::default(),
            clock,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    pub fn inputs(&self) -> &QuoteInputs {
        &self.inputs
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Sets the start date from a picked calendar date; `None` clears it.
    ///
    /// Dates before today are kept but logged. Returns `true` for such a date.
    pub fn set_start_date(
        &mut self,
        date: Option<NaiveDate>,
    ) -> bool {
        self.form.start_date = date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();

        let past = self.form.starts_before(self.today());
        if past {
            warn!(start_date = %self.form.start_date, "start date is in the past");
        }
        past
    }

    pub fn select_provider(
        &mut self,
        provider: Option<Provider>,
    ) {
        self.inputs.selected_provider = provider;
    }

    pub fn set_price_input(
        &mut self,
        price: impl Into<String>,
    ) {
        self.inputs.price = price.into();
    }

    /// Providers the picker should offer.
    pub fn available_providers(&self) -> Vec<Provider> {
        self.store.available_providers()
    }

    /// Quotes in the order they are shown and copied.
    pub fn displayed_quotes(&self) -> Vec<&Quote> {
        self.store.displayed()
    }

    /// Stores a quote for `provider` with `raw_price` coerced to whole units
    /// (empty or unparseable means declined).
    pub fn add_quote(
        &mut self,
        provider: Option<Provider>,
        raw_price: &str,
    ) -> AddOutcome {
        let Some(provider) = provider else {
            debug!("add ignored: no provider selected");
            return AddOutcome::NoProvider;
        };

        let quote = Quote::new(provider, coerce_price(raw_price));
        if !self.store.add(quote.clone()) {
            return AddOutcome::AlreadyQuoted(provider);
        }

        info!(%quote, "quote added");
        self.inputs.clear();
        AddOutcome::Added(quote)
    }

    /// [`add_quote`](Self::add_quote) using the current picker inputs.
    pub fn add_from_inputs(&mut self) -> AddOutcome {
        let provider = self.inputs.selected_provider;
        let price = std::mem::take(&mut self.inputs.price);
        let outcome = self.add_quote(provider, &price);
        if !matches!(outcome, AddOutcome::Added(_)) {
            self.inputs.price = price;
        }
        outcome
    }

    /// Removes the quote at `index` of [`displayed_quotes`](Self::displayed_quotes).
    pub fn remove_quote(
        &mut self,
        index: usize,
    ) -> Option<Quote> {
        self.store.remove_displayed(index)
    }

    pub fn remove_provider(
        &mut self,
        provider: Provider,
    ) -> Option<Quote> {
        self.store.remove_provider(provider)
    }

    pub fn summary_text(&self) -> String {
        format_summary(&self.form, &self.store)
    }

    pub fn subject_text(&self) -> String {
        format_subject(&self.form)
    }

    /// Copies the quote summary. Returns `true` when the clipboard accepted it.
    pub fn copy_quotes(
        &self,
        clipboard: &mut impl ClipboardSink,
        notifier: &mut impl NotificationSink,
    ) -> bool {
        copy_with_feedback(
            &self.summary_text(),
            clipboard,
            notifier,
            Notification::normal(messages::COPIED_TITLE, messages::COPIED),
            Notification::error(messages::COPY_FAILED_TITLE, messages::COPY_QUOTES_FAILED),
        )
    }

    /// Copies the subject line. Returns `true` when the clipboard accepted it.
    pub fn create_subject(
        &self,
        clipboard: &mut impl ClipboardSink,
        notifier: &mut impl NotificationSink,
    ) -> bool {
        copy_with_feedback(
            &self.subject_text(),
            clipboard,
            notifier,
            Notification::normal(messages::SUBJECT_TITLE, messages::SUBJECT),
            Notification::error(messages::COPY_FAILED_TITLE, messages::COPY_SUBJECT_FAILED),
        )
    }

    /// Resets every form field; the start date goes back to today.
    pub fn clear_data(
        &mut self,
        notifier: &mut impl NotificationSink,
    ) {
        self.form = FormState::starting_on(self.today());
        info!("form data cleared");
        notifier.notify(Notification::normal(
            messages::DATA_CLEARED_TITLE,
            messages::DATA_CLEARED,
        ));
    }

    /// Drops every quote and the picker inputs.
    pub fn clear_quotes(
        &mut self,
        notifier: &mut impl NotificationSink,
    ) {
        self.store.clear();
        self.inputs.clear();
        info!("quotes cleared");
        notifier.notify(Notification::normal(
            messages::QUOTES_CLEARED_TITLE,
            messages::QUOTES_CLEARED,
        ));
    }

    pub fn clear_all(
        &mut self,
        notifier: &mut impl NotificationSink,
    ) {
        self.clear_data(notifier);
        self.clear_quotes(notifier);
        notifier.notify(Notification::normal(
            messages::ALL_CLEARED_TITLE,
            messages::ALL_CLEARED,
        ));
    }
}

fn copy_with_feedback(
    text: &str,
    clipboard: &mut impl ClipboardSink,
    notifier: &mut impl NotificationSink,
    success: Notification,
    failure: Notification,
) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            debug!(chars = text.chars().count(), "text copied to clipboard");
            notifier.notify(success);
            true
        }
        Err(e) => {
            error!(error = %e, "clipboard write failed");
            notifier.notify(failure);
            false
        }
    }
}
