//! The single window view: client and vehicle data on the left, quotes on
//! the right, toasts in the notification layer.
//!
//! Input widgets own their text. Before every action the view copies their
//! values into the [`QuoteManager`], runs the action, and pushes any reset
//! values back into the widgets.

use gpui::{
    App, AppContext, ClickEvent, Context, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Subscription, Window, div, px,
};
use gpui_component::{
    IndexPath, Root, Sizable,
    button::{Button, ButtonVariant, ButtonVariants},
    date_picker::{DatePickerEvent, DatePickerState},
    h_flex,
    input::InputState,
    select::{Select, SelectState},
    v_flex,
};
use soat_core::{
    AddOutcome, Notification, Provider, QuoteManager,
    options::{CIRCULATION_REGIONS, USAGES, VEHICLE_CLASSES},
};
use tracing::{debug, warn};

use super::{
    WindowToasts,
    form_rows::{
        OptionSelect, make_date_picker, make_date_row, make_input_row, make_option_select,
        make_price_input, make_select_row, make_text_input,
    },
    make_button,
};
use crate::{clipboard::SystemClipboard, gui::WINDOW_TITLE};

pub struct QuoteManagerView {
    manager: QuoteManager,

    // Client and vehicle data
    client: Entity<InputState>,
    nro: Entity<InputState>,
    reference: Entity<InputState>,
    start_date: Entity<DatePickerState>,
    vehicle_class: OptionSelect,
    usage: OptionSelect,
    circulation: OptionSelect,

    // Quote picker
    provider: OptionSelect,
    price: Entity<InputState>,

    _subscriptions: Vec<Subscription>,
}

impl QuoteManagerView {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let manager = QuoteManager::new();

        let start_date = make_date_picker(
            manager.form().start_date_value(),
            manager.today(),
            window,
            cx,
        );
        let _subscriptions = vec![cx.subscribe_in(
            &start_date,
            window,
            |this, _, event: &DatePickerEvent, _, cx| match event {
                DatePickerEvent::Change(date) => {
                    this.manager.set_start_date(date.start());
                    cx.notify();
                }
            },
        )];

        let provider = make_provider_select(&manager.available_providers(), None, window, cx);

        Self {
            client: make_text_input("Cliente (Opcional)", window, cx),
            nro: make_text_input("Nro (Opcional)", window, cx),
            reference: make_text_input("Referencia (Opcional)", window, cx),
            start_date,
            vehicle_class: make_option_select(VEHICLE_CLASSES.iter().copied(), window, cx),
            usage: make_option_select(USAGES.iter().copied(), window, cx),
            circulation: make_option_select(CIRCULATION_REGIONS.iter().copied(), window, cx),
            provider,
            price: make_price_input("Precio", window, cx),
            manager,
            _subscriptions,
        }
    }

    // ─── widget <-> model ────────────────────────────────────────────────────

    fn sync_form(
        &mut self,
        cx: &App,
    ) {
        let form = self.manager.form_mut();
        form.client = input_text(&self.client, cx);
        form.nro = input_text(&self.nro, cx);
        form.reference = input_text(&self.reference, cx);
        form.vehicle_class = selected_text(&self.vehicle_class, cx);
        form.usage = selected_text(&self.usage, cx);
        form.circulation = selected_text(&self.circulation, cx);

        let start_date = self.start_date.read(cx).date().start();
        self.manager.set_start_date(start_date);
    }

    fn sync_quote_inputs(
        &mut self,
        cx: &App,
    ) {
        let provider = self
            .provider
            .read(cx)
            .selected_value()
            .and_then(|label| Provider::parse(label.as_ref()));
        self.manager.select_provider(provider);
        self.manager.set_price_input(input_text(&self.price, cx));
    }

    /// Pushes the manager's form back into the widgets after a reset.
    fn write_form(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let form = self.manager.form().clone();
        for (state, value) in [
            (&self.client, form.client.clone()),
            (&self.nro, form.nro.clone()),
            (&self.reference, form.reference.clone()),
        ] {
            state.update(cx, |state, cx| state.set_value(value, window, cx));
        }
        if let Some(date) = form.start_date_value() {
            self.start_date
                .update(cx, |state, cx| state.set_date(date, window, cx));
        }

        self.vehicle_class = make_option_select(VEHICLE_CLASSES.iter().copied(), window, cx);
        self.usage = make_option_select(USAGES.iter().copied(), window, cx);
        self.circulation = make_option_select(CIRCULATION_REGIONS.iter().copied(), window, cx);
    }

    /// Rebuilds the provider picker from the providers still unquoted.
    fn write_quote_inputs(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let inputs = self.manager.inputs().clone();
        self.provider = make_provider_select(
            &self.manager.available_providers(),
            inputs.selected_provider,
            window,
            cx,
        );
        self.price
            .update(cx, |state, cx| state.set_value(inputs.price, window, cx));
    }

    // ─── actions ─────────────────────────────────────────────────────────────

    fn on_add_quote(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.sync_quote_inputs(cx);

        match self.manager.add_from_inputs() {
            AddOutcome::Added(quote) => {
                debug!(%quote, "resetting quote picker");
                self.write_quote_inputs(window, cx);
                self.price.update(cx, |state, cx| state.focus(window, cx));
            }
            AddOutcome::NoProvider => debug!("add ignored: no provider selected"),
            AddOutcome::AlreadyQuoted(provider) => {
                warn!(%provider, "picker offered a provider that is already quoted");
                self.write_quote_inputs(window, cx);
            }
        }
        cx.notify();
    }

    fn on_remove_quote(
        &mut self,
        provider: Provider,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.sync_quote_inputs(cx);

        if self.manager.remove_provider(provider).is_some() {
            self.write_quote_inputs(window, cx);
        }
        cx.notify();
    }

    fn on_copy_quotes(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.sync_form(cx);
        let mut notes: Vec<Notification> = Vec::new();
        self.manager
            .copy_quotes(&mut SystemClipboard::new(cx), &mut notes);
        WindowToasts::new(window, cx).show_all(notes);
        cx.notify();
    }

    fn on_create_subject(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.sync_form(cx);
        let mut notes: Vec<Notification> = Vec::new();
        self.manager
            .create_subject(&mut SystemClipboard::new(cx), &mut notes);
        WindowToasts::new(window, cx).show_all(notes);
        cx.notify();
    }

    fn on_clear_data(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.manager
            .clear_data(&mut WindowToasts::new(window, cx));
        self.write_form(window, cx);
        cx.notify();
    }

    fn on_clear_quotes(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.manager
            .clear_quotes(&mut WindowToasts::new(window, cx));
        self.write_quote_inputs(window, cx);
        cx.notify();
    }

    fn on_clear_all(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.manager
            .clear_all(&mut WindowToasts::new(window, cx));
        self.write_form(window, cx);
        self.write_quote_inputs(window, cx);
        cx.notify();
    }

    // ─── rendering ───────────────────────────────────────────────────────────

    fn render_data_column(
        &self,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_2()
            .flex_1()
            .child(make_input_row(&self.client, "Cliente:"))
            .child(make_input_row(&self.nro, "Nro:"))
            .child(make_input_row(&self.reference, "Referencia:"))
            .child(make_date_row(&self.start_date, "Inicio:"))
            .child(make_select_row(
                "Clase:",
                Select::new(&self.vehicle_class).placeholder("Seleccione clase"),
            ))
            .child(make_select_row(
                "Uso:",
                Select::new(&self.usage).placeholder("Seleccione uso"),
            ))
            .child(make_select_row(
                "Circulación:",
                Select::new(&self.circulation).placeholder("Seleccione circulación"),
            ))
            .child(
                h_flex()
                    .gap_2()
                    .child(make_button(
                        "clear-data",
                        "Limpiar Datos",
                        ButtonVariant::Warning,
                        cx.listener(Self::on_clear_data),
                    ))
                    .child(make_button(
                        "create-subject",
                        "Crear Asunto",
                        ButtonVariant::Success,
                        cx.listener(Self::on_create_subject),
                    )),
            )
    }

    fn render_quote_column(
        &self,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_2()
            .flex_1()
            .child(make_select_row(
                "Compañía:",
                Select::new(&self.provider).placeholder("Seleccione compañía"),
            ))
            .child(make_input_row(&self.price, "Precio: S/"))
            .child(make_button(
                "add-quote",
                "Agregar Cotización",
                ButtonVariant::Primary,
                cx.listener(Self::on_add_quote),
            ))
            .child(self.render_quote_list(cx))
            .child(
                h_flex()
                    .gap_2()
                    .child(make_button(
                        "copy-quotes",
                        "Copiar",
                        ButtonVariant::Primary,
                        cx.listener(Self::on_copy_quotes),
                    ))
                    .child(make_button(
                        "clear-quotes",
                        "Limpiar Cotización",
                        ButtonVariant::Warning,
                        cx.listener(Self::on_clear_quotes),
                    )),
            )
    }

    /// Quotes in display order. Each row removes its own provider, so the
    /// row clicked is always the quote removed.
    fn render_quote_list(
        &self,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let rows: Vec<_> = self
            .manager
            .displayed_quotes()
            .into_iter()
            .map(|quote| {
                let provider = quote.provider;
                let button_id = SharedString::from(format!("remove-{}", provider.as_str()));

                h_flex()
                    .justify_between()
                    .items_center()
                    .child(SharedString::from(quote.to_string()))
                    .child(Button::new(button_id).ghost().xsmall().label("✕").on_click(
                        cx.listener(move |this, _: &ClickEvent, window, cx| {
                            this.on_remove_quote(provider, window, cx)
                        }),
                    ))
            })
            .collect();

        div()
            .id("quote-list")
            .w_full()
            .h(px(200.))
            .p_2()
            .border_1()
            .rounded_md()
            .overflow_y_scroll()
            .children(rows)
    }
}

impl Render for QuoteManagerView {
    fn render(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let notification_layer = Root::render_notification_layer(window, cx);

        v_flex()
            .size_full()
            .p_4()
            .gap_3()
            .child(
                h_flex()
                    .justify_between()
                    .items_center()
                    .child(div().text_xl().child(WINDOW_TITLE))
                    .child(
                        Button::new("clear-all")
                            .danger()
                            .small()
                            .label("Limpiar Todo")
                            .on_click(cx.listener(Self::on_clear_all)),
                    ),
            )
            .child(
                h_flex()
                    .flex_1()
                    .items_start()
                    .gap_6()
                    .child(self.render_data_column(cx))
                    .child(self.render_quote_column(cx)),
            )
            .children(notification_layer)
    }
}

fn input_text(
    state: &Entity<InputState>,
    cx: &App,
) -> String {
    state.read(cx).value().to_string()
}

fn selected_text(
    state: &OptionSelect,
    cx: &App,
) -> String {
    state
        .read(cx)
        .selected_value()
        .map(|value| value.to_string())
        .unwrap_or_default()
}

fn make_provider_select(
    providers: &[Provider],
    selected: Option<Provider>,
    window: &mut Window,
    cx: &mut Context<QuoteManagerView>,
) -> OptionSelect {
    let labels: Vec<SharedString> = providers
        .iter()
        .map(|p| SharedString::from(p.as_str()))
        .collect();
    let selected_index = selected
        .and_then(|s| providers.iter().position(|p| *p == s))
        .map(|i| IndexPath::default().row(i));

    cx.new(|select_cx| SelectState::new(labels, selected_index, window, select_cx))
}
