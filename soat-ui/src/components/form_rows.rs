//! Labeled rows shared by the client/vehicle column and the quote column.

use chrono::NaiveDate;
use gpui::{
    AppContext, Context, Div, Entity, IntoElement, ParentElement, SharedString, Styled, TextAlign,
    Window, div, px,
};
use gpui_component::{
    calendar::Matcher,
    date_picker::{DatePicker, DatePickerState},
    h_flex,
    input::{Input, InputState, MaskPattern},
    select::SelectState,
};
use soat_core::DATE_FORMAT;

pub type OptionSelect = Entity<SelectState<Vec<SharedString>>>;

pub fn make_text_input<V: 'static>(
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<InputState> {
    let placeholder = placeholder.into();
    cx.new(|input_cx| InputState::new(window, input_cx).placeholder(placeholder))
}

/// Numeric field with thousands separators and up to two decimals.
pub fn make_price_input<V: 'static>(
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<InputState> {
    let pattern = MaskPattern::Number {
        separator: Some(','),
        fraction: Some(2),
    };
    let placeholder = placeholder.into();

    cx.new(|input_cx| {
        InputState::new(window, input_cx)
            .mask_pattern(pattern)
            .placeholder(placeholder)
    })
}

/// Calendar field showing `YYYY-MM-DD`. Days before `earliest` cannot be
/// picked.
pub fn make_date_picker<V: 'static>(
    initial: Option<NaiveDate>,
    earliest: NaiveDate,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<DatePickerState> {
    cx.new(|picker_cx| {
        let mut state = DatePickerState::new(window, picker_cx)
            .date_format(DATE_FORMAT)
            .disabled_matcher(Matcher::interval(Some(earliest), None));
        if let Some(date) = initial {
            state.set_date(date, window, picker_cx);
        }
        state
    })
}

/// Select over fixed labels with nothing selected.
pub fn make_option_select<V: 'static>(
    options: impl IntoIterator<Item = impl Into<SharedString>>,
    window: &mut Window,
    cx: &mut Context<V>,
) -> OptionSelect {
    let items: Vec<SharedString> = options.into_iter().map(Into::into).collect();
    cx.new(|select_cx| SelectState::new(items, None, window, select_cx))
}

pub fn make_input_row(
    state: &Entity<InputState>,
    label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(label).child(Input::new(state).flex_grow())
}

pub fn make_date_row(
    state: &Entity<DatePickerState>,
    label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(label).child(DatePicker::new(state).placeholder("AAAA-MM-DD").flex_grow())
}

/// Labeled row around an already-rendered select.
pub fn make_select_row(
    label: impl Into<SharedString>,
    select_element: impl IntoElement,
) -> Div {
    make_labeled_row(label).child(div().flex_grow().child(select_element))
}

fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_3()
        .p(px(2.))
        .child(
            div()
                .min_w(px(110.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
