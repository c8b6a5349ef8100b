pub mod form_rows;
pub mod quote_manager;
pub mod toasts;

use gpui::{App, ClickEvent, Pixels, SharedString, Size, Styled, Window, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariant, ButtonVariants};

use crate::config::WindowConfig;

pub use quote_manager::QuoteManagerView;
pub use toasts::WindowToasts;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        WindowConfig::default().into()
    }
}

impl From<WindowConfig> for WindowPreferences {
    fn from(config: WindowConfig) -> Self {
        Self::new(px(config.width), px(config.height))
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

/// Creates an action button that stretches to share its row.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    variant: ButtonVariant,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .with_variant(variant)
        .large()
        .flex_1()
        .label(label.into())
        .on_click(on_click)
}
