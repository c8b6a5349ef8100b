use gpui::{
    App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    components::{QuoteManagerView, WindowPreferences},
    quit,
};

pub const WINDOW_TITLE: &str = "Cotizaciones SOAT";

fn quit_bindings() -> Vec<KeyBinding> {
    if cfg!(target_os = "macos") {
        vec![KeyBinding::new("cmd-q", Quit, None)]
    } else {
        vec![
            KeyBinding::new("ctrl-q", Quit, None),
            KeyBinding::new("alt-F4", Quit, None),
        ]
    }
}

/// Registers components, key bindings, the quit action and the app menu.
/// Runs before any window opens.
pub fn setup_app(cx: &mut App) {
    gpui_component::init(cx);
    cx.activate(true);

    cx.bind_keys(quit_bindings());
    cx.on_action(quit);

    // Single-window app: closing it ends the session.
    cx.on_window_closed(|cx: &mut App| {
        info!("main window closed");
        quit(&Quit, cx);
    })
    .detach();

    cx.set_menus(vec![Menu {
        name: WINDOW_TITLE.into(),
        items: vec![MenuItem::action("Salir", Quit)],
    }]);
}

/// Opens the quote manager window, centered, at the preferred size.
pub fn open_main_window(
    preferences: WindowPreferences,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let view = cx.new(|view_cx| QuoteManagerView::new(window, view_cx));
        cx.new(|root_cx| Root::new(view, window, root_cx))
    })?;

    info!(
        width = ?preferences.size.width,
        height = ?preferences.size.height,
        "main window opened"
    );
    Ok(())
}
