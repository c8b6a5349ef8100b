use gpui::{App, ClipboardItem};
use soat_core::{ClipboardError, ClipboardSink};

/// The platform clipboard, reached through the gpui app context.
///
/// gpui does not report write failures, so the write is confirmed by reading
/// the clipboard back.
pub struct SystemClipboard<'a> {
    cx: &'a App,
}

impl<'a> SystemClipboard<'a> {
    pub fn new(cx: &'a App) -> Self {
        Self { cx }
    }
}

impl ClipboardSink for SystemClipboard<'_> {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ClipboardError> {
        self.cx
            .write_to_clipboard(ClipboardItem::new_string(text.to_string()));

        match self.cx.read_from_clipboard().and_then(|item| item.text()) {
            Some(current) if current == text => Ok(()),
            Some(_) => Err(ClipboardError::NotConfirmed),
            None => Err(ClipboardError::Unavailable(
                "clipboard is empty after write".to_string(),
            )),
        }
    }
}
