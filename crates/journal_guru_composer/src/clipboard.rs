//! Clipboard port.

use journal_guru_error::ComposerError;

/// Destination for "copy result to clipboard".
pub trait ClipboardWriter {
    /// Replaces the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ComposerError>;
}

#[cfg(feature = "clipboard")]
mod arboard_impl {
    use super::ClipboardWriter;
    use arboard::Clipboard;
    use journal_guru_error::{ComposerError, ComposerErrorKind};

    /// Arboard-based system clipboard.
    pub struct ArboardClipboard {
        clipboard: Clipboard,
    }

    impl ArboardClipboard {
        /// Opens the system clipboard.
        pub fn new() -> Result<Self, ComposerError> {
            let clipboard = Clipboard::new()
                .map_err(|e| ComposerError::new(ComposerErrorKind::Clipboard(e.to_string())))?;
            Ok(Self { clipboard })
        }
    }

    impl ClipboardWriter for ArboardClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ComposerError> {
            self.clipboard
                .set_text(text)
                .map_err(|e| ComposerError::new(ComposerErrorKind::Clipboard(e.to_string())))
        }
    }
}

#[cfg(feature = "clipboard")]
pub use arboard_impl::ArboardClipboard;
