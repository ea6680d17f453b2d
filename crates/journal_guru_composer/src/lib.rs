//! Client side of Journal Guru.
//!
//! Collects the four choices in an immutable [`FormState`], resolves the
//! "Other" free-text companions at submission time, posts one request to the
//! relay and keeps the outcome in a [`ComposerView`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clipboard;
mod composer;
mod form;
mod transport;
mod view;

#[cfg(feature = "clipboard")]
pub use clipboard::ArboardClipboard;
pub use clipboard::ClipboardWriter;
pub use composer::Composer;
pub use form::FormState;
pub use transport::{DEFAULT_RELAY_URL, HttpRelayTransport, RelayTransport};
pub use view::{ComposerView, GENERIC_FAILURE_MESSAGE};
