//! # relay
//!
//! Correlation-driven relay between anonymous senders and a single operator.
//!
//! - [`engine`] – [`RelayEngine`]: sender → operator copy-and-record, operator → sender reply forwarding
//! - [`reveal`] – [`RevealHandler`]: authorized identity disclosure from the "show author" button
//! - [`content`] – pure content-kind classification with a fixed precedence
//! - [`payload`] – button payload codec (`show_<admin_copy_id>`)
//! - [`profile`] – sender profile rendering
//! - [`handlers`] – chain handlers for logging and the `/start` command

pub mod content;
pub mod engine;
pub mod handlers;
pub mod notices;
pub mod payload;
pub mod profile;
pub mod reveal;
pub mod settings;

pub use content::{attachment_for, classify, classify_media, Classification};
pub use engine::{build_record, route_message, RelayEngine, RelayOutcome, Route};
pub use handlers::{LoggingHandler, StartCommandHandler};
pub use payload::{parse_reveal_payload, reveal_payload, REVEAL_MARKER};
pub use profile::{render_profile, render_profile_in, DATE_FORMAT, NO_HANDLE};
pub use reveal::{RevealHandler, RevealOutcome};
pub use settings::RelaySettings;
