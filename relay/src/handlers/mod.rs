//! Chain handlers that sit around the relay: event logging and bot commands.

mod logging;
mod start;

pub use logging::LoggingHandler;
pub use start::StartCommandHandler;
