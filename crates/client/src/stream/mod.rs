//! Real-time WebSocket feeds.
//!
//! A [`StreamClient`] keeps one connection to one [`Feed`], logs in on open and
//! forwards every inbound text frame, unmodified, to a [`MessageHandler`].

mod client;
mod frame;
mod state;

pub use client::StreamClient;
pub use frame::{ClientFrame, MessageType, StreamMessage};
pub use state::ConnectionState;

use crate::errors::FmpError;

/// One of the real-time feeds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Feed {
    /// US equities.
    Equities,
    Crypto,
    Forex,
}

impl Feed {
    pub fn url(&self) -> &'static str {
        match self {
            Feed::Equities => "wss://websockets.financemodelingprep.com",
            Feed::Crypto => "wss://crypto.financemodelingprep.com",
            Feed::Forex => "wss://forex.financemodelingprep.com",
        }
    }
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feed::Equities => write!(f, "equities"),
            Feed::Crypto => write!(f, "crypto"),
            Feed::Forex => write!(f, "forex"),
        }
    }
}

/// Receives everything a stream produces.
///
/// Methods are called from the stream's receive task, one at a time and in
/// the order frames arrive.
pub trait MessageHandler: Send + Sync + 'static {
    /// Called once per inbound frame with its text, verbatim.
    fn on_message(&self, message: String);

    /// Called when the connection fails.
    fn on_error(&self, error: &FmpError) {
        let _ = error;
    }

    /// Called once when the connection is gone for good.
    fn on_close(&self) {}
}

impl<F> MessageHandler for F
where
    F: Fn(String) + Send + Sync + 'static,
{
    fn on_message(&self, message: String) {
        self(message)
    }
}
