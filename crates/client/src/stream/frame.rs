use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// A frame sent from the client to the stream server.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ClientFrame {
    Login {
        #[serde(rename = "apiKey")]
        api_key: String,
    },
    Subscribe {
        ticker: String,
    },
    Unsubscribe {
        ticker: String,
    },
}

impl ClientFrame {
    pub fn login(api_key: impl Into<String>) -> Self {
        Self::Login {
            api_key: api_key.into(),
        }
    }

    pub fn subscribe(ticker: impl Into<String>) -> Self {
        Self::Subscribe {
            ticker: ticker.into(),
        }
    }

    pub fn unsubscribe(ticker: impl Into<String>) -> Self {
        Self::Unsubscribe {
            ticker: ticker.into(),
        }
    }

    /// JSON text for the wire.
    pub fn to_text(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Kind of update carried by a [`StreamMessage`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageType {
    /// `T`: last trade.
    Trade,
    /// `Q`: top-of-book quote.
    Quote,
    /// `B`: trade break.
    Break,
    Other,
}

/// Typed view of a price update.
///
/// The stream client forwards raw text; this type is for handlers that want
/// to decode it. Every field is optional because feeds differ in what they send.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct StreamMessage {
    #[serde(rename = "s")]
    pub symbol: Option<String>,
    #[serde(rename = "t")]
    pub timestamp: Option<u64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Source exchange (crypto feed).
    #[serde(rename = "e")]
    pub exchange: Option<String>,
    #[serde(rename = "ap")]
    pub ask_price: Option<f64>,
    #[serde(rename = "as")]
    pub ask_size: Option<f64>,
    #[serde(rename = "bp")]
    pub bid_price: Option<f64>,
    #[serde(rename = "bs")]
    pub bid_size: Option<f64>,
    #[serde(rename = "lp")]
    pub last_price: Option<f64>,
    #[serde(rename = "ls")]
    pub last_size: Option<f64>,
}

impl StreamMessage {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn message_type(&self) -> MessageType {
        match self.kind.as_deref() {
            Some("T") => MessageType::Trade,
            Some("Q") => MessageType::Quote,
            Some("B") => MessageType::Break,
            _ => MessageType::Other,
        }
    }

    /// Timestamp as a UTC instant.
    ///
    /// Feeds report seconds, milliseconds or nanoseconds; the unit is inferred
    /// from the magnitude.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        let t = self.timestamp?;
        if t < 100_000_000_000 {
            DateTime::from_timestamp(i64::try_from(t).ok()?, 0)
        } else if t < 100_000_000_000_000 {
            DateTime::from_timestamp_millis(i64::try_from(t).ok()?)
        } else if t < 100_000_000_000_000_000 {
            DateTime::from_timestamp_micros(i64::try_from(t).ok()?)
        } else {
            Some(DateTime::from_timestamp_nanos(i64::try_from(t).ok()?))
        }
    }
}
