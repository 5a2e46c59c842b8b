//! Connection lifecycle for a stream.
//!
//! A stream moves through these states:
//!
//! - **Disconnected**: no socket (initial state, after `stop`, after the server closed).
//! - **Connecting**: the socket is being opened.
//! - **Authenticated**: the login frame has been sent.
//! - **Streaming**: the receive loop is running and messages reach the handler.
//! - **Closing**: `stop` was requested and the receive loop is shutting down.

use std::sync::{Mutex, MutexGuard};

use log::{debug, warn};

use crate::errors::{FmpError, Result};

/// Stream connection state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Authenticated,
    Streaming,
    Closing,
}

impl ConnectionState {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(self, next: ConnectionState) -> bool {
        use ConnectionState::*;

        matches!(
            (self, next),
            (Disconnected, Connecting)
                | (Connecting, Authenticated)
                | (Connecting, Disconnected)
                | (Authenticated, Streaming)
                | (Authenticated, Closing)
                | (Authenticated, Disconnected)
                | (Streaming, Closing)
                | (Streaming, Disconnected)
                | (Closing, Disconnected)
        )
    }

    /// Whether a socket is open in this state.
    pub fn is_live(self) -> bool {
        matches!(
            self,
            ConnectionState::Authenticated | ConnectionState::Streaming
        )
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Connecting => write!(f, "Connecting"),
            Self::Authenticated => write!(f, "Authenticated"),
            Self::Streaming => write!(f, "Streaming"),
            Self::Closing => write!(f, "Closing"),
        }
    }
}

/// Shared, guarded connection state.
#[derive(Debug)]
pub(crate) struct StateCell {
    state: Mutex<ConnectionState>,
}

impl StateCell {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(ConnectionState::Disconnected),
        }
    }

    /// Lock the state mutex, recovering from poison if necessary.
    fn lock_state(&self) -> MutexGuard<'_, ConnectionState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Stream state mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub(crate) fn get(&self) -> ConnectionState {
        *self.lock_state()
    }

    /// Moves to `next`, rejecting transitions the lifecycle does not allow.
    pub(crate) fn transition(&self, next: ConnectionState) -> Result<()> {
        let mut state = self.lock_state();
        if !state.can_transition_to(next) {
            return Err(FmpError::InvalidTransition {
                from: state.to_string(),
                to: next.to_string(),
            });
        }
        debug!("Stream state: {} -> {}", *state, next);
        *state = next;
        Ok(())
    }

    /// Moves to `next` only if the current state is `from`.
    pub(crate) fn transition_from(&self, from: ConnectionState, next: ConnectionState) -> bool {
        let mut state = self.lock_state();
        if *state != from || !from.can_transition_to(next) {
            return false;
        }
        debug!("Stream state: {} -> {}", from, next);
        *state = next;
        true
    }

    /// Moves to `Disconnected` from whatever state the stream is in.
    pub(crate) fn mark_disconnected(&self) {
        let mut state = self.lock_state();
        if *state != ConnectionState::Disconnected {
            debug!("Stream state: {} -> Disconnected", *state);
            *state = ConnectionState::Disconnected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConnectionState::*;

    #[test]
    fn test_happy_path() {
        let cell = StateCell::new();
        assert_eq!(cell.get(), Disconnected);

        cell.transition(Connecting).unwrap();
        cell.transition(Authenticated).unwrap();
        cell.transition(Streaming).unwrap();
        assert!(cell.get().is_live());

        cell.transition(Closing).unwrap();
        cell.transition(Disconnected).unwrap();
        assert_eq!(cell.get(), Disconnected);
    }

    #[test]
    fn test_rejects_skipping_login() {
        let cell = StateCell::new();
        cell.transition(Connecting).unwrap();

        let error = cell.transition(Streaming).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid stream state transition: Connecting -> Streaming"
        );
        assert_eq!(cell.get(), Connecting);
    }

    #[test]
    fn test_rejects_double_connect() {
        let cell = StateCell::new();
        cell.transition(Connecting).unwrap();
        assert!(cell.transition(Connecting).is_err());
        assert!(!Streaming.can_transition_to(Connecting));
        assert!(!Disconnected.can_transition_to(Disconnected));
    }

    #[test]
    fn test_transition_from_checks_current_state() {
        let cell = StateCell::new();
        assert!(!cell.transition_from(Streaming, Closing));
        assert_eq!(cell.get(), Disconnected);

        assert!(cell.transition_from(Disconnected, Connecting));
        assert_eq!(cell.get(), Connecting);
    }

    #[test]
    fn test_mark_disconnected_from_any_state() {
        let cell = StateCell::new();
        cell.mark_disconnected();
        assert_eq!(cell.get(), Disconnected);

        cell.transition(Connecting).unwrap();
        cell.transition(Authenticated).unwrap();
        cell.mark_disconnected();
        assert_eq!(cell.get(), Disconnected);
    }
}
