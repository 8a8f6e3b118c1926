//! Delivery channel session state
//!
//! Messaging transports that pair via a scanned code go through
//! `Disconnected -> AwaitingPairing -> Ready`, and can drop back to
//! `Disconnected` at any time. The monitor models that lifecycle as an
//! explicit component with a query operation and a subscribe/notify
//! mechanism instead of a bare shared variable. The OTP core never inspects
//! it; transports use it purely as a capability gate on `send`.

use tokio::sync::watch;
use tracing::info;

/// Pairing lifecycle state of the delivery channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No transport session exists
    Disconnected,
    /// A session was opened and is waiting for the pairing code to be
    /// scanned; the payload is the current pairing code
    AwaitingPairing { pairing_code: String },
    /// The channel is paired and can deliver messages
    Ready,
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready)
    }
}

/// Shared handle on the channel session state
///
/// Cloning the monitor shares the underlying state; the transport side calls
/// the transition methods, everyone else queries or subscribes.
#[derive(Clone)]
pub struct SessionMonitor {
    tx: watch::Sender<SessionState>,
}

impl SessionMonitor {
    /// Create a monitor starting in `Disconnected`
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::Disconnected);
        Self { tx }
    }

    /// Create a monitor that is already `Ready` (tests, mock transports)
    pub fn ready() -> Self {
        let (tx, _rx) = watch::channel(SessionState::Ready);
        Self { tx }
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Whether the channel can deliver right now
    pub fn is_ready(&self) -> bool {
        self.tx.borrow().is_ready()
    }

    /// Subscribe to state transitions
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// A pairing code was generated; the channel now waits for it to be
    /// scanned
    pub fn begin_pairing(&self, pairing_code: impl Into<String>) {
        self.transition(SessionState::AwaitingPairing {
            pairing_code: pairing_code.into(),
        });
    }

    /// The pairing completed; the channel can deliver
    pub fn mark_ready(&self) {
        self.transition(SessionState::Ready);
    }

    /// The transport session ended
    pub fn mark_disconnected(&self) {
        self.transition(SessionState::Disconnected);
    }

    fn transition(&self, next: SessionState) {
        info!(state = ?next, event = "session_transition", "Delivery session state changed");
        // send_replace never fails; the monitor keeps its own sender alive
        self.tx.send_replace(next);
    }
}

impl Default for SessionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disconnected() {
        let monitor = SessionMonitor::new();
        assert_eq!(monitor.state(), SessionState::Disconnected);
        assert!(!monitor.is_ready());
    }

    #[test]
    fn test_pairing_lifecycle() {
        let monitor = SessionMonitor::new();

        monitor.begin_pairing("QR-PAYLOAD-1");
        assert_eq!(
            monitor.state(),
            SessionState::AwaitingPairing {
                pairing_code: "QR-PAYLOAD-1".to_string()
            }
        );

        monitor.mark_ready();
        assert!(monitor.is_ready());

        monitor.mark_disconnected();
        assert!(!monitor.is_ready());
    }

    #[tokio::test]
    async fn test_subscribers_observe_transitions() {
        let monitor = SessionMonitor::new();
        let mut rx = monitor.subscribe();

        monitor.begin_pairing("QR-PAYLOAD-2");
        rx.changed().await.unwrap();
        assert!(matches!(
            *rx.borrow(),
            SessionState::AwaitingPairing { .. }
        ));

        monitor.mark_ready();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_ready());
    }
}
