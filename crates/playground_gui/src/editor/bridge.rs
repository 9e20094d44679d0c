//! Outbound messages from the editor to the host that owns its state.

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::warn;

/// Writes the editor performs against host-owned state.
///
/// The editor never reads these values back; the host applies them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Replace the host's copy of the document text.
    SetText(String),
    /// Set the host's typecheck-request flag.
    SetNeedTypecheck(bool),
}

/// Fire-and-forget sender half held by the editor.
#[derive(Debug, Clone)]
pub struct HostSink {
    tx: Sender<HostEvent>,
}

impl HostSink {
    pub fn new(tx: Sender<HostEvent>) -> Self {
        Self { tx }
    }

    /// Creates a sink together with the receiver the host drains each frame.
    pub fn channel() -> (Self, Receiver<HostEvent>) {
        let (tx, rx) = unbounded();
        (Self::new(tx), rx)
    }

    pub fn set_text(&self, content: &str) {
        self.send(HostEvent::SetText(content.to_string()));
    }

    pub fn set_need_typecheck(&self, flag: bool) {
        self.send(HostEvent::SetNeedTypecheck(flag));
    }

    fn send(&self, event: HostEvent) {
        // A host that dropped its receiver is shutting down; nothing to report to.
        if self.tx.send(event).is_err() {
            warn!("host receiver disconnected; dropping editor event");
        }
    }
}
