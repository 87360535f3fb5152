use std::sync::mpsc;
use std::time::Duration;

use session_logging::session_trace;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::{EngineEvent, Ticket};

/// Single-slot timer: arming it aborts whatever was armed before, so only the
/// latest ticket can fire.
pub struct Debouncer {
    runtime: Handle,
    event_tx: mpsc::Sender<EngineEvent>,
    armed: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(runtime: Handle, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            runtime,
            event_tx,
            armed: None,
        }
    }

    pub fn schedule(&mut self, ticket: Ticket, delay: Duration) {
        self.cancel();
        let event_tx = self.event_tx.clone();
        session_trace!("Debounce ticket {ticket} armed for {delay:?}");
        self.armed = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(EngineEvent::DebounceElapsed { ticket });
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.armed.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
