use std::sync::Mutex;

use crate::models::{ShareEvent, SharedPayload};
use crate::Result;

/// Single-slot holder for the most recent unconsumed share payload.
///
/// Both lifecycle triggers (cold start by a send intent, new intent while
/// running) feed into [`handle_share_event`](Self::handle_share_event); the
/// webview drains through [`retrieve_pending`](Self::retrieve_pending).
/// There is no queue: a new share overwrites whatever the webview has not
/// picked up yet, and a retrieval clears the slot.
#[derive(Debug, Default)]
pub struct ShareRelay {
    pending: Mutex<Option<SharedPayload>>,
}

impl ShareRelay {
    /// Create a relay with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a platform share event into the pending slot.
    ///
    /// Events that fail the send-intent guard, and send intents without a
    /// text extra, leave the slot untouched — including any payload already
    /// waiting in it.
    pub fn handle_share_event(&self, event: &ShareEvent) {
        if let Some(payload) = event.extract_payload() {
            let replaced = self.pending.lock().unwrap().replace(payload).is_some();
            if replaced {
                log::debug!("share-relay: unconsumed payload replaced by newer share");
            } else {
                log::debug!("share-relay: pending payload stored");
            }
        }
    }

    /// Take the pending payload as its JSON wire string, clearing the slot.
    ///
    /// Read-once: after a `Some` result, the next call returns `None` until
    /// a new share event arrives.
    pub fn retrieve_pending(&self) -> Result<Option<String>> {
        let payload = self.pending.lock().unwrap().take();
        payload
            .map(|p| serde_json::to_string(&p))
            .transpose()
            .map_err(Into::into)
    }
}
