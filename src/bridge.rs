//! Method-call contract between the relay and the webview.

use crate::error::{Error, Result};
use crate::relay::ShareRelay;

/// Name of the channel the webview invokes, i.e. the plugin name.
pub const CHANNEL: &str = "share-relay";

/// The single method name recognized on the channel.
pub const GET_SHARED_TEXT: &str = "getSharedText";

/// Dispatch a method-call request against the relay.
///
/// `getSharedText` answers with the read-once pending payload. Any other
/// method name is answered with an explicit not-implemented error.
pub fn handle_request(relay: &ShareRelay, method: &str) -> Result<Option<String>> {
    match method {
        GET_SHARED_TEXT => relay.retrieve_pending(),
        other => Err(Error::NotImplemented(other.to_string())),
    }
}
