use tauri::{command, AppHandle, Runtime};

use crate::{bridge, Result, ShareRelayExt};

/// Hand the pending shared payload to the webview.
///
/// Returns the JSON wire string `{"title": ..., "url": ...}` and clears the
/// slot, or `None` when nothing is pending. Read-once: a second call before
/// a new share arrives returns `None`.
#[command]
pub(crate) async fn get_shared_text<R: Runtime>(app: AppHandle<R>) -> Result<Option<String>> {
    bridge::handle_request(app.share_relay(), bridge::GET_SHARED_TEXT)
}
