use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::models::ShareEvent;

/// Initialize the inert intent source (send intents are Android-only).
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> crate::Result<IntentSource<R>> {
    Ok(IntentSource(app.clone()))
}

/// Intent source for platforms without send intents (desktop and iOS).
///
/// The plugin still needs to be loadable there so a cross-platform app can
/// register it unconditionally; this source simply never yields an event.
pub struct IntentSource<R: Runtime>(AppHandle<R>);

impl<R: Runtime> IntentSource<R> {
    /// Always `None`; only Android delivers send intents.
    pub fn take_launch_event(&self) -> crate::Result<Option<ShareEvent>> {
        Ok(None)
    }
}
