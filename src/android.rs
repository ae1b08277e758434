use serde::de::DeserializeOwned;
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};

use crate::models::{LaunchEventResponse, ShareEvent};

/// Register the native forwarder with the Android layer.
pub fn init<R: Runtime, C: DeserializeOwned>(
    _app: &AppHandle<R>,
    api: PluginApi<R, C>,
) -> crate::Result<IntentSource<R>> {
    let handle = api.register_android_plugin("com.plugin.sharerelay", "ShareRelayPlugin")?;
    Ok(IntentSource(handle))
}

/// Access to the activity's launch and new intents.
pub struct IntentSource<R: Runtime>(PluginHandle<R>);

impl<R: Runtime> IntentSource<R> {
    /// Take the intent that launched or re-surfaced the activity, if any.
    ///
    /// The forwarder clears its copy on hand-off, so each intent is observed
    /// at most once. Filtering is not the forwarder's job — whatever intent
    /// arrives is returned verbatim.
    pub fn take_launch_event(&self) -> crate::Result<Option<ShareEvent>> {
        self.0
            .run_mobile_plugin::<LaunchEventResponse>("takeLaunchEvent", ())
            .map(|response| response.event)
            .map_err(Into::into)
    }
}
