use tauri::{
    plugin::{Builder, TauriPlugin},
    AppHandle, Manager, Runtime,
};

pub use models::*;

#[cfg(target_os = "android")]
mod android;
#[cfg(not(target_os = "android"))]
mod desktop;

mod bridge;
mod commands;
mod error;
mod models;
mod relay;

pub use error::{Error, Result};
pub use relay::ShareRelay;

#[cfg(target_os = "android")]
use android::IntentSource;
#[cfg(not(target_os = "android"))]
use desktop::IntentSource;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the share-relay APIs.
pub trait ShareRelayExt<R: Runtime> {
    fn share_relay(&self) -> &ShareRelay;
}

impl<R: Runtime, T: Manager<R>> crate::ShareRelayExt<R> for T {
    fn share_relay(&self) -> &ShareRelay {
        self.state::<ShareRelay>().inner()
    }
}

/// Initializes the share-relay plugin.
///
/// This plugin receives Android "share with" send intents:
/// - The native forwarder captures the intent that launched or re-surfaced
///   the activity
/// - Valid text/plain shares are parked in a single read-once slot
/// - The webview drains the slot via the `getSharedText` bridge method
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new(bridge::CHANNEL)
        .invoke_handler(tauri::generate_handler![commands::get_shared_text])
        .setup(|app, api| {
            #[cfg(target_os = "android")]
            let source = android::init(app, api)?;
            #[cfg(not(target_os = "android"))]
            let source = desktop::init(app, api)?;
            app.manage(source);
            app.manage(ShareRelay::new());
            // Cold start: the activity may have been launched by a send intent.
            ingest_launch_event(app);
            Ok(())
        })
        .on_event(|app, event| {
            match event {
                tauri::RunEvent::Resumed => {
                    // A new intent can arrive while the activity is already running.
                    log::debug!("share-relay: app resumed");
                    ingest_launch_event(app);
                }
                _ => {}
            }
        })
        .build()
}

/// Shared ingestion path for both lifecycle triggers.
fn ingest_launch_event<R: Runtime>(app: &AppHandle<R>) {
    let source = app.state::<IntentSource<R>>();
    match source.take_launch_event() {
        Ok(Some(event)) => app.share_relay().handle_share_event(&event),
        Ok(None) => {}
        Err(e) => log::warn!("share-relay: failed to read launch intent: {e}"),
    }
}
