use serde_json::{Map, Value};

use crate::crittercism::config::CrittercismConfig;
use crate::integration::Application;

/// The Crittercism SDK surface the integration drives.
///
/// The SDK is a process-wide singleton; implementations wrap its static entry points.
/// Errors raised inside the SDK stay inside the SDK: none of these calls report back.
pub trait CrittercismClient: Send + Sync {
    fn initialize(&self, application: &Application, app_id: Option<&str>, config: &CrittercismConfig);

    fn set_username(&self, username: &str);

    fn set_metadata(&self, metadata: &Map<String, Value>);

    fn leave_breadcrumb(&self, breadcrumb: &str);

    /// Sends buffered app-load data now.
    fn send_app_load_data(&self);
}

/// Client that writes every call to the `log` facade instead of a native SDK.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogClient;

impl CrittercismClient for LogClient {
    fn initialize(&self, application: &Application, app_id: Option<&str>, config: &CrittercismConfig) {
        log::info!(
            "Crittercism.initialize({}, {}, {:?})",
            application.package_name(),
            app_id.unwrap_or("<none>"),
            config
        );
    }

    fn set_username(&self, username: &str) {
        log::info!("Crittercism.set_username({username})");
    }

    fn set_metadata(&self, metadata: &Map<String, Value>) {
        log::info!("Crittercism.set_metadata({})", Value::Object(metadata.clone()));
    }

    fn leave_breadcrumb(&self, breadcrumb: &str) {
        log::info!("Crittercism.leave_breadcrumb({breadcrumb})");
    }

    fn send_app_load_data(&self) {
        log::info!("Crittercism.send_app_load_data()");
    }
}
