use std::fmt;
use std::sync::Arc;

use crate::crittercism::client::CrittercismClient;
use crate::crittercism::config::CrittercismConfig;
use crate::crittercism::constants::{APP_ID_SETTING, CRITTERCISM_KEY};
use crate::integration::{
    Analytics, DynInstance, IdentifyPayload, Integration, IntegrationFactory, ScreenPayload,
    TrackPayload, ValueMap,
};

/// Forwards analytics lifecycle calls to Crittercism.
///
/// Identify sets the username and attaches the traits as metadata, screens and tracks leave
/// breadcrumbs, and flush asks the SDK to send its app-load data right away.
#[derive(Clone)]
pub struct CrittercismIntegration {
    client: Arc<dyn CrittercismClient>,
}

impl fmt::Debug for CrittercismIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrittercismIntegration").finish_non_exhaustive()
    }
}

impl CrittercismIntegration {
    /// Builds the SDK configuration from `settings` and initializes the SDK with it.
    ///
    /// `appId` is passed through as found; a missing id is for the SDK to reject.
    pub fn new(client: Arc<dyn CrittercismClient>, analytics: &Analytics, settings: &ValueMap) -> Self {
        let config = CrittercismConfig::from_settings(settings);
        let app_id = settings.get_string(APP_ID_SETTING);

        log::debug!(
            "Crittercism.initialize({}, {}, {:?})",
            analytics.application().package_name(),
            app_id.as_deref().unwrap_or_default(),
            config
        );
        client.initialize(analytics.application(), app_id.as_deref(), &config);

        Self { client }
    }

    /// Factory registering this integration under [`CRITTERCISM_KEY`].
    pub fn factory(client: Arc<dyn CrittercismClient>) -> CrittercismFactory {
        CrittercismFactory { client }
    }
}

impl Integration for CrittercismIntegration {
    fn identify(&self, identify: &IdentifyPayload) {
        let user_id = identify.user_id();
        log::debug!("Crittercism.set_username({user_id})");
        self.client.set_username(user_id);

        let metadata = identify.traits().as_map();
        log::debug!("Crittercism.set_metadata({} traits)", metadata.len());
        self.client.set_metadata(metadata);
    }

    fn screen(&self, screen: &ScreenPayload) {
        let breadcrumb = screen_breadcrumb(screen.event());
        log::debug!("Crittercism.leave_breadcrumb({breadcrumb})");
        self.client.leave_breadcrumb(&breadcrumb);
    }

    fn track(&self, track: &TrackPayload) {
        let event = track.event();
        log::debug!("Crittercism.leave_breadcrumb({event})");
        self.client.leave_breadcrumb(event);
    }

    fn flush(&self) {
        log::debug!("Crittercism.send_app_load_data()");
        self.client.send_app_load_data();
    }

    fn underlying_instance(&self) -> Option<DynInstance> {
        None
    }
}

fn screen_breadcrumb(event: &str) -> String {
    format!("Viewed {event} Screen")
}

/// Creates [`CrittercismIntegration`]s that share one injected client.
#[derive(Clone)]
pub struct CrittercismFactory {
    client: Arc<dyn CrittercismClient>,
}

impl fmt::Debug for CrittercismFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrittercismFactory")
            .field("key", &CRITTERCISM_KEY)
            .finish()
    }
}

impl IntegrationFactory for CrittercismFactory {
    fn key(&self) -> &str {
        CRITTERCISM_KEY
    }

    fn create(&self, settings: &ValueMap, analytics: &Analytics) -> Box<dyn Integration> {
        Box::new(CrittercismIntegration::new(self.client.clone(), analytics, settings))
    }
}
