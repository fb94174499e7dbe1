use crate::crittercism::constants::{
    COLLECT_LOGCAT_SETTING, CUSTOM_VERSION_NAME_SETTING, INCLUDE_VERSION_CODE_SETTING,
    SERVICE_MONITORING_SETTING,
};
use crate::integration::ValueMap;

/// Options handed to the Crittercism SDK when it is initialized.
///
/// Built once per integration and never mutated after `initialize` has received it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrittercismConfig {
    logcat_reporting_enabled: bool,
    version_code_in_version_string: bool,
    custom_version_name: Option<String>,
    service_monitoring_enabled: bool,
}

impl Default for CrittercismConfig {
    fn default() -> Self {
        Self {
            logcat_reporting_enabled: false,
            version_code_in_version_string: false,
            custom_version_name: None,
            service_monitoring_enabled: true,
        }
    }
}

impl CrittercismConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the recognized settings, applying the defaults for anything absent. An empty
    /// `customVersionName` is treated as absent so the SDK keeps its own version name.
    pub fn from_settings(settings: &ValueMap) -> Self {
        let mut config = Self::new()
            .with_logcat_reporting_enabled(settings.get_bool(COLLECT_LOGCAT_SETTING, false))
            .with_version_code_in_version_string(
                settings.get_bool(INCLUDE_VERSION_CODE_SETTING, false),
            )
            .with_service_monitoring_enabled(settings.get_bool(SERVICE_MONITORING_SETTING, true));

        if let Some(name) = settings.get_string(CUSTOM_VERSION_NAME_SETTING) {
            if !name.is_empty() {
                config = config.with_custom_version_name(name);
            }
        }

        config
    }

    pub fn with_logcat_reporting_enabled(mut self, enabled: bool) -> Self {
        self.logcat_reporting_enabled = enabled;
        self
    }

    pub fn with_version_code_in_version_string(mut self, included: bool) -> Self {
        self.version_code_in_version_string = included;
        self
    }

    pub fn with_custom_version_name(mut self, name: impl Into<String>) -> Self {
        self.custom_version_name = Some(name.into());
        self
    }

    pub fn with_service_monitoring_enabled(mut self, enabled: bool) -> Self {
        self.service_monitoring_enabled = enabled;
        self
    }

    pub fn logcat_reporting_enabled(&self) -> bool {
        self.logcat_reporting_enabled
    }

    pub fn version_code_in_version_string(&self) -> bool {
        self.version_code_in_version_string
    }

    /// `None` leaves the SDK's default version name in place.
    pub fn custom_version_name(&self) -> Option<&str> {
        self.custom_version_name.as_deref()
    }

    pub fn service_monitoring_enabled(&self) -> bool {
        self.service_monitoring_enabled
    }
}
