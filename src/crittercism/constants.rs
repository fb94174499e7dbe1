/// Name the destination is registered under on the analytics backend.
pub const CRITTERCISM_KEY: &str = "Crittercism";

pub(crate) const APP_ID_SETTING: &str = "appId";
pub(crate) const COLLECT_LOGCAT_SETTING: &str = "shouldCollectLogcat";
pub(crate) const INCLUDE_VERSION_CODE_SETTING: &str = "includeVersionCode";
pub(crate) const CUSTOM_VERSION_NAME_SETTING: &str = "customVersionName";
pub(crate) const SERVICE_MONITORING_SETTING: &str = "enableServiceMonitoring";
