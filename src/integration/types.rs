use std::any::Any;
use std::sync::Arc;

use crate::integration::host::Analytics;
use crate::integration::payload::{
    AliasPayload, GroupPayload, IdentifyPayload, ScreenPayload, TrackPayload,
};
use crate::integration::value_map::ValueMap;

pub type DynInstance = Arc<dyn Any + Send + Sync>;

/// A destination the analytics pipeline forwards lifecycle calls to.
///
/// Every call defaults to a no-op so integrations only implement what their destination
/// understands.
pub trait Integration: Send + Sync {
    fn identify(&self, _identify: &IdentifyPayload) {}

    fn group(&self, _group: &GroupPayload) {}

    fn track(&self, _track: &TrackPayload) {}

    fn screen(&self, _screen: &ScreenPayload) {}

    fn alias(&self, _alias: &AliasPayload) {}

    fn flush(&self) {}

    fn reset(&self) {}

    /// Handle to the destination SDK instance, for callers that need to reach past the
    /// integration. `None` when the SDK exposes no instance.
    fn underlying_instance(&self) -> Option<DynInstance> {
        None
    }
}

/// Creates an [`Integration`] from its project settings.
pub trait IntegrationFactory: Send + Sync {
    /// Key under which the destination's settings are delivered. Must match the name the
    /// destination is registered with on the analytics backend.
    fn key(&self) -> &str;

    fn create(&self, settings: &ValueMap, analytics: &Analytics) -> Box<dyn Integration>;
}
