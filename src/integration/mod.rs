pub mod error;
mod host;
mod payload;
mod registry;
mod types;
mod value_map;

pub use host::{Analytics, Application};
pub use payload::{
    AliasPayload, BasePayload, GroupPayload, IdentifyPayload, ScreenPayload, TrackPayload, Traits,
};
pub use registry::{IntegrationRegistry, IntegrationSet, INTEGRATIONS_SETTINGS_KEY};
pub use types::{DynInstance, Integration, IntegrationFactory};
pub use value_map::ValueMap;
