use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::integration::error::{duplicate_factory, IntegrationResult};
use crate::integration::host::Analytics;
use crate::integration::payload::{IdentifyPayload, ScreenPayload, TrackPayload};
use crate::integration::types::{Integration, IntegrationFactory};
use crate::integration::value_map::ValueMap;

/// Key of the per-destination settings object inside the project settings.
pub const INTEGRATIONS_SETTINGS_KEY: &str = "integrations";

/// Factories known to the pipeline, indexed by their settings key.
#[derive(Default)]
pub struct IntegrationRegistry {
    factories: BTreeMap<String, Arc<dyn IntegrationFactory>>,
}

impl fmt::Debug for IntegrationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationRegistry")
            .field("keys", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl IntegrationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, factory: Arc<dyn IntegrationFactory>) -> IntegrationResult<()> {
        let key = factory.key().to_string();
        if self.factories.contains_key(&key) {
            return Err(duplicate_factory(format!(
                "an integration factory is already registered for `{key}`"
            )));
        }
        self.factories.insert(key, factory);
        Ok(())
    }

    pub fn factory(&self, key: &str) -> Option<Arc<dyn IntegrationFactory>> {
        self.factories.get(key).cloned()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Creates every registered integration that has a non-empty settings entry under
    /// `integrations.<key>` in the project settings. Destinations without settings are
    /// disabled for this project and skipped.
    pub fn create_integrations(
        &self,
        project_settings: &ValueMap,
        analytics: &Analytics,
    ) -> IntegrationSet {
        let integration_settings = project_settings
            .get_value_map(INTEGRATIONS_SETTINGS_KEY)
            .unwrap_or_default();

        let mut integrations = BTreeMap::new();
        for (key, factory) in &self.factories {
            match integration_settings.get_value_map(key) {
                Some(settings) if !settings.is_empty() => {
                    log::debug!("Initializing integration `{key}`");
                    integrations.insert(key.clone(), factory.create(&settings, analytics));
                }
                _ => log::debug!("Integration `{key}` is not enabled"),
            }
        }

        IntegrationSet { integrations }
    }
}

/// Integrations created for a project, receiving every lifecycle call in key order.
#[derive(Default)]
pub struct IntegrationSet {
    integrations: BTreeMap<String, Box<dyn Integration>>,
}

impl fmt::Debug for IntegrationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationSet")
            .field("keys", &self.integrations.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl IntegrationSet {
    pub fn get(&self, key: &str) -> Option<&dyn Integration> {
        self.integrations.get(key).map(|integration| integration.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.integrations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.integrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.integrations.is_empty()
    }

    pub fn identify(&self, identify: &IdentifyPayload) {
        for integration in self.integrations.values() {
            integration.identify(identify);
        }
    }

    pub fn screen(&self, screen: &ScreenPayload) {
        for integration in self.integrations.values() {
            integration.screen(screen);
        }
    }

    pub fn track(&self, track: &TrackPayload) {
        for integration in self.integrations.values() {
            integration.track(track);
        }
    }

    pub fn flush(&self) {
        for integration in self.integrations.values() {
            integration.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::host::Application;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingIntegration {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl Integration for CountingIntegration {
        fn track(&self, track: &TrackPayload) {
            self.calls.lock().unwrap().push(format!("track:{}", track.event()));
        }

        fn flush(&self) {
            self.calls.lock().unwrap().push("flush".to_string());
        }
    }

    struct CountingFactory {
        key: &'static str,
        calls: Arc<Mutex<Vec<String>>>,
        created_with: Arc<Mutex<Vec<ValueMap>>>,
    }

    impl CountingFactory {
        fn new(key: &'static str) -> Self {
            Self {
                key,
                calls: Arc::default(),
                created_with: Arc::default(),
            }
        }
    }

    impl IntegrationFactory for CountingFactory {
        fn key(&self) -> &str {
            self.key
        }

        fn create(&self, settings: &ValueMap, _analytics: &Analytics) -> Box<dyn Integration> {
            self.created_with.lock().unwrap().push(settings.clone());
            Box::new(CountingIntegration {
                calls: self.calls.clone(),
            })
        }
    }

    fn analytics() -> Analytics {
        Analytics::new(Application::new("com.example.app"))
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut registry = IntegrationRegistry::new();
        registry.register(Arc::new(CountingFactory::new("Foo"))).unwrap();

        let err = registry
            .register(Arc::new(CountingFactory::new("Foo")))
            .unwrap_err();
        assert_eq!(err.code_str(), "integration/duplicate-factory");
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["Foo"]);
    }

    #[test]
    fn only_integrations_with_settings_are_created() {
        let enabled = Arc::new(CountingFactory::new("Enabled"));
        let empty = Arc::new(CountingFactory::new("Empty"));
        let absent = Arc::new(CountingFactory::new("Absent"));

        let mut registry = IntegrationRegistry::new();
        registry.register(enabled.clone()).unwrap();
        registry.register(empty.clone()).unwrap();
        registry.register(absent.clone()).unwrap();

        let project_settings = ValueMap::try_from(json!({
            "integrations": {
                "Enabled": {"apiKey": "k"},
                "Empty": {},
                "Unregistered": {"apiKey": "x"}
            }
        }))
        .unwrap();

        let set = registry.create_integrations(&project_settings, &analytics());

        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["Enabled"]);
        let created_with = enabled.created_with.lock().unwrap();
        assert_eq!(created_with.len(), 1);
        assert_eq!(created_with[0].get_string("apiKey").as_deref(), Some("k"));
        assert!(empty.created_with.lock().unwrap().is_empty());
        assert!(absent.created_with.lock().unwrap().is_empty());
    }

    #[test]
    fn lifecycle_calls_fan_out() {
        let first = Arc::new(CountingFactory::new("A"));
        let second = Arc::new(CountingFactory::new("B"));
        let mut registry = IntegrationRegistry::new();
        registry.register(first.clone()).unwrap();
        registry.register(second.clone()).unwrap();

        let project_settings = ValueMap::try_from(json!({
            "integrations": {"A": {"on": true}, "B": {"on": true}}
        }))
        .unwrap();
        let set = registry.create_integrations(&project_settings, &analytics());

        set.track(&TrackPayload::new("Signed Up"));
        set.flush();
        // no-op defaults must not panic
        set.identify(&IdentifyPayload::new("user", Default::default()));
        set.screen(&ScreenPayload::new("Home"));

        for factory in [&first, &second] {
            assert_eq!(
                *factory.calls.lock().unwrap(),
                vec!["track:Signed Up".to_string(), "flush".to_string()]
            );
        }
    }

    #[test]
    fn missing_integrations_object_creates_nothing() {
        let mut registry = IntegrationRegistry::new();
        registry.register(Arc::new(CountingFactory::new("A"))).unwrap();

        let set = registry.create_integrations(&ValueMap::new(), &analytics());
        assert!(set.is_empty());
        assert!(set.get("A").is_none());
    }
}
