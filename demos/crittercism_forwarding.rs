//! Forwards a handful of lifecycle calls through the Crittercism integration using the
//! log-backed client. Swap `LogClient` for a binding to the native SDK in a real app.

use std::sync::Arc;

use analytics_crittercism::crittercism::{CrittercismIntegration, LogClient};
use analytics_crittercism::integration::{
    Analytics, Application, IdentifyPayload, IntegrationRegistry, ScreenPayload, TrackPayload,
    Traits, ValueMap,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = IntegrationRegistry::new();
    registry.register(Arc::new(CrittercismIntegration::factory(Arc::new(LogClient))))?;

    let project_settings = ValueMap::from_json_str(
        r#"{
            "integrations": {
                "Crittercism": {
                    "appId": "your-crittercism-app-id",
                    "shouldCollectLogcat": true,
                    "customVersionName": "1.2.3-demo"
                }
            }
        }"#,
    )?;
    let analytics = Analytics::new(Application::new("com.example.demo"));
    let integrations = registry.create_integrations(&project_settings, &analytics);
    println!("Enabled integrations: {:?}", integrations.keys().collect::<Vec<_>>());

    let traits = Traits::new()
        .with_user_id("user-42")
        .put_value("plan", "pro");
    integrations.identify(&IdentifyPayload::from_traits(traits));
    integrations.screen(&ScreenPayload::new("Home"));
    integrations.track(&TrackPayload::new("Checkout Started"));
    integrations.flush();

    Ok(())
}
