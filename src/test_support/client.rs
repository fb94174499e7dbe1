use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use crate::crittercism::{CrittercismClient, CrittercismConfig};
use crate::integration::Application;

/// One call received by a [`RecordingClient`].
#[derive(Clone, Debug, PartialEq)]
pub enum ClientCall {
    Initialize {
        application: Application,
        app_id: Option<String>,
        config: CrittercismConfig,
    },
    SetUsername(String),
    SetMetadata(Map<String, Value>),
    LeaveBreadcrumb(String),
    SendAppLoadData,
}

/// Fake SDK that records every call in order. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingClient {
    calls: Arc<Mutex<Vec<ClientCall>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ClientCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Drops everything recorded so far, typically the `initialize` call.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: ClientCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl CrittercismClient for RecordingClient {
    fn initialize(&self, application: &Application, app_id: Option<&str>, config: &CrittercismConfig) {
        self.record(ClientCall::Initialize {
            application: application.clone(),
            app_id: app_id.map(str::to_string),
            config: config.clone(),
        });
    }

    fn set_username(&self, username: &str) {
        self.record(ClientCall::SetUsername(username.to_string()));
    }

    fn set_metadata(&self, metadata: &Map<String, Value>) {
        self.record(ClientCall::SetMetadata(metadata.clone()));
    }

    fn leave_breadcrumb(&self, breadcrumb: &str) {
        self.record(ClientCall::LeaveBreadcrumb(breadcrumb.to_string()));
    }

    fn send_app_load_data(&self) {
        self.record(ClientCall::SendAppLoadData);
    }
}
