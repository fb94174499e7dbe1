use std::fmt;
use std::sync::Arc;

/// Runtime handle of the host application, handed to client SDKs on initialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Application {
    package_name: Arc<str>,
}

impl Application {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: Arc::from(package_name.into()),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

/// The analytics pipeline as seen by integrations at construction time.
#[derive(Clone)]
pub struct Analytics {
    inner: Arc<AnalyticsInner>,
}

struct AnalyticsInner {
    application: Application,
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analytics")
            .field("application", &self.inner.application.package_name())
            .finish()
    }
}

impl Analytics {
    pub fn new(application: Application) -> Self {
        Self {
            inner: Arc::new(AnalyticsInner { application }),
        }
    }

    pub fn application(&self) -> &Application {
        &self.inner.application
    }
}
