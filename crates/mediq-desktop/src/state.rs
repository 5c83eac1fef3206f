use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use mediq_backend::DEFAULT_BASE_URL;
use mediq_core::models::MedicineAnalysis;
use mediq_core::render::DiagnosisView;

/// Where the diagnosis service lives. Held in memory only; the deployment
/// default is the fixed local endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Which tab of the single-page UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    #[default]
    Diagnosis,
    MedicineAnalysis,
}

/// The renderable state of one request flow.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowStatus<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight; the frontend disables its submit control.
    Pending,
    /// The last completed request succeeded.
    Ready {
        value: T,
        received_at: jiff::Timestamp,
    },
    /// The last completed request failed; `message` is rendered inline.
    Failed {
        message: String,
        received_at: jiff::Timestamp,
    },
}

/// The single mutable cell behind one flow.
///
/// `begin` replaces whatever is displayed with `Pending` — a new request
/// invalidates the previous result and any error. `finish_ok`/`finish_err`
/// overwrite unconditionally, so when requests overlap the last-completed
/// one wins regardless of issue order. Nothing is ever cancelled.
#[derive(Debug)]
pub struct FlowSlot<T> {
    inner: Mutex<FlowStatus<T>>,
}

impl<T: Clone> FlowSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FlowStatus::Idle),
        }
    }

    pub async fn begin(&self) {
        *self.inner.lock().await = FlowStatus::Pending;
    }

    pub async fn finish_ok(&self, value: T) {
        *self.inner.lock().await = FlowStatus::Ready {
            value,
            received_at: jiff::Timestamp::now(),
        };
    }

    pub async fn finish_err(&self, message: String) {
        *self.inner.lock().await = FlowStatus::Failed {
            message,
            received_at: jiff::Timestamp::now(),
        };
    }

    pub async fn snapshot(&self) -> FlowStatus<T> {
        self.inner.lock().await.clone()
    }

    pub async fn is_pending(&self) -> bool {
        matches!(*self.inner.lock().await, FlowStatus::Pending)
    }
}

impl<T: Clone> Default for FlowSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state behind the command layer: the backend location, the active
/// tab, and one result slot per flow. The two flows are independent and may
/// be pending at the same time.
pub struct DesktopState {
    pub config: Arc<Mutex<BackendConfig>>,
    pub active_tab: Arc<Mutex<ActiveTab>>,
    pub diagnosis: Arc<FlowSlot<DiagnosisView>>,
    pub medicine: Arc<FlowSlot<MedicineAnalysis>>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            config: Arc::new(Mutex::new(BackendConfig::default())),
            active_tab: Arc::new(Mutex::new(ActiveTab::default())),
            diagnosis: Arc::new(FlowSlot::new()),
            medicine: Arc::new(FlowSlot::new()),
        }
    }
}
