//! Presenter of the Weather screen.
//!
//! Owns the view state and is the only code that writes it. Lives on the UI
//! thread; the interactor runs on the tokio runtime and talks back through a
//! [`PresenterHandle`], whose calls are queued and applied here by
//! [`WeatherPresenter::process_callbacks`].

use crate::ui::main_queue::{MainQueue, MainSender};
use crate::ui::observable::{Observable, SubscriptionId};
use crate::weather::error::WeatherError;
use crate::weather::interactor::WeatherInteractorInput;
use crate::weather::router::WeatherRouter;
use crate::weather::state::{WeatherPhase, WeatherViewState};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

tokio::task_local! {
    /// Id of the load whose task is posting callbacks.
    static CURRENT_LOAD: u64;
}

#[derive(Debug)]
enum PresenterMessage {
    /// `load` is the id of the posting load, `None` outside any load task.
    DidLoadTemperature { load: Option<u64>, temperature: i32 },
    DidFail { load: Option<u64>, error: WeatherError },
    /// The task driving load `id` has ended, whichever way.
    LoadFinished { id: u64 },
}

/// Callback side of the presenter, handed to the interactor.
///
/// Cheap to clone and safe to use from any thread. Every call is delivered
/// to the presenter on the UI thread, tagged with the load it was made from;
/// results of a load that is no longer current are discarded there.
#[derive(Debug, Clone)]
pub struct PresenterHandle {
    sender: MainSender<PresenterMessage>,
}

impl PresenterHandle {
    pub fn did_load_temperature(&self, temperature: i32) {
        self.sender.post(PresenterMessage::DidLoadTemperature {
            load: current_load(),
            temperature,
        });
    }

    pub fn did_fail(&self, error: WeatherError) {
        self.sender.post(PresenterMessage::DidFail {
            load: current_load(),
            error,
        });
    }

    fn load_finished(&self, id: u64) {
        self.sender.post(PresenterMessage::LoadFinished { id });
    }
}

fn current_load() -> Option<u64> {
    CURRENT_LOAD.try_with(|id| *id).ok()
}

/// In-flight load. Aborted when dropped.
struct LoadTask {
    id: u64,
    handle: JoinHandle<()>,
}

impl Drop for LoadTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct WeatherPresenter {
    state: Observable<WeatherViewState>,
    router: Arc<WeatherRouter>,
    interactor: Option<Arc<dyn WeatherInteractorInput>>,
    runtime: Handle,
    handle: PresenterHandle,
    callbacks: MainQueue<PresenterMessage>,
    load: Option<LoadTask>,
    loads_started: u64,
}

impl WeatherPresenter {
    /// Create a presenter without an interactor. Must be called on the UI
    /// thread; loads are spawned on `runtime`.
    pub fn new(router: Arc<WeatherRouter>, runtime: Handle) -> Self {
        let (sender, callbacks) = MainQueue::new();
        Self {
            state: Observable::default(),
            router,
            interactor: None,
            runtime,
            handle: PresenterHandle { sender },
            callbacks,
            load: None,
            loads_started: 0,
        }
    }

    /// Second wiring step: give the presenter its interactor.
    pub fn attach(&mut self, interactor: Arc<dyn WeatherInteractorInput>) {
        self.interactor = Some(interactor);
    }

    /// Callback handle for the interactor.
    pub fn handle(&self) -> PresenterHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> &WeatherViewState {
        self.state.get()
    }

    pub fn router(&self) -> &Arc<WeatherRouter> {
        &self.router
    }

    /// Subscribe to view state changes.
    pub fn observe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&WeatherViewState) + 'static,
    {
        self.state.subscribe(observer)
    }

    pub fn unobserve(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    pub fn is_load_in_flight(&self) -> bool {
        self.load.is_some()
    }

    /// Number of loads spawned so far.
    pub fn loads_started(&self) -> u64 {
        self.loads_started
    }

    /// The screen became visible. Starts a load and returns immediately.
    pub fn on_appear(&mut self) {
        self.start_load();
    }

    /// Retry after a failed load. Ignored in any other phase.
    pub fn on_retry(&mut self) {
        if self.state().phase() != WeatherPhase::Failed {
            tracing::debug!(phase = ?self.state().phase(), "retry ignored");
            return;
        }
        self.start_load();
    }

    /// The screen went away. Cancels the in-flight load and discards any
    /// result it already posted.
    pub fn on_disappear(&mut self) {
        if let Some(load) = self.load.take() {
            tracing::debug!(load = load.id, "cancelling load");
            drop(load);
            let discarded = self.callbacks.drain().len();
            if discarded > 0 {
                tracing::trace!(discarded, "dropped callbacks of cancelled load");
            }
        }
        self.state.mutate(|state| state.is_loading = false);
    }

    /// User asked to leave the screen.
    pub fn on_close(&mut self) {
        self.router.dismiss();
    }

    pub fn did_load_temperature(&mut self, temperature: i32) {
        self.state.mutate(|state| {
            state.is_loading = false;
            state.title = format!("{}°", temperature);
            state.error = None;
        });
    }

    pub fn did_fail(&mut self, error: WeatherError) {
        self.state.mutate(|state| {
            state.is_loading = false;
            state.error = Some(error.to_string());
        });
    }

    /// Apply every callback already posted by the interactor.
    ///
    /// Returns how many messages were handled.
    pub fn process_callbacks(&mut self) -> usize {
        let messages = self.callbacks.drain();
        let count = messages.len();
        for message in messages {
            self.apply(message);
        }
        count
    }

    /// Wait until the in-flight load has ended, applying its callbacks.
    ///
    /// Returns immediately when nothing is loading.
    pub async fn settle(&mut self) {
        while self.load.is_some() {
            let Some(message) = self.callbacks.recv().await else {
                break;
            };
            self.apply(message);
        }
    }

    fn start_load(&mut self) {
        let Some(interactor) = self.interactor.clone() else {
            tracing::warn!("on_appear before an interactor was attached");
            return;
        };

        self.state.mutate(|state| {
            state.is_loading = true;
            state.error = None;
        });

        if let Some(load) = &self.load {
            tracing::debug!(load = load.id, "load already in flight");
            return;
        }

        self.loads_started += 1;
        let id = self.loads_started;
        let handle = self.handle();
        let task = self.runtime.spawn(CURRENT_LOAD.scope(id, async move {
            let _finished = scopeguard::guard(handle, move |handle| handle.load_finished(id));
            interactor.on_appear().await;
        }));
        tracing::debug!(load = id, "load started");
        self.load = Some(LoadTask { id, handle: task });
    }

    fn is_current(&self, load: Option<u64>) -> bool {
        load.is_some() && self.load.as_ref().map(|current| current.id) == load
    }

    fn apply(&mut self, message: PresenterMessage) {
        match message {
            PresenterMessage::LoadFinished { id } => {
                if self.is_current(Some(id)) {
                    self.load = None;
                }
            }
            PresenterMessage::DidLoadTemperature { load, temperature } if self.is_current(load) => {
                self.did_load_temperature(temperature)
            }
            PresenterMessage::DidFail { load, error } if self.is_current(load) => {
                self.did_fail(error)
            }
            stale => {
                tracing::trace!(message = ?stale, "callback of a load that is not current, dropped");
            }
        }
    }
}
