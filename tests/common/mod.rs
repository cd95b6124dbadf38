//! Shared test doubles for the Weather screen.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use std::time::Duration;
use tempfile::TempDir;
use tokio::runtime::Handle;
use viper_weather::ui::navigation::Navigator;
use viper_weather::weather::{
    PresenterHandle, TemperatureSource, WeatherError, WeatherInteractorInput, WeatherModule,
    WeatherPresenter, WeatherRouter, WeatherScreen,
};

pub const LATENCY: Duration = Duration::from_secs(1);
pub const TIMEOUT: Duration = Duration::from_secs(5);

/// Source that replays scripted results and records where it ran.
pub struct ScriptedSource {
    latency: Duration,
    script: Mutex<VecDeque<Result<i32, WeatherError>>>,
    fallback: i32,
    calls: AtomicUsize,
    completed: AtomicUsize,
    threads: Mutex<Vec<ThreadId>>,
}

impl ScriptedSource {
    pub fn new(latency: Duration, fallback: i32) -> Arc<Self> {
        Arc::new(Self {
            latency,
            script: Mutex::new(VecDeque::new()),
            fallback,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            threads: Mutex::new(Vec::new()),
        })
    }

    /// Results returned before falling back to the fixed value.
    pub fn then(self: Arc<Self>, result: Result<i32, WeatherError>) -> Arc<Self> {
        self.script.lock().push_back(result);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Calls that got past the latency without being cancelled.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn threads(&self) -> Vec<ThreadId> {
        self.threads.lock().clone()
    }
}

#[async_trait]
impl TemperatureSource for ScriptedSource {
    async fn current_temperature(&self) -> Result<i32, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.threads.lock().push(thread::current().id());
        tokio::time::sleep(self.latency).await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.script.lock().pop_front().unwrap_or(Ok(self.fallback))
    }
}

/// Interactor double that counts invocations and reports a fixed value.
pub struct CountingInteractor {
    presenter: PresenterHandle,
    value: i32,
    calls: AtomicUsize,
}

impl CountingInteractor {
    pub fn new(presenter: PresenterHandle, value: i32) -> Arc<Self> {
        Arc::new(Self {
            presenter,
            value,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherInteractorInput for CountingInteractor {
    async fn on_appear(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(LATENCY).await;
        self.presenter.did_load_temperature(self.value);
    }
}

/// Interactor whose first call blocks its worker thread, so aborting that
/// load cannot stop it from reporting. Later calls wait asynchronously.
pub struct StallingInteractor {
    presenter: PresenterHandle,
    stall: Duration,
    calls: AtomicUsize,
}

impl StallingInteractor {
    pub const STALLED_VALUE: i32 = 99;
    pub const VALUE: i32 = 22;

    pub fn new(presenter: PresenterHandle, stall: Duration) -> Arc<Self> {
        Arc::new(Self {
            presenter,
            stall,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherInteractorInput for StallingInteractor {
    async fn on_appear(&self) {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            thread::sleep(self.stall);
            self.presenter.did_load_temperature(Self::STALLED_VALUE);
        } else {
            tokio::time::sleep(self.stall * 4).await;
            self.presenter.did_load_temperature(Self::VALUE);
        }
    }
}

/// Screen wired by the module around `source`, on the current runtime.
pub fn screen_with(source: Arc<ScriptedSource>) -> (WeatherScreen, Navigator) {
    let navigator = Navigator::new();
    let screen = WeatherModule::build_with_source(
        &Handle::current(),
        navigator.clone(),
        source,
        TIMEOUT,
    );
    (screen, navigator)
}

/// Presenter wired by hand to a counting interactor.
pub fn presenter_with_counter(value: i32) -> (WeatherPresenter, Arc<CountingInteractor>) {
    let router = Arc::new(WeatherRouter::new(Navigator::new()));
    let mut presenter = WeatherPresenter::new(router, Handle::current());
    let interactor = CountingInteractor::new(presenter.handle(), value);
    presenter.attach(interactor.clone());
    (presenter, interactor)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
