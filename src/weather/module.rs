//! Composition root for the Weather screen.

use crate::config::WeatherConfig;
use crate::ui::environment::Environment;
use crate::ui::navigation::Navigator;
use crate::ui::observable::SubscriptionId;
use crate::weather::interactor::WeatherInteractor;
use crate::weather::presenter::WeatherPresenter;
use crate::weather::router::WeatherRouter;
use crate::weather::source::{SimulatedTemperature, TemperatureSource};
use crate::weather::state::WeatherViewState;
use crate::weather::view::WeatherView;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

pub struct WeatherModule;

impl WeatherModule {
    /// Build the screen with the simulated source described by `config`.
    pub fn build(runtime: &Handle, navigator: Navigator, config: &WeatherConfig) -> WeatherScreen {
        let source = Arc::new(SimulatedTemperature::from_config(config));
        Self::build_with_source(runtime, navigator, source, config.timeout())
    }

    /// Build the screen around an arbitrary temperature source.
    ///
    /// Must run on the UI thread: the presenter binds its state to it.
    pub fn build_with_source(
        runtime: &Handle,
        navigator: Navigator,
        source: Arc<dyn TemperatureSource>,
        timeout: Duration,
    ) -> WeatherScreen {
        let router = Arc::new(WeatherRouter::new(navigator));

        let mut presenter = WeatherPresenter::new(Arc::clone(&router), runtime.clone());

        let interactor = WeatherInteractor::new(presenter.handle(), source, timeout);

        presenter.attach(Arc::new(interactor));

        let environment = Environment::new().with(Arc::clone(&router));
        router.present();

        WeatherScreen {
            view: WeatherView::new(),
            presenter,
            environment,
        }
    }
}

/// One mounted Weather screen: view, presenter and the environment its
/// descendants read from. Dropping it cancels any in-flight load.
pub struct WeatherScreen {
    view: WeatherView,
    presenter: WeatherPresenter,
    environment: Environment,
}

impl WeatherScreen {
    pub fn appear(&mut self) {
        self.view.appear(&mut self.presenter);
    }

    pub fn disappear(&mut self) {
        self.view.disappear(&mut self.presenter);
    }

    pub fn on_tick(&mut self) {
        self.view.on_tick();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.view.handle_key(key, &mut self.presenter)
    }

    /// Apply interactor callbacks that reached the UI thread.
    pub fn process_callbacks(&mut self) -> usize {
        self.presenter.process_callbacks()
    }

    /// Wait for the in-flight load to finish and apply its result.
    pub async fn settle(&mut self) {
        self.presenter.settle().await;
    }

    pub fn observe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&WeatherViewState) + 'static,
    {
        self.presenter.observe(observer)
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(
            self.view.body(self.presenter.state(), &self.environment),
            area,
        );
    }

    pub fn state(&self) -> &WeatherViewState {
        self.presenter.state()
    }

    pub fn is_loading(&self) -> bool {
        self.presenter.state().is_loading
    }

    pub fn presenter(&self) -> &WeatherPresenter {
        &self.presenter
    }

    pub fn view(&self) -> &WeatherView {
        &self.view
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}
