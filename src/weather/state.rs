//! View state for the Weather screen.

use crate::ui::state::UiState;

/// Everything the Weather view needs to render.
///
/// Only the presenter writes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeatherViewState {
    pub is_loading: bool,
    pub title: String,
    /// Message of the last failed load, cleared when a new load starts.
    pub error: Option<String>,
}

impl UiState for WeatherViewState {}

/// Coarse phase derived from the state fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherPhase {
    /// Nothing requested yet.
    Idle,
    Loading,
    Loaded,
    /// Last load failed; the view offers a retry.
    Failed,
}

impl WeatherViewState {
    pub fn phase(&self) -> WeatherPhase {
        if self.is_loading {
            WeatherPhase::Loading
        } else if self.error.is_some() {
            WeatherPhase::Failed
        } else if self.title.is_empty() {
            WeatherPhase::Idle
        } else {
            WeatherPhase::Loaded
        }
    }
}
