//! Weather feature, the example screen built from the VIPER template.
//!
//! ```text
//! View ──on_appear──→ Presenter ──spawn──→ Interactor ──→ TemperatureSource
//!  ↑                     │  ↑                  │
//!  └──── render ─────────┘  └── PresenterHandle (UI mailbox) ──┘
//! ```
//!
//! - **View**: renders the presenter's state, forwards lifecycle and keys
//! - **Presenter**: sole writer of [`WeatherViewState`], UI thread only
//! - **Interactor**: async load, serialized, reports back via callbacks
//! - **Router**: navigation, published to descendants through the environment
//! - **Module**: builds and wires the four for one screen

mod error;
mod interactor;
mod module;
mod presenter;
mod router;
mod source;
mod state;
mod view;

pub use error::WeatherError;
pub use interactor::{WeatherInteractor, WeatherInteractorInput};
pub use module::{WeatherModule, WeatherScreen};
pub use presenter::{PresenterHandle, WeatherPresenter};
pub use router::WeatherRouter;
pub use source::{SimulatedTemperature, TemperatureSource};
pub use state::{WeatherPhase, WeatherViewState};
pub use view::{RouteBadge, WeatherBody, WeatherView};
