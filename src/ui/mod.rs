//! Host layer the screens are built on.
//!
//! ratatui redraws whatever it is given; it has no notion of observable
//! state, lifecycle, or values shared down a view tree. These primitives
//! supply that:
//!
//! - [`observable::Observable`]: state holder with change notification
//! - [`main_queue::MainQueue`]: mailbox back onto the UI thread
//! - [`environment::Environment`]: values published to descendant views
//! - [`appearance::Appearance`]: once-per-mount lifecycle events
//! - [`navigation::Navigator`]: navigation stack

pub mod appearance;
pub mod environment;
pub mod events;
pub mod layout;
pub mod main_queue;
pub mod navigation;
pub mod observable;
pub mod state;
pub mod terminal_guard;
pub mod theme;
