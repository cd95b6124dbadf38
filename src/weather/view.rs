//! Rendering and input for the Weather screen.

use crate::ui::appearance::Appearance;
use crate::ui::environment::Environment;
use crate::ui::theme::{ACCENT, BODY_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::weather::presenter::WeatherPresenter;
use crate::weather::router::WeatherRouter;
use crate::weather::state::{WeatherPhase, WeatherViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// View half of the screen: mount tracking, key mapping, spinner frame.
///
/// Holds no view state of its own; it reads the presenter's state when
/// rendering and forwards events to the presenter.
#[derive(Debug, Default)]
pub struct WeatherView {
    appearance: Appearance,
    frame: usize,
}

impl WeatherView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.appearance.is_mounted()
    }

    /// Host is showing the view. Forwards `on_appear` once per mount.
    pub fn appear(&mut self, presenter: &mut WeatherPresenter) {
        if self.appearance.mount() {
            presenter.on_appear();
        }
    }

    /// Host removed the view. Forwards `on_disappear` once per unmount.
    pub fn disappear(&mut self, presenter: &mut WeatherPresenter) {
        if self.appearance.unmount() {
            presenter.on_disappear();
        }
    }

    pub fn on_tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER.len();
    }

    /// Map a key press to a presenter call. Returns whether it was handled.
    pub fn handle_key(&mut self, key: KeyEvent, presenter: &mut WeatherPresenter) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('r') => {
                presenter.on_retry();
                true
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                presenter.on_close();
                true
            }
            _ => false,
        }
    }

    /// Widget for the current state snapshot.
    pub fn body<'a>(&self, state: &'a WeatherViewState, env: &'a Environment) -> WeatherBody<'a> {
        WeatherBody {
            state,
            env,
            spinner: SPINNER[self.frame],
        }
    }
}

/// Body of the Weather screen for one state snapshot.
pub struct WeatherBody<'a> {
    state: &'a WeatherViewState,
    env: &'a Environment,
    spinner: &'static str,
}

impl WeatherBody<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let muted = Style::default().fg(MUTED_TEXT);
        let mut lines = vec![RouteBadge::line(self.env), Line::from("")];

        match self.state.phase() {
            WeatherPhase::Loading => lines.push(Line::from(vec![
                Span::styled(self.spinner, Style::default().fg(ACCENT)),
                Span::styled(" Loading", muted),
            ])),
            WeatherPhase::Failed => {
                let message = self.state.error.clone().unwrap_or_default();
                lines.push(Line::from(Span::styled(
                    message,
                    Style::default().fg(STATUS_ERROR),
                )));
                lines.push(Line::from(Span::styled("Press r to retry", muted)));
            }
            WeatherPhase::Loaded | WeatherPhase::Idle => lines.push(Line::from(Span::styled(
                self.state.title.clone(),
                Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
            ))),
        }
        lines
    }
}

impl Widget for WeatherBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top = area.height.saturating_sub(4) / 2;
        let inner = Rect {
            x: area.x,
            y: area.y + top,
            width: area.width,
            height: area.height.saturating_sub(top),
        };
        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Descendant that reads the router from the environment rather than
/// receiving it from its parent.
pub struct RouteBadge;

impl RouteBadge {
    pub fn line(env: &Environment) -> Line<'static> {
        let route = env
            .get::<WeatherRouter>()
            .map(|router| router.route())
            .unwrap_or("?");
        Line::from(Span::styled(
            format!("/{}", route),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navigation::Navigator;
    use std::sync::Arc;

    fn render_text(state: &WeatherViewState, env: &Environment) -> String {
        let area = Rect::new(0, 0, 24, 8);
        let mut buf = Buffer::empty(area);
        WeatherView::new().body(state, env).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn env() -> Environment {
        Environment::new().with(Arc::new(WeatherRouter::new(Navigator::new())))
    }

    #[test]
    fn loaded_state_shows_title() {
        let state = WeatherViewState {
            title: "22°".to_string(),
            ..Default::default()
        };
        let text = render_text(&state, &env());
        assert!(text.contains("22°"));
        assert!(text.contains("/weather"));
    }

    #[test]
    fn loading_state_shows_spinner_not_title() {
        let state = WeatherViewState {
            is_loading: true,
            title: "22°".to_string(),
            error: None,
        };
        let text = render_text(&state, &env());
        assert!(text.contains("Loading"));
        assert!(!text.contains("22°"));
    }

    #[test]
    fn failed_state_offers_retry() {
        let state = WeatherViewState {
            error: Some("offline".to_string()),
            ..Default::default()
        };
        let text = render_text(&state, &env());
        assert!(text.contains("offline"));
        assert!(text.contains("Press r to retry"));
    }

    #[test]
    fn badge_without_router_is_placeholder() {
        let text = render_text(&WeatherViewState::default(), &Environment::new());
        assert!(text.contains("/?"));
    }

    #[test]
    fn spinner_advances_and_wraps() {
        let mut view = WeatherView::new();
        for _ in 0..SPINNER.len() {
            view.on_tick();
        }
        assert_eq!(view.frame, 0);
    }
}
