use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use crate::weather::WeatherPhase;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the current phase, with the version on the right.
pub struct Footer {
    phase: WeatherPhase,
}

impl Footer {
    pub fn new(phase: WeatherPhase) -> Self {
        Self { phase }
    }

    /// `(key, action)` pairs valid in this phase.
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.phase {
            WeatherPhase::Failed => &[("r", "Retry"), ("q/Esc", "Quit")],
            _ => &[("q/Esc", "Quit")],
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(ACCENT);

        let mut spans = vec![Span::styled(" ", dim)];
        for (index, (key, action)) in self.hints().iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {action}"), dim));
        }

        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(|span| span.width()).sum();
        let inner = area.width.saturating_sub(2) as usize;
        let gap = inner.saturating_sub(used + version.chars().count());
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::styled(version, dim));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::widgets::Widget;

    fn footer_text(phase: WeatherPhase) -> String {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        Footer::new(phase).widget(area).render(area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn retry_hint_only_when_failed() {
        let failed = footer_text(WeatherPhase::Failed);
        assert!(failed.contains("r: Retry"));
        assert!(failed.contains("q/Esc: Quit"));

        for phase in [WeatherPhase::Idle, WeatherPhase::Loading, WeatherPhase::Loaded] {
            let text = footer_text(phase);
            assert!(!text.contains("Retry"), "{phase:?}: {text}");
            assert!(text.contains("q/Esc: Quit"));
        }
    }

    #[test]
    fn version_is_right_aligned() {
        let text = footer_text(WeatherPhase::Idle);
        let version = format!("v{VERSION} │");
        assert!(text.trim_end().ends_with(&version), "{text}");
    }
}
