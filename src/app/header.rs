use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use crate::weather::{WeatherPhase, WeatherViewState};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    feature: &'static str,
}

impl Header {
    pub fn new(feature: &'static str) -> Self {
        Self { feature }
    }

    pub fn widget(&self, state: &WeatherViewState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (color, label) = match state.phase() {
            WeatherPhase::Idle => (HEADER_SEPARATOR, "idle"),
            WeatherPhase::Loading => (STATUS_PENDING, "loading"),
            WeatherPhase::Loaded => (STATUS_OK, "loaded"),
            WeatherPhase::Failed => (STATUS_ERROR, "failed"),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(color)),
            Span::styled("  ", text_style),
            Span::styled(self.feature, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(label, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
