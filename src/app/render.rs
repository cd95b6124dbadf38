use crate::app::footer::Footer;
use crate::app::header::Header;
use crate::ui::layout::layout_regions;
use crate::weather::WeatherScreen;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub const FEATURE_NAME: &str = "Weather";

pub fn draw(frame: &mut Frame<'_>, screen: &WeatherScreen) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(FEATURE_NAME).widget(screen.state()), header);
    frame.render_widget(Clear, body);
    screen.render(frame, body);
    frame.render_widget(Footer::new(screen.state().phase()).widget(footer), footer);
}
