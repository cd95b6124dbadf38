use crate::ui::navigation::Navigator;

/// Navigation for the Weather screen.
///
/// The screen has no outgoing destinations yet; it can only present and
/// dismiss itself on the host navigation stack.
#[derive(Debug)]
pub struct WeatherRouter {
    navigator: Navigator,
}

impl WeatherRouter {
    pub const ROUTE: &'static str = "weather";

    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    pub fn route(&self) -> &'static str {
        Self::ROUTE
    }

    /// Push the screen onto the navigation stack.
    pub fn present(&self) {
        self.navigator.push(Self::ROUTE);
    }

    /// Remove the screen from the navigation stack.
    pub fn dismiss(&self) -> bool {
        self.navigator.pop(Self::ROUTE)
    }

    pub fn is_presented(&self) -> bool {
        self.navigator.top() == Some(Self::ROUTE)
    }
}
