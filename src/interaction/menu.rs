//! Menu toggle
//!
//! Open/closed state of the mobile navigation menu, derived from the
//! parity of the click counter.

use serde::Serialize;

/// Visibility of the navigation menu
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// CSS class applied to the navigation element
    pub fn class_name(self) -> &'static str {
        match self {
            MenuState::Closed => "nav-menu",
            MenuState::Open => "nav-menu active",
        }
    }
}

/// A click event carrying the page's running click count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click(pub u64);

impl Click {
    /// `None` for a missing or zero count
    pub fn from_count(n_clicks: Option<u64>) -> Option<Self> {
        n_clicks.filter(|n| *n > 0).map(Click)
    }
}

/// Last click count seen for one session's menu button
#[derive(Debug, Clone, Default)]
pub struct MenuToggle {
    clicks: u64,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn state(&self) -> MenuState {
        if self.clicks % 2 == 1 {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    /// Apply an event; `None` leaves the state unchanged
    ///
    /// The state follows the parity of the reported count.
    pub fn on_event(&mut self, event: Option<Click>) -> MenuState {
        if let Some(Click(count)) = event {
            self.clicks = count;
        }
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let menu = MenuToggle::new();
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.state().class_name(), "nav-menu");
    }

    #[test]
    fn test_parity() {
        for n in 0..10u64 {
            let mut menu = MenuToggle::new();
            for count in 1..=n {
                menu.on_event(Some(Click(count)));
            }
            let expected = if n % 2 == 1 {
                MenuState::Open
            } else {
                MenuState::Closed
            };
            assert_eq!(menu.state(), expected, "after {} clicks", n);
        }
    }

    #[test]
    fn test_null_event_is_noop() {
        let mut menu = MenuToggle::new();
        assert_eq!(menu.on_event(None), MenuState::Closed);
        menu.on_event(Some(Click(1)));
        assert_eq!(menu.on_event(None), MenuState::Open);
        assert_eq!(menu.on_event(None), MenuState::Open);
        assert_eq!(menu.clicks(), 1);
    }

    #[test]
    fn test_repeated_count_does_not_toggle() {
        let mut menu = MenuToggle::new();
        assert_eq!(menu.on_event(Some(Click(1))), MenuState::Open);
        assert_eq!(menu.on_event(Some(Click(1))), MenuState::Open);
    }

    #[test]
    fn test_fresh_toggle_follows_reported_count() {
        let mut menu = MenuToggle::new();
        assert_eq!(menu.on_event(Some(Click(2))), MenuState::Closed);
        assert_eq!(menu.on_event(Some(Click(7))), MenuState::Open);
    }

    #[test]
    fn test_click_from_count() {
        assert_eq!(Click::from_count(None), None);
        assert_eq!(Click::from_count(Some(0)), None);
        assert_eq!(Click::from_count(Some(3)), Some(Click(3)));
    }

    #[test]
    fn test_toggled() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled().class_name(), "nav-menu");
        assert!(MenuState::Open.is_open());
    }
}
