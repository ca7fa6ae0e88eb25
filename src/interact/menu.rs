//! Mobile navigation menu toggle

const ACTIVE: &[&str] = &["active"];
const NAV_OPEN: &[&str] = &["nav-open"];
const NONE: &[&str] = &[];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Open/closed state of the mobile menu.
///
/// While open, `navToggle` and `nav` carry `active` and `body` carries
/// `nav-open`.
#[derive(Debug, Clone, Default)]
pub struct MobileNav {
    state: MenuState,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Click on the toggle control
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.state
    }

    /// Click on any nav link
    pub fn link_clicked(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Click anywhere on the page. Closes the menu when the click landed
    /// outside both the nav region and the toggle.
    pub fn document_clicked(&mut self, inside_nav: bool, inside_toggle: bool) {
        if !inside_nav && !inside_toggle && self.is_open() {
            self.state = MenuState::Closed;
        }
    }

    /// Class flags for (`navToggle`, `nav`, `body`)
    pub fn classes(&self) -> (&'static [&'static str], &'static [&'static str], &'static [&'static str]) {
        match self.state {
            MenuState::Open => (ACTIVE, ACTIVE, NAV_OPEN),
            MenuState::Closed => (NONE, NONE, NONE),
        }
    }
}
