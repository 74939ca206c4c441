//! Navigation chrome: page sections and the mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll targets on the home page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [Self::Home, Self::About, Self::Services, Self::Portfolio, Self::Contact];

    /// Element id of the section on the home page.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }
}

/// Header menu state provided as `RwSignal<NavState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
