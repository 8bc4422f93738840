//! Page selection and the mobile menu.

use std::fmt;

use tracing::debug;

/// One of the five pages. There is no history and no deep-linking beyond the slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Experience,
        Page::Projects,
        Page::Contact,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Experience => "experience",
            Page::Projects => "projects",
            Page::Contact => "contact",
        }
    }

    /// Capitalised slug, as shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Experience => "Experience",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }

    /// Unknown slugs fall back to [`Page::Home`].
    pub fn from_slug(slug: &str) -> Page {
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == slug)
            .unwrap_or_default()
    }

    /// File name used by the static export.
    pub fn file_name(self) -> String {
        format!("{}.html", self.slug())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Current page plus the mobile menu flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    current: Page,
    menu_open: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Switches page and closes the mobile menu.
    pub fn navigate(&mut self, page: Page) {
        debug!(from = %self.current, to = %page, "navigate");
        self.current = page;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
