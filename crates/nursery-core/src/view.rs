//! View Selectors
//!
//! Home page sections and top-level pages.

/// Section shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Catalog,
    About,
    Delivery,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Catalog, Section::About, Section::Delivery, Section::Contacts];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Catalog => "Catalog",
            Section::About => "About",
            Section::Delivery => "Delivery",
            Section::Contacts => "Contacts",
        }
    }
}

/// Routed pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    /// Requires an admin session
    Admin,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Admin => "/admin",
        }
    }
}
