//! Dashboard shell state: active page and sidebar geometry.
//!
//! DESIGN
//! ======
//! The dashboard is a single route whose sub-pages are switched locally,
//! without touching the URL. Layout numbers live here so the header, side
//! menu, and content area agree on them.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Sidebar width when expanded, in px.
pub const SIDEBAR_EXPANDED_PX: u32 = 240;
/// Sidebar width when collapsed, in px.
pub const SIDEBAR_COLLAPSED_PX: u32 = 80;
/// Header top margin + header height + gap.
pub const CONTENT_TOP_PX: u32 = 16 + 72 + 8;

/// Sub-pages reachable from the side menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivePage {
    #[default]
    Home,
    Properties,
    Tenants,
    Billing,
    Payments,
    Expenses,
    Reports,
    Notifications,
    Settings,
    HistoryLogs,
    Profile,
}

impl ActivePage {
    /// Menu order.
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::Properties,
        Self::Tenants,
        Self::Billing,
        Self::Payments,
        Self::Expenses,
        Self::Reports,
        Self::Notifications,
        Self::Settings,
        Self::HistoryLogs,
        Self::Profile,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "dashboard",
            Self::Properties => "properties",
            Self::Tenants => "tenants",
            Self::Billing => "billing",
            Self::Payments => "payments",
            Self::Expenses => "expenses",
            Self::Reports => "reports",
            Self::Notifications => "notifications",
            Self::Settings => "settings",
            Self::HistoryLogs => "historylogs",
            Self::Profile => "profile",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Dashboard",
            Self::Properties => "Properties",
            Self::Tenants => "Tenants",
            Self::Billing => "Billing",
            Self::Payments => "Payments",
            Self::Expenses => "Expenses",
            Self::Reports => "Reports",
            Self::Notifications => "Notifications",
            Self::Settings => "Settings",
            Self::HistoryLogs => "History Logs",
            Self::Profile => "Profile",
        }
    }

    /// Menu glyph.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Properties => "🏢",
            Self::Tenants => "👥",
            Self::Billing => "🧾",
            Self::Payments => "💳",
            Self::Expenses => "💸",
            Self::Reports => "📊",
            Self::Notifications => "🔔",
            Self::Settings => "⚙️",
            Self::HistoryLogs => "🕘",
            Self::Profile => "👤",
        }
    }

    /// Parse a menu key; unknown keys land on the home page.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL.into_iter().find(|p| p.key() == key).unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active: ActivePage,
    pub sidebar_collapsed: bool,
}

impl DashboardState {
    #[must_use]
    pub fn sidebar_width(&self) -> u32 {
        if self.sidebar_collapsed { SIDEBAR_COLLAPSED_PX } else { SIDEBAR_EXPANDED_PX }
    }

    /// Inline style for the header and content area, which track the sidebar.
    #[must_use]
    pub fn content_style(&self) -> String {
        format!("margin-left: {}px; padding-top: {CONTENT_TOP_PX}px;", self.sidebar_width())
    }

    #[must_use]
    pub fn header_style(&self) -> String {
        format!("left: {}px;", self.sidebar_width())
    }
}
