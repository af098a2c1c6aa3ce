//! Route table and navigation helpers for the dashboard shell.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Public sign-in route.
pub const LOGIN_ROUTE: &str = "/login";
/// Landing route after a successful login.
pub const LANDING_ROUTE: &str = "/";

/// Business sections reachable from the sidebar. All but the dashboard are
/// placeholders for now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Products,
    Orders,
    Shipping,
    Customers,
    Reports,
    Settings,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Products,
        Section::Orders,
        Section::Shipping,
        Section::Customers,
        Section::Reports,
        Section::Settings,
    ];

    /// Absolute route path.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Products => "/products",
            Self::Orders => "/orders",
            Self::Shipping => "/shipping",
            Self::Customers => "/customers",
            Self::Reports => "/reports",
            Self::Settings => "/settings",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Shipping => "Shipping",
            Self::Customers => "Customers",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    /// Page name used in placeholder copy.
    #[must_use]
    pub fn page_title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Produk",
            Self::Orders => "Pesanan",
            Self::Shipping => "Pengiriman",
            Self::Customers => "Pelanggan",
            Self::Reports => "Laporan",
            Self::Settings => "Pengaturan",
        }
    }

    /// Short glyph for the sidebar icon slot.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "⌂",
            Self::Products => "▣",
            Self::Orders => "🛒",
            Self::Shipping => "🚚",
            Self::Customers => "👥",
            Self::Reports => "📊",
            Self::Settings => "⚙",
        }
    }

    /// Section whose route matches `path` exactly, ignoring a trailing `/`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|section| section.path() == normalized)
    }
}

/// Whether a forced logout should navigate away from `current_path`.
#[must_use]
pub fn needs_login_redirect(current_path: &str) -> bool {
    current_path != LOGIN_ROUTE
}

/// Hard-navigate the browser to the login route, unless it is already there.
///
/// Used outside the router (HTTP wrapper), so this reloads the app rather
/// than pushing history.
pub fn hard_redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let current = location.pathname().unwrap_or_default();
        if needs_login_redirect(&current) {
            let _ = location.set_href(LOGIN_ROUTE);
        }
    }
}
