//! Site navigation table and route helpers.
//!
//! Requires a browser environment for `scroll_to_top`; SSR paths no-op.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One entry of the primary navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "About Us", href: "/about" },
    NavLink { label: "Volunteer", href: "/volunteer" },
];

pub const VOLUNTEER_HREF: &str = "/volunteer";

/// Whether `href` is the current page.
///
/// Exact match, except a single trailing slash on `pathname` is tolerated for
/// non-root routes.
pub fn is_active(href: &str, pathname: &str) -> bool {
    if pathname == href {
        return true;
    }
    href != "/" && pathname.strip_suffix('/') == Some(href)
}

/// CSS class for a desktop navbar link.
pub fn desktop_link_class(active: bool) -> &'static str {
    if active { "navbar__link navbar__link--active" } else { "navbar__link" }
}

/// CSS class for a mobile menu link.
pub fn mobile_link_class(active: bool) -> &'static str {
    if active { "navbar__mobile-link navbar__mobile-link--active" } else { "navbar__mobile-link" }
}

/// Scroll the window to the top-left corner.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
