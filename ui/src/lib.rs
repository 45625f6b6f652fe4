//! Shared UI crate for Lubezki. Views, components and view-state live here; the
//! platform crates only add routing and window setup.

pub mod analysis;
pub mod core;
pub mod gallery;
pub mod i18n;
pub mod state;
pub mod upload;
pub mod views;

pub mod components {
    // Title bar with upload toggle and locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

pub use state::AppState;

/// Unified theme, inlined by every platform shell.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
