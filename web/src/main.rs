use api::ApiConfig;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::state::use_app_root;
use ui::upload::UploadPanel;
use ui::views::{error_page, Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; AppNavbar updates it on selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    // Client, gallery listing, panel and upload state sit above the keyed
    // router so a language switch does not refetch or reset them.
    use_app_root(ApiConfig::from_env);

    register_nav(NavBuilder { home: nav_home });

    rsx! {
        document::Title { "Lubezki" }
        document::Style { "{ui::THEME_CSS}" }

        // Keyed on the language so the routed subtree remounts with fresh strings.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout around the shared title bar and upload panel, which allows us to
/// use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar {}
        UploadPanel {}
        ErrorBoundary {
            handle_error: error_page,
            Outlet::<Route> {}
        }
    }
}
