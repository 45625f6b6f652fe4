//! Fluent bundles for `lubezki-ui`, embedded at compile time from
//! `i18n/<locale>/lubezki-ui.ftl`. `en-US` is the fallback and the reference
//! key set; `i18n.toml` names the same domain so `fl!` checks keys against it.
//!
//! Call [`init`] once at startup, then look strings up with `t!`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message in the shared loader, e.g. `t!("gallery-tile-alt", position = 3)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match `domain` in `i18n.toml`.
const DOMAIN: &str = "lubezki-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparsable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn all_shipped_languages_are_embedded() {
        let langs = available_languages();
        for expected in ["en-US", "es-ES", "fr-FR"] {
            assert!(langs.iter().any(|l| l == expected), "missing {expected}");
        }
    }

    #[test]
    fn empty_items_message_resolves() {
        init();
        set_language("en-US").unwrap();
        let s = fl!(&*LOADER, "panel-items-empty");
        assert_eq!(s, "No items detected");
    }

    #[test]
    fn manifest_domain_names_the_embedded_bundles() {
        let manifest = include_str!("../i18n.toml");
        let expected = format!("domain = \"{DOMAIN}\"");
        assert!(
            manifest.lines().any(|line| line.trim() == expected),
            "i18n.toml must declare `{expected}`"
        );
        for lang in available_languages() {
            let path = format!("{lang}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing bundle {path}");
        }
    }

    #[test]
    fn unknown_language_keeps_current_strings() {
        init();
        let before = fl!(&*LOADER, "app-title");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "app-title");
        assert_eq!(before, after);
    }
}
