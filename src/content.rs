//! Static page content: links, token details and the keys the page renders

use crate::i18n::Language;

/// Token contract on Optimism
pub const CONTRACT_ADDRESS: &str = "0x03cc5feF38896537c10Fcb30A53A1B12be101da6";

/// Block explorer page for the token contract
pub const EXPLORER_URL: &str =
    "https://optimistic.etherscan.io/token/0x03cc5feF38896537c10Fcb30A53A1B12be101da6";

/// Social links shown under the action buttons, as (name, url)
pub const SOCIAL_LINKS: [(&str, &str); 2] = [
    ("x", "https://x.com/WowooHQ"),
    ("telegram", "https://t.me/wowooofficial"),
];

/// Share of the viewport height the content panel may occupy
pub const CONTENT_VIEWPORT_SHARE: f64 = 0.8;

/// Languages offered in the switcher dropdown, with their flags.
/// Korean and Chinese are supported but not offered yet.
pub const SWITCHER_LANGUAGES: [(Language, &str); 2] =
    [(Language::En, "🇺🇸"), (Language::Ja, "🇯🇵")];

/// Every key the page looks up; each locale document must provide them
pub const REQUIRED_KEYS: &[&str] = &[
    "scrollPrompt",
    "tagline",
    "altText.logo",
    "altText.wowbitLogo",
    "tokenInfo.title",
    "tokenInfo.network",
    "tokenInfo.copyButton",
    "tokenInfo.fields.tokenName",
    "tokenInfo.fields.symbol",
    "tokenInfo.fields.totalSupply",
    "tokenInfo.fields.decimal",
    "tokenInfo.fields.contractAddress",
    "tokenInfo.values.tokenName",
    "tokenInfo.values.symbol",
    "tokenInfo.values.totalSupply",
    "tokenInfo.values.decimal",
    "tokenInfo.values.contractAddress",
    "actions.viewOnOptimismScan",
    "actions.whitepaper",
];

/// Whitepaper variant for the display language
pub fn whitepaper_url(language: Language) -> &'static str {
    match language {
        Language::Ja => "/WOWOO_JP.pdf",
        _ => "/WOWOO_EN.pdf",
    }
}

/// Flag shown on the switcher button; unlisted languages have none
pub fn switcher_flag(language: Language) -> Option<&'static str> {
    SWITCHER_LANGUAGES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, flag)| *flag)
}

/// Scale factor that fits the content panel into the viewport
pub fn content_scale(viewport_height: f64, content_height: f64) -> f64 {
    if content_height <= 0.0 {
        return 1.0;
    }
    (viewport_height * CONTENT_VIEWPORT_SHARE / content_height).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationTable;

    const LOCALES: [(Language, &str); 4] = [
        (Language::En, include_str!("../locales/en.json")),
        (Language::Ko, include_str!("../locales/ko.json")),
        (Language::Zh, include_str!("../locales/zh.json")),
        (Language::Ja, include_str!("../locales/ja.json")),
    ];

    #[test]
    fn test_locales_provide_required_keys() {
        for (lang, json) in LOCALES {
            let table = TranslationTable::from_json(json)
                .unwrap_or_else(|e| panic!("{} locale does not parse: {}", lang, e));
            assert!(
                table.missing_keys(REQUIRED_KEYS).is_empty(),
                "{} locale is missing {:?}",
                lang,
                table.missing_keys(REQUIRED_KEYS)
            );
        }
    }

    #[test]
    fn test_locales_agree_on_contract_address() {
        for (lang, json) in LOCALES {
            let table = TranslationTable::from_json(json).unwrap();
            assert_eq!(
                table.lookup("tokenInfo.values.contractAddress"),
                CONTRACT_ADDRESS,
                "{} locale",
                lang
            );
        }
    }

    #[test]
    fn test_explorer_url_points_at_contract() {
        assert!(EXPLORER_URL.ends_with(CONTRACT_ADDRESS));
    }

    #[test]
    fn test_whitepaper_by_language() {
        assert_eq!(whitepaper_url(Language::Ja), "/WOWOO_JP.pdf");
        assert_eq!(whitepaper_url(Language::En), "/WOWOO_EN.pdf");
        assert_eq!(whitepaper_url(Language::Ko), "/WOWOO_EN.pdf");
        assert_eq!(whitepaper_url(Language::Zh), "/WOWOO_EN.pdf");
    }

    #[test]
    fn test_content_scale() {
        assert_eq!(content_scale(1000.0, 400.0), 1.0);
        assert!((content_scale(1000.0, 1000.0) - 0.8).abs() < 1e-9);
        assert!((content_scale(500.0, 800.0) - 0.5).abs() < 1e-9);
        assert_eq!(content_scale(800.0, 0.0), 1.0);
    }

    #[test]
    fn test_switcher_flags() {
        assert_eq!(switcher_flag(Language::Ja), Some("🇯🇵"));
        assert_eq!(switcher_flag(Language::Ko), None);
    }
}
