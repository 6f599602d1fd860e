//! Locale documents over the Fetch API

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::LoadError;
use crate::i18n::{Language, TranslationSource, TranslationTable};
use crate::settings::SiteConfig;

/// Fetches `{locales_base}/{code}.json` from the page's origin
pub struct HttpSource {
    config: SiteConfig,
}

impl HttpSource {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

fn network_error(value: JsValue) -> LoadError {
    LoadError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

impl TranslationSource for HttpSource {
    async fn fetch(&self, language: Language) -> Result<TranslationTable, LoadError> {
        let url = self.config.locale_url(language);
        let window = web_sys::window().ok_or(LoadError::NoWindow)?;

        let response: Response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(network_error)?;

        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        let text = body
            .as_string()
            .ok_or_else(|| LoadError::Parse(format!("{} body is not text", url)))?;

        log::debug!("Fetched {} ({} bytes)", url, text.len());
        TranslationTable::from_json(&text)
    }
}
