//! Site configuration embedded in the page.
//!
//! index.html may carry `<script id="folio-config" type="application/json">`
//! with a partial [`FolioConfig`]; missing fields keep their defaults.

use folio_types::config::FolioConfig;

const CONFIG_ELEMENT_ID: &str = "folio-config";

pub fn load(document: &web_sys::Document) -> FolioConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        log::info!("No #{} element, using default config", CONFIG_ELEMENT_ID);
        return FolioConfig::default();
    };

    match FolioConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Config loaded, answers from {}", config.answer.endpoint);
            config
        }
        Err(e) => {
            log::warn!("Invalid #{}: {}. Using defaults.", CONFIG_ELEMENT_ID, e);
            FolioConfig::default()
        }
    }
}
