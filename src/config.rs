//! Runtime Configuration
//!
//! The host page may embed a JSON document in
//! `<script id="erp-config" type="application/json">`; its keys override the
//! defaults (base URL, page size, log level, log capacity).
//! `ERP_API_BASE_URL` at build time overrides the base URL. Without either,
//! the backend is assumed at the page origin + `/api`.

use erp_core::{ApiConfig, DomainError, DomainResult};

const API_PATH: &str = "/api";
const CONFIG_ELEMENT_ID: &str = "erp-config";

pub fn load() -> ApiConfig {
    let inline = inline_config();
    let (config, rejected) = resolve(inline.as_deref(), option_env!("ERP_API_BASE_URL"), origin());
    // The logger is not up yet
    if let Some(err) = rejected {
        web_sys::console::warn_1(&format!("[CONFIG] Ignoring #{}: {}", CONFIG_ELEMENT_ID, err).into());
    }
    config
}

/// Combine the inline document, the build-time URL and the page origin.
/// A rejected inline document falls back to the defaults and is returned
/// alongside so the caller can report it.
fn resolve(
    inline: Option<&str>,
    env_url: Option<&str>,
    origin: Option<String>,
) -> (ApiConfig, Option<DomainError>) {
    let parsed: Option<DomainResult<ApiConfig>> =
        inline.filter(|raw| !raw.trim().is_empty()).map(ApiConfig::from_json);
    let (config, from_page, rejected) = match parsed {
        Some(Ok(config)) => (config, true, None),
        Some(Err(err)) => (ApiConfig::default(), false, Some(err)),
        None => (ApiConfig::default(), false, None),
    };

    let config = match env_url.map(str::trim) {
        Some(url) if !url.is_empty() => config.with_base_url(url),
        _ if from_page => config,
        _ => match origin {
            Some(origin) => config.with_base_url(format!("{}{}", origin.trim_end_matches('/'), API_PATH)),
            None => config,
        },
    };
    (config, rejected)
}

fn inline_config() -> Option<String> {
    web_sys::window()?.document()?.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
