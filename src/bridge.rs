//! Glue between the panel and the hosting browser page: configuration the
//! page hands us, the API address and the blocking alert/confirm dialogs.

use burn2cool_panel_core::{HttpTransport, PanelConfig, TransportError};
use leptos::logging::warn;
use wasm_bindgen::JsValue;

/// Global the hosting page may define to override [`PanelConfig`] defaults.
const CONFIG_GLOBAL: &str = "__BURN2COOL_PANEL__";

pub fn load_config() -> PanelConfig {
    let Some(window) = web_sys::window() else {
        return PanelConfig::default();
    };

    match js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => {
            serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
                warn!("Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                PanelConfig::default()
            })
        }
        _ => PanelConfig::default(),
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn build_transport(config: &PanelConfig) -> Result<HttpTransport, TransportError> {
    let api_root = config.resolve_api_root(&page_origin());
    HttpTransport::new(&api_root, config.request_timeout())
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Native yes/no dialog; a missing window or a dialog error counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
