//! Editor configuration
//!
//! Defaults are embedded as JSON; the save endpoint can be overridden at
//! build time with `PARAM_EDITOR_SAVE_URL`.

use leptos::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub save_url: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
{
    "save_url": "https://httpbin.org/post"
}
"#;

/// Parse configuration and apply the build-time override, if any
pub fn parse_config(contents: &str, save_url_override: Option<&str>) -> Result<EditorConfig, String> {
    let mut config: EditorConfig =
        serde_json::from_str(contents).map_err(|e| format!("Invalid editor config: {}", e))?;

    if let Some(url) = save_url_override.filter(|u| !u.trim().is_empty()) {
        log::info!("save_url overridden at build time: {}", url);
        config.save_url = url.to_string();
    }

    if config.save_url.trim().is_empty() {
        return Err("save_url must not be empty".to_string());
    }

    Ok(config)
}

/// Load configuration, falling back to the embedded defaults on error
pub fn load_config() -> EditorConfig {
    match parse_config(DEFAULT_CONFIG, option_env!("PARAM_EDITOR_SAVE_URL")) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; using embedded defaults", e);
            default_config()
        }
    }
}

fn default_config() -> EditorConfig {
    EditorConfig {
        save_url: "https://httpbin.org/post".to_string(),
    }
}

/// Config from context, or the defaults when no provider is mounted
pub fn use_editor_config() -> EditorConfig {
    use_context::<EditorConfig>().unwrap_or_else(load_config)
}
