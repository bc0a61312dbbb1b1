use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub bulk_upload: BulkUploadConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Prepend a UTF-8 BOM so spreadsheet apps detect the encoding
    pub include_bom: bool,
    pub mime_type: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_bom: false,
            mime_type: contracts::shared::csv::CSV_MIME_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BulkUploadConfig {
    /// Path (or absolute URL) receiving the parsed leads
    pub endpoint: String,
}

impl Default for BulkUploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/leads/bulk-upload".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// localStorage key holding the user list
    pub users_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_key: "crm-employees".to_string(),
        }
    }
}

/// localStorage key of an optional TOML override
pub const CONFIG_STORAGE_KEY: &str = "crm-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[export]
include_bom = false
mime_type = "text/csv;charset=utf-8;"

[bulk_upload]
endpoint = "/api/leads/bulk-upload"

[storage]
users_key = "crm-employees"
"#;

impl Config {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load configuration
///
/// Search order:
/// 1. TOML override stored under `crm-config` in localStorage
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    if let Some(contents) = stored {
        log::info!("Loading config from localStorage key {}", CONFIG_STORAGE_KEY);
        return Config::from_toml(&contents);
    }

    log::info!("Using default embedded configuration");
    Config::from_toml(DEFAULT_CONFIG)
}
