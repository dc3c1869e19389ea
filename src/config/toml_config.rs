use crate::adapters::{InMemoryStorage, LocalStorage, StaticOrderService};
use crate::domain::model::StorageResult;
use crate::domain::ports::DataStorage;
use crate::utils::error::{KataError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KataConfig {
    pub order: OrderConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Fixed answers for `StaticOrderService`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    pub payment_method_valid: bool,
    pub items_in_stock: bool,
    pub shipping_address_valid: bool,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            payment_method_valid: true,
            items_in_stock: true,
            shipping_address_valid: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Memory,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub kind: StorageKind,
    pub output_path: String,
    pub file_name: String,
    /// Memory backend only: report `Failure` for every store. Rejected with `local`.
    pub fail: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            kind: StorageKind::Memory,
            output_path: "./output".to_string(),
            file_name: "stored_data.log".to_string(),
            fail: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl KataConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KataError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KataError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KataError::ConfigParse {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn build_order_service(&self) -> StaticOrderService {
        StaticOrderService::new(
            self.order.payment_method_valid,
            self.order.items_in_stock,
            self.order.shipping_address_valid,
        )
    }

    pub fn build_storage(&self) -> Box<dyn DataStorage> {
        match self.storage.kind {
            StorageKind::Memory => {
                let result = if self.storage.fail {
                    StorageResult::Failure
                } else {
                    StorageResult::Success
                };
                Box::new(InMemoryStorage::with_result(result))
            }
            StorageKind::Local => Box::new(LocalStorage::new(
                self.storage.output_path.clone(),
                self.storage.file_name.clone(),
            )),
        }
    }
}

impl Validate for KataConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("storage.output_path", &self.storage.output_path)?;
        validation::validate_file_name("storage.file_name", &self.storage.file_name)?;
        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;

        if self.storage.fail && self.storage.kind != StorageKind::Memory {
            return Err(KataError::InvalidConfigValue {
                field: "storage.fail".to_string(),
                value: "true".to_string(),
                reason: "Only the memory storage can be forced to fail".to_string(),
            });
        }
        Ok(())
    }
}
