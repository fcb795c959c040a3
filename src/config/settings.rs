use crate::utils::enums::convert_enum;
use crate::utils::error::{Result, UtilsError};
use crate::utils::logger::Verbosity;
use crate::utils::resources::BUILTIN_NAMESPACE;
use crate::utils::text::{read_file_as_text, resolve_encoding};
use crate::utils::validation::{validate_namespace, Validate};
use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwitcherConfig {
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// `${VAR}` placeholders left in place because `VAR` was not set.
    #[serde(skip)]
    pub unresolved_env_vars: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    pub encoding: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    pub json: Option<bool>,
}

/// Log level as written in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

crate::named_variants!(LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
});

impl SwitcherConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = read_file_as_text(path, None)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let (processed_content, unresolved) = Self::substitute_env_vars(content)?;

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| UtilsError::Config {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.unresolved_env_vars = unresolved;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${ENCODING})
    /// 回傳替換後的內容與未設定的變數名稱
    fn substitute_env_vars(content: &str) -> Result<(String, Vec<String>)> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UtilsError::Config {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let mut unresolved = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                if !unresolved.iter().any(|name| name == var_name) {
                    unresolved.push(var_name.to_string());
                }
                format!("${{{}}}", var_name)
            })
        });

        Ok((result.to_string(), unresolved))
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        self.check_placeholders("resources.namespace", self.resources.namespace.as_deref())?;
        self.check_placeholders("files.encoding", self.files.encoding.as_deref())?;

        if let Some(namespace) = &self.resources.namespace {
            validate_namespace("resources.namespace", namespace).map_err(|e| {
                UtilsError::Config {
                    field: "resources.namespace".to_string(),
                    message: e.to_string(),
                }
            })?;
        }

        self.encoding()?;
        Ok(())
    }

    /// Rejects a value that still holds a `${VAR}` placeholder for an unset variable.
    fn check_placeholders(&self, field: &str, value: Option<&str>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };

        match self
            .unresolved_env_vars
            .iter()
            .find(|name| value.contains(&format!("${{{}}}", name)))
        {
            Some(name) => Err(UtilsError::Config {
                field: field.to_string(),
                message: format!("environment variable {} is not set", name),
            }),
            None => Ok(()),
        }
    }

    /// 取得資源命名空間
    pub fn namespace(&self) -> &str {
        self.resources
            .namespace
            .as_deref()
            .unwrap_or(BUILTIN_NAMESPACE)
    }

    /// 取得檔案編碼, 預設 UTF-8
    pub fn encoding(&self) -> Result<&'static Encoding> {
        match &self.files.encoding {
            Some(label) => resolve_encoding(label).map_err(|e| UtilsError::Config {
                field: "files.encoding".to_string(),
                message: e.to_string(),
            }),
            None => Ok(UTF_8),
        }
    }

    pub fn verbosity(&self) -> Result<Verbosity> {
        convert_enum(self.logging.level.unwrap_or(LogLevel::Info))
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl Validate for SwitcherConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
