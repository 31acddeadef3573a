use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Каталог со сборкой frontend (trunk dist)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

#[derive(Deserialize, Clone, Default)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub service_key: Option<String>,
    #[serde(default)]
    pub access: AccessLevel,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("anon_key", &self.anon_key.as_ref().map(|_| "***"))
            .field("service_key", &self.service_key.as_ref().map(|_| "***"))
            .field("access", &self.access)
            .finish()
    }
}

/// Уровень доступа к хранилищу. Определяется один раз при старте.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Публичный ключ, действуют политики хранилища
    #[default]
    Restricted,
    /// Сервисный ключ
    Elevated,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Restricted => "restricted",
            AccessLevel::Elevated => "elevated",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "restricted" => Some(AccessLevel::Restricted),
            "elevated" => Some(AccessLevel::Elevated),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required setting `{key}` is missing (set {env_var} or add it to config.toml)")]
    Missing {
        key: &'static str,
        env_var: &'static str,
    },
    #[error("elevated store access requested but STORE_SERVICE_KEY is not set")]
    ElevatedUnavailable,
    #[error("invalid value for {env_var}: {value:?}")]
    InvalidValue { env_var: &'static str, value: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Параметры подключения к хранилищу после проверки конфигурации.
#[derive(Clone)]
pub struct StoreSettings {
    pub url: String,
    pub access: AccessLevel,
    api_key: String,
}

impl StoreSettings {
    /// Ключ, соответствующий выбранному уровню доступа
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for StoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreSettings")
            .field("url", &self.url)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

/// Default configuration embedded in the binary
///
/// Адреса хранилища здесь нет: `STORE_URL` или `store.url` обязательны,
/// локальный SQLite задаётся явно (`STORE_URL=sqlite://...`).
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[store]
access = "restricted"
"#;

impl Config {
    /// Применить переменные окружения поверх файла.
    ///
    /// `lookup` позволяет подменить окружение в тестах.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("STORE_URL") {
            self.store.url = Some(url);
        }
        if let Some(key) = get("STORE_ANON_KEY") {
            self.store.anon_key = Some(key);
        }
        if let Some(key) = get("STORE_SERVICE_KEY") {
            self.store.service_key = Some(key);
        }
        if let Some(access) = get("STORE_ACCESS") {
            self.store.access =
                AccessLevel::parse(&access).ok_or(ConfigError::InvalidValue {
                    env_var: "STORE_ACCESS",
                    value: access,
                })?;
        }
        if let Some(port) = get("SERVER_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                env_var: "SERVER_PORT",
                value: port,
            })?;
        }
        Ok(self)
    }

    /// Проверить обязательные параметры хранилища и выбрать ключ.
    ///
    /// Отсутствие URL или публичного ключа фатально. Запрос `elevated` без
    /// сервисного ключа тоже фатален: тихого понижения до `restricted` нет.
    pub fn store_settings(&self) -> Result<StoreSettings, ConfigError> {
        let url = required(&self.store.url, "store.url", "STORE_URL")?;
        let anon_key = required(&self.store.anon_key, "store.anon_key", "STORE_ANON_KEY")?;

        let api_key = match self.store.access {
            AccessLevel::Restricted => anon_key,
            AccessLevel::Elevated => self
                .store
                .service_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or(ConfigError::ElevatedUnavailable)?,
        };

        Ok(StoreSettings {
            url,
            access: self.store.access,
            api_key,
        })
    }
}

fn required(
    value: &Option<String>,
    key: &'static str,
    env_var: &'static str,
) -> Result<String, ConfigError> {
    value
        .as_ref()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::Missing { key, env_var })
}

/// Load configuration: embedded defaults, then config.toml, then environment
///
/// config.toml is looked up next to the executable; when absent the
/// embedded default is used as the base.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(config_file_next_to_exe().as_deref(), |name| {
        std::env::var(name).ok()
    })
}

fn load_config_from<F>(path: Option<&Path>, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match path {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
            parse_with_defaults(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
    };

    base.apply_env(lookup)
}

fn config_file_next_to_exe() -> Option<std::path::PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if Path::new(&config_path).exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

/// Разбор config.toml. Пропущенные ключи `[server]` получают значения по
/// умолчанию, пропущенный `store.url` остаётся пустым.
fn parse_with_defaults(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}
