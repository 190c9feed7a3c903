use crate::adapters::http::DEFAULT_API_BASE_URL;
use crate::config::toml_config::TomlConfig;
use crate::domain::model::UserId;
use crate::domain::ports::ConfigProvider;
use crate::page::controller::FALLBACK_USER_ID;
use crate::page::document::DEFAULT_MENU_ID;
use crate::render::posts::FetchStrategy;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_url, Validate,
};

pub const MAX_FETCH_CONCURRENCY: usize = 32;

/// 合併後的設定：命令列 > TOML > 預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub menu_id: String,
    pub default_user_id: UserId,
    pub fetch_concurrency: usize,
    pub output_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            menu_id: DEFAULT_MENU_ID.to_string(),
            default_user_id: FALLBACK_USER_ID,
            fetch_concurrency: 1,
            output_path: None,
        }
    }
}

impl Settings {
    pub fn merge_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(base_url) = toml.api_base_url() {
            self.api_base_url = base_url.to_string();
        }
        if let Some(menu_id) = toml.menu_id() {
            self.menu_id = menu_id.to_string();
        }
        if let Some(user_id) = toml.default_user_id() {
            self.default_user_id = user_id;
        }
        if let Some(concurrency) = toml.fetch_concurrency() {
            self.fetch_concurrency = concurrency;
        }
        if let Some(path) = toml.output_path() {
            self.output_path = Some(path.to_string());
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn merge_cli(mut self, cli: &crate::config::CliConfig) -> Self {
        if let Some(base_url) = &cli.api_base_url {
            self.api_base_url = base_url.clone();
        }
        if let Some(menu_id) = &cli.menu_id {
            self.menu_id = menu_id.clone();
        }
        if let Some(user_id) = cli.default_user_id {
            self.default_user_id = user_id;
        }
        if let Some(concurrency) = cli.fetch_concurrency {
            self.fetch_concurrency = concurrency;
        }
        if let Some(path) = &cli.output {
            self.output_path = Some(path.clone());
        }
        self
    }

    /// 讀取 `--config` 指定的 TOML 再套用命令列參數
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &crate::config::CliConfig) -> Result<Self> {
        let mut settings = Settings::default();
        if let Some(path) = &cli.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            settings = settings.merge_toml(&toml);
        }
        Ok(settings.merge_cli(cli))
    }

    pub fn fetch_strategy(&self) -> FetchStrategy {
        FetchStrategy::from_concurrency(self.fetch_concurrency)
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn menu_id(&self) -> &str {
        &self.menu_id
    }

    fn default_user_id(&self) -> UserId {
        self.default_user_id
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_non_empty_string("menu_id", &self.menu_id)?;
        validate_positive_number("default_user_id", self.default_user_id, 1)?;
        validate_range(
            "fetch_concurrency",
            self.fetch_concurrency,
            0,
            MAX_FETCH_CONCURRENCY,
        )?;
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        Ok(())
    }
}
