use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Page element not found: {selector}")]
    DomTargetError { selector: String },

    #[error("Render error: {message}")]
    ProcessingError { message: String },

    #[error("Unrecognized command '{input}': {reason}")]
    CommandError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Page,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ViewerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ViewerError::ApiError(_) => ErrorCategory::Network,
            ViewerError::ProcessingError { .. } => ErrorCategory::Data,
            ViewerError::ConfigError { .. }
            | ViewerError::ConfigValidationError { .. }
            | ViewerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ViewerError::DomTargetError { .. } => ErrorCategory::Page,
            ViewerError::CommandError { .. } => ErrorCategory::Input,
            ViewerError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Page => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "檢查網路連線與 --api-base-url 是否可以存取",
            ErrorCategory::Data => "確認 API 回傳的 JSON 格式符合 users/posts/comments 結構",
            ErrorCategory::Configuration => "檢查命令列參數或 TOML 設定檔內容",
            ErrorCategory::Page => "確認頁面包含 select#selectMenu 與 main 容器",
            ErrorCategory::Input => "可用指令：select <id>、toggle <post id>、show、quit",
            ErrorCategory::System => "檢查輸出路徑是否存在且可寫入",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ViewerError::ApiError(e) if e.is_status() => match e.status() {
                Some(status) => format!("Remote API answered with status {}", status),
                None => "Remote API answered with an error status".to_string(),
            },
            ViewerError::ApiError(e) if e.is_decode() => {
                "Remote API returned data that could not be parsed".to_string()
            }
            ViewerError::ApiError(_) => "Could not reach the remote API".to_string(),
            ViewerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
