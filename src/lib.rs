pub mod adapters;
pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod page;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpGateway, storage::LocalStorage};
pub use app::{Command, PostViewer};
pub use config::settings::Settings;
pub use page::{Page, PageController};
pub use utils::error::{Result, ViewerError};
