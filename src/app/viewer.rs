use crate::adapters::http::HttpGateway;
use crate::app::commands::Command;
use crate::config::settings::Settings;
use crate::domain::model::PostId;
use crate::domain::ports::{ConfigProvider, DataGateway, Storage};
use crate::page::controller::{MenuChangeOutcome, PageController};
use crate::page::document::{Page, ToggleOutcome};
use crate::page::events::ChangeEvent;
use crate::utils::error::Result;

/// 執行一個指令後的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Selected(Option<MenuChangeOutcome>),
    Toggled(Option<ToggleOutcome>),
    Html(String),
    Quit,
}

/// 對外的操作入口：載入頁面、選使用者、切換留言、輸出 HTML
pub struct PostViewer<G: DataGateway> {
    controller: PageController<G>,
}

impl PostViewer<HttpGateway> {
    pub fn from_settings(settings: &Settings) -> Self {
        let gateway = HttpGateway::from_config(settings);
        let controller = PageController::new(gateway, Page::new(settings.menu_id()))
            .with_strategy(settings.fetch_strategy())
            .with_default_user_id(settings.default_user_id());
        Self::new(controller)
    }
}

impl<G: DataGateway> PostViewer<G> {
    pub fn new(controller: PageController<G>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &PageController<G> {
        &self.controller
    }

    pub async fn start(&self) -> Result<usize> {
        self.controller.bootstrap().await
    }

    pub async fn select_user(&self, value: Option<&str>) -> Result<Option<MenuChangeOutcome>> {
        let event = ChangeEvent {
            value: value.map(str::to_string),
        };
        self.controller.dispatch_change(&event).await
    }

    pub async fn toggle(&self, post_id: PostId) -> Option<ToggleOutcome> {
        let outcome = self.controller.click_post_button(post_id).await;
        if outcome.is_none() {
            tracing::warn!("No comments button for post {}", post_id);
        }
        outcome
    }

    pub async fn execute(&self, command: Command) -> Result<CommandOutcome> {
        tracing::debug!("Executing {:?}", command);
        match command {
            Command::Select(value) => Ok(CommandOutcome::Selected(
                self.select_user(value.as_deref()).await?,
            )),
            Command::Toggle(post_id) => Ok(CommandOutcome::Toggled(self.toggle(post_id).await)),
            Command::Show => Ok(CommandOutcome::Html(self.html().await)),
            Command::Quit => Ok(CommandOutcome::Quit),
        }
    }

    pub async fn html(&self) -> String {
        self.controller.html().await
    }

    pub async fn save<S: Storage>(&self, storage: &S, file_name: &str) -> Result<()> {
        let html = self.html().await;
        storage.write_file(file_name, html.as_bytes()).await
    }
}
