use crate::dom::Selector;
use crate::domain::model::{Post, PostId, User, UserId};
use crate::domain::ports::DataGateway;
use crate::page::document::{Listener, Page, ToggleOutcome};
use crate::page::events::{ChangeEvent, ClickEvent};
use crate::render::elements::make_option_elements;
use crate::render::posts::{FetchStrategy, PostRenderer};
use crate::utils::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, MutexGuard};

pub const FALLBACK_USER_ID: UserId = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub generation: u64,
    pub article_count: usize,
    /// false 代表已被較新的選擇取代，結果被丟棄
    pub applied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuChangeOutcome {
    pub user_id: UserId,
    pub post_count: usize,
    pub refresh: Option<RefreshOutcome>,
}

/// 頁面控制器：選單、文章刷新、留言切換
///
/// 頁面狀態放在 `Mutex` 裡，網路請求期間不持有鎖。每次選單變更
/// 取得一個新的 generation，只有最新的 generation 能寫入 main 與
/// 解除選單的 disabled。
pub struct PageController<G: DataGateway> {
    gateway: G,
    page: Mutex<Page>,
    generation: AtomicU64,
    strategy: FetchStrategy,
    default_user_id: UserId,
}

impl<G: DataGateway> PageController<G> {
    pub fn new(gateway: G, page: Page) -> Self {
        Self {
            gateway,
            page: Mutex::new(page),
            generation: AtomicU64::new(0),
            strategy: FetchStrategy::Sequential,
            default_user_id: FALLBACK_USER_ID,
        }
    }

    pub fn with_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_default_user_id(mut self, user_id: UserId) -> Self {
        self.default_user_id = user_id;
        self
    }

    pub async fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().await
    }

    pub async fn html(&self) -> String {
        self.page.lock().await.to_html()
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// 頁面載入：抓使用者、填選單、註冊一次監聽器
    pub async fn bootstrap(&self) -> Result<usize> {
        tracing::info!("🚀 Bootstrapping page");
        let users = self.gateway.get_users().await?;
        let appended = self
            .populate_user_menu(Some(users.as_slice()))
            .await?
            .unwrap_or(0);

        let mut page = self.page.lock().await;
        for listener in [Listener::MenuChange, Listener::MainClick] {
            if !page.add_listener(listener) {
                tracing::debug!("Listener {:?} already registered", listener);
            }
        }

        tracing::info!("✅ Menu populated with {} users", appended);
        Ok(appended)
    }

    pub async fn populate_user_menu(&self, users: Option<&[User]>) -> Result<Option<usize>> {
        let Some(options) = make_option_elements(users) else {
            return Ok(None);
        };
        let mut page = self.page.lock().await;
        Ok(Some(page.append_to_menu(options)?))
    }

    /// 選單變更。失敗時選單維持 disabled
    pub async fn on_menu_change(
        &self,
        event: Option<&ChangeEvent>,
    ) -> Result<Option<MenuChangeOutcome>> {
        let Some(event) = event else {
            return Ok(None);
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.page.lock().await.set_menu_disabled(true)?;

        let user_id = event
            .value
            .as_deref()
            .and_then(|value| value.trim().parse::<UserId>().ok())
            .unwrap_or(self.default_user_id);
        tracing::info!("👤 Loading posts for user {} (request #{})", user_id, generation);

        let posts = self.gateway.get_user_posts(user_id).await?;
        let refresh = self
            .refresh_posts_at(Some(posts.as_slice()), generation)
            .await?;

        if self.is_current(generation) {
            self.page.lock().await.set_menu_disabled(false)?;
        }

        Ok(Some(MenuChangeOutcome {
            user_id,
            post_count: posts.len(),
            refresh,
        }))
    }

    /// 直接刷新也取得新的 generation；套用後解除選單的 disabled，
    /// 被它取代的選單變更不會再碰選單
    pub async fn refresh_posts(&self, posts: Option<&[Post]>) -> Result<Option<RefreshOutcome>> {
        if posts.is_none() {
            return Ok(None);
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let refresh = self.refresh_posts_at(posts, generation).await?;

        if matches!(&refresh, Some(outcome) if outcome.applied) {
            self.page.lock().await.set_menu_disabled(false)?;
        }
        Ok(refresh)
    }

    async fn refresh_posts_at(
        &self,
        posts: Option<&[Post]>,
        generation: u64,
    ) -> Result<Option<RefreshOutcome>> {
        let Some(posts) = posts else {
            return Ok(None);
        };

        {
            let mut page = self.page.lock().await;
            if !self.is_current(generation) {
                tracing::warn!("⏭️ Request #{} superseded before render, skipping", generation);
                return Ok(Some(RefreshOutcome {
                    generation,
                    article_count: 0,
                    applied: false,
                }));
            }
            page.delete_child_elements(&Selector::tag("main"))?;
        }

        let renderer = PostRenderer::with_strategy(&self.gateway, self.strategy);
        let fragment = renderer.display_posts(Some(posts)).await?;
        let article_count = fragment.len();

        let mut page = self.page.lock().await;
        if !self.is_current(generation) {
            tracing::warn!(
                "⏭️ Discarding stale render of {} posts (request #{})",
                article_count,
                generation
            );
            return Ok(Some(RefreshOutcome {
                generation,
                article_count,
                applied: false,
            }));
        }
        page.append_to_main(fragment)?;
        tracing::debug!("Rendered {} articles", article_count);

        Ok(Some(RefreshOutcome {
            generation,
            article_count,
            applied: true,
        }))
    }

    /// 只有 event 與 post_id 都沒有時才略過
    pub async fn toggle_comments_for_post(
        &self,
        event: Option<&ClickEvent>,
        post_id: Option<PostId>,
    ) -> Option<ToggleOutcome> {
        if event.is_none() && post_id.is_none() {
            return None;
        }
        let mut page = self.page.lock().await;
        let outcome = page.toggle_comments(post_id);
        tracing::debug!("Toggled comments for post {:?}: {:?}", post_id, outcome);
        Some(outcome)
    }

    /// 若 change 監聽器已註冊，轉給 `on_menu_change`
    pub async fn dispatch_change(&self, event: &ChangeEvent) -> Result<Option<MenuChangeOutcome>> {
        if !self.page.lock().await.has_listener(Listener::MenuChange) {
            return Ok(None);
        }
        self.on_menu_change(Some(event)).await
    }

    /// main 上的委派 click：只處理帶 data-post-id 的 button
    pub async fn dispatch_click(&self, event: &ClickEvent) -> Option<ToggleOutcome> {
        if !self.page.lock().await.has_listener(Listener::MainClick) {
            return None;
        }
        if event.target_tag != "button" {
            return None;
        }
        let post_id = event.post_id.as_deref()?.parse::<PostId>().ok()?;
        self.toggle_comments_for_post(Some(event), Some(post_id))
            .await
    }

    /// 模擬點擊 main 裡某篇文章的按鈕
    pub async fn click_post_button(&self, post_id: PostId) -> Option<ToggleOutcome> {
        let event = {
            let page = self.page.lock().await;
            ClickEvent::from_element(page.find_button(post_id)?)
        };
        self.dispatch_click(&event).await
    }

    fn is_current(&self, generation: u64) -> bool {
        self.current_generation() == generation
    }
}
