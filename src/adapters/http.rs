use crate::domain::model::{Comment, Post, PostId, User, UserId};
use crate::domain::ports::{ConfigProvider, DataGateway};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// 以 reqwest 實作的 JSONPlaceholder 客戶端
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_base_url())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {} {:?}", url, query);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        // 非 2xx 直接視為錯誤往上傳
        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[async_trait]
impl DataGateway for HttpGateway {
    async fn get_users(&self) -> Result<Vec<User>> {
        self.get_json("/users", &[]).await
    }

    async fn get_user(&self, user_id: UserId) -> Result<User> {
        self.get_json(&format!("/users/{}", user_id), &[]).await
    }

    async fn get_user_posts(&self, user_id: UserId) -> Result<Vec<Post>> {
        self.get_json("/posts", &[("userId", user_id.to_string())])
            .await
    }

    async fn get_post_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        self.get_json("/comments", &[("postId", post_id.to_string())])
            .await
    }
}
