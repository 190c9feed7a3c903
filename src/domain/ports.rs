use crate::domain::model::{Comment, Post, PostId, User, UserId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 遠端資料來源，每個方法對應一次 GET
#[async_trait]
pub trait DataGateway: Send + Sync {
    async fn get_users(&self) -> Result<Vec<User>>;
    async fn get_user(&self, user_id: UserId) -> Result<User>;
    async fn get_user_posts(&self, user_id: UserId) -> Result<Vec<Post>>;
    async fn get_post_comments(&self, post_id: PostId) -> Result<Vec<Comment>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn menu_id(&self) -> &str;
    fn default_user_id(&self) -> UserId;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
