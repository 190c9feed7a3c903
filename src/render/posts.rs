use crate::dom::{Element, Fragment};
use crate::domain::model::{Post, PostId};
use crate::domain::ports::DataGateway;
use crate::render::comments::build_comments_fragment;
use crate::render::elements::{make_paragraph, make_text_element};
use crate::utils::error::Result;
use futures::stream::{self, StreamExt, TryStreamExt};

pub const SHOW_COMMENTS: &str = "Show Comments";
pub const HIDE_COMMENTS: &str = "Hide Comments";
pub const HIDDEN_CLASS: &str = "hide";
pub const POST_ID_KEY: &str = "post-id";
pub const DEFAULT_TEXT: &str = "Select an Employee to display their posts.";

/// 每篇文章的作者/留言要怎麼抓
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStrategy {
    /// 一次一篇，照陣列順序
    #[default]
    Sequential,
    /// 最多同時 `limit` 篇，結果仍依原順序組回
    Concurrent { limit: usize },
}

impl FetchStrategy {
    /// 0 或 1 都代表循序
    pub fn from_concurrency(limit: usize) -> Self {
        if limit <= 1 {
            FetchStrategy::Sequential
        } else {
            FetchStrategy::Concurrent { limit }
        }
    }
}

pub struct PostRenderer<'g, G: DataGateway + ?Sized> {
    gateway: &'g G,
    strategy: FetchStrategy,
}

impl<'g, G: DataGateway + ?Sized> PostRenderer<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self::with_strategy(gateway, FetchStrategy::Sequential)
    }

    pub fn with_strategy(gateway: &'g G, strategy: FetchStrategy) -> Self {
        Self { gateway, strategy }
    }

    /// 留言區塊：`section.comments.hide[data-post-id]`，內含留言 fragment
    pub async fn display_comments(&self, post_id: PostId) -> Result<Element> {
        let mut section = Element::new("section");
        section.set_data(POST_ID_KEY, post_id);
        section.add_class("comments");
        section.add_class(HIDDEN_CLASS);

        let comments = self.gateway.get_post_comments(post_id).await?;
        tracing::debug!("Post {} has {} comments", post_id, comments.len());
        if let Some(fragment) = build_comments_fragment(Some(comments.as_slice())) {
            section.append_fragment(fragment);
        }
        Ok(section)
    }

    pub async fn create_post_article(&self, post: &Post) -> Result<Element> {
        let mut article = Element::new("article");
        article.append(make_text_element("h2", post.title.clone(), None));
        article.append(make_paragraph(post.body.clone()));
        article.append(make_paragraph(format!("Post ID: {}", post.id)));

        let author = self.gateway.get_user(post.user_id).await?;
        article.append(make_paragraph(format!(
            "Author: {} with {}",
            author.name, author.company.name
        )));
        article.append(make_paragraph(author.company.catch_phrase.clone()));

        let mut button = make_text_element("button", SHOW_COMMENTS, None);
        button.set_data(POST_ID_KEY, post.id);
        article.append(button);

        let section = self.display_comments(post.id).await?;
        article.append(section);
        Ok(article)
    }

    pub async fn create_posts(&self, posts: Option<&[Post]>) -> Result<Option<Fragment>> {
        let Some(posts) = posts else {
            return Ok(None);
        };

        tracing::debug!(
            "Rendering {} posts ({:?})",
            posts.len(),
            self.strategy
        );

        let articles: Vec<Element> = match self.strategy {
            FetchStrategy::Sequential => {
                let mut articles = Vec::with_capacity(posts.len());
                for post in posts {
                    articles.push(self.create_post_article(post).await?);
                }
                articles
            }
            FetchStrategy::Concurrent { limit } => {
                // buffered 保持輸入順序
                stream::iter(posts)
                    .map(|post| self.create_post_article(post))
                    .buffered(limit.max(1))
                    .try_collect::<Vec<_>>()
                    .await?
            }
        };

        Ok(Some(articles.into_iter().collect()))
    }

    /// 沒有文章時顯示預設提示文字
    pub async fn display_posts(&self, posts: Option<&[Post]>) -> Result<Fragment> {
        match self.create_posts(posts).await? {
            Some(fragment) => Ok(fragment),
            None => Ok(Fragment::from(make_text_element(
                "p",
                DEFAULT_TEXT,
                Some("default-text"),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Comment, Company, User, UserId};
    use crate::utils::error::ViewerError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 記錄呼叫順序的假 gateway
    struct RecordingGateway {
        calls: Mutex<Vec<String>>,
        fail_user: Option<UserId>,
    }

    impl RecordingGateway {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_user: None,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DataGateway for RecordingGateway {
        async fn get_users(&self) -> Result<Vec<User>> {
            Ok(vec![])
        }

        async fn get_user(&self, user_id: UserId) -> Result<User> {
            self.calls.lock().unwrap().push(format!("user:{}", user_id));
            if self.fail_user == Some(user_id) {
                return Err(ViewerError::ProcessingError {
                    message: "boom".to_string(),
                });
            }
            Ok(User {
                id: user_id,
                name: format!("User {}", user_id),
                username: None,
                email: None,
                company: Company {
                    name: "Acme".to_string(),
                    catch_phrase: "We build things".to_string(),
                },
            })
        }

        async fn get_user_posts(&self, _user_id: UserId) -> Result<Vec<Post>> {
            Ok(vec![])
        }

        async fn get_post_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
            self.calls.lock().unwrap().push(format!("comments:{}", post_id));
            Ok(vec![Comment {
                post_id,
                id: Some(post_id * 10),
                name: format!("c{}", post_id),
                email: "x@y.z".to_string(),
                body: "nice".to_string(),
            }])
        }
    }

    fn posts(ids: &[PostId]) -> Vec<Post> {
        ids.iter()
            .map(|&id| Post {
                id,
                user_id: 1,
                title: format!("Title {}", id),
                body: format!("Body {}", id),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_article_layout() {
        let gateway = RecordingGateway::new();
        let renderer = PostRenderer::new(&gateway);
        let article = renderer.create_post_article(&posts(&[5])[0]).await.unwrap();

        let children: Vec<&Element> = article.child_elements().collect();
        let tags: Vec<&str> = children.iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["h2", "p", "p", "p", "p", "button", "section"]);
        assert_eq!(children[2].text_content(), "Post ID: 5");
        assert_eq!(children[3].text_content(), "Author: User 1 with Acme");
        assert_eq!(children[4].text_content(), "We build things");
        assert_eq!(children[5].text_content(), SHOW_COMMENTS);
        assert_eq!(children[5].data(POST_ID_KEY), Some("5"));
        assert_eq!(children[6].data(POST_ID_KEY), Some("5"));
        assert!(children[6].has_class("comments"));
        assert!(children[6].has_class(HIDDEN_CLASS));
        assert_eq!(children[6].child_elements().count(), 1);
    }

    #[tokio::test]
    async fn test_sequential_fetch_order() {
        let gateway = RecordingGateway::new();
        let renderer = PostRenderer::new(&gateway);
        let fragment = renderer
            .create_posts(Some(posts(&[1, 2]).as_slice()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(fragment.len(), 2);
        assert_eq!(
            gateway.calls(),
            vec!["user:1", "comments:1", "user:1", "comments:2"]
        );
    }

    #[tokio::test]
    async fn test_concurrent_strategy_keeps_article_order() {
        let gateway = RecordingGateway::new();
        let renderer =
            PostRenderer::with_strategy(&gateway, FetchStrategy::from_concurrency(3));
        let fragment = renderer
            .create_posts(Some(posts(&[4, 8, 15, 16]).as_slice()))
            .await
            .unwrap()
            .unwrap();

        let ids: Vec<&str> = fragment
            .elements()
            .map(|article| {
                article
                    .child_elements()
                    .find(|el| el.tag() == "button")
                    .and_then(|button| button.data(POST_ID_KEY))
                    .unwrap()
            })
            .collect();
        assert_eq!(ids, vec!["4", "8", "15", "16"]);
    }

    #[tokio::test]
    async fn test_absent_posts_and_default_text() {
        let gateway = RecordingGateway::new();
        let renderer = PostRenderer::new(&gateway);

        assert!(renderer.create_posts(None).await.unwrap().is_none());

        let placeholder = renderer.display_posts(None).await.unwrap();
        let p = placeholder.elements().next().unwrap();
        assert_eq!(p.text_content(), DEFAULT_TEXT);
        assert!(p.has_class("default-text"));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_author_failure_propagates() {
        let mut gateway = RecordingGateway::new();
        gateway.fail_user = Some(1);
        let renderer = PostRenderer::new(&gateway);

        let result = renderer.create_posts(Some(posts(&[1, 2]).as_slice())).await;
        assert!(result.is_err());
        assert_eq!(gateway.calls(), vec!["user:1"]);
    }

    #[test]
    fn test_strategy_from_concurrency() {
        assert_eq!(FetchStrategy::from_concurrency(0), FetchStrategy::Sequential);
        assert_eq!(FetchStrategy::from_concurrency(1), FetchStrategy::Sequential);
        assert_eq!(
            FetchStrategy::from_concurrency(4),
            FetchStrategy::Concurrent { limit: 4 }
        );
    }
}
