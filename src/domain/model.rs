use serde::{Deserialize, Serialize};

pub type UserId = u64;
pub type PostId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: PostId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_placeholder_shape() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"city": "Gwenborough"},
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }))
        .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username.as_deref(), Some("Bret"));
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn test_post_and_comment_use_camel_case_ids() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "userId": 3, "id": 21, "title": "t", "body": "b"
        }))
        .unwrap();
        assert_eq!(post.user_id, 3);

        let comment: Comment = serde_json::from_value(serde_json::json!({
            "postId": 21, "name": "n", "email": "e@x.io", "body": "b"
        }))
        .unwrap();
        assert_eq!(comment.post_id, 21);
        assert_eq!(comment.id, None);
    }
}
