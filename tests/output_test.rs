use anyhow::Result;
use httpmock::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use user_posts::config::toml_config::TomlConfig;
use user_posts::utils::validation::Validate;
use user_posts::{Command, LocalStorage, PostViewer, Settings};

#[tokio::test]
async fn test_viewer_renders_and_saves_html() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(200).json_body(serde_json::json!([{
            "id": 1,
            "name": "Leanne <Graham>",
            "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered"}
        }]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/users/1");
        then.status(200).json_body(serde_json::json!({
            "id": 1,
            "name": "Leanne <Graham>",
            "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered"}
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/posts").query_param("userId", "1");
        then.status(200).json_body(serde_json::json!([
            {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/comments").query_param("postId", "1");
        then.status(200).json_body(serde_json::json!([
            {"postId": 1, "id": 1, "name": "id labore", "email": "Eliseo@gardner.biz", "body": "laudantium"}
        ]));
    });

    // 設定檔指向 mock server
    let mut config_file = NamedTempFile::new()?;
    write!(
        config_file,
        r#"
[api]
base_url = "{}"

[render]
fetch_concurrency = 2
"#,
        server.base_url()
    )?;
    let toml = TomlConfig::from_file(config_file.path())?;
    toml.validate()?;
    let settings = Settings::default().merge_toml(&toml);
    settings.validate()?;

    let viewer = PostViewer::from_settings(&settings);
    viewer.start().await?;
    viewer.execute(Command::Select(None)).await?;
    viewer.execute(Command::Toggle(1)).await?;

    let storage = LocalStorage::new(temp_dir.path());
    viewer.save(&storage, "pages/user-1.html").await?;

    let html = std::fs::read_to_string(temp_dir.path().join("pages/user-1.html"))?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Leanne &lt;Graham&gt;"));
    assert!(html.contains("<h2>sunt aut facere</h2>"));
    assert!(html.contains("<p>Post ID: 1</p>"));
    assert!(html.contains("<button data-post-id=\"1\">Hide Comments</button>"));
    assert!(html.contains("<section class=\"comments\" data-post-id=\"1\">"));
    assert!(html.contains("<p>From: Eliseo@gardner.biz</p>"));

    Ok(())
}
