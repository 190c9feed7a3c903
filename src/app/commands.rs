use crate::domain::model::PostId;
use crate::utils::error::{Result, ViewerError};

/// 互動模式下一行輸入對應的動作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 選單選擇；沒有值時交給預設使用者
    Select(Option<String>),
    Toggle(PostId),
    Show,
    Quit,
}

impl Command {
    /// 空白行回傳 `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };
        let argument = parts.next();

        let command = match name.to_ascii_lowercase().as_str() {
            "select" | "s" => Command::Select(argument.map(str::to_string)),
            "toggle" | "t" => {
                let raw = argument.ok_or_else(|| ViewerError::CommandError {
                    input: line.trim().to_string(),
                    reason: "toggle needs a post id".to_string(),
                })?;
                let post_id = raw.parse::<PostId>().map_err(|e| ViewerError::CommandError {
                    input: line.trim().to_string(),
                    reason: format!("invalid post id: {}", e),
                })?;
                Command::Toggle(post_id)
            }
            "show" | "print" => Command::Show,
            "quit" | "exit" | "q" => Command::Quit,
            _ => {
                return Err(ViewerError::CommandError {
                    input: line.trim().to_string(),
                    reason: "unknown command".to_string(),
                })
            }
        };
        Ok(Some(command))
    }
}
