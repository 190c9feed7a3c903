use crate::dom::html::ToHtml;
use crate::dom::{Element, Fragment, Selector};
use crate::domain::model::PostId;
use crate::render::elements::make_text_element;
use crate::render::posts::{DEFAULT_TEXT, HIDDEN_CLASS, HIDE_COMMENTS, POST_ID_KEY, SHOW_COMMENTS};
use crate::utils::error::{Result, ViewerError};

pub const DEFAULT_MENU_ID: &str = "selectMenu";

/// 頁面上掛的事件監聽器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// select 選單的 change
    MenuChange,
    /// main 容器上的委派 click
    MainClick,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// 切換後留言區塊是否隱藏，找不到區塊時為 None
    pub section_hidden: Option<bool>,
    /// 切換後按鈕文字，找不到按鈕時為 None
    pub button_label: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Page {
    body: Element,
    menu_id: String,
    listeners: Vec<Listener>,
}

impl Page {
    pub fn new(menu_id: &str) -> Self {
        let mut select = Element::new("select");
        select.set_attribute("id", menu_id);
        let mut placeholder = Element::new("option");
        placeholder.set_attribute("value", "");
        placeholder.set_text_content("Employees");
        select.append(placeholder);

        let mut header = Element::new("header");
        header.append(make_text_element("h1", "Posts", None));
        header.append(select);

        let mut main = Element::new("main");
        main.append(make_text_element("p", DEFAULT_TEXT, Some("default-text")));

        let mut body = Element::new("body");
        body.append(header);
        body.append(main);

        Self {
            body,
            menu_id: menu_id.to_string(),
            listeners: Vec::new(),
        }
    }

    pub fn menu_selector(&self) -> Selector {
        Selector::id(&self.menu_id)
    }

    pub fn menu(&self) -> Result<&Element> {
        let selector = self.menu_selector();
        self.body
            .query_selector(&selector)
            .ok_or_else(|| ViewerError::DomTargetError {
                selector: selector.to_string(),
            })
    }

    pub fn menu_mut(&mut self) -> Result<&mut Element> {
        let selector = self.menu_selector();
        self.body
            .query_selector_mut(&selector)
            .ok_or_else(|| ViewerError::DomTargetError {
                selector: selector.to_string(),
            })
    }

    pub fn main(&self) -> Result<&Element> {
        self.body
            .query_selector(&Selector::tag("main"))
            .ok_or_else(|| ViewerError::DomTargetError {
                selector: "main".to_string(),
            })
    }

    pub fn main_mut(&mut self) -> Result<&mut Element> {
        self.body
            .query_selector_mut(&Selector::tag("main"))
            .ok_or_else(|| ViewerError::DomTargetError {
                selector: "main".to_string(),
            })
    }

    pub fn is_menu_disabled(&self) -> bool {
        self.menu().map(|m| m.has_attribute("disabled")).unwrap_or(false)
    }

    pub fn set_menu_disabled(&mut self, disabled: bool) -> Result<()> {
        let menu = self.menu_mut()?;
        if disabled {
            menu.set_attribute("disabled", "");
        } else {
            menu.remove_attribute("disabled");
        }
        Ok(())
    }

    pub fn append_to_menu(&mut self, options: Vec<Element>) -> Result<usize> {
        let menu = self.menu_mut()?;
        let count = options.len();
        for option in options {
            menu.append(option);
        }
        Ok(count)
    }

    pub fn delete_child_elements(&mut self, parent: &Selector) -> Result<usize> {
        let parent_element =
            self.body
                .query_selector_mut(parent)
                .ok_or_else(|| ViewerError::DomTargetError {
                    selector: parent.to_string(),
                })?;
        Ok(parent_element.remove_child_elements())
    }

    pub fn append_to_main(&mut self, fragment: Fragment) -> Result<()> {
        self.main_mut()?.append_fragment(fragment);
        Ok(())
    }

    /// 已經註冊過就回傳 false
    pub fn add_listener(&mut self, listener: Listener) -> bool {
        if self.listeners.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    pub fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn toggle_comment_section(&mut self, post_id: Option<PostId>) -> Option<bool> {
        let post_id = post_id?;
        let selector = Selector::tag("section").with_data(POST_ID_KEY, post_id);
        let section = self.body.query_selector_mut(&selector)?;
        Some(section.toggle_class(HIDDEN_CLASS))
    }

    pub fn toggle_comment_button(&mut self, post_id: Option<PostId>) -> Option<String> {
        let post_id = post_id?;
        let selector = Selector::tag("button").with_data(POST_ID_KEY, post_id);
        let button = self.body.query_selector_mut(&selector)?;
        let label = if button.text_content() == SHOW_COMMENTS {
            HIDE_COMMENTS
        } else {
            SHOW_COMMENTS
        };
        button.set_text_content(label);
        Some(label.to_string())
    }

    pub fn toggle_comments(&mut self, post_id: Option<PostId>) -> ToggleOutcome {
        ToggleOutcome {
            section_hidden: self.toggle_comment_section(post_id),
            button_label: self.toggle_comment_button(post_id),
        }
    }

    /// main 裡的 button，供 host 模擬點擊
    pub fn find_button(&self, post_id: PostId) -> Option<&Element> {
        self.main()
            .ok()?
            .query_selector(&Selector::tag("button").with_data(POST_ID_KEY, post_id))
    }

    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Posts</title></head>\n{}\n</html>\n",
            self.body.to_html()
        )
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_ID)
    }
}
