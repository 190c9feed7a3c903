use crate::dom::Element;
use crate::render::posts::POST_ID_KEY;

/// select 的 change 事件，value 為選到的 option 值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: Option<String>,
}

impl ChangeEvent {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

/// 點擊事件，只保留被點元素的 tag 與 data-post-id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub target_tag: String,
    pub post_id: Option<String>,
}

impl ClickEvent {
    pub fn from_element(target: &Element) -> Self {
        Self {
            target_tag: target.tag().to_ascii_lowercase(),
            post_id: target.data(POST_ID_KEY).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_from_button() {
        let mut button = Element::new("BUTTON");
        button.set_data(POST_ID_KEY, 12);

        let event = ClickEvent::from_element(&button);
        assert_eq!(event.target_tag, "button");
        assert_eq!(event.post_id.as_deref(), Some("12"));

        let event = ClickEvent::from_element(&Element::new("p"));
        assert_eq!(event.post_id, None);
    }
}
