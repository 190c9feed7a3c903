use crate::dom::node::Element;
use std::fmt;

/// 簡化版 CSS 選擇器：tag、id、單一 data 屬性
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    data: Option<(String, String)>,
}

impl Selector {
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            ..Self::default()
        }
    }

    pub fn id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn with_data(mut self, key: &str, value: impl ToString) -> Self {
        self.data = Some((key.to_string(), value.to_string()));
        self
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.get_attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        if let Some((key, value)) = &self.data {
            if element.data(key) != Some(value.as_str()) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{}", tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        if let Some((key, value)) = &self.data {
            write!(f, "[data-{}='{}']", key, value)?;
        }
        Ok(())
    }
}
