use crate::dom::selector::Selector;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.text_content(),
            Node::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// 元素節點。屬性保留插入順序，class 另外存放
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// 取代所有子節點為單一文字節點
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(key, _)| key != name);
    }

    /// `data-*` 屬性，key 使用 kebab-case (例如 `post-id`)
    pub fn set_data(&mut self, key: &str, value: impl ToString) {
        self.set_attribute(format!("data-{}", key), value.to_string());
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.get_attribute(&format!("data-{}", key))
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name.split_whitespace().map(str::to_string).collect();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// 回傳切換後 class 是否存在
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    pub fn append_fragment(&mut self, fragment: Fragment) {
        self.children.extend(fragment.into_nodes());
    }

    /// 移除所有子元素 (文字節點保留)，回傳移除數量
    pub fn remove_child_elements(&mut self) -> usize {
        let before = self.children.len();
        self.children.retain(|node| matches!(node, Node::Text(_)));
        before - self.children.len()
    }

    /// 在子孫節點中找第一個符合的元素 (不含自己)
    pub fn query_selector(&self, selector: &Selector) -> Option<&Element> {
        for child in self.child_elements() {
            if selector.matches(child) {
                return Some(child);
            }
            if let Some(found) = child.query_selector(selector) {
                return Some(found);
            }
        }
        None
    }

    pub fn query_selector_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        for child in &mut self.children {
            if let Node::Element(element) = child {
                if selector.matches(element) {
                    return Some(element);
                }
                if let Some(found) = element.query_selector_mut(selector) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn query_selector_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matches(selector, &mut found);
        found
    }

    fn collect_matches<'a>(&'a self, selector: &Selector, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if selector.matches(child) {
                found.push(child);
            }
            child.collect_matches(selector, found);
        }
    }
}

/// 尚未掛到頁面上的節點集合，一次 append
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(Node::as_element)
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Self {
            nodes: vec![Node::Element(element)],
        }
    }
}

impl FromIterator<Element> for Fragment {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().map(Node::Element).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_class_reports_presence() {
        let mut section = Element::new("section");
        section.set_class_name("comments hide");

        assert!(!section.toggle_class("hide"));
        assert_eq!(section.class_name(), "comments");
        assert!(section.toggle_class("hide"));
        assert_eq!(section.class_name(), "comments hide");
    }

    #[test]
    fn test_attributes_and_data() {
        let mut button = Element::new("button");
        button.set_data("post-id", 4);
        button.set_attribute("disabled", "");
        button.set_data("post-id", 5);

        assert_eq!(button.data("post-id"), Some("5"));
        assert_eq!(button.attributes().len(), 2);
        button.remove_attribute("disabled");
        assert!(!button.has_attribute("disabled"));
    }

    #[test]
    fn test_remove_child_elements_keeps_text() {
        let mut main = Element::new("main");
        main.append_text("\n");
        main.append(Element::new("article"));
        main.append(Element::new("article"));

        assert_eq!(main.remove_child_elements(), 2);
        assert_eq!(main.children().len(), 1);
        assert_eq!(main.child_elements().count(), 0);
    }

    #[test]
    fn test_query_selector_searches_descendants() {
        let mut section = Element::new("section");
        section.set_data("post-id", 9);
        let mut article = Element::new("article");
        article.append(section);
        let mut main = Element::new("main");
        main.append(article);

        let selector = Selector::tag("section").with_data("post-id", "9");
        assert!(main.query_selector(&selector).is_some());
        assert!(main
            .query_selector(&Selector::tag("section").with_data("post-id", "1"))
            .is_none());

        main.query_selector_mut(&selector).unwrap().add_class("hide");
        assert!(main.query_selector(&selector).unwrap().has_class("hide"));
        assert_eq!(main.query_selector_all(&Selector::tag("article")).len(), 1);
    }
}
