use crate::dom::Element;
use crate::domain::model::User;

/// 建立帶文字的元素，tag 不做檢查
pub fn make_text_element(tag: &str, text: impl Into<String>, class_name: Option<&str>) -> Element {
    let mut element = Element::new(tag);
    element.set_text_content(text);
    if let Some(class_name) = class_name.filter(|c| !c.is_empty()) {
        element.set_class_name(class_name);
    }
    element
}

pub fn make_paragraph(text: impl Into<String>) -> Element {
    make_text_element("p", text, None)
}

/// 每個使用者一個 option：value = id，文字 = name
pub fn make_option_elements(users: Option<&[User]>) -> Option<Vec<Element>> {
    let users = users?;
    Some(
        users
            .iter()
            .map(|user| {
                let mut option = Element::new("option");
                option.set_attribute("value", user.id.to_string());
                option.set_text_content(user.name.clone());
                option
            })
            .collect(),
    )
}
