use crate::dom::node::{Element, Fragment, Node};
use html_escaper::Escape;
use std::fmt::{self, Display, Formatter, Write};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// 以 `Escape` 跳脫後輸出的字串
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Escape::escape(&self.0, f, false)
    }
}

pub trait ToHtml {
    fn write_html(&self, out: &mut String);

    fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl ToHtml for Node {
    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => {
                let _ = write!(out, "{}", Escaped(text));
            }
        }
    }
}

impl ToHtml for Element {
    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag());
        let class_name = self.class_name();
        if !class_name.is_empty() {
            let _ = write!(out, " class=\"{}\"", Escaped(&class_name));
        }
        for (name, value) in self.attributes() {
            if value.is_empty() {
                let _ = write!(out, " {}", name);
            } else {
                let _ = write!(out, " {}=\"{}\"", name, Escaped(value));
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag()) {
            return;
        }

        for child in self.children() {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag());
    }
}

impl ToHtml for Fragment {
    fn write_html(&self, out: &mut String) {
        for node in self.nodes() {
            node.write_html(out);
        }
    }
}
