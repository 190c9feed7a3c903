// In-memory document model: element trees, detached fragments, selectors, HTML output.

pub mod html;
pub mod node;
pub mod selector;

pub use node::{Element, Fragment, Node};
pub use selector::Selector;
