// Pure data-to-node rendering. Nothing here touches the live page.

pub mod comments;
pub mod elements;
pub mod posts;

pub use comments::build_comments_fragment;
pub use elements::{make_option_elements, make_paragraph, make_text_element};
pub use posts::{FetchStrategy, PostRenderer};
