use crate::dom::{Element, Fragment};
use crate::domain::model::Comment;
use crate::render::elements::{make_paragraph, make_text_element};

pub fn build_comment_article(comment: &Comment) -> Element {
    let mut article = Element::new("article");
    article.append(make_text_element("h3", comment.name.clone(), None));
    article.append(make_paragraph(comment.body.clone()));
    article.append(make_paragraph(format!("From: {}", comment.email)));
    article
}

pub fn build_comments_fragment(comments: Option<&[Comment]>) -> Option<Fragment> {
    let comments = comments?;
    Some(comments.iter().map(build_comment_article).collect())
}
