use crate::content::models::BlogPost;
use crate::dom::{Document, Element, Node};
use crate::render::BLOG_POSTS_LIST;

pub fn render_blog_posts(doc: &mut Document, data: Option<&[BlogPost]>) -> bool {
    let Some(posts) = data else {
        return false;
    };
    let items: Vec<Node> = posts.iter().map(|p| blog_item(p).into()).collect();
    doc.replace_container(BLOG_POSTS_LIST, items)
}

fn blog_item(post: &BlogPost) -> Element {
    let href = post.url.as_deref().filter(|u| !u.is_empty()).unwrap_or("#");

    Element::new("li").class("blog-post-item reveal").child(
        Element::new("a")
            .attr_with("href", href)
            .child(
                Element::new("figure").class("blog-banner-box").child(
                    Element::new("img")
                        .attr_with("src", post.image.as_str())
                        .attr_with("alt", post.title.as_str())
                        .attr_with("loading", "lazy"),
                ),
            )
            .child(
                Element::new("div")
                    .class("blog-content")
                    .child(
                        Element::new("div")
                            .class("blog-meta")
                            .child(
                                Element::new("p")
                                    .class("blog-category")
                                    .text(post.category.as_str()),
                            )
                            .child(Element::new("span").class("dot"))
                            .child(
                                Element::new("time")
                                    .attr_with("datetime", post.date.as_str())
                                    .text(post.display_date()),
                            ),
                    )
                    .child(
                        Element::new("h3")
                            .class("h3 blog-item-title")
                            .text(post.title.as_str()),
                    )
                    .child(
                        Element::new("p")
                            .class("blog-text")
                            .text(post.excerpt.as_str()),
                    ),
            ),
    )
}
