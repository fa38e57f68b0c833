//! Trail markup.

use std::fmt::Write;

use crate::crumb::Crumb;
use crate::html::{escape_attr, escape_text};

/// Render a trail as an ordered list.
///
/// Every crumb except the current one links to its URL. The current crumb is
/// a plain `<span>` marked with `aria-current="page"`.
///
/// ```
/// use crumbs_trail::{TrailOptions, build_trail, render_trail};
///
/// let crumbs = build_trail(&["guide".to_owned()], &TrailOptions::new("/", true, "Home"));
/// let html = render_trail(&crumbs);
/// assert!(html.contains(r#"<a href="/">Home</a>"#));
/// assert!(html.contains(r#"<span aria-current="page">Guide</span>"#));
/// ```
#[must_use]
pub fn render_trail(crumbs: &[Crumb]) -> String {
    let mut html = String::with_capacity(64 + crumbs.len() * 96);
    html.push_str("<ol class=\"breadcrumb\">\n");

    for crumb in crumbs {
        html.push_str("<li class=\"breadcrumb-item\">");
        if crumb.is_current {
            let _ = write!(
                html,
                "<span aria-current=\"page\">{}</span>",
                escape_text(&crumb.label)
            );
        } else {
            let _ = write!(
                html,
                "<a href=\"{}\">{}</a>",
                escape_attr(&crumb.url),
                escape_text(&crumb.label)
            );
        }
        html.push_str("</li>\n");
    }

    html.push_str("</ol>");
    html
}
