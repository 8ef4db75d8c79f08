//! Header renderer: name, headline, address and the contact line.

use crate::models::resume::{non_blank, Contact};
use crate::render::node::{LayoutNode, Span};
use crate::style::Stylesheet;

/// Printed between consecutive contact items.
pub const CONTACT_SEPARATOR: &str = " | ";

/// Removes a leading `https://` or `http://`.
pub fn strip_scheme(url: &str) -> &str {
    let url = url.trim();
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Contact items in display order: phone, email, LinkedIn, GitHub, portfolio.
/// Unset and blank fields are dropped.
pub fn contact_items(contact: &Contact) -> Vec<String> {
    let linked = |label: &str, url: Option<&str>| {
        non_blank(url).map(|u| format!("{label}: {}", strip_scheme(u)))
    };

    [
        non_blank(contact.phone.as_deref()).map(str::to_string),
        non_blank(contact.email.as_deref()).map(str::to_string),
        linked("LinkedIn", contact.linkedin.as_deref()),
        linked("GitHub", contact.github.as_deref()),
        linked("Portfolio", contact.portfolio.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn render_header(contact: Option<&Contact>, styles: &Stylesheet) -> Option<LayoutNode> {
    let contact = contact?;
    let mut children = Vec::new();

    if let Some(name) = contact.display_name() {
        children.push(LayoutNode::text(&styles.header_name, name));
    }
    if let Some(title) = non_blank(contact.title.as_deref()) {
        children.push(LayoutNode::text(&styles.header_title, title));
    }
    if let Some(address) = non_blank(contact.address.as_deref()) {
        children.push(LayoutNode::text(&styles.small_text, address));
    }

    let items = contact_items(contact);
    if !items.is_empty() {
        let last = items.len() - 1;
        let links = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let mut spans = vec![Span::plain(item)];
                if i < last {
                    spans.push(Span::styled(CONTACT_SEPARATOR, &styles.header_separator));
                }
                LayoutNode::rich_text(&styles.header_link, spans)
            })
            .collect();
        children.push(LayoutNode::view(&styles.header_links, links));
    }

    if children.is_empty() {
        return None;
    }
    Some(LayoutNode::view(&styles.header, children))
}
