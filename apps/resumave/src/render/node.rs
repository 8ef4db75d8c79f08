//! Layout nodes: the in-memory tree handed to the PDF painter.
//!
//! Nodes carry fully resolved `Style` records, so the painter never needs the
//! stylesheet itself.

use serde::Serialize;

use crate::models::SectionKind;
use crate::style::Style;

/// A run of text inside a `Text` node. `style: None` inherits the node's style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: &Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutNode {
    /// Generic container.
    View {
        style: Style,
        children: Vec<LayoutNode>,
    },
    /// Container for one resume section; the first child is its heading.
    Section {
        section: SectionKind,
        style: Style,
        children: Vec<LayoutNode>,
    },
    Text {
        style: Style,
        spans: Vec<Span>,
    },
    /// Thin horizontal rule between entries.
    Divider { style: Style },
}

impl LayoutNode {
    pub fn view(style: &Style, children: Vec<LayoutNode>) -> Self {
        LayoutNode::View {
            style: style.clone(),
            children,
        }
    }

    pub fn text(style: &Style, content: impl Into<String>) -> Self {
        LayoutNode::Text {
            style: style.clone(),
            spans: vec![Span::plain(content)],
        }
    }

    pub fn rich_text(style: &Style, spans: Vec<Span>) -> Self {
        LayoutNode::Text {
            style: style.clone(),
            spans,
        }
    }

    pub fn divider(style: &Style) -> Self {
        LayoutNode::Divider {
            style: style.clone(),
        }
    }

    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::View { children, .. } | LayoutNode::Section { children, .. } => children.as_slice(),
            LayoutNode::Text { .. } | LayoutNode::Divider { .. } => &[],
        }
    }

    /// Section kind, for `Section` nodes.
    pub fn section(&self) -> Option<SectionKind> {
        match self {
            LayoutNode::Section { section, .. } => Some(*section),
            _ => None,
        }
    }

    /// Concatenated text of this node and all its descendants, in paint order.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            LayoutNode::Text { spans, .. } => {
                for span in spans {
                    out.push_str(&span.text);
                }
            }
            LayoutNode::View { children, .. } | LayoutNode::Section { children, .. } => {
                for child in children {
                    if !out.is_empty() && !out.ends_with('\n') {
                        out.push('\n');
                    }
                    child.collect_text(out);
                }
            }
            LayoutNode::Divider { .. } => {}
        }
    }

    /// Number of `Divider` nodes among the direct children.
    pub fn divider_count(&self) -> usize {
        self.children()
            .iter()
            .filter(|c| matches!(c, LayoutNode::Divider { .. }))
            .count()
    }
}
