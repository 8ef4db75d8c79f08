//! Document composer: turns resume data plus customization into one page description.
//!
//! Flow: derive_stylesheet → resolve section order → render header →
//!       render each known section in order → wrap in an A4 page → attach metadata.
//!
//! The composer does not paginate. The painter flows the single page onto as
//! many physical pages as it needs.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::models::{Customization, ResumeData, SectionKind, DEFAULT_SECTION_ORDER};
use crate::render::{render_header, render_section, DateFormatter, LayoutNode, MonthYearFormatter, RenderContext};
use crate::style::{derive_stylesheet, Style};

const FALLBACK_TITLE_NAME: &str = "Resume";
const FALLBACK_AUTHOR: &str = "Resumave User";
const SUBJECT: &str = "Professional Resume";
const KEYWORDS: &str = "resume, cv, professional";
const LANGUAGE: &str = "en";

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub keywords: String,
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageSize {
    A4,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub size: PageSize,
    pub style: Style,
    /// Header first (when present), then the rendered sections in order.
    pub children: Vec<LayoutNode>,
}

/// The composed document handed to the PDF painter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub metadata: DocumentMetadata,
    pub page: Page,
}

impl Document {
    /// Sections present in the page, in paint order.
    pub fn section_order(&self) -> Vec<SectionKind> {
        self.page.children.iter().filter_map(LayoutNode::section).collect()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&LayoutNode> {
        self.page
            .children
            .iter()
            .find(|node| node.section() == Some(kind))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// Composes a document using the default `MonthYearFormatter` for dates.
pub fn compose(resume: &ResumeData, customization: &Customization) -> Document {
    compose_with(resume, customization, &MonthYearFormatter)
}

pub fn compose_with(
    resume: &ResumeData,
    customization: &Customization,
    dates: &dyn DateFormatter,
) -> Document {
    let styles = derive_stylesheet(customization);
    let ctx = RenderContext {
        styles: &styles,
        dates,
    };

    let order = resolve_section_order(customization.section_order.as_deref());

    let mut children = Vec::with_capacity(order.len() + 1);
    children.extend(render_header(resume.contact.as_ref(), &styles));
    children.extend(order.into_iter().filter_map(|kind| render_section(kind, resume, &ctx)));

    Document {
        metadata: metadata_for(resume),
        page: Page {
            size: PageSize::A4,
            style: styles.page.clone(),
            children,
        },
    }
}

/// Resolves the configured order into known, unique section kinds.
///
/// `None` yields the default order. Unknown names are skipped and a repeated
/// name keeps only its first position.
pub fn resolve_section_order(names: Option<&[String]>) -> Vec<SectionKind> {
    let Some(names) = names else {
        return DEFAULT_SECTION_ORDER.to_vec();
    };

    let mut seen = HashSet::new();
    names
        .iter()
        .filter_map(|name| {
            let kind = SectionKind::from_name(name);
            if kind.is_none() {
                debug!("Skipping unknown section '{name}'");
            }
            kind
        })
        .filter(|kind| seen.insert(*kind))
        .collect()
}

fn metadata_for(resume: &ResumeData) -> DocumentMetadata {
    let name = resume.contact.as_ref().and_then(|c| c.display_name());
    DocumentMetadata {
        title: format!("{} - Resume", name.unwrap_or(FALLBACK_TITLE_NAME)),
        author: name.unwrap_or(FALLBACK_AUTHOR).to_string(),
        subject: SUBJECT.to_string(),
        keywords: KEYWORDS.to_string(),
        language: LANGUAGE.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
