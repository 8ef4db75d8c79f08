//! Section renderers.
//!
//! One function per section kind. Each returns `None` when the section has
//! nothing to show, and none of them emits an empty container: an entry with
//! no visible content is skipped, a description with no non-blank line gets no
//! bullet list.

use crate::models::resume::{
    non_blank, CertificateEntry, EducationEntry, ExperienceEntry, LanguageEntry, ProjectEntry,
    Skills, Summary,
};
use crate::models::SectionKind;
use crate::render::dates::{format_range, PRESENT};
use crate::render::header::strip_scheme;
use crate::render::node::{LayoutNode, Span};
use crate::render::RenderContext;
use crate::style::{Style, Stylesheet};

/// Characters before which a colon marks a skill category.
const SKILL_LABEL_MAX_CHARS: usize = 30;
const BULLET: &str = "•";
const INLINE_SEPARATOR: &str = " | ";

// ────────────────────────────────────────────────────────────────────────────
// Shared building blocks
// ────────────────────────────────────────────────────────────────────────────

/// Wraps section content under its heading.
fn section(kind: SectionKind, styles: &Stylesheet, body: Vec<LayoutNode>) -> LayoutNode {
    let mut children = Vec::with_capacity(body.len() + 1);
    children.push(LayoutNode::text(&styles.section_title, kind.title()));
    children.extend(body);
    LayoutNode::Section {
        section: kind,
        style: styles.section.clone(),
        children,
    }
}

/// Interleaves a divider between consecutive blocks, never after the last.
fn with_dividers(blocks: Vec<LayoutNode>, styles: &Stylesheet) -> Vec<LayoutNode> {
    let mut out = Vec::with_capacity(blocks.len() * 2);
    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            out.push(LayoutNode::divider(&styles.line));
        }
        out.push(block);
    }
    out
}

/// Splits free text into trimmed, non-blank lines.
pub fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

fn bullet_list(description: Option<&str>, styles: &Stylesheet) -> Option<LayoutNode> {
    let items: Vec<LayoutNode> = content_lines(description.unwrap_or_default())
        .map(|point| {
            LayoutNode::view(
                &styles.list_item,
                vec![
                    LayoutNode::text(&styles.list_bullet, BULLET),
                    LayoutNode::text(&styles.list_content, point),
                ],
            )
        })
        .collect();

    if items.is_empty() {
        return None;
    }
    Some(LayoutNode::view(&styles.lists, items))
}

/// A row container, omitted when every slot is empty.
fn row(style: &Style, slots: Vec<Option<LayoutNode>>) -> Option<LayoutNode> {
    let children: Vec<LayoutNode> = slots.into_iter().flatten().collect();
    if children.is_empty() {
        return None;
    }
    Some(LayoutNode::view(style, children))
}

fn text_if(style: &Style, value: Option<&str>) -> Option<LayoutNode> {
    non_blank(value).map(|v| LayoutNode::text(style, v))
}

/// Entry wrapper, omitted when the entry has no visible part.
fn entry_block(styles: &Stylesheet, parts: Vec<Option<LayoutNode>>) -> Option<LayoutNode> {
    row(&styles.wrapper, parts)
}

fn entries_section(
    kind: SectionKind,
    styles: &Stylesheet,
    blocks: impl Iterator<Item = Option<LayoutNode>>,
) -> Option<LayoutNode> {
    let blocks: Vec<LayoutNode> = blocks.flatten().collect();
    if blocks.is_empty() {
        return None;
    }
    Some(section(kind, styles, with_dividers(blocks, styles)))
}

// ────────────────────────────────────────────────────────────────────────────
// Summary
// ────────────────────────────────────────────────────────────────────────────

pub fn render_summary(summary: Option<&Summary>, ctx: &RenderContext<'_>) -> Option<LayoutNode> {
    let text = non_blank(summary.map(|s| s.text.as_str()))?;
    Some(section(
        SectionKind::Summary,
        ctx.styles,
        vec![LayoutNode::text(&ctx.styles.summary, text)],
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

pub fn render_experience(entries: &[ExperienceEntry], ctx: &RenderContext<'_>) -> Option<LayoutNode> {
    let styles = ctx.styles;
    let blocks = entries.iter().map(|entry| {
        let dates = format_range(ctx.dates, &entry.start, entry.end.as_deref(), Some(PRESENT));
        entry_block(
            styles,
            vec![
                row(
                    &styles.title_wrapper,
                    vec![
                        text_if(&styles.title, Some(entry.role.as_str())),
                        text_if(&styles.date, dates.as_deref()),
                    ],
                ),
                row(
                    &styles.subtitle_wrapper,
                    vec![
                        text_if(&styles.subtitle, Some(entry.company.as_str())),
                        text_if(&styles.location, entry.location.as_deref()),
                    ],
                ),
                bullet_list(entry.description.as_deref(), styles),
            ],
        )
    });
    entries_section(SectionKind::Experience, styles, blocks)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn render_education(entries: &[EducationEntry], ctx: &RenderContext<'_>) -> Option<LayoutNode> {
    let styles = ctx.styles;
    let blocks = entries.iter().map(|entry| {
        let dates = format_range(ctx.dates, &entry.start, Some(entry.end.as_str()), None);

        let mut institution = Vec::new();
        if let Some(name) = non_blank(Some(entry.institution.as_str())) {
            institution.push(Span::plain(name));
        }
        if let Some(gpa) = non_blank(entry.gpa.as_deref()) {
            let gpa = if institution.is_empty() {
                format!("GPA: {gpa}")
            } else {
                format!("{INLINE_SEPARATOR}GPA: {gpa}")
            };
            institution.push(Span::plain(gpa));
        }
        let institution =
            (!institution.is_empty()).then(|| LayoutNode::rich_text(&styles.subtitle, institution));

        entry_block(
            styles,
            vec![
                row(
                    &styles.title_wrapper,
                    vec![
                        text_if(&styles.title, Some(entry.degree.as_str())),
                        text_if(&styles.date, dates.as_deref()),
                    ],
                ),
                row(
                    &styles.subtitle_wrapper,
                    vec![institution, text_if(&styles.location, entry.location.as_deref())],
                ),
            ],
        )
    });
    entries_section(SectionKind::Education, styles, blocks)
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

pub fn render_projects(entries: &[ProjectEntry], ctx: &RenderContext<'_>) -> Option<LayoutNode> {
    let styles = ctx.styles;
    let blocks = entries.iter().map(|project| {
        let mut spans = Vec::new();
        if let Some(title) = non_blank(Some(project.title.as_str())) {
            spans.push(Span::plain(title));
        }
        if let Some(url) = non_blank(project.url.as_deref()) {
            let url = strip_scheme(url);
            let url = if spans.is_empty() {
                url.to_string()
            } else {
                format!("{INLINE_SEPARATOR}{url}")
            };
            spans.push(Span::styled(url, &styles.small_text));
        }
        let title = (!spans.is_empty()).then(|| LayoutNode::rich_text(&styles.title, spans));

        entry_block(
            styles,
            vec![
                row(&styles.title_wrapper, vec![title]),
                bullet_list(project.description.as_deref(), styles),
            ],
        )
    });
    entries_section(SectionKind::Projects, styles, blocks)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// One parsed line of the skills text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillLine<'a> {
    /// `Category: a, b, c`. The label keeps its trailing colon.
    Categorized { label: String, value: &'a str },
    Plain(&'a str),
}

/// Parses one skills line. A colon counts as a category marker only when it is
/// the first colon and sits at char index 1 to 29.
pub fn parse_skill_line(line: &str) -> SkillLine<'_> {
    let line = line.trim();
    if let Some(byte_idx) = line.find(':') {
        let char_idx = line[..byte_idx].chars().count();
        if char_idx > 0 && char_idx < SKILL_LABEL_MAX_CHARS {
            return SkillLine::Categorized {
                label: format!("{}:", line[..byte_idx].trim()),
                value: line[byte_idx + 1..].trim(),
            };
        }
    }
    SkillLine::Plain(line)
}

pub fn render_skills(skills: Option<&Skills>, ctx: &RenderContext<'_>) -> Option<LayoutNode> {
    let styles = ctx.styles;
    let rows: Vec<LayoutNode> = content_lines(skills.map(|s| s.text.as_str()).unwrap_or_default())
        .map(|line| match parse_skill_line(line) {
            SkillLine::Categorized { label, value } => LayoutNode::view(
                &styles.skills_row,
                vec![
                    LayoutNode::text(&styles.skills_label, label),
                    LayoutNode::text(&styles.skills_value, value),
                ],
            ),
            SkillLine::Plain(text) => LayoutNode::text(&styles.text, text),
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(section(
        SectionKind::Skills,
        styles,
        vec![LayoutNode::view(&styles.skills_container, rows)],
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Certificates
// ────────────────────────────────────────────────────────────────────────────

pub fn render_certificates(
    entries: &[CertificateEntry],
    ctx: &RenderContext<'_>,
) -> Option<LayoutNode> {
    let styles = ctx.styles;
    let blocks = entries.iter().map(|cert| {
        let date = non_blank(cert.date.as_deref()).map(|d| ctx.dates.format(d));
        entry_block(
            styles,
            vec![
                row(
                    &styles.title_wrapper,
                    vec![
                        text_if(&styles.title, Some(cert.title.as_str())),
                        text_if(&styles.date, date.as_deref()),
                    ],
                ),
                row(
                    &styles.subtitle_wrapper,
                    vec![text_if(&styles.subtitle, cert.issuer.as_deref())],
                ),
            ],
        )
    });
    entries_section(SectionKind::Certificates, styles, blocks)
}

// ────────────────────────────────────────────────────────────────────────────
// Languages
// ────────────────────────────────────────────────────────────────────────────

pub fn render_languages(entries: &[LanguageEntry], ctx: &RenderContext<'_>) -> Option<LayoutNode> {
    let styles = ctx.styles;
    let labels: Vec<String> = entries
        .iter()
        .filter_map(|entry| {
            let language = non_blank(Some(entry.language.as_str()))?;
            Some(match non_blank(Some(entry.proficiency.as_str())) {
                Some(level) => format!("{language}: {level}"),
                None => language.to_string(),
            })
        })
        .collect();

    if labels.is_empty() {
        return None;
    }

    let last = labels.len() - 1;
    let items = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let label = if i < last {
                format!("{label}{INLINE_SEPARATOR}")
            } else {
                label
            };
            LayoutNode::text(&styles.text, label)
        })
        .collect();

    Some(section(
        SectionKind::Languages,
        styles,
        vec![LayoutNode::view(&styles.inline_wrapper, items)],
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
