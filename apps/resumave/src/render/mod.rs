// SectionRenderers: (section data, stylesheet) -> layout node.
// Every renderer is pure; absent or blank data yields `None`, never an empty container.

pub mod dates;
pub mod header;
pub mod node;
pub mod sections;

pub use dates::{DateFormatter, MonthYearFormatter};
pub use header::render_header;
pub use node::{LayoutNode, Span};

use crate::models::{ResumeData, SectionKind};
use crate::style::Stylesheet;

/// What every section renderer paints with.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub styles: &'a Stylesheet,
    pub dates: &'a dyn DateFormatter,
}

/// Dispatches to the renderer for `kind`.
pub fn render_section(
    kind: SectionKind,
    resume: &ResumeData,
    ctx: &RenderContext<'_>,
) -> Option<LayoutNode> {
    match kind {
        SectionKind::Summary => sections::render_summary(resume.summary.as_ref(), ctx),
        SectionKind::Experience => sections::render_experience(&resume.experience, ctx),
        SectionKind::Education => sections::render_education(&resume.education, ctx),
        SectionKind::Skills => sections::render_skills(resume.skills.as_ref(), ctx),
        SectionKind::Projects => sections::render_projects(&resume.projects, ctx),
        SectionKind::Certificates => sections::render_certificates(&resume.certificates, ctx),
        SectionKind::Languages => sections::render_languages(&resume.languages, ctx),
    }
}
