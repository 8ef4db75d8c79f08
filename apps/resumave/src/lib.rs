//! Resumave: turns structured resume data plus a template customization into a
//! styled, single-page document description for a PDF painter.
//!
//! Pipeline: CustomizationStore → derive_stylesheet → compose → section renderers → Document.

pub mod document;
pub mod errors;
pub mod models;
pub mod render;
pub mod store;
pub mod style;

pub use document::{compose, compose_with, Document};
pub use errors::AppError;
pub use models::{Customization, ResumeData, SectionKind};
pub use render::{DateFormatter, LayoutNode, MonthYearFormatter};
pub use store::{
    find_template, templates, CustomizationKey, CustomizationStore, CustomizationUpdate,
    ResumePreview, StoreAction, TemplateId, Transition,
};
pub use style::{derive_stylesheet, Stylesheet};
