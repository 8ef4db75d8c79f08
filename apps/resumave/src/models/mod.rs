pub mod customization;
pub mod resume;

pub use customization::{Customization, SectionKind, DEFAULT_SECTION_ORDER};
pub use resume::ResumeData;
