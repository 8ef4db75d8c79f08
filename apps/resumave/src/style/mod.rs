// StyleDeriver: customization -> stylesheet.
// Pure and total; unknown enum values resolve to the middle row of each table.

pub mod fonts;
pub mod scale;
pub mod stylesheet;

pub use fonts::{FontFamily, FontVariants};
pub use scale::{FontSize, LineSpacing, SpacingScale, TypeScale};
pub use stylesheet::{derive_stylesheet, Style, Stylesheet};
