//! Running headers and footers

mod format;
mod running;

pub use format::format_reference;
pub use running::{running_heads, Alignment, HeaderPolicy, PageSide, RunningHead, Spread};
