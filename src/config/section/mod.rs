//! Configuration section definitions.

mod input;
mod merge;
mod output;
mod preview;

pub use input::InputConfig;
pub use merge::{CleanupSetting, FixedSizeConfig, MaxDigits, MergeSectionConfig, SVG_XMLNS};
pub use output::{FormattingConfig, FormattingSetting, OutputConfig};
pub use preview::PreviewConfig;
