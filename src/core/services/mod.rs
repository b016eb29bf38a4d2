//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`normalizer`] - Strip list numbering from raw lines
//! - [`validator`] - Check the 18-character code shape
//! - [`classifier`] - Split lines into valid and invalid entries
//! - [`grouper`] - Count codes and mark duplicates
//! - [`formatter`] - Render the three-section report

pub mod classifier;
pub mod formatter;
pub mod grouper;
pub mod normalizer;
pub mod validator;

pub use classifier::classify;
pub use formatter::format_report;
pub use grouper::{duplicate_groups, group_duplicates};
pub use normalizer::normalize_line;
pub use validator::{CODE_LENGTH, is_valid_code};
