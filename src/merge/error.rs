//! Merge error types.

use crate::dom::ParseError;
use thiserror::Error;

/// Fatal merge failures. Recoverable conditions (missing inputs, unknown
/// reference tokens) never surface here: missing inputs are skipped with a
/// warning before the merge starts, and unknown tokens are left verbatim.
#[derive(Debug, Error)]
pub enum MergeError {
    /// A source parsed into garbage. Aborts the whole merge before any
    /// output is written - no partial composite is ever emitted.
    #[error("failed to parse `{name}`: {source}")]
    MalformedDocument {
        name: String,
        #[source]
        source: ParseError,
    },
}
