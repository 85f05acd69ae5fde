use serde::Serialize;

use crate::domain::sync::BatchOutcome;

/// Response body of the seed endpoint.
///
/// The outcome's failure lists are flattened in; empty lists are omitted,
/// so a body with only `message` means every SKU succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSkusResponse {
    pub message: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

impl SeedSkusResponse {
    pub fn new(message: impl Into<String>, outcome: BatchOutcome) -> Self {
        Self {
            message: message.into(),
            outcome,
        }
    }
}
