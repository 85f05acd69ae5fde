use serde::Serialize;

/// Per-item failure entry reported back to the seed caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedItem {
    pub sku: String,
    pub reason: String,
}

/// Accounting for one seed invocation.
///
/// Success is implicit: a SKU absent from both lists was fetched and
/// persisted. A retrieval failure short-circuits its SKU, so no SKU ever
/// appears in both lists. Empty lists are omitted from the serialized
/// payload entirely; absence always means "no failures of that kind".
///
/// The value is local to one invocation and never shared across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_to_retrieve: Vec<FailedItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_to_insert: Vec<FailedItem>,
}

impl BatchOutcome {
    pub fn record_retrieval_failure(&mut self, sku: impl Into<String>, reason: impl Into<String>) {
        self.failed_to_retrieve.push(FailedItem {
            sku: sku.into(),
            reason: reason.into(),
        });
    }

    pub fn record_insert_failure(&mut self, sku: impl Into<String>, reason: impl Into<String>) {
        self.failed_to_insert.push(FailedItem {
            sku: sku.into(),
            reason: reason.into(),
        });
    }

    /// True when every SKU was fetched and persisted.
    pub fn is_clean(&self) -> bool {
        self.failed_to_retrieve.is_empty() && self.failed_to_insert.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_failure_lists_are_omitted_from_the_payload() {
        let outcome = BatchOutcome::default();

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value, serde_json::json!({}));
        assert!(outcome.is_clean());
    }

    #[test]
    fn recorded_failures_serialize_in_camel_case() {
        let mut outcome = BatchOutcome::default();
        outcome.record_retrieval_failure("103613", "not found");
        outcome.record_insert_failure("103664", "disk full");

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "failedToRetrieve": [{"sku": "103613", "reason": "not found"}],
                "failedToInsert": [{"sku": "103664", "reason": "disk full"}],
            })
        );
        assert!(!outcome.is_clean());
    }
}
