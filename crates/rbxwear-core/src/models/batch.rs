use serde_json::Value as JsonValue;

use super::asset::AssetType;
use crate::error::Error;

/// Self-contained input for one clothing upload.
///
/// Has no identity until a successful upload assigns it a remote asset id.
#[derive(Debug, Clone)]
pub struct BatchUploadItem {
    pub image: Vec<u8>,
    pub name: String,
    pub asset_type: AssetType,
    pub group_id: u64,
    pub description: String,
}

/// Outcome accumulator for a batch of uploads.
///
/// The client does not drive batches itself; an external orchestrator records
/// each item's outcome here. Recording moves the item into exactly one of the
/// two lists, so an item can never appear in both or in neither.
#[derive(Debug, Default)]
pub struct BatchResult {
    succeeded: Vec<(BatchUploadItem, JsonValue)>,
    failed: Vec<(BatchUploadItem, Error)>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, item: BatchUploadItem, response: JsonValue) {
        self.succeeded.push((item, response));
    }

    pub fn record_failure(&mut self, item: BatchUploadItem, error: Error) {
        self.failed.push((item, error));
    }

    pub fn succeeded(&self) -> &[(BatchUploadItem, JsonValue)] {
        &self.succeeded
    }

    pub fn failed(&self) -> &[(BatchUploadItem, Error)] {
        &self.failed
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(name: &str) -> BatchUploadItem {
        BatchUploadItem {
            image: vec![0x89, 0x50, 0x4E, 0x47],
            name: name.to_string(),
            asset_type: AssetType::Shirt,
            group_id: 7,
            description: String::new(),
        }
    }

    #[test]
    fn empty_batch_counts_as_all_succeeded() {
        let result = BatchResult::new();
        assert!(result.all_succeeded());
        assert!(result.is_empty());
    }

    #[test]
    fn each_item_lands_in_exactly_one_list() {
        let mut result = BatchResult::new();
        result.record_success(item("a"), json!({ "asset_id": 1 }));
        result.record_failure(
            item("b"),
            Error::RateLimited { operation: "upload" },
        );
        result.record_success(item("c"), json!({ "asset_id": 3 }));

        assert_eq!(result.succeeded().len(), 2);
        assert_eq!(result.failed().len(), 1);
        assert_eq!(result.len(), 3);
        assert!(!result.all_succeeded());
    }

    #[test]
    fn all_succeeded_means_no_failures() {
        let mut result = BatchResult::new();
        result.record_success(item("a"), json!({ "asset_id": 1 }));
        assert!(result.all_succeeded());

        result.record_failure(item("b"), Error::Parse("missing field".to_string()));
        assert!(!result.all_succeeded());
    }
}
