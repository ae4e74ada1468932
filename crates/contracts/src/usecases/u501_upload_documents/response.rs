use serde::{Deserialize, Serialize};

/// Per-file outcome of an upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    /// Size in bytes as seen by the backend
    #[serde(default)]
    pub size: Option<u64>,
    /// Number of text chunks indexed from this file
    pub chunks: u64,
}

/// Answer of `POST /upload`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub files: Vec<UploadedFile>,
    pub total_chunks: u64,
}

impl UploadResponse {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Successfully processed {} files ({} chunks)",
            self.file_count(),
            self.total_chunks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_payload() {
        let resp: UploadResponse = serde_json::from_str(
            r#"{
                "message": "Successfully processed 2 files",
                "files": [
                    {"filename": "plan.pdf", "size": 20480, "chunks": 12},
                    {"filename": "sales.csv", "size": 1024, "chunks": 3}
                ],
                "total_chunks": 15
            }"#,
        )
        .unwrap();
        assert_eq!(resp.file_count(), 2);
        assert_eq!(resp.files[0].size, Some(20480));
        assert_eq!(resp.summary(), "Successfully processed 2 files (15 chunks)");
    }

    #[test]
    fn test_parse_minimal_payload() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"files":[{"filename":"a.pdf","chunks":4}],"total_chunks":4}"#)
                .unwrap();
        assert_eq!(resp.message, None);
        assert_eq!(resp.files[0].size, None);
    }
}
