pub mod files;
pub mod progress;
pub mod response;

pub use files::{partition_files, SelectedFile};
pub use progress::{ResetTimer, UploadState, UploadTracker};
pub use response::{UploadResponse, UploadedFile};

use crate::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};

pub struct UploadDocuments;

impl UseCaseMetadata for UploadDocuments {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "upload_documents"
    }

    fn display_name() -> &'static str {
        "Upload Documents"
    }

    fn description() -> &'static str {
        "Upload your PDF and CSV files to build the knowledge base."
    }
}

/// Filter a drop and make sure something is left to send.
///
/// Returns the accepted files together with the rejected ones so the UI can
/// tell the user what was skipped.
pub fn validate_selection(
    files: Vec<SelectedFile>,
) -> UseCaseResult<(Vec<SelectedFile>, Vec<SelectedFile>)> {
    if files.is_empty() {
        return Err(UseCaseError::validation("No files selected"));
    }
    let (accepted, rejected) = partition_files(files);
    if accepted.is_empty() {
        let names: Vec<&str> = rejected.iter().map(|f| f.name.as_str()).collect();
        return Err(UseCaseError::validation("Only PDF and CSV files are allowed")
            .with_details(names.join(", ")));
    }
    Ok((accepted, rejected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(UploadDocuments::full_name(), "u501_upload_documents");
    }

    #[test]
    fn test_validate_selection_rejects_empty() {
        let err = validate_selection(Vec::new()).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_validate_selection_all_rejected() {
        let err = validate_selection(vec![SelectedFile::new("a.docx", 1)]).unwrap_err();
        assert_eq!(err.message, "Only PDF and CSV files are allowed");
        assert_eq!(err.details.as_deref(), Some("a.docx"));
    }

    #[test]
    fn test_validate_selection_mixed() {
        let (accepted, rejected) = validate_selection(vec![
            SelectedFile::new("a.pdf", 1),
            SelectedFile::new("b.xlsx", 1),
        ])
        .unwrap();
        assert_eq!(accepted.len(), 1);
        assert_eq!(rejected.len(), 1);
    }
}
