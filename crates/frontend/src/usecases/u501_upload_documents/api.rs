use crate::shared::api_utils::{post_multipart, ApiError};
use contracts::shared::api::ApiEndpoint;
use contracts::usecases::u501_upload_documents::UploadResponse;
use web_sys::FormData;

/// Send all files in one multipart request, each under the `files` field
pub async fn upload_files(files: &[web_sys::File]) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(ApiError::browser)?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(ApiError::browser)?;
    }
    post_multipart(ApiEndpoint::Upload, form).await
}
