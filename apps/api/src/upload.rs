use axum::extract::Multipart;
use bytes::Bytes;

/// Multipart field that carries the resume in both the API and the form.
pub const FILE_FIELD: &str = "file";

/// An uploaded file with its data and client-supplied name.
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// Reads the `file` field out of a multipart body, skipping any other fields.
/// Returns `Ok(None)` when the field is absent.
pub async fn read_file_field(mut multipart: Multipart) -> Result<Option<UploadedFile>, String> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {e}"))?
    {
        if field.name() == Some(FILE_FIELD) {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| format!("Failed to read file data: {e}"))?;
            file = Some(UploadedFile { filename, data });
        } else {
            // Drain unknown fields
            let _ = field.bytes().await;
        }
    }

    Ok(file)
}
