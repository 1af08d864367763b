use contracts::usecases::u501_csv_exchange::{EntityDescriptor, ImportSummary};
use serde_json::Value;
use web_sys::{File, FormData};

use super::panel::CsvTransport;
use crate::shared::api_utils::{get, post, send_bytes, send_json, ApiError, Body};

/// Multipart upload of `file` under the form field "file"
pub async fn import_csv(
    entity: &EntityDescriptor,
    file: &File,
    token: Option<&str>,
) -> Result<ImportSummary, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;

    let body: Value = send_json(post(entity.import_path, token), Body::Multipart(form)).await?;
    Ok(ImportSummary::from_json(&body))
}

/// Raw CSV bytes of the export endpoint
pub async fn export_csv(entity: &EntityDescriptor, token: Option<&str>) -> Result<Vec<u8>, ApiError> {
    send_bytes(get(entity.export_path, token), Body::Empty).await
}

/// [`CsvTransport`] over the dashboard API with the session's token.
pub struct HttpCsvTransport {
    pub token: Option<String>,
}

impl CsvTransport for HttpCsvTransport {
    type File = File;

    async fn upload(&self, entity: &EntityDescriptor, file: &File) -> Result<ImportSummary, ApiError> {
        import_csv(entity, file, self.token.as_deref()).await
    }

    async fn download(&self, entity: &EntityDescriptor) -> Result<Vec<u8>, ApiError> {
        export_csv(entity, self.token.as_deref()).await
    }
}
