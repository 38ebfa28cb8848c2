use serde::{Deserialize, Serialize};

/// Stored document in the archive.
///
/// A document belongs to exactly one of: a job, a company folder, a supplier.
/// Empty strings from the backend are treated the same as missing references.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub job_id: Option<String>,
    pub supplier_id: Option<String>,
    pub folder_id: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub original_name: Option<String>,
    pub description: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<u64>,
    pub uploaded_at: Option<String>,
    pub url: Option<String>,
    pub path: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Document {
    pub fn job_ref(&self) -> Option<&str> {
        present(&self.job_id)
    }

    pub fn supplier_ref(&self) -> Option<&str> {
        present(&self.supplier_id)
    }

    pub fn folder_ref(&self) -> Option<&str> {
        present(&self.folder_id)
    }

    pub fn is_image(&self) -> bool {
        self.mime_type
            .as_deref()
            .map(|m| m.starts_with("image/"))
            .unwrap_or(false)
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type.as_deref() == Some("application/pdf")
    }

    /// Reference to the stored file: `url`, then `path`.
    pub fn stored_location(&self) -> Option<&str> {
        present(&self.url).or(present(&self.path))
    }

    pub fn display_name(&self) -> &str {
        present(&self.original_name).unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_document() {
        let json = r#"{
            "id": "DOC-1",
            "jobId": "JOB-7",
            "supplierId": null,
            "folderId": "",
            "type": "measure_ROLE-01",
            "originalName": "olcu.pdf",
            "mimeType": "application/pdf",
            "size": 20480,
            "uploadedAt": "2024-03-05T10:00:00"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.job_ref(), Some("JOB-7"));
        assert_eq!(doc.folder_ref(), None);
        assert_eq!(doc.supplier_ref(), None);
        assert_eq!(doc.doc_type.as_deref(), Some("measure_ROLE-01"));
        assert!(doc.is_pdf());
        assert!(!doc.is_image());
        assert_eq!(doc.stored_location(), None);
    }

    #[test]
    fn test_stored_location_prefers_url() {
        let doc = Document {
            id: "DOC-2".into(),
            url: Some("/files/a.jpg".into()),
            path: Some("uploads/a.jpg".into()),
            mime_type: Some("image/jpeg".into()),
            ..Default::default()
        };
        assert_eq!(doc.stored_location(), Some("/files/a.jpg"));
        assert!(doc.is_image());

        let doc = Document {
            url: Some(String::new()),
            ..doc
        };
        assert_eq!(doc.stored_location(), Some("uploads/a.jpg"));
    }
}
