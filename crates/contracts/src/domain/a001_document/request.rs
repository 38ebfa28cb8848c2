use serde::{Deserialize, Serialize};

use crate::shared::validation::ValidationError;

/// Upload form fields. The file itself travels as a multipart part
/// alongside these values, so only its presence is tracked here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentForm {
    pub doc_type: String,
    pub description: String,
    pub job_id: String,
    pub supplier_id: String,
    pub folder_id: String,
}

impl UploadDocumentForm {
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
            ..Default::default()
        }
    }

    /// A file is required, plus at least one owner reference.
    pub fn validate(&self, has_file: bool) -> Result<(), ValidationError> {
        if !has_file {
            return Err(ValidationError::MissingFile);
        }
        let refs = [&self.job_id, &self.folder_id, &self.supplier_id];
        if refs.iter().all(|r| r.trim().is_empty()) {
            return Err(ValidationError::MissingReference);
        }
        Ok(())
    }

    /// Multipart text fields; empty references are omitted.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("docType", self.doc_type.clone()),
            ("description", self.description.clone()),
        ];
        for (name, value) in [
            ("jobId", &self.job_id),
            ("folderId", &self.folder_id),
            ("supplierId", &self.supplier_id),
        ] {
            if !value.trim().is_empty() {
                fields.push((name, value.trim().to_string()));
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_validation_order() {
        let form = UploadDocumentForm::new("genel");
        assert_eq!(form.validate(false), Err(ValidationError::MissingFile));
        assert_eq!(form.validate(true), Err(ValidationError::MissingReference));

        let form = UploadDocumentForm {
            supplier_id: "SUP-1".into(),
            ..form
        };
        assert!(form.validate(true).is_ok());
    }

    #[test]
    fn test_multipart_fields_skip_empty_refs() {
        let form = UploadDocumentForm {
            doc_type: "arac".into(),
            description: "Ruhsat".into(),
            folder_id: "FOLDER-ARAC".into(),
            ..Default::default()
        };
        let fields = form.multipart_fields();
        assert_eq!(
            fields,
            vec![
                ("docType", "arac".to_string()),
                ("description", "Ruhsat".to_string()),
                ("folderId", "FOLDER-ARAC".to_string()),
            ]
        );
    }
}
