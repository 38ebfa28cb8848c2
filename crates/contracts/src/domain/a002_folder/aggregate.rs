use serde::{Deserialize, Serialize};

use crate::shared::validation::ValidationError;

/// Root folder that holds the company document subfolders.
pub const COMPANY_ROOT_FOLDER_ID: &str = "FOLDER-SIRKET";
pub const COMPANY_FOLDER_CATEGORY: &str = "company";

pub const DEFAULT_FOLDER_ICON: &str = "📁";
pub const DEFAULT_FOLDER_COLOR: &str = "#6b7280";

/// Palette offered by the new folder form.
pub const FOLDER_COLORS: &[&str] = &[
    "#6b7280", "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6",
];

pub const FOLDER_ICONS: &[&str] = &["📁", "🚗", "🏭", "🏠", "📋", "💼", "🔧", "📦"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub category: Option<String>,
    pub parent_id: Option<String>,
    pub subfolders: Vec<Folder>,
}

impl Folder {
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_FOLDER_ICON)
    }

    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_FOLDER_COLOR)
    }
}

/// Subfolders of the company root folder; empty when the root is absent.
pub fn company_subfolders(folders: &[Folder]) -> Vec<Folder> {
    folders
        .iter()
        .find(|f| f.id == COMPANY_ROOT_FOLDER_ID)
        .map(|f| f.subfolders.clone())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderDto {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub category: String,
    pub parent_id: String,
}

impl CreateFolderDto {
    /// New company subfolder under the company root.
    pub fn company(name: &str, icon: &str, color: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingFolderName);
        }
        Ok(Self {
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            category: COMPANY_FOLDER_CATEGORY.to_string(),
            parent_id: COMPANY_ROOT_FOLDER_ID.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_subfolders() {
        let json = r##"[
            {"id":"FOLDER-ISLER","name":"İşler","subfolders":[{"id":"X","name":"x"}]},
            {"id":"FOLDER-SIRKET","name":"Şirket","subfolders":[
                {"id":"FOLDER-ARAC","name":"Araçlar","icon":"🚗","color":"#f59e0b"},
                {"id":"FOLDER-OFIS","name":"Ofis"}
            ]}
        ]"##;
        let folders: Vec<Folder> = serde_json::from_str(json).unwrap();
        let subs = company_subfolders(&folders);
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].icon_or_default(), "🚗");
        assert_eq!(subs[1].color_or_default(), DEFAULT_FOLDER_COLOR);
        assert!(company_subfolders(&folders[..1]).is_empty());
    }

    #[test]
    fn test_create_company_folder() {
        assert_eq!(
            CreateFolderDto::company("   ", "📁", "#000"),
            Err(ValidationError::MissingFolderName)
        );
        let dto = CreateFolderDto::company(" Sigorta ", "💼", "#3b82f6").unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["name"], "Sigorta");
        assert_eq!(json["category"], "company");
        assert_eq!(json["parentId"], "FOLDER-SIRKET");
    }
}
