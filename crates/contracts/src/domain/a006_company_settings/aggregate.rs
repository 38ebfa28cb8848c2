use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;

/// Реквизиты компании
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logo_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_office: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub iban: String,
}

/// On/off row of the general settings list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSetting {
    pub id: String,
    pub label: String,
    pub description: String,
    pub value: bool,
}

/// Response of the combined settings endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsBundle {
    pub company: Option<CompanyInfo>,
    pub general: Vec<GeneralSetting>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_with_nulls() {
        let json = r#"{
            "company": {"name":"Demir PVC","logo":null,"logoUrl":null,"taxNumber":"123"},
            "general": [{"id":"autoBackup","label":"Auto backup","description":"Nightly","value":true}]
        }"#;
        let parsed: SettingsBundle = serde_json::from_str(json).unwrap();
        let company = parsed.company.unwrap();
        assert_eq!(company.name, "Demir PVC");
        assert_eq!(company.tax_number, "123");
        assert!(company.logo_url.is_empty());
        assert!(company.iban.is_empty());
        assert!(parsed.general[0].value);
    }

    #[test]
    fn test_company_serializes_camel_case() {
        let info = CompanyInfo {
            tax_office: "Kadıköy".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["taxOffice"], "Kadıköy");
        assert_eq!(json["phone2"], "");
    }
}
