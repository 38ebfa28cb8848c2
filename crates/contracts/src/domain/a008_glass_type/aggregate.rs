use serde::{Deserialize, Serialize};

use crate::shared::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassType {
    pub id: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlassTypeDto {
    pub name: String,
    pub code: String,
}

impl GlassTypeDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.code.trim().is_empty() {
            return Err(ValidationError::MissingGlassFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_fields_required() {
        let mut dto = GlassTypeDto {
            name: "Low-E".into(),
            code: "  ".into(),
        };
        assert_eq!(dto.validate(), Err(ValidationError::MissingGlassFields));
        dto.code = "LE4".into();
        assert!(dto.validate().is_ok());
        dto.name.clear();
        assert_eq!(dto.validate(), Err(ValidationError::MissingGlassFields));
    }
}
