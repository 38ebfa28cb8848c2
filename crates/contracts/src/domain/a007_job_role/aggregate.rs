use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;
use crate::shared::validation::ValidationError;

pub const DEFAULT_ESTIMATED_DAYS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionType {
    #[default]
    Internal,
    External,
}

impl ProductionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductionType::Internal => "internal",
            ProductionType::External => "external",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductionType::Internal => "In-house production",
            ProductionType::External => "External order",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "external" => ProductionType::External,
            _ => ProductionType::Internal,
        }
    }
}

/// Этап монтажа внутри направления работ
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyStage {
    /// `None` for stages added in the form and not yet saved
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub order: u32,
}

/// Направление работ (iş kolu) с настройками производства и этапами монтажа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobRoleConfig {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub production_type: ProductionType,
    pub requires_glass: bool,
    pub default_glass_supplier: Option<String>,
    pub default_supplier: Option<String>,
    pub estimated_days: u32,
    pub active: bool,
    pub assembly_stages: Vec<AssemblyStage>,
}

impl Default for JobRoleConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: None,
            production_type: ProductionType::Internal,
            requires_glass: false,
            default_glass_supplier: None,
            default_supplier: None,
            estimated_days: DEFAULT_ESTIMATED_DAYS,
            active: true,
            assembly_stages: Vec::new(),
        }
    }
}

/// Create/update payload of a job role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleDto {
    pub name: String,
    pub description: String,
    pub production_type: ProductionType,
    pub requires_glass: bool,
    pub default_glass_supplier: Option<String>,
    pub default_supplier: Option<String>,
    pub estimated_days: u32,
    pub active: bool,
    pub assembly_stages: Vec<AssemblyStage>,
}

impl Default for JobRoleDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            production_type: ProductionType::Internal,
            requires_glass: false,
            default_glass_supplier: None,
            default_supplier: None,
            estimated_days: DEFAULT_ESTIMATED_DAYS,
            active: true,
            assembly_stages: Vec::new(),
        }
    }
}

impl From<&JobRoleConfig> for JobRoleDto {
    fn from(role: &JobRoleConfig) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone().unwrap_or_default(),
            production_type: role.production_type,
            requires_glass: role.requires_glass,
            default_glass_supplier: role.default_glass_supplier.clone(),
            default_supplier: role.default_supplier.clone(),
            estimated_days: if role.estimated_days == 0 {
                DEFAULT_ESTIMATED_DAYS
            } else {
                role.estimated_days
            },
            active: role.active,
            assembly_stages: role.assembly_stages.clone(),
        }
    }
}

impl JobRoleDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRoleName);
        }
        Ok(())
    }

    pub fn add_stage(&mut self) {
        self.assembly_stages.push(AssemblyStage {
            id: None,
            name: String::new(),
            order: self.assembly_stages.len() as u32 + 1,
        });
    }

    pub fn rename_stage(&mut self, index: usize, name: String) {
        if let Some(stage) = self.assembly_stages.get_mut(index) {
            stage.name = name;
        }
    }

    /// Swap with the previous stage; no-op for the first one.
    pub fn move_stage_up(&mut self, index: usize) {
        if index == 0 || index >= self.assembly_stages.len() {
            return;
        }
        self.assembly_stages.swap(index - 1, index);
        self.renumber_stages();
    }

    /// Swap with the next stage; no-op for the last one.
    pub fn move_stage_down(&mut self, index: usize) {
        if index + 1 >= self.assembly_stages.len() {
            return;
        }
        self.assembly_stages.swap(index, index + 1);
        self.renumber_stages();
    }

    pub fn remove_stage(&mut self, index: usize) {
        if index >= self.assembly_stages.len() {
            return;
        }
        self.assembly_stages.remove(index);
        self.renumber_stages();
    }

    fn renumber_stages(&mut self) {
        for (i, stage) in self.assembly_stages.iter_mut().enumerate() {
            stage.order = i as u32 + 1;
        }
    }
}

/// Parse the estimated days input; anything that is not a positive number
/// falls back to the default.
pub fn parse_estimated_days(value: &str) -> u32 {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|d| *d > 0)
        .unwrap_or(DEFAULT_ESTIMATED_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_names(dto: &JobRoleDto) -> Vec<(&str, u32)> {
        dto.assembly_stages
            .iter()
            .map(|s| (s.name.as_str(), s.order))
            .collect()
    }

    fn with_stages(names: &[&str]) -> JobRoleDto {
        let mut dto = JobRoleDto::default();
        for (i, name) in names.iter().enumerate() {
            dto.add_stage();
            dto.rename_stage(i, name.to_string());
        }
        dto
    }

    #[test]
    fn test_add_stage_appends_with_next_order() {
        let dto = with_stages(&["Söküm", "PVC Montaj"]);
        assert_eq!(stage_names(&dto), vec![("Söküm", 1), ("PVC Montaj", 2)]);
        assert!(dto.assembly_stages.iter().all(|s| s.id.is_none()));
    }

    #[test]
    fn test_move_stages_renumbers() {
        let mut dto = with_stages(&["A", "B", "C"]);
        dto.move_stage_up(2);
        assert_eq!(stage_names(&dto), vec![("A", 1), ("C", 2), ("B", 3)]);
        dto.move_stage_down(0);
        assert_eq!(stage_names(&dto), vec![("C", 1), ("A", 2), ("B", 3)]);
    }

    #[test]
    fn test_move_out_of_bounds_is_noop() {
        let mut dto = with_stages(&["A", "B"]);
        dto.move_stage_up(0);
        dto.move_stage_down(1);
        dto.move_stage_down(7);
        dto.remove_stage(9);
        assert_eq!(stage_names(&dto), vec![("A", 1), ("B", 2)]);
    }

    #[test]
    fn test_remove_stage_renumbers() {
        let mut dto = with_stages(&["A", "B", "C", "D"]);
        dto.remove_stage(1);
        assert_eq!(stage_names(&dto), vec![("A", 1), ("C", 2), ("D", 3)]);
    }

    #[test]
    fn test_role_name_required() {
        let mut dto = JobRoleDto::default();
        assert_eq!(dto.validate(), Err(ValidationError::MissingRoleName));
        dto.name = "PVC".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_from_backend_role() {
        let json = r#"{
            "id": "ROLE-01",
            "name": "Cam Balkon",
            "description": null,
            "productionType": "external",
            "requiresGlass": true,
            "defaultGlassSupplier": "SUP-3",
            "estimatedDays": 0,
            "assemblyStages": [{"id":"ST-1","name":"Ray","order":1}]
        }"#;
        let role: JobRoleConfig = serde_json::from_str(json).unwrap();
        assert!(role.active);
        let dto = JobRoleDto::from(&role);
        assert_eq!(dto.production_type, ProductionType::External);
        assert_eq!(dto.estimated_days, DEFAULT_ESTIMATED_DAYS);
        assert_eq!(dto.description, "");
        assert_eq!(dto.assembly_stages[0].id.as_deref(), Some("ST-1"));

        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body["productionType"], "external");
        assert_eq!(body["assemblyStages"][0]["order"], 1);
    }

    #[test]
    fn test_parse_estimated_days() {
        assert_eq!(parse_estimated_days("12"), 12);
        assert_eq!(parse_estimated_days(" 3 "), 3);
        assert_eq!(parse_estimated_days("0"), DEFAULT_ESTIMATED_DAYS);
        assert_eq!(parse_estimated_days("abc"), DEFAULT_ESTIMATED_DAYS);
        assert_eq!(parse_estimated_days(""), DEFAULT_ESTIMATED_DAYS);
    }
}
