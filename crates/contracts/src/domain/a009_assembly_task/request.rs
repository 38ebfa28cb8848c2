use serde::{Deserialize, Serialize};

use super::aggregate::{FaultSource, IssueType, TaskStatus};
use crate::shared::validation::ValidationError;

/// Query filter for the task list endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdue: Option<bool>,
}

impl TaskListFilter {
    pub fn for_job(job_id: impl Into<String>) -> Self {
        Self {
            job_id: Some(job_id.into()),
            ..Default::default()
        }
    }

    /// Query string without the leading `?`; empty when no filter is set.
    pub fn to_query(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Partial update of a task; absent fields are left untouched by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssemblyTaskDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_personnel: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTaskDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Evidence collected by the completion form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionForm {
    pub photos_before: Vec<String>,
    pub photos_after: Vec<String>,
    pub customer_signature: String,
    pub note: String,
}

impl CompletionForm {
    fn note(&self) -> Option<String> {
        Some(self.note.trim().to_string()).filter(|n| !n.is_empty())
    }

    fn signature(&self) -> Option<String> {
        Some(self.customer_signature.clone()).filter(|s| !s.is_empty())
    }

    pub fn to_complete_dto(&self) -> CompleteTaskDto {
        CompleteTaskDto {
            end_time: None,
            note: self.note(),
            photos_before: self.photos_before.clone(),
            photos_after: self.photos_after.clone(),
            customer_signature: self.signature(),
        }
    }

    pub fn to_complete_all_dto(&self) -> CompleteAllTasksDto {
        CompleteAllTasksDto {
            completed_date: None,
            note: self.note(),
            photos_before: self.photos_before.clone(),
            photos_after: self.photos_after.clone(),
            customer_signature: self.signature(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTaskDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub photos_before: Vec<String>,
    pub photos_after: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_signature: Option<String>,
}

/// Completion of every task of one job at once. The backend attaches
/// before photos to the first stage and after photos plus the signature
/// to the last stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteAllTasksDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub photos_before: Vec<String>,
    pub photos_after: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportIssueDto {
    pub issue_type: IssueType,
    pub item: String,
    pub quantity: u32,
    pub fault_source: FaultSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub create_replacement: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement_supplier_id: Option<String>,
}

impl Default for ReportIssueDto {
    fn default() -> Self {
        Self {
            issue_type: IssueType::Broken,
            item: String::new(),
            quantity: 1,
            fault_source: FaultSource::Team,
            responsible_person_id: None,
            photo_url: None,
            note: None,
            create_replacement: true,
            replacement_supplier_id: None,
        }
    }
}

impl ReportIssueDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.item.trim().is_empty() {
            return Err(ValidationError::MissingIssueItem);
        }
        Ok(())
    }
}

/// Quantity input: non-numeric or below one becomes one.
pub fn parse_quantity(value: &str) -> u32 {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|q| *q >= 1)
        .and_then(|q| u32::try_from(q).ok())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query() {
        assert_eq!(TaskListFilter::default().to_query(), "");
        let filter = TaskListFilter {
            team_id: Some("T1".into()),
            status: Some(TaskStatus::InProgress),
            overdue: Some(true),
            ..TaskListFilter::for_job("JOB-1")
        };
        assert_eq!(
            filter.to_query(),
            "jobId=JOB-1&teamId=T1&status=in_progress&overdue=true"
        );
    }

    #[test]
    fn test_update_dto_skips_absent_fields() {
        let dto = UpdateAssemblyTaskDto {
            planned_date: Some("2024-03-05".into()),
            status: Some(TaskStatus::Planned),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"plannedDate":"2024-03-05","status":"planned"}"#
        );
    }

    #[test]
    fn test_completion_form_mapping() {
        let form = CompletionForm {
            photos_before: vec!["/b.jpg".into()],
            photos_after: vec![],
            customer_signature: String::new(),
            note: "  ".into(),
        };
        let dto = form.to_complete_dto();
        assert_eq!(dto.note, None);
        assert_eq!(dto.customer_signature, None);
        assert_eq!(dto.photos_before, vec!["/b.jpg".to_string()]);

        let json = serde_json::to_value(form.to_complete_all_dto()).unwrap();
        assert_eq!(json["photosBefore"][0], "/b.jpg");
        assert!(json.get("customerSignature").is_none());
    }

    #[test]
    fn test_issue_defaults_and_validation() {
        let mut dto = ReportIssueDto::default();
        assert_eq!(dto.quantity, 1);
        assert!(dto.create_replacement);
        assert_eq!(dto.fault_source, FaultSource::Team);
        assert_eq!(dto.validate(), Err(ValidationError::MissingIssueItem));

        dto.item = "Kapı kolu".into();
        assert!(dto.validate().is_ok());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["issueType"], "broken");
        assert_eq!(json["faultSource"], "team");
        assert_eq!(json["createReplacement"], true);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("4"), 4);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-3"), 1);
        assert_eq!(parse_quantity("x"), 1);
        assert_eq!(parse_quantity(""), 1);
    }
}
