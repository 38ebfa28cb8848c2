use serde::{Deserialize, Serialize};

use super::aggregate::{AssemblyTask, Issue};

/// Ответ на регистрацию проблемы
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportIssueResponse {
    pub issue: Issue,
    pub task: AssemblyTask,
    pub replacement_order_id: Option<String>,
}

/// Ответ на завершение всех задач задания
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleteAllResponse {
    pub completed: usize,
    pub tasks: Vec<AssemblyTask>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_issue_response() {
        let json = r#"{
            "issue": {"id":"ISS-1","type":"wrong","item":"Profil","quantity":3,"faultSource":"production","status":"pending","replacementOrderId":"PROD-1"},
            "task": {"id":"ASM-1","jobId":"JOB-1","status":"blocked"},
            "replacementOrderId": "PROD-1"
        }"#;
        let resp: ReportIssueResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.replacement_order_id.as_deref(), Some("PROD-1"));
        assert!(resp.issue.can_resolve());
        assert_eq!(resp.task.status, super::super::aggregate::TaskStatus::Blocked);
    }
}
