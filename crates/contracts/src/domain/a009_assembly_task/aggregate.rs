use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::date_key::{days_until, parse_date_key};

// ============================================================================
// Enums
// ============================================================================

/// Статус монтажной задачи. Переходы контролирует backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Planned,
    InProgress,
    Completed,
    Blocked,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Pending,
        TaskStatus::Planned,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Blocked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Planned => "planned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Waiting",
            TaskStatus::Planned => "Planned",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Blocked => "On hold",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "⏳",
            TaskStatus::Planned => "📅",
            TaskStatus::InProgress => "🔧",
            TaskStatus::Completed => "✅",
            TaskStatus::Blocked => "⛔",
        }
    }

    /// CSS colour token used by status chips and badges
    pub fn color(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "var(--text-muted)",
            TaskStatus::Planned => "var(--info)",
            TaskStatus::InProgress => "var(--warning)",
            TaskStatus::Completed => "var(--success)",
            TaskStatus::Blocked => "var(--danger)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    #[default]
    Broken,
    Missing,
    Wrong,
    Damage,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 5] = [
        IssueType::Broken,
        IssueType::Missing,
        IssueType::Wrong,
        IssueType::Damage,
        IssueType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Broken => "broken",
            IssueType::Missing => "missing",
            IssueType::Wrong => "wrong",
            IssueType::Damage => "damage",
            IssueType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueType::Broken => "Broken / defective",
            IssueType::Missing => "Missing material",
            IssueType::Wrong => "Wrong product",
            IssueType::Damage => "Damage (transport / assembly)",
            IssueType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultSource {
    Production,
    #[default]
    Team,
    Accident,
}

impl FaultSource {
    pub const ALL: [FaultSource; 3] = [FaultSource::Production, FaultSource::Team, FaultSource::Accident];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaultSource::Production => "production",
            FaultSource::Team => "team",
            FaultSource::Accident => "accident",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FaultSource::Production => "Production fault (supplier)",
            FaultSource::Team => "Team fault",
            FaultSource::Accident => "Accident",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    #[default]
    Pending,
    Resolved,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Проблема, зафиксированная во время монтажа
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub item: String,
    pub quantity: u32,
    pub fault_source: FaultSource,
    pub responsible_person_id: Option<String>,
    pub photo_url: Option<String>,
    pub note: Option<String>,
    pub status: IssueStatus,
    pub replacement_order_id: Option<String>,
    pub created_at: Option<String>,
    pub resolved_at: Option<String>,
}

impl Issue {
    pub fn is_pending(&self) -> bool {
        self.status == IssueStatus::Pending
    }

    /// Only issues with a linked replacement order can be closed from the field.
    pub fn can_resolve(&self) -> bool {
        self.is_pending()
            && self
                .replacement_order_id
                .as_deref()
                .map(|id| !id.is_empty())
                .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPhotos {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Монтажная задача: один этап одного направления работ в рамках задания
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssemblyTask {
    pub id: String,
    pub job_id: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub location: Option<String>,

    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub stage_id: Option<String>,
    pub stage_name: Option<String>,
    pub stage_order: i32,

    pub status: TaskStatus,
    /// `YYYY-MM-DD` or a full timestamp
    pub planned_date: Option<String>,
    /// Срок, обещанный клиенту
    pub estimated_date: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,

    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub assigned_personnel: Vec<String>,

    pub note: Option<String>,
    pub photos: TaskPhotos,
    pub customer_signature: Option<String>,
    pub issues: Vec<Issue>,

    // Вычисляемые backend'ом поля
    pub is_overdue: Option<bool>,
    pub days_until_estimated: Option<i64>,
    pub days_until_planned: Option<i64>,
}

impl AssemblyTask {
    pub fn planned_day(&self) -> Option<NaiveDate> {
        self.planned_date.as_deref().and_then(parse_date_key)
    }

    pub fn estimated_day(&self) -> Option<NaiveDate> {
        self.estimated_date.as_deref().and_then(parse_date_key)
    }

    /// Completed tasks are fixed on the calendar.
    pub fn is_draggable(&self) -> bool {
        self.status != TaskStatus::Completed
    }

    pub fn pending_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_pending())
    }

    pub fn has_pending_issues(&self) -> bool {
        self.pending_issues().next().is_some()
    }

    /// Past the customer due date and not completed.
    pub fn compute_overdue(&self, today: NaiveDate) -> bool {
        match self.estimated_day() {
            Some(estimated) => today > estimated && self.status != TaskStatus::Completed,
            None => false,
        }
    }

    /// Backend flag when present, otherwise computed against `today`.
    pub fn overdue_on(&self, today: NaiveDate) -> bool {
        self.is_overdue.unwrap_or_else(|| self.compute_overdue(today))
    }

    pub fn matches_team(&self, team_id: Option<&str>) -> bool {
        match team_id {
            Some(team) => self.team_id.as_deref() == Some(team),
            None => true,
        }
    }

    /// "Role - Stage" caption
    pub fn title(&self) -> String {
        format!(
            "{} - {}",
            self.role_name.as_deref().unwrap_or("-"),
            self.stage_name.as_deref().unwrap_or("-")
        )
    }

    /// "due in 3 days" / "due today" / "2 days late"; none once completed
    /// or without a due date. Backend `daysUntilEstimated` wins when sent.
    pub fn due_hint(&self, today: NaiveDate) -> Option<String> {
        if self.status == TaskStatus::Completed || self.estimated_day().is_none() {
            return None;
        }
        let days = self
            .days_until_estimated
            .unwrap_or_else(|| days_until(self.estimated_date.as_deref(), today));
        Some(match days {
            0 => "due today".to_string(),
            1 => "due tomorrow".to_string(),
            d if d > 0 => format!("due in {} days", d),
            -1 => "1 day late".to_string(),
            d => format!("{} days late", -d),
        })
    }

    /// Order badge on the today page: the stage order, or ✓ once completed.
    pub fn order_badge(&self) -> String {
        if self.status == TaskStatus::Completed {
            "✓".to_string()
        } else {
            self.stage_order.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_deserialize_backend_task() {
        let json = r#"{
            "id": "ASM-20240301-ab12",
            "jobId": "JOB-7",
            "roleId": "ROLE-01",
            "roleName": "PVC",
            "stageId": "ST-1",
            "stageName": "Söküm",
            "stageOrder": 1,
            "customerName": "Ali Veli",
            "location": "Kadıköy",
            "estimatedDate": "2024-03-10",
            "plannedDate": "2024-03-05T00:00:00",
            "startedAt": null,
            "teamId": "T1",
            "teamName": "Ekip A",
            "assignedPersonnel": [],
            "status": "in_progress",
            "photos": {"before": ["/f/1.jpg"], "after": []},
            "issues": [
                {"id":"ISS-1","type":"missing","item":"Kol","quantity":2,"faultSource":"production",
                 "status":"pending","replacementOrderId":"PROD-9","createdAt":"2024-03-05T09:00:00"},
                {"id":"ISS-0","type":"broken","item":"Cam","quantity":1,"faultSource":"team","status":"resolved"}
            ],
            "isOverdue": false,
            "daysUntilEstimated": 5
        }"#;
        let task: AssemblyTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.planned_day(), Some(d(2024, 3, 5)));
        assert_eq!(task.estimated_day(), Some(d(2024, 3, 10)));
        assert_eq!(task.photos.before.len(), 1);
        assert_eq!(task.pending_issues().count(), 1);
        assert!(task.issues[0].can_resolve());
        assert!(!task.issues[1].can_resolve());
        assert_eq!(task.issues[0].issue_type, IssueType::Missing);
        assert_eq!(task.title(), "PVC - Söküm");
    }

    #[test]
    fn test_status_wire_names() {
        for status in TaskStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_overdue_rules() {
        let today = d(2024, 3, 11);
        let mut task = AssemblyTask {
            estimated_date: Some("2024-03-10".into()),
            status: TaskStatus::Planned,
            ..Default::default()
        };
        assert!(task.compute_overdue(today));
        assert!(!task.compute_overdue(d(2024, 3, 10)));

        task.status = TaskStatus::Completed;
        assert!(!task.compute_overdue(today));

        task.status = TaskStatus::Planned;
        task.estimated_date = None;
        assert!(!task.compute_overdue(today));
    }

    #[test]
    fn test_backend_overdue_flag_wins() {
        let today = d(2024, 3, 11);
        let task = AssemblyTask {
            estimated_date: Some("2024-03-10".into()),
            is_overdue: Some(false),
            ..Default::default()
        };
        assert!(!task.overdue_on(today));
        let task = AssemblyTask { is_overdue: None, ..task };
        assert!(task.overdue_on(today));
    }

    #[test]
    fn test_completed_is_not_draggable() {
        for status in TaskStatus::ALL {
            let task = AssemblyTask { status, ..Default::default() };
            assert_eq!(task.is_draggable(), status != TaskStatus::Completed);
        }
    }

    #[test]
    fn test_order_badge_uses_stage_order() {
        let mut task = AssemblyTask {
            stage_order: 3,
            status: TaskStatus::InProgress,
            ..Default::default()
        };
        assert_eq!(task.order_badge(), "3");
        task.status = TaskStatus::Completed;
        assert_eq!(task.order_badge(), "✓");
    }

    #[test]
    fn test_due_hint() {
        let today = d(2024, 3, 10);
        let mut task = AssemblyTask {
            estimated_date: Some("2024-03-13".into()),
            status: TaskStatus::Planned,
            ..Default::default()
        };
        assert_eq!(task.due_hint(today).as_deref(), Some("due in 3 days"));
        task.estimated_date = Some("2024-03-10T08:00:00".into());
        assert_eq!(task.due_hint(today).as_deref(), Some("due today"));
        task.estimated_date = Some("2024-03-07".into());
        assert_eq!(task.due_hint(today).as_deref(), Some("3 days late"));
        task.days_until_estimated = Some(1);
        assert_eq!(task.due_hint(today).as_deref(), Some("due tomorrow"));
        task.status = TaskStatus::Completed;
        assert_eq!(task.due_hint(today), None);
        assert_eq!(AssemblyTask::default().due_hint(today), None);
    }

    #[test]
    fn test_issue_enum_parse() {
        assert_eq!(IssueType::parse("damage"), Some(IssueType::Damage));
        assert_eq!(IssueType::parse("nope"), None);
        assert_eq!(FaultSource::parse("accident"), Some(FaultSource::Accident));
        assert_eq!(FaultSource::default(), FaultSource::Team);
    }
}
