//! Helpers of the "today's assembly" screen: job progress, available
//! task actions and photo requirements.

use serde::{Deserialize, Serialize};

use super::aggregate::{AssemblyTask, TaskStatus};

/// Задачи одного задания, запланированные на сегодня
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TodayJobGroup {
    pub job_id: String,
    pub customer_name: Option<String>,
    pub location: Option<String>,
    pub tasks: Vec<AssemblyTask>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobProgress {
    Completed,
    Blocked,
    InProgress,
    Scheduled,
}

impl JobProgress {
    pub fn label(&self) -> &'static str {
        match self {
            JobProgress::Completed => "✅ Completed",
            JobProgress::Blocked => "⛔ Waiting on issue",
            JobProgress::InProgress => "🔧 In progress",
            JobProgress::Scheduled => "📅 Scheduled",
        }
    }
}

impl TodayJobGroup {
    pub fn all_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|t| t.status == TaskStatus::Completed)
    }

    pub fn has_blocked(&self) -> bool {
        self.tasks.iter().any(|t| t.status == TaskStatus::Blocked)
    }

    pub fn job_state(&self) -> JobProgress {
        if self.all_completed() {
            JobProgress::Completed
        } else if self.has_blocked() {
            JobProgress::Blocked
        } else if self.tasks.iter().any(|t| t.status == TaskStatus::InProgress) {
            JobProgress::InProgress
        } else {
            JobProgress::Scheduled
        }
    }

    /// "Complete all at once" is offered while work remains and nothing is blocked.
    pub fn can_complete_all(&self) -> bool {
        !self.all_completed() && !self.has_blocked()
    }

    pub fn display_customer(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(&self.job_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Start,
    Complete { enabled: bool },
    ReportIssue,
    Resume,
}

pub fn available_actions(task: &AssemblyTask) -> Vec<TaskAction> {
    match task.status {
        TaskStatus::Planned => vec![TaskAction::Start],
        TaskStatus::InProgress => vec![
            TaskAction::Complete {
                enabled: !task.has_pending_issues(),
            },
            TaskAction::ReportIssue,
        ],
        TaskStatus::Blocked if !task.has_pending_issues() => vec![TaskAction::Resume],
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhotoRequirements {
    pub before_photos: bool,
    pub after_photos: bool,
    pub signature: bool,
}

impl PhotoRequirements {
    pub fn any(&self) -> bool {
        self.before_photos || self.after_photos || self.signature
    }
}

/// The first stage of a job documents the site before work,
/// the last one after work together with the customer signature.
pub fn photo_requirements(index: usize, len: usize, status: TaskStatus) -> PhotoRequirements {
    if status == TaskStatus::Completed || len == 0 {
        return PhotoRequirements::default();
    }
    let is_last = index + 1 == len;
    PhotoRequirements {
        before_photos: index == 0,
        after_photos: is_last,
        signature: is_last,
    }
}

/// What an uploaded photo documents; decides the archive doc type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPurpose {
    Before,
    After,
    Signature,
    Issue,
}

pub const FALLBACK_UPLOAD_DOC_TYPE: &str = "montaj";

impl UploadPurpose {
    pub fn doc_type(&self) -> &'static str {
        match self {
            UploadPurpose::Before => "montaj_oncesi",
            UploadPurpose::After => "montaj_sonrasi",
            UploadPurpose::Signature => "musteri_imza",
            UploadPurpose::Issue => "montaj_sorun",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UploadPurpose::Before => "Photo before assembly",
            UploadPurpose::After => "Photo after assembly",
            UploadPurpose::Signature => "Customer signature",
            UploadPurpose::Issue => "Issue photo",
        }
    }
}

/// Doc type for an optional purpose; uploads without one are filed generically.
pub fn upload_doc_type(purpose: Option<UploadPurpose>) -> &'static str {
    purpose.map(|p| p.doc_type()).unwrap_or(FALLBACK_UPLOAD_DOC_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_assembly_task::aggregate::{Issue, IssueStatus};

    fn task(status: TaskStatus) -> AssemblyTask {
        AssemblyTask {
            status,
            ..Default::default()
        }
    }

    fn group(statuses: &[TaskStatus]) -> TodayJobGroup {
        TodayJobGroup {
            job_id: "JOB-1".into(),
            tasks: statuses.iter().copied().map(task).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_job_state() {
        use TaskStatus::*;
        assert_eq!(group(&[Completed, Completed]).job_state(), JobProgress::Completed);
        assert_eq!(group(&[InProgress, Blocked]).job_state(), JobProgress::Blocked);
        assert_eq!(group(&[Completed, InProgress]).job_state(), JobProgress::InProgress);
        assert_eq!(group(&[Planned, Pending]).job_state(), JobProgress::Scheduled);
    }

    #[test]
    fn test_can_complete_all() {
        use TaskStatus::*;
        assert!(group(&[Planned, InProgress]).can_complete_all());
        assert!(!group(&[Completed, Completed]).can_complete_all());
        assert!(!group(&[Planned, Blocked]).can_complete_all());
    }

    #[test]
    fn test_actions_by_status() {
        assert_eq!(available_actions(&task(TaskStatus::Planned)), vec![TaskAction::Start]);
        assert_eq!(
            available_actions(&task(TaskStatus::InProgress)),
            vec![TaskAction::Complete { enabled: true }, TaskAction::ReportIssue]
        );
        assert_eq!(available_actions(&task(TaskStatus::Blocked)), vec![TaskAction::Resume]);
        assert!(available_actions(&task(TaskStatus::Completed)).is_empty());
        assert!(available_actions(&task(TaskStatus::Pending)).is_empty());
    }

    #[test]
    fn test_pending_issue_gates_actions() {
        let issue = Issue {
            status: IssueStatus::Pending,
            ..Default::default()
        };
        let mut t = task(TaskStatus::InProgress);
        t.issues.push(issue);
        assert_eq!(available_actions(&t)[0], TaskAction::Complete { enabled: false });

        t.status = TaskStatus::Blocked;
        assert!(available_actions(&t).is_empty());

        t.issues[0].status = IssueStatus::Resolved;
        assert_eq!(available_actions(&t), vec![TaskAction::Resume]);
    }

    #[test]
    fn test_photo_requirements() {
        let first = photo_requirements(0, 3, TaskStatus::Planned);
        assert!(first.before_photos && !first.after_photos && !first.signature);

        let middle = photo_requirements(1, 3, TaskStatus::InProgress);
        assert!(!middle.any());

        let last = photo_requirements(2, 3, TaskStatus::InProgress);
        assert!(last.after_photos && last.signature && !last.before_photos);

        let only = photo_requirements(0, 1, TaskStatus::Planned);
        assert!(only.before_photos && only.after_photos);

        assert!(!photo_requirements(0, 3, TaskStatus::Completed).any());
    }

    #[test]
    fn test_upload_doc_types() {
        assert_eq!(upload_doc_type(Some(UploadPurpose::Signature)), "musteri_imza");
        assert_eq!(upload_doc_type(None), "montaj");
    }

    #[test]
    fn test_today_group_from_backend() {
        let json = r#"[{"jobId":"JOB-3","customerName":"Ayşe","location":"Üsküdar",
            "tasks":[{"id":"ASM-1","jobId":"JOB-3","status":"planned","stageOrder":1}]}]"#;
        let groups: Vec<TodayJobGroup> = serde_json::from_str(json).unwrap();
        assert_eq!(groups[0].display_customer(), "Ayşe");
        assert_eq!(groups[0].tasks[0].stage_order, 1);
    }
}
