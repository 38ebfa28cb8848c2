//! Раскладка задач по датам календаря и перенос задачи drag-and-drop'ом.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use super::aggregate::{AssemblyTask, TaskStatus};
use super::request::UpdateAssemblyTaskDto;
use crate::shared::date_key::format_date_key;

/// Tasks grouped by planned date, in arrival order within each date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBuckets {
    pub by_date: BTreeMap<NaiveDate, Vec<AssemblyTask>>,
    pub unplanned: Vec<AssemblyTask>,
}

/// Groups tasks by planned date. Tasks without a parseable planned date
/// go to `unplanned`. The team filter applies to both.
pub fn bucket_tasks(tasks: &[AssemblyTask], team_filter: Option<&str>) -> TaskBuckets {
    let mut buckets = TaskBuckets::default();
    for task in tasks.iter().filter(|t| t.matches_team(team_filter)) {
        match task.planned_day() {
            Some(day) => buckets.by_date.entry(day).or_default().push(task.clone()),
            None => buckets.unplanned.push(task.clone()),
        }
    }
    buckets
}

impl TaskBuckets {
    pub fn tasks_on(&self, day: NaiveDate) -> &[AssemblyTask] {
        self.by_date.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of tasks placed on the calendar.
    pub fn planned_count(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    /// Unplanned tasks still awaiting work, first `limit` of them.
    pub fn open_unplanned(&self, limit: usize) -> Vec<&AssemblyTask> {
        self.unplanned
            .iter()
            .filter(|t| t.status != TaskStatus::Completed)
            .take(limit)
            .collect()
    }

    pub fn open_unplanned_total(&self) -> usize {
        self.unplanned
            .iter()
            .filter(|t| t.status != TaskStatus::Completed)
            .count()
    }
}

/// Returns the visible head of a cell and how many entries are hidden behind "+N".
pub fn visible_slice<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RescheduleError {
    #[error("Completed tasks cannot be moved")]
    Completed,
}

/// Backend update produced by dropping a task onto a day
#[derive(Debug, Clone, PartialEq)]
pub struct ReschedulePlan {
    pub task_id: String,
    pub update: UpdateAssemblyTaskDto,
    /// The target day is after the date promised to the customer
    pub requires_confirmation: bool,
}

pub fn plan_reschedule(
    task: &AssemblyTask,
    target: NaiveDate,
) -> Result<ReschedulePlan, RescheduleError> {
    if !task.is_draggable() {
        return Err(RescheduleError::Completed);
    }
    let requires_confirmation = task
        .estimated_day()
        .map(|estimated| target > estimated)
        .unwrap_or(false);

    Ok(ReschedulePlan {
        task_id: task.id.clone(),
        update: UpdateAssemblyTaskDto {
            planned_date: Some(format_date_key(target)),
            status: Some(TaskStatus::Planned),
            ..Default::default()
        },
        requires_confirmation,
    })
}

impl ReschedulePlan {
    /// Runs the confirmation gate. `confirm` is only asked when needed;
    /// `None` means the user declined and nothing must be sent.
    pub fn resolve(self, confirm: impl FnOnce() -> bool) -> Option<ReschedulePlan> {
        if self.requires_confirmation && !confirm() {
            return None;
        }
        Some(self)
    }

    pub fn overdue_warning(&self, estimated: Option<&str>) -> String {
        format!(
            "The selected date is after the customer due date ({}). Continue anyway?",
            estimated.unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn task(id: &str, planned: Option<&str>) -> AssemblyTask {
        AssemblyTask {
            id: id.to_string(),
            planned_date: planned.map(str::to_string),
            status: TaskStatus::Planned,
            ..Default::default()
        }
    }

    fn ids(tasks: &[AssemblyTask]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_bucket_by_planned_date() {
        let tasks = vec![
            task("1", Some("2024-03-05")),
            task("2", None),
            task("3", Some("2024-03-05")),
        ];
        let buckets = bucket_tasks(&tasks, None);

        assert_eq!(buckets.by_date.len(), 1);
        assert_eq!(ids(buckets.tasks_on(d(2024, 3, 5))), vec!["1", "3"]);
        assert_eq!(ids(&buckets.unplanned), vec!["2"]);
        assert!(buckets.tasks_on(d(2024, 3, 6)).is_empty());
    }

    #[test]
    fn test_bucket_counts_add_up() {
        let tasks = vec![
            task("1", Some("2024-03-05T10:00:00")),
            task("2", Some("not a date")),
            task("3", Some("2024-03-07")),
            task("4", None),
            task("5", Some("2024-03-05")),
        ];
        let buckets = bucket_tasks(&tasks, None);
        assert_eq!(buckets.planned_count() + buckets.unplanned.len(), tasks.len());
        assert_eq!(ids(buckets.tasks_on(d(2024, 3, 5))), vec!["1", "5"]);
        assert_eq!(ids(&buckets.unplanned), vec!["2", "4"]);
    }

    #[test]
    fn test_team_filter_applies_to_both_lists() {
        let mut a = task("a", Some("2024-03-05"));
        a.team_id = Some("T1".into());
        let mut b = task("b", Some("2024-03-05"));
        b.team_id = Some("T2".into());
        let mut c = task("c", None);
        c.team_id = Some("T2".into());
        let d_task = task("d", None);

        let buckets = bucket_tasks(&[a, b, c, d_task], Some("T2"));
        assert_eq!(ids(buckets.tasks_on(d(2024, 3, 5))), vec!["b"]);
        assert_eq!(ids(&buckets.unplanned), vec!["c"]);
    }

    #[test]
    fn test_open_unplanned_skips_completed() {
        let mut done = task("done", None);
        done.status = TaskStatus::Completed;
        let tasks = vec![task("1", None), done, task("2", None), task("3", None)];
        let buckets = bucket_tasks(&tasks, None);

        let open: Vec<&str> = buckets.open_unplanned(2).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(open, vec!["1", "2"]);
        assert_eq!(buckets.open_unplanned_total(), 3);
    }

    #[test]
    fn test_visible_slice() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(visible_slice(&items, 3), (&items[..3], 2));
        assert_eq!(visible_slice(&items, 20), (&items[..], 0));
        let empty: [i32; 0] = [];
        assert_eq!(visible_slice(&empty, 3).1, 0);
    }

    #[test]
    fn test_reschedule_sets_date_and_status() {
        let mut t = task("ASM-1", Some("2024-03-01"));
        t.status = TaskStatus::Pending;
        let plan = plan_reschedule(&t, d(2024, 3, 8)).unwrap();
        assert_eq!(plan.task_id, "ASM-1");
        assert_eq!(plan.update.planned_date.as_deref(), Some("2024-03-08"));
        assert_eq!(plan.update.status, Some(TaskStatus::Planned));
        assert!(!plan.requires_confirmation);
    }

    #[test]
    fn test_confirmation_only_after_estimated_date() {
        let mut t = task("ASM-1", None);
        t.estimated_date = Some("2024-03-10T00:00:00".into());

        assert!(!plan_reschedule(&t, d(2024, 3, 10)).unwrap().requires_confirmation);
        assert!(plan_reschedule(&t, d(2024, 3, 11)).unwrap().requires_confirmation);
    }

    #[test]
    fn test_declined_confirmation_aborts() {
        let mut t = task("ASM-1", Some("2024-03-01"));
        t.estimated_date = Some("2024-03-10".into());
        let plan = plan_reschedule(&t, d(2024, 3, 12)).unwrap();
        assert!(plan.clone().resolve(|| false).is_none());
        assert_eq!(plan.resolve(|| true).map(|p| p.task_id), Some("ASM-1".to_string()));
        // planned date on the task itself is untouched by planning
        assert_eq!(t.planned_date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_confirm_not_asked_when_not_required() {
        let t = task("ASM-1", None);
        let plan = plan_reschedule(&t, d(2024, 3, 12)).unwrap();
        let resolved = plan.resolve(|| panic!("confirmation must not be requested"));
        assert!(resolved.is_some());
    }

    #[test]
    fn test_completed_task_cannot_be_rescheduled() {
        let mut t = task("ASM-1", Some("2024-03-01"));
        t.status = TaskStatus::Completed;
        assert_eq!(plan_reschedule(&t, d(2024, 3, 2)), Err(RescheduleError::Completed));
    }
}
