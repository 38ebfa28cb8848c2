pub mod calendar;
pub mod status;
pub mod task_detail;
pub mod today;

use contracts::domain::a009_assembly_task::aggregate::AssemblyTask;
use contracts::domain::a009_assembly_task::schedule::plan_reschedule;
use chrono::NaiveDate;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::dialogs::{alert, confirm};

/// Moves `task` to `target`: confirmation gate when the date is past the
/// customer due date, then the backend update. `on_done` runs only after
/// a successful update; nothing is patched locally.
pub fn reschedule_task(
    task: &AssemblyTask,
    target: NaiveDate,
    set_busy: impl Fn(bool) + 'static,
    on_done: impl FnOnce() + 'static,
) {
    let plan = match plan_reschedule(task, target) {
        Ok(plan) => plan,
        Err(e) => {
            alert(&e.to_string());
            return;
        }
    };
    let due = task.estimated_date.as_deref().map(format_date);
    let warning = plan.overdue_warning(due.as_deref());
    let Some(plan) = plan.resolve(|| confirm(&warning)) else {
        log::info!("Reschedule of {} declined", task.id);
        return;
    };

    set_busy(true);
    spawn_local(async move {
        match api::update_task(&plan.task_id, &plan.update).await {
            Ok(_) => {
                log::info!(
                    "Task {} planned for {}",
                    plan.task_id,
                    plan.update.planned_date.as_deref().unwrap_or("-")
                );
                on_done();
            }
            Err(e) => {
                log::error!("Failed to reschedule task {}: {}", plan.task_id, e);
                alert(&e.to_string());
            }
        }
        set_busy(false);
    });
}
