use super::reschedule_task;
use super::status::TaskStatusChip;
use crate::domain::a003_job::ui::open_job_tab;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::DateInput;
use crate::shared::date_utils::{format_optional_date, today_local};
use crate::shared::modal::Modal;
use contracts::domain::a009_assembly_task::aggregate::AssemblyTask;
use contracts::shared::date_key::{format_date_key, parse_date_key};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TaskDetailModal(
    task: AssemblyTask,
    on_close: Callback<()>,
    /// Called after the planned date was changed on the backend
    on_saved: Callback<()>,
) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let today = today_local();
    let overdue = task.overdue_on(today);
    let due_hint = task.due_hint(today);
    let draggable = task.is_draggable();
    let planned_input = RwSignal::new(
        task.planned_day().map(format_date_key).unwrap_or_default(),
    );
    let saving = RwSignal::new(false);
    let task_stored = StoredValue::new(task.clone());

    let row = |label: &'static str, value: String| {
        view! {
            <div class="detail-row">
                <span class="detail-row__label">{label}</span>
                <span class="detail-row__value">{value}</span>
            </div>
        }
    };

    let plan = move |_| {
        let Some(target) = parse_date_key(&planned_input.get_untracked()) else {
            return;
        };
        let task = task_stored.get_value();
        reschedule_task(
            &task,
            target,
            move |busy| saving.set(busy),
            move || on_saved.run(()),
        );
    };

    let job_id = task.job_id.clone();
    let job_caption = task
        .customer_name
        .clone()
        .unwrap_or_else(|| task.job_id.clone());

    view! {
        <Modal title=task.title() on_close=on_close>
            <div class="task-detail">
                {row("Customer", task.customer_name.clone().unwrap_or_else(|| "-".into()))}
                {row("Phone", task.customer_phone.clone().unwrap_or_else(|| "-".into()))}
                {row("Location", task.location.clone().unwrap_or_else(|| "-".into()))}
                {row("Job role", task.role_name.clone().unwrap_or_else(|| "-".into()))}
                {row("Stage", task.stage_name.clone().unwrap_or_else(|| "-".into()))}
                {row("Team", task.team_name.clone().unwrap_or_else(|| "-".into()))}
                {row("Planned date", format_optional_date(task.planned_date.as_deref()))}
                <div class="detail-row">
                    <span class="detail-row__label">"Due date"</span>
                    <span class="detail-row__value" class:text-danger=overdue>
                        {format_optional_date(task.estimated_date.as_deref())}
                        {due_hint.map(|hint| format!(" ({})", hint))}
                        {overdue.then_some(" ⚠ overdue")}
                    </span>
                </div>
                <div class="detail-row">
                    <span class="detail-row__label">"Status"</span>
                    <TaskStatusChip status=task.status />
                </div>

                {draggable.then(|| view! {
                    <div class="task-detail__plan">
                        <DateInput
                            value=planned_input
                            on_change=move |value| planned_input.set(value)
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=plan
                            disabled=Signal::derive(move || {
                                saving.get() || parse_date_key(&planned_input.get()).is_none()
                            })
                        >
                            "Plan for this date"
                        </Button>
                    </div>
                })}
            </div>
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        open_job_tab(&tabs_store, &job_id, &job_caption);
                        on_close.run(());
                    }
                >
                    "Go to job"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            </div>
        </Modal>
    }
}
