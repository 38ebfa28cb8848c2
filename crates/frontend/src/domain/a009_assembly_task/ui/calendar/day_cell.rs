use chrono::{Datelike, NaiveDate};
use contracts::domain::a009_assembly_task::aggregate::AssemblyTask;
use contracts::domain::a009_assembly_task::calendar::CalendarDay;
use contracts::domain::a009_assembly_task::schedule::visible_slice;
use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::shared::date_utils::{format_date, today_local};

/// Completed tasks never move; nothing moves while a reschedule is in flight.
fn can_drag(task: &AssemblyTask, busy: bool) -> bool {
    !busy && task.is_draggable()
}

/// Draggable task chip; completed tasks are rendered fixed.
#[component]
pub fn TaskChip(
    task: AssemblyTask,
    dragged_task: RwSignal<Option<AssemblyTask>>,
    #[prop(into)]
    busy: Signal<bool>,
    on_select: Callback<AssemblyTask>,
    #[prop(optional)]
    show_due: bool,
) -> impl IntoView {
    let fixed = !task.is_draggable();
    let task_for_gate = task.clone();
    let draggable = Signal::derive(move || can_drag(&task_for_gate, busy.get()));
    let status = task.status;
    let title = task.title();
    let customer = task.customer_name.clone().unwrap_or_else(|| task.job_id.clone());
    let due = task
        .estimated_date
        .as_deref()
        .map(format_date);
    let overdue = task.overdue_on(today_local());

    let task_for_drag = task.clone();
    let on_dragstart = move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data("text/plain", &task_for_drag.id);
            transfer.set_effect_allowed("move");
        }
        dragged_task.set(Some(task_for_drag.clone()));
    };

    view! {
        <div
            class="task-chip"
            class:task-chip--fixed=fixed
            class:task-chip--overdue=overdue
            style:border-left-color=status.color()
            draggable=move || if draggable.get() { "true" } else { "false" }
            on:dragstart=move |ev: DragEvent| {
                if draggable.get_untracked() {
                    on_dragstart(ev);
                } else {
                    ev.prevent_default();
                }
            }
            on:dragend=move |_| dragged_task.set(None)
            on:click=move |ev| {
                ev.stop_propagation();
                on_select.run(task.clone());
            }
            title=format!("{} · {}", customer, status.label())
        >
            <span class="task-chip__icon">{status.icon()}</span>
            <span class="task-chip__customer">{customer.clone()}</span>
            <span class="task-chip__title">{title}</span>
            {(show_due && due.is_some()).then(|| view! {
                <span class="task-chip__due" class:task-chip__due--overdue=overdue>
                    {if overdue { "⚠ " } else { "" }}
                    {due.clone().unwrap_or_default()}
                </span>
            })}
        </div>
    }
}

#[component]
pub fn DayCell(
    day: CalendarDay,
    tasks: Vec<AssemblyTask>,
    limit: usize,
    is_today: bool,
    dragged_task: RwSignal<Option<AssemblyTask>>,
    #[prop(into)]
    busy: Signal<bool>,
    on_drop: Callback<NaiveDate>,
    on_select: Callback<AssemblyTask>,
) -> impl IntoView {
    let (drag_over, set_drag_over) = signal(false);
    let (visible, hidden) = visible_slice(&tasks, limit);
    let visible = visible.to_vec();
    let date = day.date;

    view! {
        <div
            class="calendar-day"
            class:calendar-day--outside=!day.is_current_month
            class:calendar-day--weekend=day.is_weekend()
            class:calendar-day--today=is_today
            class:calendar-day--drag-over=move || drag_over.get()
            data-date=day.key()
            on:dragover=move |ev: DragEvent| {
                if busy.get_untracked() {
                    return;
                }
                ev.prevent_default();
                set_drag_over.set(true);
            }
            on:dragleave=move |_| set_drag_over.set(false)
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                set_drag_over.set(false);
                on_drop.run(date);
            }
        >
            <div class="calendar-day__number">{date.day()}</div>
            <div class="calendar-day__tasks">
                {visible
                    .into_iter()
                    .map(|task| view! { <TaskChip task=task dragged_task=dragged_task busy=busy on_select=on_select /> })
                    .collect_view()}
                {(hidden > 0).then(|| view! {
                    <div class="calendar-day__more">{format!("+{} more", hidden)}</div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a009_assembly_task::aggregate::TaskStatus;

    fn task(status: TaskStatus) -> AssemblyTask {
        AssemblyTask {
            id: "T1".into(),
            job_id: "JOB-1".into(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_drag_while_rescheduling() {
        let planned = task(TaskStatus::Planned);
        assert!(can_drag(&planned, false));
        assert!(!can_drag(&planned, true));
        assert!(!can_drag(&task(TaskStatus::Completed), false));
    }
}
