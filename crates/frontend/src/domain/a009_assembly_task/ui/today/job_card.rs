use contracts::domain::a009_assembly_task::aggregate::{AssemblyTask, TaskStatus};
use contracts::domain::a009_assembly_task::today::{
    available_actions, photo_requirements, JobProgress, TaskAction, TodayJobGroup,
};
use leptos::prelude::*;
use thaw::*;

use super::state::{CompleteTarget, TodayState};
use crate::domain::a009_assembly_task::api;
use crate::domain::a009_assembly_task::ui::status::TaskStatusChip;
use crate::shared::dialogs::confirm;

#[component]
pub fn JobCard(group: TodayJobGroup, state: TodayState) -> impl IntoView {
    let progress = group.job_state();
    let progress_color = match progress {
        JobProgress::Completed => BadgeColor::Success,
        JobProgress::Blocked => BadgeColor::Danger,
        JobProgress::InProgress => BadgeColor::Warning,
        JobProgress::Scheduled => BadgeColor::Informative,
    };
    let customer = group.display_customer().to_string();
    let heading = customer.clone();
    let can_complete_all = group.can_complete_all();
    let TodayJobGroup { job_id, location, tasks, .. } = group;
    let meta = format!(
        "{}{}",
        job_id,
        location.map(|loc| format!(" · 📍 {}", loc)).unwrap_or_default()
    );
    let len = tasks.len();

    let complete_all = move |_| {
        if !confirm("Complete all tasks of this job at once?") {
            return;
        }
        state.completing.set(Some(CompleteTarget::Job {
            job_id: job_id.clone(),
            customer: customer.clone(),
        }));
    };

    view! {
        <div class="job-card">
            <div class="job-card__header">
                <div>
                    <div class="job-card__customer">{heading}</div>
                    <div class="job-card__meta">{meta}</div>
                </div>
                <Flex align=FlexAlign::Center>
                    <Badge appearance=BadgeAppearance::Tint color=progress_color>
                        {progress.label()}
                    </Badge>
                    {can_complete_all.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=complete_all
                            disabled=Signal::derive(move || state.busy())
                        >
                            "Complete all at once"
                        </Button>
                    })}
                </Flex>
            </div>
            <div class="job-card__tasks">
                {tasks
                    .into_iter()
                    .enumerate()
                    .map(|(index, task)| view! { <TaskRow task=task index=index len=len state=state /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TaskRow(task: AssemblyTask, index: usize, len: usize, state: TodayState) -> impl IntoView {
    let completed = task.status == TaskStatus::Completed;
    let needs = photo_requirements(index, len, task.status);
    let disabled = Signal::derive(move || state.busy());

    let pending = task
        .pending_issues()
        .cloned()
        .collect::<Vec<_>>();
    let task_id = task.id.clone();
    let issues_view = pending
        .into_iter()
        .map(|issue| {
            let task_id = task_id.clone();
            let issue_id = issue.id.clone();
            let resolvable = issue.can_resolve();
            view! {
                <div class="issue-line">
                    <span class="issue-line__text">
                        {format!("⚠ {} × {} ({})", issue.item, issue.quantity, issue.issue_type.label())}
                    </span>
                    {issue.replacement_order_id.clone().map(|order| view! {
                        <span class="issue-line__order">{format!("Replacement: {}", order)}</span>
                    })}
                    {resolvable.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=disabled
                            on_click=move |_| {
                                let task_id = task_id.clone();
                                let issue_id = issue_id.clone();
                                state.run_action("Resolve issue", async move {
                                    api::resolve_issue(&task_id, &issue_id).await.map(|_| ())
                                });
                            }
                        >
                            "Resolved"
                        </Button>
                    })}
                </div>
            }
        })
        .collect_view();

    let actions_view = available_actions(&task)
        .into_iter()
        .map(|action| {
            let task = task.clone();
            match action {
                TaskAction::Start | TaskAction::Resume => {
                    let label = if action == TaskAction::Start { "▶ Start" } else { "↻ Resume" };
                    view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=disabled
                            on_click=move |_| {
                                let id = task.id.clone();
                                state.run_action("Start task", async move {
                                    api::start_task(&id).await.map(|_| ())
                                });
                            }
                        >
                            {label}
                        </Button>
                    }
                    .into_any()
                }
                TaskAction::Complete { enabled } => view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !enabled || state.busy())
                        on_click=move |_| state.completing.set(Some(CompleteTarget::Task(task.clone())))
                    >
                        "✓ Complete"
                    </Button>
                }
                .into_any(),
                TaskAction::ReportIssue => view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=disabled
                        on_click=move |_| state.reporting.set(Some(task.clone()))
                    >
                        "⚠ Report issue"
                    </Button>
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <div class="task-row" class:task-row--done=completed>
            <span class="task-row__order">
                {task.order_badge()}
            </span>
            <div class="task-row__body">
                <div class="task-row__title">
                    {task.title()}
                    " "
                    <TaskStatusChip status=task.status />
                </div>
                <div class="task-row__meta">
                    {format!("👷 {}", task.team_name.clone().unwrap_or_else(|| "No team".into()))}
                </div>
                {issues_view}
                {needs.any().then(|| view! {
                    <div class="task-row__hints">
                        {needs.before_photos.then_some("📷 Before photos required ")}
                        {needs.after_photos.then_some("📷 After photos required ")}
                        {needs.signature.then_some("✍ Customer signature required")}
                    </div>
                })}
            </div>
            <div class="task-row__actions">{actions_view}</div>
        </div>
    }
}
