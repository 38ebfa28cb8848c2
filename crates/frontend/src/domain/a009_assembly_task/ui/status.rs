use contracts::domain::a009_assembly_task::aggregate::TaskStatus;
use leptos::prelude::*;

#[component]
pub fn TaskStatusChip(status: TaskStatus) -> impl IntoView {
    view! {
        <span class="status-chip" style:color=status.color() style:border-color=status.color()>
            {status.icon()}
            " "
            {status.label()}
        </span>
    }
}
