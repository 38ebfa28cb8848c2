use contracts::domain::a003_job::aggregate::Job;
use contracts::domain::a009_assembly_task::aggregate::AssemblyTask;
use contracts::domain::a009_assembly_task::request::TaskListFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_job::api::fetch_job;
use crate::domain::a009_assembly_task::api::fetch_tasks;
use crate::domain::a009_assembly_task::ui::status::TaskStatusChip;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ErrorCard, PageHeader};
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;

pub const JOB_TAB_PREFIX: &str = "a003_job_detail_";

/// Opens (or activates) the job tab
pub fn open_job_tab(tabs_store: &AppGlobalContext, job_id: &str, caption: &str) {
    tabs_store.open_tab(
        &format!("{}{}", JOB_TAB_PREFIX, job_id),
        &format!("Job {}", caption),
    );
}

/// Job card with all of its assembly tasks, ordered role by role
#[component]
pub fn JobAssemblyView(job_id: String) -> impl IntoView {
    let job = RwSignal::new(None::<Job>);
    let tasks = RwSignal::new(Vec::<AssemblyTask>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let job_id = StoredValue::new(job_id);

    let load = move || {
        let id = job_id.get_value();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_job(&id).await {
                Ok(j) => job.set(Some(j)),
                Err(e) => {
                    log::error!("Failed to load job {}: {}", id, e);
                    error.set(Some(e.describe(&format!("Job {}", id))));
                    if e.is_not_found() {
                        job.set(None);
                        tasks.set(Vec::new());
                        loading.set(false);
                        return;
                    }
                }
            }
            match fetch_tasks(&TaskListFilter::for_job(id.clone())).await {
                Ok(mut list) => {
                    list.sort_by(|a, b| {
                        a.role_name
                            .cmp(&b.role_name)
                            .then(a.stage_order.cmp(&b.stage_order))
                    });
                    tasks.set(list);
                }
                Err(e) => {
                    log::warn!("Failed to load tasks for job {}: {}", id, e);
                    tasks.set(Vec::new());
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let subtitle = Signal::derive(move || {
        job.get().map(|j| {
            let customer = j.display_customer().unwrap_or("-").to_string();
            match j.location.as_deref() {
                Some(loc) if !loc.is_empty() => format!("{} · {}", customer, loc),
                _ => customer,
            }
        })
    });

    view! {
        <div class="page">
            <PageHeader
                title=format!("Job {}", job_id.get_value())
                subtitle=subtitle
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <ErrorCard message=error />

            <Show when=move || loading.get()>
                <div class="loading-strip"><Spinner /></div>
            </Show>

            {move || job.get().map(|j| view! {
                <div class="detail-card">
                    <div class="detail-row">
                        <span class="detail-row__label">"Title"</span>
                        <span class="detail-row__value">{j.display_title().to_string()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Phone"</span>
                        <span class="detail-row__value">
                            {j.customer_phone.clone().unwrap_or_else(|| "-".into())}
                        </span>
                    </div>
                </div>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Job role"</TableHeaderCell>
                        <TableHeaderCell>"Stage"</TableHeaderCell>
                        <TableHeaderCell>"Team"</TableHeaderCell>
                        <TableHeaderCell>"Planned"</TableHeaderCell>
                        <TableHeaderCell>"Due"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || tasks.get()
                        key=|t| t.id.clone()
                        children=move |t| {
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            {t.role_name.clone().unwrap_or_else(|| "-".into())}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {format!("{}. {}", t.stage_order, t.stage_name.clone().unwrap_or_default())}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {t.team_name.clone().unwrap_or_else(|| "-".into())}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_optional_date(t.planned_date.as_deref())}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_optional_date(t.estimated_date.as_deref())}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TaskStatusChip status=t.status />
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || !loading.get() && tasks.with(|t| t.is_empty())>
                <div class="empty-state">"No assembly tasks for this job"</div>
            </Show>
        </div>
    }
}
