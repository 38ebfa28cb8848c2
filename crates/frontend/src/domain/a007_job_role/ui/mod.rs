pub mod details;

use contracts::domain::a004_supplier::aggregate::Supplier;
use contracts::domain::a007_job_role::aggregate::JobRoleConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::details::JobRoleDetails;
use crate::domain::a007_job_role::api;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;

/// Открытый редактор: новая роль или существующая
#[derive(Clone)]
enum Editing {
    New,
    Existing(JobRoleConfig),
}

#[component]
pub fn JobRoleList(
    roles: RwSignal<Vec<JobRoleConfig>>,
    #[prop(into)]
    suppliers: Signal<Vec<Supplier>>,
) -> impl IntoView {
    let editing = RwSignal::new(None::<Editing>);
    let busy = RwSignal::new(false);

    let reload = move || {
        spawn_local(async move {
            match api::fetch_job_roles().await {
                Ok(list) => roles.set(list),
                Err(e) => log::error!("Failed to reload job roles: {}", e),
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        reload();
    });
    let on_cancel = Callback::new(move |_| editing.set(None));

    let deactivate = move |role: JobRoleConfig| {
        if !confirm(&format!("Deactivate job role \"{}\"?", role.name)) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match api::deactivate_job_role(&role.id).await {
                Ok(()) => {
                    log::info!("Job role {} deactivated", role.id);
                    reload();
                }
                Err(e) => {
                    log::error!("Failed to deactivate job role {}: {}", role.id, e);
                    alert(&e.to_string());
                }
            }
            busy.set(false);
        });
    };

    let supplier_name = move |id: Option<&str>| -> String {
        id.and_then(|id| suppliers.with(|list| list.iter().find(|s| s.id == id).map(|s| s.name.clone())))
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class="settings-section">
            <div class="settings-section__header">
                <h2>"Job roles"</h2>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(Editing::New))>
                    {icon("plus")}
                    " New job role"
                </Button>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Production"</TableHeaderCell>
                        <TableHeaderCell>"Days"</TableHeaderCell>
                        <TableHeaderCell>"Stages"</TableHeaderCell>
                        <TableHeaderCell>"Default supplier"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        roles
                            .get()
                            .into_iter()
                            .map(|role| {
                                let for_edit = role.clone();
                                let for_deactivate = role.clone();
                                let active = role.active;
                                let stages = role
                                    .assembly_stages
                                    .iter()
                                    .map(|s| s.name.as_str())
                                    .collect::<Vec<_>>()
                                    .join(" → ");
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                {role.name.clone()}
                                                {role.requires_glass.then_some(" 🪟")}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{role.production_type.label()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{role.estimated_days}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{stages}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{supplier_name(role.default_supplier.as_deref())}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            {if role.active {
                                                view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge>
                                                }
                                                .into_any()
                                            } else {
                                                view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Inactive"</Badge>
                                                }
                                                .into_any()
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <button
                                                    class="button button--icon"
                                                    title="Edit"
                                                    on:click=move |_| editing.set(Some(Editing::Existing(for_edit.clone())))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--icon"
                                                    title="Deactivate"
                                                    disabled=move || busy.get() || !active
                                                    on:click=move |_| deactivate(for_deactivate.clone())
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>

            {move || editing.get().map(|mode| {
                let role = match mode {
                    Editing::New => None,
                    Editing::Existing(role) => Some(role),
                };
                view! {
                    <JobRoleDetails
                        role=role
                        suppliers=suppliers
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
            })}
        </div>
    }
}
