use contracts::domain::a004_supplier::aggregate::Supplier;
use contracts::domain::a007_job_role::aggregate::{JobRoleConfig, ProductionType};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

use super::view_model::JobRoleDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

fn supplier_options(suppliers: Vec<Supplier>, selected: Option<String>) -> impl IntoView {
    let selected = selected.unwrap_or_default();
    view! {
        <option value="" selected=selected.is_empty()>"-"</option>
        {suppliers
            .into_iter()
            .map(|s| {
                let is_selected = s.id == selected;
                view! { <option value=s.id.clone() selected=is_selected>{s.name}</option> }
            })
            .collect_view()}
    }
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

#[component]
pub fn JobRoleDetails(
    role: Option<JobRoleConfig>,
    #[prop(into)]
    suppliers: Signal<Vec<Supplier>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = JobRoleDetailsViewModel::new(role.as_ref());
    let title = if vm.is_edit_mode() { "Edit job role" } else { "New job role" };

    view! {
        <Modal title=title on_close=on_cancel wide=true>
            {move || vm.error.get().map(|e| view! { <div class="error-card">{e}</div> })}

            <div class="form-grid">
                <div class="form-field">
                    <label for="role_name">"Name *"</label>
                    <input
                        type="text"
                        id="role_name"
                        class="form-control"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="e.g. PVC windows"
                    />
                </div>

                <div class="form-field">
                    <label for="production_type">"Production"</label>
                    <select
                        id="production_type"
                        class="form-control"
                        on:change=move |ev| {
                            let value = ProductionType::from_str_or_default(&event_target_value(&ev));
                            vm.form.update(|f| f.production_type = value);
                        }
                    >
                        {[ProductionType::Internal, ProductionType::External]
                            .into_iter()
                            .map(|pt| view! {
                                <option
                                    value=pt.as_str()
                                    selected=move || vm.form.with(|f| f.production_type == pt)
                                >
                                    {pt.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-field form-field--wide">
                    <label for="role_description">"Description"</label>
                    <input
                        type="text"
                        id="role_description"
                        class="form-control"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label for="estimated_days">"Estimated days"</label>
                    <input
                        type="number"
                        min="1"
                        id="estimated_days"
                        class="form-control"
                        prop:value=move || vm.estimated_days.get()
                        on:input=move |ev| vm.estimated_days.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label for="default_supplier">"Default supplier"</label>
                    <select
                        id="default_supplier"
                        class="form-control"
                        on:change=move |ev| {
                            let value = non_empty(event_target_value(&ev));
                            vm.form.update(|f| f.default_supplier = value);
                        }
                    >
                        {move || supplier_options(
                            suppliers.get(),
                            vm.form.with_untracked(|f| f.default_supplier.clone()),
                        )}
                    </select>
                </div>

                <div class="form-field">
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.requires_glass)
                            on:change=move |ev| vm.form.update(|f| f.requires_glass = event_target_checked(&ev))
                        />
                        " Requires glass"
                    </label>
                </div>

                <Show when=move || vm.form.with(|f| f.requires_glass)>
                    <div class="form-field">
                        <label for="glass_supplier">"Default glass supplier"</label>
                        <select
                            id="glass_supplier"
                            class="form-control"
                            on:change=move |ev| {
                                let value = non_empty(event_target_value(&ev));
                                vm.form.update(|f| f.default_glass_supplier = value);
                            }
                        >
                            {move || supplier_options(
                                suppliers.get(),
                                vm.form.with_untracked(|f| f.default_glass_supplier.clone()),
                            )}
                        </select>
                    </div>
                </Show>

                <div class="form-field">
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.active)
                            on:change=move |ev| vm.form.update(|f| f.active = event_target_checked(&ev))
                        />
                        " Active"
                    </label>
                </div>
            </div>

            <div class="stage-editor">
                <div class="stage-editor__header">
                    <h3>"Assembly stages"</h3>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_stage()>
                        {icon("plus")}
                        " Add stage"
                    </Button>
                </div>
                <For
                    each=move || vm.stage_keys.get()
                    key=|key| *key
                    children=move |key: Uuid| view! { <StageRow vm=vm stage_key=key /> }
                />
                <Show when=move || vm.stage_keys.with(|k| k.is_empty())>
                    <div class="empty-state">"No stages yet"</div>
                </Show>
            </div>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.saving
                    on_click=move |_| vm.save_command(on_saved)
                >
                    "Save"
                </Button>
            </div>
        </Modal>
    }
}

#[component]
fn StageRow(vm: JobRoleDetailsViewModel, stage_key: Uuid) -> impl IntoView {
    let index = move || vm.stage_index(stage_key);
    let count = move || vm.stage_keys.with(|k| k.len());

    view! {
        <div class="stage-row">
            <span class="stage-row__order">
                {move || index().map(|i| format!("{}.", i + 1)).unwrap_or_default()}
            </span>
            <input
                type="text"
                class="form-control"
                placeholder="Stage name"
                prop:value=move || {
                    index()
                        .and_then(|i| vm.form.with(|f| f.assembly_stages.get(i).map(|s| s.name.clone())))
                        .unwrap_or_default()
                }
                on:input=move |ev| vm.rename_stage(stage_key, event_target_value(&ev))
            />
            <button
                class="button button--icon"
                title="Move up"
                disabled=move || index() == Some(0)
                on:click=move |_| vm.move_stage_up(stage_key)
            >
                "↑"
            </button>
            <button
                class="button button--icon"
                title="Move down"
                disabled=move || index().map(|i| i + 1 >= count()).unwrap_or(true)
                on:click=move |_| vm.move_stage_down(stage_key)
            >
                "↓"
            </button>
            <button
                class="button button--icon"
                title="Remove stage"
                on:click=move |_| vm.remove_stage(stage_key)
            >
                {icon("trash")}
            </button>
        </div>
    }
}
