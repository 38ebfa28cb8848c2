use contracts::domain::a008_glass_type::aggregate::{GlassType, GlassTypeDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a008_glass_type::api;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn GlassTypeList(glass_types: RwSignal<Vec<GlassType>>) -> impl IntoView {
    let show_create = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let delete = move |glass: GlassType| {
        if !confirm(&format!("Delete glass type \"{}\"?", glass.name)) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match api::delete_glass_type(&glass.id).await {
                Ok(()) => {
                    log::info!("Glass type {} deleted", glass.id);
                    glass_types.update(|list| list.retain(|g| g.id != glass.id));
                }
                Err(e) => {
                    log::error!("Failed to delete glass type {}: {}", glass.id, e);
                    alert(&e.to_string());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="settings-section">
            <div class="settings-section__header">
                <h2>"Glass types"</h2>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                    {icon("plus")}
                    " New glass type"
                </Button>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Code"</TableHeaderCell>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || glass_types.get()
                        key=|g| g.id.clone()
                        children=move |glass: GlassType| {
                            let code = glass.code.clone();
                            let name = glass.name.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{code}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <button
                                            class="button button--icon"
                                            title="Delete"
                                            disabled=move || busy.get()
                                            on:click=move |_| delete(glass.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || glass_types.with(|g| g.is_empty())>
                <div class="empty-state">"No glass types defined"</div>
            </Show>

            <Show when=move || show_create.get()>
                <GlassTypeCreateModal glass_types=glass_types show=show_create />
            </Show>
        </div>
    }
}

#[component]
fn GlassTypeCreateModal(glass_types: RwSignal<Vec<GlassType>>, show: RwSignal<bool>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let close = Callback::new(move |_| show.set(false));

    let submit = move |_| {
        let dto = GlassTypeDto {
            name: name.get_untracked().trim().to_string(),
            code: code.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            alert(&e.to_string());
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::create_glass_type(&dto).await {
                Ok(created) => {
                    log::info!("Glass type {} created", created.id);
                    glass_types.update(|list| list.push(created));
                    show.set(false);
                }
                Err(e) => {
                    log::error!("Failed to create glass type: {}", e);
                    alert(&e.to_string());
                }
            }
            saving.set(false);
        });
    };

    view! {
        <Modal title="New glass type" on_close=close>
            <div class="form-grid">
                <div class="form-field">
                    <label>"Code *"</label>
                    <Input value=code placeholder="e.g. 4-16-4" />
                </div>
                <div class="form-field">
                    <label>"Name *"</label>
                    <Input value=name placeholder="e.g. Double glazing" />
                </div>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit disabled=saving>
                    "Create"
                </Button>
            </div>
        </Modal>
    }
}
