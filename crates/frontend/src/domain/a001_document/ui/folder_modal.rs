use contracts::domain::a002_folder::aggregate::{CreateFolderDto, FOLDER_COLORS, FOLDER_ICONS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::state::ArchiveState;
use crate::domain::a002_folder::api::create_folder;
use crate::shared::dialogs::alert;
use crate::shared::modal::Modal;

/// New company subfolder
#[component]
pub fn NewFolderModal(state: ArchiveState) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let icon = RwSignal::new(FOLDER_ICONS[0].to_string());
    let color = RwSignal::new(FOLDER_COLORS[0].to_string());
    let saving = RwSignal::new(false);

    let close = Callback::new(move |_| state.show_new_folder.set(false));

    let submit = move |_| {
        let dto = match CreateFolderDto::company(&name.get_untracked(), &icon.get_untracked(), &color.get_untracked()) {
            Ok(dto) => dto,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        saving.set(true);
        spawn_local(async move {
            match create_folder(&dto).await {
                Ok(folder) => {
                    log::info!("Folder {} created", folder.id);
                    state.show_new_folder.set(false);
                    state.reload_folders();
                }
                Err(e) => {
                    log::error!("Failed to create folder: {}", e);
                    alert(&e.to_string());
                }
            }
            saving.set(false);
        });
    };

    view! {
        <Modal title="New folder" on_close=close>
            <div class="form-grid">
                <div class="form-field form-field--wide">
                    <label>"Name *"</label>
                    <Input value=name placeholder="e.g. Vehicles" />
                </div>
                <div class="form-field form-field--wide">
                    <label>"Icon"</label>
                    <div class="picker">
                        {FOLDER_ICONS
                            .iter()
                            .map(|i| {
                                let value = i.to_string();
                                let current = value.clone();
                                view! {
                                    <button
                                        class="picker__item"
                                        class:picker__item--active=move || icon.get() == current
                                        on:click=move |_| icon.set(value.clone())
                                    >
                                        {*i}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="form-field form-field--wide">
                    <label>"Color"</label>
                    <div class="picker">
                        {FOLDER_COLORS
                            .iter()
                            .map(|c| {
                                let value = c.to_string();
                                let current = value.clone();
                                view! {
                                    <button
                                        class="picker__swatch"
                                        class:picker__swatch--active=move || color.get() == current
                                        style:background-color=*c
                                        on:click=move |_| color.set(value.clone())
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
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
