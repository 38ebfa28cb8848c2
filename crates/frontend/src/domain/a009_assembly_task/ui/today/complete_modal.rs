use contracts::domain::a009_assembly_task::request::CompletionForm;
use contracts::domain::a009_assembly_task::today::UploadPurpose;
use leptos::prelude::*;
use thaw::*;

use super::photo_upload::{PhotoStrip, PhotoUpload};
use super::state::{CompleteTarget, TodayState};
use crate::domain::a009_assembly_task::api;
use crate::shared::modal::Modal;

#[component]
pub fn CompleteModal(target: CompleteTarget, state: TodayState) -> impl IntoView {
    let form = RwSignal::new(CompletionForm::default());
    let note = RwSignal::new(String::new());
    let job_id = target.job_id().to_string();
    let title = target.title();
    let target = StoredValue::new(target);

    let close = Callback::new(move |_| state.completing.set(None));

    let on_before = Callback::new(move |url: String| form.update(|f| f.photos_before.push(url)));
    let on_after = Callback::new(move |url: String| form.update(|f| f.photos_after.push(url)));
    let on_signature = Callback::new(move |url: String| form.update(|f| f.customer_signature = url));

    let submit = move |_| {
        let mut payload = form.get_untracked();
        payload.note = note.get_untracked();
        match target.get_value() {
            CompleteTarget::Task(task) => {
                state.run_action("Complete task", async move {
                    api::complete_task(&task.id, &payload.to_complete_dto()).await?;
                    state.completing.set(None);
                    Ok(())
                });
            }
            CompleteTarget::Job { job_id, .. } => {
                state.run_action("Complete all tasks", async move {
                    let result = api::complete_all(&job_id, &payload.to_complete_all_dto()).await?;
                    log::info!("Completed {} tasks of job {}", result.completed, job_id);
                    state.completing.set(None);
                    Ok(())
                });
            }
        }
    };

    view! {
        <Modal title=title on_close=close>
            <div class="complete-form">
                <div class="complete-form__section">
                    <PhotoUpload
                        label="Photos before assembly"
                        job_id=job_id.clone()
                        purpose=UploadPurpose::Before
                        uploading=state.uploading
                        on_uploaded=on_before
                    />
                    <PhotoStrip photos=Signal::derive(move || form.with(|f| f.photos_before.clone())) />
                </div>
                <div class="complete-form__section">
                    <PhotoUpload
                        label="Photos after assembly"
                        job_id=job_id.clone()
                        purpose=UploadPurpose::After
                        uploading=state.uploading
                        on_uploaded=on_after
                    />
                    <PhotoStrip photos=Signal::derive(move || form.with(|f| f.photos_after.clone())) />
                </div>
                <div class="complete-form__section">
                    <PhotoUpload
                        label="Customer signature"
                        job_id=job_id
                        purpose=UploadPurpose::Signature
                        uploading=state.uploading
                        on_uploaded=on_signature
                    />
                    <Show when=move || form.with(|f| !f.customer_signature.is_empty())>
                        <span class="text-success">"✓ Signature uploaded"</span>
                    </Show>
                </div>
                <div class="complete-form__section">
                    <label>"Note"</label>
                    <Textarea value=note placeholder="Optional note" />
                </div>
                <Show when=move || state.uploading.get()>
                    <div class="loading-strip"><Spinner /> " Uploading..."</div>
                </Show>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || state.busy())
                >
                    "Complete"
                </Button>
            </div>
        </Modal>
    }
}
