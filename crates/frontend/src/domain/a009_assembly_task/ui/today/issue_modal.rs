use contracts::domain::a009_assembly_task::aggregate::{AssemblyTask, FaultSource, IssueType};
use contracts::domain::a009_assembly_task::request::{parse_quantity, ReportIssueDto};
use contracts::domain::a009_assembly_task::today::UploadPurpose;
use leptos::prelude::*;
use thaw::*;

use super::photo_upload::PhotoUpload;
use super::state::TodayState;
use crate::domain::a009_assembly_task::api;
use crate::shared::dialogs::alert;
use crate::shared::modal::Modal;

#[component]
pub fn IssueModal(task: AssemblyTask, state: TodayState) -> impl IntoView {
    let defaults = ReportIssueDto::default();
    let issue_type = RwSignal::new(defaults.issue_type.as_str().to_string());
    let quantity = RwSignal::new(defaults.quantity.to_string());
    let item = RwSignal::new(String::new());
    let fault_source = RwSignal::new(defaults.fault_source.as_str().to_string());
    let photo_url = RwSignal::new(None::<String>);
    let note = RwSignal::new(String::new());
    let create_replacement = RwSignal::new(defaults.create_replacement);

    let task_id = StoredValue::new(task.id.clone());
    let close = Callback::new(move |_| state.reporting.set(None));
    let on_photo = Callback::new(move |url: String| photo_url.set(Some(url)));

    let submit = move |_| {
        let note_value = note.get_untracked().trim().to_string();
        let dto = ReportIssueDto {
            issue_type: IssueType::parse(&issue_type.get_untracked()).unwrap_or_default(),
            item: item.get_untracked().trim().to_string(),
            quantity: parse_quantity(&quantity.get_untracked()),
            fault_source: FaultSource::parse(&fault_source.get_untracked()).unwrap_or_default(),
            photo_url: photo_url.get_untracked(),
            note: Some(note_value).filter(|n| !n.is_empty()),
            create_replacement: create_replacement.get_untracked(),
            ..Default::default()
        };
        if let Err(e) = dto.validate() {
            alert(&e.to_string());
            return;
        }
        let id = task_id.get_value();
        state.run_action("Report issue", async move {
            let response = api::report_issue(&id, &dto).await?;
            if let Some(order) = response.replacement_order_id {
                log::info!("Replacement order {} created for task {}", order, id);
            }
            state.reporting.set(None);
            Ok(())
        });
    };

    view! {
        <Modal title=format!("Report issue: {}", task.title()) on_close=close>
            <div class="form-grid">
                <div class="form-field">
                    <label>"Issue type"</label>
                    <Select value=issue_type>
                        {IssueType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form-field">
                    <label>"Quantity"</label>
                    <Input value=quantity input_type=InputType::Number />
                </div>
                <div class="form-field form-field--wide">
                    <label>"Item *"</label>
                    <Input value=item placeholder="Which part or material" />
                </div>
                <div class="form-field">
                    <label>"Fault source"</label>
                    <Select value=fault_source>
                        {FaultSource::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form-field">
                    <PhotoUpload
                        label="Photo"
                        job_id=task.job_id.clone()
                        purpose=UploadPurpose::Issue
                        uploading=state.uploading
                        on_uploaded=on_photo
                    />
                    {move || photo_url.get().map(|src| view! { <img class="photo-strip__item" src=src /> })}
                </div>
                <div class="form-field form-field--wide">
                    <label>"Note"</label>
                    <Textarea value=note />
                </div>
                <div class="form-field form-field--wide">
                    <Checkbox checked=create_replacement label="Create replacement production order" />
                </div>
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
                    "Report"
                </Button>
            </div>
        </Modal>
    }
}
