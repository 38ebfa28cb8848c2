use contracts::domain::a007_job_role::aggregate::{parse_estimated_days, JobRoleConfig, JobRoleDto};
use leptos::prelude::*;
use uuid::Uuid;

use crate::domain::a007_job_role::api;
use crate::shared::dialogs::alert;

/// ViewModel of the job role form
#[derive(Clone, Copy)]
pub struct JobRoleDetailsViewModel {
    pub form: RwSignal<JobRoleDto>,
    /// Row keys of `form.assembly_stages`, kept in the same order
    pub stage_keys: RwSignal<Vec<Uuid>>,
    pub estimated_days: RwSignal<String>,
    pub editing_id: StoredValue<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl JobRoleDetailsViewModel {
    pub fn new(role: Option<&JobRoleConfig>) -> Self {
        let dto = role.map(JobRoleDto::from).unwrap_or_default();
        let keys = dto.assembly_stages.iter().map(|_| Uuid::new_v4()).collect();
        Self {
            estimated_days: RwSignal::new(dto.estimated_days.to_string()),
            form: RwSignal::new(dto),
            stage_keys: RwSignal::new(keys),
            editing_id: StoredValue::new(role.map(|r| r.id.clone())),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with_value(|id| id.is_some())
    }

    pub fn stage_index(&self, key: Uuid) -> Option<usize> {
        self.stage_keys.with(|keys| keys.iter().position(|k| *k == key))
    }

    pub fn add_stage(&self) {
        self.form.update(|f| f.add_stage());
        self.stage_keys.update(|keys| keys.push(Uuid::new_v4()));
    }

    pub fn rename_stage(&self, key: Uuid, name: String) {
        if let Some(index) = self.stage_keys.with_untracked(|keys| keys.iter().position(|k| *k == key)) {
            self.form.update(|f| f.rename_stage(index, name));
        }
    }

    pub fn move_stage_up(&self, key: Uuid) {
        let Some(index) = self.stage_keys.with_untracked(|keys| keys.iter().position(|k| *k == key)) else {
            return;
        };
        if index == 0 {
            return;
        }
        self.form.update(|f| f.move_stage_up(index));
        self.stage_keys.update(|keys| keys.swap(index - 1, index));
    }

    pub fn move_stage_down(&self, key: Uuid) {
        let Some(index) = self.stage_keys.with_untracked(|keys| keys.iter().position(|k| *k == key)) else {
            return;
        };
        if index + 1 >= self.stage_keys.with_untracked(|keys| keys.len()) {
            return;
        }
        self.form.update(|f| f.move_stage_down(index));
        self.stage_keys.update(|keys| keys.swap(index, index + 1));
    }

    pub fn remove_stage(&self, key: Uuid) {
        let Some(index) = self.stage_keys.with_untracked(|keys| keys.iter().position(|k| *k == key)) else {
            return;
        };
        self.form.update(|f| f.remove_stage(index));
        self.stage_keys.update(|keys| {
            keys.remove(index);
        });
    }

    /// Validate and create or update the role
    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut dto = self.form.get_untracked();
        dto.estimated_days = parse_estimated_days(&self.estimated_days.get_untracked());
        dto.name = dto.name.trim().to_string();

        if let Err(e) = dto.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }
        self.error.set(None);

        let editing_id = self.editing_id.get_value();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match editing_id.as_deref() {
                Some(id) => api::update_job_role(id, &dto).await,
                None => api::create_job_role(&dto).await,
            };
            match result {
                Ok(role) => {
                    log::info!("Job role {} saved", role.id);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save job role: {}", e);
                    alert(&e.to_string());
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    }
}
