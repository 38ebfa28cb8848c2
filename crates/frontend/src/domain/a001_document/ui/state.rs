use contracts::domain::a001_document::aggregate::Document;
use contracts::domain::a001_document::archive::{ArchiveFilter, ArchiveTab};
use contracts::domain::a002_folder::aggregate::Folder;
use contracts::domain::a003_job::aggregate::Job;
use contracts::domain::a004_supplier::aggregate::Supplier;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_document::api;
use crate::domain::a002_folder::api::{delete_folder, fetch_folders};
use crate::domain::a003_job::api::fetch_jobs;
use crate::domain::a004_supplier::api::fetch_suppliers;
use crate::shared::dialogs::{alert, confirm};

/// Signals of the document archive screen
#[derive(Clone, Copy)]
pub struct ArchiveState {
    pub documents: RwSignal<Vec<Document>>,
    pub jobs: RwSignal<Vec<Job>>,
    pub suppliers: RwSignal<Vec<Supplier>>,
    pub folders: RwSignal<Vec<Folder>>,
    pub loading: RwSignal<bool>,

    pub tab: RwSignal<ArchiveTab>,
    /// Selected company subfolder
    pub folder_id: RwSignal<Option<String>>,
    pub search: RwSignal<String>,

    pub show_upload: RwSignal<bool>,
    pub show_new_folder: RwSignal<bool>,
    pub preview: RwSignal<Option<Document>>,
    pub deleting: RwSignal<bool>,
}

impl ArchiveState {
    pub fn new() -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
            jobs: RwSignal::new(Vec::new()),
            suppliers: RwSignal::new(Vec::new()),
            folders: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            tab: RwSignal::new(ArchiveTab::default()),
            folder_id: RwSignal::new(None),
            search: RwSignal::new(String::new()),
            show_upload: RwSignal::new(false),
            show_new_folder: RwSignal::new(false),
            preview: RwSignal::new(None),
            deleting: RwSignal::new(false),
        }
    }

    pub fn filter(&self) -> ArchiveFilter {
        ArchiveFilter {
            tab: self.tab.get(),
            folder_id: self.folder_id.get(),
            search: self.search.get(),
        }
    }

    pub fn select_tab(&self, tab: ArchiveTab) {
        self.tab.set(tab);
        if tab != ArchiveTab::Company {
            self.folder_id.set(None);
        }
    }

    /// Every collection is fetched on its own; a failed one stays empty.
    pub fn load_all(self) {
        self.loading.set(true);
        spawn_local(async move {
            match api::fetch_documents().await {
                Ok(docs) => self.documents.set(docs),
                Err(e) => {
                    log::error!("Failed to load documents: {}", e);
                    self.documents.set(Vec::new());
                }
            }
            self.loading.set(false);
        });
        spawn_local(async move {
            match fetch_jobs().await {
                Ok(jobs) => self.jobs.set(jobs),
                Err(e) => {
                    log::warn!("Failed to load jobs: {}", e);
                    self.jobs.set(Vec::new());
                }
            }
        });
        spawn_local(async move {
            match fetch_suppliers().await {
                Ok(list) => self.suppliers.set(list),
                Err(e) => {
                    log::warn!("Failed to load suppliers: {}", e);
                    self.suppliers.set(Vec::new());
                }
            }
        });
        self.reload_folders();
    }

    pub fn reload_folders(self) {
        spawn_local(async move {
            match fetch_folders().await {
                Ok(folders) => self.folders.set(folders),
                Err(e) => {
                    log::warn!("Failed to load folders: {}", e);
                    self.folders.set(Vec::new());
                }
            }
        });
    }

    pub fn prepend(&self, doc: Document) {
        self.documents.update(|docs| docs.insert(0, doc));
    }

    pub fn delete(self, doc: Document) {
        if !confirm(&format!("Delete \"{}\"?", doc.display_name())) {
            return;
        }
        self.deleting.set(true);
        spawn_local(async move {
            match api::delete_document(&doc.id).await {
                Ok(()) => {
                    log::info!("Document {} deleted", doc.id);
                    self.documents.update(|docs| docs.retain(|d| d.id != doc.id));
                    if self
                        .preview
                        .with_untracked(|p| p.as_ref().map(|p| p.id == doc.id).unwrap_or(false))
                    {
                        self.preview.set(None);
                    }
                }
                Err(e) => {
                    log::error!("Failed to delete document {}: {}", doc.id, e);
                    alert(&e.to_string());
                }
            }
            self.deleting.set(false);
        });
    }

    pub fn delete_folder(self, folder: Folder) {
        if !confirm(&format!("Delete folder \"{}\"?", folder.name)) {
            return;
        }
        spawn_local(async move {
            match delete_folder(&folder.id).await {
                Ok(()) => {
                    log::info!("Folder {} deleted", folder.id);
                    if self.folder_id.get_untracked().as_deref() == Some(folder.id.as_str()) {
                        self.folder_id.set(None);
                    }
                    self.reload_folders();
                }
                Err(e) => {
                    log::error!("Failed to delete folder {}: {}", folder.id, e);
                    alert(&e.to_string());
                }
            }
        });
    }
}

impl Default for ArchiveState {
    fn default() -> Self {
        Self::new()
    }
}
