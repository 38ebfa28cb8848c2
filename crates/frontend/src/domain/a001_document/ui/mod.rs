pub mod folder_modal;
pub mod preview_modal;
pub mod state;
pub mod upload_modal;

use contracts::domain::a001_document::aggregate::Document;
use contracts::domain::a001_document::archive::{
    document_category, document_type_info, filter_documents, ArchiveLookup, ArchiveStats,
    ArchiveTab,
};
use contracts::domain::a002_folder::aggregate::company_subfolders;
use leptos::prelude::*;
use thaw::*;

use self::folder_modal::NewFolderModal;
use self::preview_modal::PreviewModal;
use self::state::ArchiveState;
use self::upload_modal::UploadModal;
use crate::domain::a001_document::api::download_url;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::date_utils::format_datetime;
use crate::shared::file_utils::format_optional_size;
use crate::shared::icons::icon;

/// Display label and colour of a document's category
pub fn category_of(doc: &Document) -> (String, &'static str) {
    let category = document_category(doc.doc_type.as_deref());
    match document_type_info(&category) {
        Some(info) => (info.label.to_string(), info.color),
        None => (category, "#6b7280"),
    }
}

fn uploaded_label(doc: &Document) -> String {
    doc.uploaded_at
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

/// One table row with its owner resolved through the lookup
#[derive(Clone, PartialEq)]
struct DocumentRow {
    doc: Document,
    owner: String,
}

#[component]
pub fn DocumentArchive() -> impl IntoView {
    let state = ArchiveState::new();

    Effect::new(move |_| state.load_all());

    let stats = Memo::new(move |_| state.documents.with(|docs| ArchiveStats::from_documents(docs)));
    let subfolders = Memo::new(move |_| state.folders.with(|f| company_subfolders(f)));

    let rows = Memo::new(move |_| {
        let filter = state.filter();
        state.documents.with(|docs| {
            state.jobs.with(|jobs| {
                state.suppliers.with(|suppliers| {
                    let lookup = ArchiveLookup::new(jobs, suppliers);
                    filter_documents(docs, &lookup, &filter)
                        .into_iter()
                        .map(|doc| {
                            let owner = if let Some(job) = lookup.job(doc.job_ref()) {
                                format!(
                                    "{} · {}",
                                    job.display_title(),
                                    job.display_customer().unwrap_or("-")
                                )
                            } else if let Some(name) = lookup.supplier_name(doc.supplier_ref()) {
                                name.to_string()
                            } else {
                                doc.job_ref()
                                    .or(doc.supplier_ref())
                                    .or(doc.folder_ref())
                                    .unwrap_or("-")
                                    .to_string()
                            };
                            DocumentRow { doc, owner }
                        })
                        .collect::<Vec<_>>()
                })
            })
        })
    });

    let stat_tile = move |label: &'static str, icon_name: &'static str, tab: Option<ArchiveTab>| {
        let value = Signal::derive(move || {
            let s = stats.get();
            match tab {
                None => s.total,
                Some(ArchiveTab::Jobs) => s.job_docs,
                Some(ArchiveTab::Company) => s.company_docs,
                Some(ArchiveTab::Suppliers) => s.supplier_docs,
            }
        });
        let active = Signal::derive(move || tab.map(|t| state.tab.get() == t).unwrap_or(false));
        view! {
            <div on:click=move |_| {
                if let Some(t) = tab {
                    state.select_tab(t);
                }
            }>
                <StatCard label=label icon_name=icon_name value=value active=active />
            </div>
        }
    };

    view! {
        <div class="page archive">
            <PageHeader title="Document archive" subtitle="Job, company and supplier documents".to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| state.load_all()
                    disabled=state.loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.show_upload.set(true)
                >
                    {icon("upload")}
                    " Upload"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                {stat_tile("All documents", "archive", None)}
                {stat_tile("Job documents", "briefcase", Some(ArchiveTab::Jobs))}
                {stat_tile("Company documents", "folder-open", Some(ArchiveTab::Company))}
                {stat_tile("Supplier documents", "download", Some(ArchiveTab::Suppliers))}
            </div>

            <div class="page-tabs">
                {ArchiveTab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            class="page-tabs__item"
                            class:page-tabs__item--active=move || state.tab.get() == tab
                            on:click=move |_| state.select_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <Show when=move || state.tab.get() == ArchiveTab::Company>
                <div class="folder-chips">
                    <button
                        class="folder-chip"
                        class:folder-chip--active=move || state.folder_id.get().is_none()
                        on:click=move |_| state.folder_id.set(None)
                    >
                        "All folders"
                    </button>
                    <For
                        each=move || subfolders.get()
                        key=|f| f.id.clone()
                        children=move |folder| {
                            let id = folder.id.clone();
                            let selected_id = id.clone();
                            let to_delete = StoredValue::new(folder.clone());
                            view! {
                                <span
                                    class="folder-chip"
                                    class:folder-chip--active=move || state.folder_id.get().as_deref() == Some(selected_id.as_str())
                                    style:border-color=folder.color_or_default().to_string()
                                    on:click=move |_| state.folder_id.set(Some(id.clone()))
                                >
                                    {format!("{} {}", folder.icon_or_default(), folder.name)}
                                    <button
                                        class="folder-chip__remove"
                                        title="Delete folder"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            state.delete_folder(to_delete.get_value());
                                        }
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| state.show_new_folder.set(true)
                    >
                        {icon("plus")}
                        " New folder"
                    </Button>
                </div>
            </Show>

            <div class="archive__search">
                <Input value=state.search placeholder="Search by name, description, job, customer or supplier" />
            </div>

            <Show when=move || state.loading.get()>
                <div class="loading-strip"><Spinner /></div>
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"File"</TableHeaderCell>
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Belongs to"</TableHeaderCell>
                        <TableHeaderCell>"Size"</TableHeaderCell>
                        <TableHeaderCell>"Uploaded"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| row.doc.id.clone()
                        children=move |row: DocumentRow| {
                            let DocumentRow { doc, owner } = row;
                            let (label, color) = category_of(&doc);
                            let href = download_url(&doc.id);
                            let for_preview = StoredValue::new(doc.clone());
                            let for_delete = StoredValue::new(doc.clone());
                            let name = doc.display_name().to_string();
                            let size = format_optional_size(doc.size);
                            let uploaded = uploaded_label(&doc);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    state.preview.set(Some(for_preview.get_value()));
                                                }
                                            >
                                                {name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <span class="category-badge" style:background-color=color>
                                            {label}
                                        </span>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{owner}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{size}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{uploaded}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <Flex gap=FlexGap::Small>
                                            <a class="button button--icon" href=href target="_blank" title="Download">
                                                {icon("download")}
                                            </a>
                                            <button
                                                class="button button--icon"
                                                title="Delete"
                                                disabled=move || state.deleting.get()
                                                on:click=move |_| state.delete(for_delete.get_value())
                                            >
                                                {icon("trash")}
                                            </button>
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || !state.loading.get() && rows.with(|r| r.is_empty())>
                <div class="empty-state">"No documents found"</div>
            </Show>

            <Show when=move || state.show_upload.get()>
                <UploadModal state=state />
            </Show>
            <Show when=move || state.show_new_folder.get()>
                <NewFolderModal state=state />
            </Show>
            {move || state.preview.get().map(|doc| view! { <PreviewModal doc=doc state=state /> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_labels() {
        let doc = Document {
            id: "DOC-7".into(),
            doc_type: Some("measure_kitchen".into()),
            uploaded_at: Some("2024-03-15T14:02:26Z".into()),
            ..Default::default()
        };
        assert_eq!(doc.display_name(), "DOC-7");
        assert_eq!(category_of(&doc), ("Measurement draft".to_string(), "#3b82f6"));
        assert_eq!(uploaded_label(&doc), "15.03.2024 14:02");
        assert_eq!(uploaded_label(&Document::default()), "-");
        assert_eq!(category_of(&Document::default()).1, "#6b7280");
    }
}
