//! Archive view model: tab membership, search, statistics and the
//! document type catalog. All functions are pure over the loaded collections.

use std::collections::HashMap;

use super::aggregate::Document;
use crate::domain::a003_job::aggregate::Job;
use crate::domain::a004_supplier::aggregate::Supplier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArchiveTab {
    #[default]
    Jobs,
    Company,
    Suppliers,
}

impl ArchiveTab {
    pub const ALL: [ArchiveTab; 3] = [ArchiveTab::Jobs, ArchiveTab::Company, ArchiveTab::Suppliers];

    pub fn key(&self) -> &'static str {
        match self {
            ArchiveTab::Jobs => "jobs",
            ArchiveTab::Company => "company",
            ArchiveTab::Suppliers => "suppliers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArchiveTab::Jobs => "Job documents",
            ArchiveTab::Company => "Company documents",
            ArchiveTab::Suppliers => "Supplier documents",
        }
    }

    /// Tab membership by reference fields.
    pub fn contains(&self, doc: &Document) -> bool {
        match self {
            ArchiveTab::Jobs => {
                doc.job_ref().is_some() && doc.supplier_ref().is_none() && doc.folder_ref().is_none()
            }
            ArchiveTab::Company => {
                doc.folder_ref().is_some() && doc.job_ref().is_none() && doc.supplier_ref().is_none()
            }
            ArchiveTab::Suppliers => doc.supplier_ref().is_some(),
        }
    }

    /// Doc type choices offered by the upload form.
    pub fn doc_type_options(&self) -> &'static [&'static str] {
        match self {
            ArchiveTab::Jobs => &[
                "olcu",
                "teknik",
                "sozlesme",
                "teklif",
                "montaj",
                "irsaliye",
                "servis_oncesi",
                "servis_sonrasi",
                "diger",
            ],
            ArchiveTab::Company => &["arac", "makine", "ofis", "genel"],
            ArchiveTab::Suppliers => &["fiyat_listesi", "kalite", "tedarikci_sozlesme", "diger"],
        }
    }

    pub fn default_doc_type(&self) -> &'static str {
        match self {
            ArchiveTab::Jobs | ArchiveTab::Company => "genel",
            ArchiveTab::Suppliers => "fiyat_listesi",
        }
    }
}

/// Known document type with its display attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTypeInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const OTHER_DOC_TYPE: &str = "diger";

pub const DOCUMENT_TYPES: &[DocumentTypeInfo] = &[
    // job documents
    DocumentTypeInfo { key: "olcu", label: "Measurement draft", color: "#3b82f6" },
    DocumentTypeInfo { key: "teknik", label: "Technical drawing", color: "#8b5cf6" },
    DocumentTypeInfo { key: "sozlesme", label: "Contract", color: "#10b981" },
    DocumentTypeInfo { key: "teklif", label: "Quotation", color: "#f59e0b" },
    DocumentTypeInfo { key: "montaj", label: "Assembly", color: "#ec4899" },
    DocumentTypeInfo { key: "irsaliye", label: "Delivery note", color: "#14b8a6" },
    DocumentTypeInfo { key: "servis_oncesi", label: "Before service", color: "#f97316" },
    DocumentTypeInfo { key: "servis_sonrasi", label: "After service", color: "#10b981" },
    // company documents
    DocumentTypeInfo { key: "arac", label: "Vehicle", color: "#f59e0b" },
    DocumentTypeInfo { key: "makine", label: "Machinery", color: "#8b5cf6" },
    DocumentTypeInfo { key: "ofis", label: "Office", color: "#ec4899" },
    DocumentTypeInfo { key: "genel", label: "General", color: "#6b7280" },
    // supplier documents
    DocumentTypeInfo { key: "fiyat_listesi", label: "Price list", color: "#10b981" },
    DocumentTypeInfo { key: "kalite", label: "Quality certificate", color: "#3b82f6" },
    DocumentTypeInfo { key: "tedarikci_sozlesme", label: "Supplier contract", color: "#f97316" },
    DocumentTypeInfo { key: OTHER_DOC_TYPE, label: "Other", color: "#6b7280" },
];

pub fn document_type_info(key: &str) -> Option<&'static DocumentTypeInfo> {
    DOCUMENT_TYPES.iter().find(|t| t.key == key)
}

/// Map a stored doc type onto a display category key.
///
/// `measure_*` and `technical_*` are per-role variants of the measurement and
/// technical drawing categories; `servis*` types are kept as they are.
pub fn document_category(doc_type: Option<&str>) -> String {
    let Some(doc_type) = doc_type.filter(|t| !t.is_empty()) else {
        return OTHER_DOC_TYPE.to_string();
    };
    if doc_type.starts_with("measure_") {
        return "olcu".to_string();
    }
    if doc_type.starts_with("technical_") {
        return "teknik".to_string();
    }
    if doc_type.starts_with("servis") {
        return doc_type.to_string();
    }
    if document_type_info(doc_type).is_some() {
        doc_type.to_string()
    } else {
        OTHER_DOC_TYPE.to_string()
    }
}

/// Current archive filter: active tab, selected company subfolder and search text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArchiveFilter {
    pub tab: ArchiveTab,
    pub folder_id: Option<String>,
    pub search: String,
}

/// Lookup tables for joining documents with jobs and suppliers.
pub struct ArchiveLookup<'a> {
    jobs: HashMap<&'a str, &'a Job>,
    suppliers: HashMap<&'a str, &'a Supplier>,
}

impl<'a> ArchiveLookup<'a> {
    pub fn new(jobs: &'a [Job], suppliers: &'a [Supplier]) -> Self {
        Self {
            jobs: jobs.iter().map(|j| (j.id.as_str(), j)).collect(),
            suppliers: suppliers.iter().map(|s| (s.id.as_str(), s)).collect(),
        }
    }

    pub fn job(&self, id: Option<&str>) -> Option<&'a Job> {
        id.and_then(|id| self.jobs.get(id).copied())
    }

    pub fn supplier_name(&self, id: Option<&str>) -> Option<&'a str> {
        id.and_then(|id| self.suppliers.get(id).copied())
            .map(|s| s.name.as_str())
    }

    fn matches_search(&self, doc: &Document, needle: &str) -> bool {
        let hit = |value: Option<&str>| {
            value
                .map(|v| v.to_lowercase().contains(needle))
                .unwrap_or(false)
        };
        let job = self.job(doc.job_ref());
        hit(doc.original_name.as_deref())
            || hit(doc.description.as_deref())
            || hit(job.and_then(|j| j.title.as_deref()))
            || hit(job.and_then(|j| j.display_customer()))
            || hit(self.supplier_name(doc.supplier_ref()))
    }
}

/// Documents visible under `filter`, in the original order.
pub fn filter_documents(
    documents: &[Document],
    lookup: &ArchiveLookup<'_>,
    filter: &ArchiveFilter,
) -> Vec<Document> {
    let needle = filter.search.trim().to_lowercase();
    let folder = filter
        .folder_id
        .as_deref()
        .filter(|f| !f.is_empty() && filter.tab == ArchiveTab::Company);

    documents
        .iter()
        .filter(|doc| filter.tab.contains(doc))
        .filter(|doc| folder.map(|f| doc.folder_ref() == Some(f)).unwrap_or(true))
        .filter(|doc| needle.is_empty() || lookup.matches_search(doc, &needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArchiveStats {
    pub total: usize,
    pub job_docs: usize,
    pub company_docs: usize,
    pub supplier_docs: usize,
}

impl ArchiveStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        let count = |tab: ArchiveTab| documents.iter().filter(|d| tab.contains(d)).count();
        Self {
            total: documents.len(),
            job_docs: count(ArchiveTab::Jobs),
            company_docs: count(ArchiveTab::Company),
            supplier_docs: count(ArchiveTab::Suppliers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_job::aggregate::JobCustomer;

    fn doc(id: &str, job: Option<&str>, folder: Option<&str>, supplier: Option<&str>) -> Document {
        Document {
            id: id.into(),
            job_id: job.map(Into::into),
            folder_id: folder.map(Into::into),
            supplier_id: supplier.map(Into::into),
            original_name: Some(format!("{}.pdf", id)),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Document> {
        vec![
            doc("d1", Some("JOB-1"), None, None),
            doc("d2", None, Some("FOLDER-ARAC"), None),
            doc("d3", None, None, Some("SUP-1")),
            doc("d4", Some("JOB-2"), None, Some("SUP-1")),
            doc("d5", None, Some("FOLDER-OFIS"), None),
            doc("d6", None, None, None),
        ]
    }

    fn ids(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_tab_membership() {
        let docs = sample();
        let lookup = ArchiveLookup::new(&[], &[]);
        let for_tab = |tab| {
            filter_documents(&docs, &lookup, &ArchiveFilter { tab, ..Default::default() })
        };
        assert_eq!(ids(&for_tab(ArchiveTab::Jobs)), vec!["d1"]);
        assert_eq!(ids(&for_tab(ArchiveTab::Company)), vec!["d2", "d5"]);
        assert_eq!(ids(&for_tab(ArchiveTab::Suppliers)), vec!["d3", "d4"]);
    }

    #[test]
    fn test_company_subfolder_filter() {
        let docs = sample();
        let lookup = ArchiveLookup::new(&[], &[]);
        let filter = ArchiveFilter {
            tab: ArchiveTab::Company,
            folder_id: Some("FOLDER-OFIS".into()),
            search: String::new(),
        };
        assert_eq!(ids(&filter_documents(&docs, &lookup, &filter)), vec!["d5"]);

        // a stale folder selection does not leak into other tabs
        let filter = ArchiveFilter { tab: ArchiveTab::Jobs, ..filter };
        assert_eq!(ids(&filter_documents(&docs, &lookup, &filter)), vec!["d1"]);
    }

    #[test]
    fn test_search_joins_job_and_supplier() {
        let docs = sample();
        let jobs = vec![Job {
            id: "JOB-1".into(),
            title: Some("Balkon PVC".into()),
            customer: Some(JobCustomer { name: Some("Zeynep Kaya".into()) }),
            ..Default::default()
        }];
        let suppliers = vec![Supplier { id: "SUP-1".into(), name: "Cam Sanayi".into() }];
        let lookup = ArchiveLookup::new(&jobs, &suppliers);

        let search = |tab, text: &str| {
            let filter = ArchiveFilter { tab, folder_id: None, search: text.into() };
            ids(&filter_documents(&docs, &lookup, &filter))
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        assert_eq!(search(ArchiveTab::Jobs, "BALKON"), vec!["d1"]);
        assert_eq!(search(ArchiveTab::Jobs, "zeynep"), vec!["d1"]);
        assert_eq!(search(ArchiveTab::Suppliers, "cam san"), vec!["d3", "d4"]);
        assert_eq!(search(ArchiveTab::Suppliers, "d3.PDF"), vec!["d3"]);
        assert!(search(ArchiveTab::Jobs, "nothing").is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = ArchiveStats::from_documents(&sample());
        assert_eq!(
            stats,
            ArchiveStats { total: 6, job_docs: 1, company_docs: 2, supplier_docs: 2 }
        );
    }

    #[test]
    fn test_document_category() {
        assert_eq!(document_category(Some("measure_ROLE-01")), "olcu");
        assert_eq!(document_category(Some("technical_ROLE-02")), "teknik");
        assert_eq!(document_category(Some("servis_oncesi")), "servis_oncesi");
        assert_eq!(document_category(Some("servis_foto")), "servis_foto");
        assert_eq!(document_category(Some("sozlesme")), "sozlesme");
        assert_eq!(document_category(Some("montaj_oncesi")), "diger");
        assert_eq!(document_category(Some("")), "diger");
        assert_eq!(document_category(None), "diger");
    }

    #[test]
    fn test_doc_type_options_are_catalogued() {
        for tab in ArchiveTab::ALL {
            for key in tab.doc_type_options() {
                assert!(document_type_info(key).is_some(), "{} missing", key);
            }
            assert!(document_type_info(tab.default_doc_type()).is_some());
        }
    }
}
