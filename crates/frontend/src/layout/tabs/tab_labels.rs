//! Tab labels - заголовки табов по ключу.

use super::registry::{ASSEMBLY_CALENDAR, ASSEMBLY_TODAY, DOCUMENT_ARCHIVE, SETTINGS};
use crate::domain::a003_job::ui::JOB_TAB_PREFIX;

/// Заголовок для страниц из меню. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        ASSEMBLY_TODAY => "Today's assembly",
        ASSEMBLY_CALENDAR => "Assembly calendar",
        DOCUMENT_ARCHIVE => "Document archive",
        SETTINGS => "Settings",
        _ => key,
    }
}

/// Заголовок для любого ключа, включая табы заданий (`a003_job_detail_{id}`).
pub fn tab_title_for_key(key: &str) -> String {
    match key.strip_prefix(JOB_TAB_PREFIX) {
        Some(job_id) => format!("Job {}", job_id),
        None => tab_label_for_key(key).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels() {
        assert_eq!(tab_label_for_key(ASSEMBLY_CALENDAR), "Assembly calendar");
        assert_eq!(tab_label_for_key("unknown_key"), "unknown_key");
    }

    #[test]
    fn test_job_tab_title() {
        assert_eq!(tab_title_for_key("a003_job_detail_JOB-7"), "Job JOB-7");
        assert_eq!(tab_title_for_key(SETTINGS), "Settings");
    }
}
