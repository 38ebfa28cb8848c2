//! Tab content registry: tab.key → View. All tab keys live here.

use crate::domain::a001_document::ui::DocumentArchive;
use crate::domain::a003_job::ui::{JobAssemblyView, JOB_TAB_PREFIX};
use crate::domain::a006_company_settings::ui::SettingsPage;
use crate::domain::a009_assembly_task::ui::calendar::AssemblyCalendar;
use crate::domain::a009_assembly_task::ui::today::AssemblyToday;
use leptos::logging::log;
use leptos::prelude::*;

pub const ASSEMBLY_TODAY: &str = "a009_assembly_today";
pub const ASSEMBLY_CALENDAR: &str = "a009_assembly_calendar";
pub const DOCUMENT_ARCHIVE: &str = "a001_document_archive";
pub const SETTINGS: &str = "a006_settings";

/// Рендерит контент таба по его ключу; неизвестный ключ даёт placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        ASSEMBLY_TODAY => view! { <AssemblyToday /> }.into_any(),
        ASSEMBLY_CALENDAR => view! { <AssemblyCalendar /> }.into_any(),
        DOCUMENT_ARCHIVE => view! { <DocumentArchive /> }.into_any(),
        SETTINGS => view! { <SettingsPage /> }.into_any(),
        k if k.starts_with(JOB_TAB_PREFIX) => {
            let job_id = k[JOB_TAB_PREFIX.len()..].to_string();
            view! { <JobAssemblyView job_id=job_id /> }.into_any()
        }
        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
