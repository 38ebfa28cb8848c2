pub mod company_form;

use contracts::domain::a004_supplier::aggregate::Supplier;
use contracts::domain::a006_company_settings::aggregate::{CompanyInfo, GeneralSetting};
use contracts::domain::a007_job_role::aggregate::JobRoleConfig;
use contracts::domain::a008_glass_type::aggregate::GlassType;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::company_form::CompanyForm;
use crate::domain::a004_supplier::api::fetch_suppliers;
use crate::domain::a006_company_settings::api::fetch_settings;
use crate::domain::a007_job_role::api::fetch_job_roles;
use crate::domain::a007_job_role::ui::JobRoleList;
use crate::domain::a008_glass_type::api::fetch_glass_types;
use crate::domain::a008_glass_type::ui::GlassTypeList;
use crate::shared::components::{ErrorCard, PageHeader};
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Company,
    General,
    JobRoles,
    GlassTypes,
}

impl SettingsTab {
    const ALL: [SettingsTab; 4] = [
        SettingsTab::Company,
        SettingsTab::General,
        SettingsTab::JobRoles,
        SettingsTab::GlassTypes,
    ];

    fn label(&self) -> &'static str {
        match self {
            SettingsTab::Company => "Company",
            SettingsTab::General => "General",
            SettingsTab::JobRoles => "Job roles",
            SettingsTab::GlassTypes => "Glass types",
        }
    }
}

struct LoadedSettings {
    company: CompanyInfo,
    general: Vec<GeneralSetting>,
    roles: Vec<JobRoleConfig>,
    glass_types: Vec<GlassType>,
    suppliers: Vec<Supplier>,
}

async fn load_settings() -> Result<LoadedSettings, ApiError> {
    let bundle = fetch_settings().await?;
    let roles = fetch_job_roles().await?;
    let glass_types = fetch_glass_types().await?;
    let suppliers = fetch_suppliers().await?;
    Ok(LoadedSettings {
        company: bundle.company.unwrap_or_default(),
        general: bundle.general,
        roles,
        glass_types,
        suppliers,
    })
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active_tab = RwSignal::new(SettingsTab::Company);
    let company = RwSignal::new(CompanyInfo::default());
    let general = RwSignal::new(Vec::<GeneralSetting>::new());
    let roles = RwSignal::new(Vec::<JobRoleConfig>::new());
    let glass_types = RwSignal::new(Vec::<GlassType>::new());
    let suppliers = RwSignal::new(Vec::<Supplier>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match load_settings().await {
                Ok(data) => {
                    company.set(data.company);
                    general.set(data.general);
                    roles.set(data.roles);
                    glass_types.set(data.glass_types);
                    suppliers.set(data.suppliers);
                }
                Err(e) => {
                    log::error!("Failed to load settings: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    view! {
        <div class="page settings">
            <PageHeader title="Settings" subtitle="Company, job roles and glass types".to_string()>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <ErrorCard message=error />

            <div class="page-tabs">
                {SettingsTab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            class="page-tabs__item"
                            class:page-tabs__item--active=move || active_tab.get() == tab
                            on:click=move |_| active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <Show when=move || loading.get()>
                <div class="loading-strip"><Spinner /></div>
            </Show>

            {move || match active_tab.get() {
                SettingsTab::Company => view! { <CompanyForm company=company /> }.into_any(),
                SettingsTab::General => view! { <GeneralSettings settings=general /> }.into_any(),
                SettingsTab::JobRoles => view! { <JobRoleList roles=roles suppliers=suppliers /> }.into_any(),
                SettingsTab::GlassTypes => view! { <GlassTypeList glass_types=glass_types /> }.into_any(),
            }}
        </div>
    }
}

/// Read-only on/off list
#[component]
fn GeneralSettings(settings: RwSignal<Vec<GeneralSetting>>) -> impl IntoView {
    view! {
        <div class="settings-section">
            <For
                each=move || settings.get()
                key=|s| s.id.clone()
                children=move |setting: GeneralSetting| {
                    let (text, color) = if setting.value {
                        ("On", BadgeColor::Success)
                    } else {
                        ("Off", BadgeColor::Subtle)
                    };
                    view! {
                        <div class="setting-row">
                            <div class="setting-row__text">
                                <div class="setting-row__label">{setting.label}</div>
                                <div class="setting-row__description">{setting.description}</div>
                            </div>
                            <Badge appearance=BadgeAppearance::Tint color=color>{text}</Badge>
                        </div>
                    }
                }
            />
            <Show when=move || settings.with(|s| s.is_empty())>
                <div class="empty-state">"No general settings"</div>
            </Show>
        </div>
    }
}
