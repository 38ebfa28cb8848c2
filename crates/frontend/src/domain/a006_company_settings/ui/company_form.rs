use std::time::Duration;

use contracts::domain::a006_company_settings::aggregate::CompanyInfo;
use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_company_settings::api::update_company;
use crate::shared::dialogs::alert;

const SAVED_NOTICE: Duration = Duration::from_secs(3);

type Getter = fn(&CompanyInfo) -> String;
type Setter = fn(&mut CompanyInfo, String);

fn fields() -> [(&'static str, Getter, Setter); 11] {
    [
        ("Company name", |c| c.name.clone(), |c, v| c.name = v),
        ("Logo URL", |c| c.logo_url.clone(), |c, v| c.logo_url = v),
        ("Address", |c| c.address.clone(), |c, v| c.address = v),
        ("City", |c| c.city.clone(), |c, v| c.city = v),
        ("Phone", |c| c.phone.clone(), |c, v| c.phone = v),
        ("Phone 2", |c| c.phone2.clone(), |c, v| c.phone2 = v),
        ("E-mail", |c| c.email.clone(), |c, v| c.email = v),
        ("Website", |c| c.website.clone(), |c, v| c.website = v),
        ("Tax office", |c| c.tax_office.clone(), |c, v| c.tax_office = v),
        ("Tax number", |c| c.tax_number.clone(), |c, v| c.tax_number = v),
        ("IBAN", |c| c.iban.clone(), |c, v| c.iban = v),
    ]
}

#[component]
pub fn CompanyForm(company: RwSignal<CompanyInfo>) -> impl IntoView {
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let save = move |_| {
        let info = company.get_untracked();
        saving.set(true);
        spawn_local(async move {
            match update_company(&info).await {
                Ok(updated) => {
                    log::info!("Company info saved");
                    company.set(updated);
                    saving.set(false);
                    saved.set(true);
                    sleep(SAVED_NOTICE).await;
                    saved.set(false);
                }
                Err(e) => {
                    log::error!("Failed to save company info: {}", e);
                    alert(&e.to_string());
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="settings-section">
            <div class="form-grid">
                {fields()
                    .into_iter()
                    .map(|(label, get, set)| view! {
                        <div class="form-field">
                            <label>{label}</label>
                            <input
                                type="text"
                                class="form-control"
                                prop:value=move || company.with(get)
                                on:input=move |ev| company.update(|c| set(c, event_target_value(&ev)))
                            />
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="settings-section__footer">
                <Show when=move || saved.get()>
                    <span class="text-success">"✓ Saved"</span>
                </Show>
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=saving>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </div>
    }
}
