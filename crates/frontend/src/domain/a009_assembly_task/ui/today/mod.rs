pub mod complete_modal;
pub mod issue_modal;
pub mod job_card;
pub mod photo_upload;
pub mod state;

use leptos::prelude::*;
use thaw::*;

use self::complete_modal::CompleteModal;
use self::issue_modal::IssueModal;
use self::job_card::JobCard;
use self::state::TodayState;
use crate::domain::a005_team::ui::TeamFilter;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::{format_long_date, today_local};
use crate::shared::icons::icon;

#[component]
pub fn AssemblyToday() -> impl IntoView {
    let state = TodayState::new();

    Effect::new(move |_| state.load_teams());

    // Reload whenever the team filter changes (and on mount)
    Effect::new(move |_| {
        state.team_filter.track();
        state.load();
    });

    view! {
        <div class="page assembly-today">
            <PageHeader
                title="Today's assembly"
                subtitle=format_long_date(today_local())
            >
                <TeamFilter teams=state.teams selected=state.team_filter />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| state.load()
                    disabled=state.loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <Show when=move || state.loading.get()>
                <div class="loading-strip"><Spinner /></div>
            </Show>

            <Show when=move || !state.loading.get() && state.groups.with(|g| g.is_empty())>
                <div class="empty-state">"No assembly planned for today"</div>
            </Show>

            <div class="job-list">
                {move || {
                    state
                        .groups
                        .get()
                        .into_iter()
                        .map(|group| view! { <JobCard group=group state=state /> })
                        .collect_view()
                }}
            </div>

            {move || state.completing.get().map(|target| view! { <CompleteModal target=target state=state /> })}
            {move || state.reporting.get().map(|task| view! { <IssueModal task=task state=state /> })}
        </div>
    }
}
