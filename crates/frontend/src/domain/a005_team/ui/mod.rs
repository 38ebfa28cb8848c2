use contracts::domain::a005_team::aggregate::Team;
use leptos::prelude::*;
use thaw::*;

/// Team selector; an empty value means "all teams".
#[component]
pub fn TeamFilter(
    #[prop(into)]
    teams: Signal<Vec<Team>>,
    selected: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="team-filter">
            <span class="team-filter__label">"Team:"</span>
            <Select value=selected>
                <option value="">"All teams"</option>
                <For
                    each=move || teams.get()
                    key=|team| team.id.clone()
                    children=move |team: Team| {
                        view! { <option value=team.id.clone()>{team.name.clone()}</option> }
                    }
                />
            </Select>
        </div>
    }
}
