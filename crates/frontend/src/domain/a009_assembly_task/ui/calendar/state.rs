use chrono::NaiveDate;
use contracts::domain::a005_team::aggregate::Team;
use contracts::domain::a009_assembly_task::aggregate::AssemblyTask;
use contracts::domain::a009_assembly_task::calendar::CalendarViewMode;
use leptos::prelude::*;

/// Signals of the assembly calendar screen
#[derive(Clone, Copy)]
pub struct CalendarState {
    pub tasks: RwSignal<Vec<AssemblyTask>>,
    pub teams: RwSignal<Vec<Team>>,
    pub loading: RwSignal<bool>,
    pub view_mode: RwSignal<CalendarViewMode>,
    pub reference: RwSignal<NaiveDate>,
    /// Selected team id, empty for all teams
    pub team_filter: RwSignal<String>,
    /// Task currently being dragged (single gesture)
    pub dragged_task: RwSignal<Option<AssemblyTask>>,
    pub selected_task: RwSignal<Option<AssemblyTask>>,
    pub rescheduling: RwSignal<bool>,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            tasks: RwSignal::new(Vec::new()),
            teams: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            view_mode: RwSignal::new(CalendarViewMode::Month),
            reference: RwSignal::new(today),
            team_filter: RwSignal::new(String::new()),
            dragged_task: RwSignal::new(None),
            selected_task: RwSignal::new(None),
            rescheduling: RwSignal::new(false),
        }
    }

    pub fn team(&self) -> Option<String> {
        Some(self.team_filter.get()).filter(|t| !t.is_empty())
    }
}
