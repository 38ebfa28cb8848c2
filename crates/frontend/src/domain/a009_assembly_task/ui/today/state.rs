use std::future::Future;

use contracts::domain::a005_team::aggregate::Team;
use contracts::domain::a009_assembly_task::aggregate::AssemblyTask;
use contracts::domain::a009_assembly_task::today::TodayJobGroup;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_team::api::fetch_teams;
use crate::domain::a009_assembly_task::api;
use crate::shared::dialogs::alert;

/// What the completion modal finishes: one task or the whole job
#[derive(Debug, Clone, PartialEq)]
pub enum CompleteTarget {
    Task(AssemblyTask),
    Job { job_id: String, customer: String },
}

impl CompleteTarget {
    pub fn job_id(&self) -> &str {
        match self {
            CompleteTarget::Task(task) => &task.job_id,
            CompleteTarget::Job { job_id, .. } => job_id,
        }
    }

    pub fn title(&self) -> String {
        match self {
            CompleteTarget::Task(task) => format!("Complete: {}", task.title()),
            CompleteTarget::Job { customer, .. } => format!("Complete all tasks: {}", customer),
        }
    }
}

/// Signals of the today's assembly screen
#[derive(Clone, Copy)]
pub struct TodayState {
    pub groups: RwSignal<Vec<TodayJobGroup>>,
    pub teams: RwSignal<Vec<Team>>,
    /// Selected team id, empty for all teams
    pub team_filter: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub action_loading: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
    pub completing: RwSignal<Option<CompleteTarget>>,
    pub reporting: RwSignal<Option<AssemblyTask>>,
}

impl TodayState {
    pub fn new() -> Self {
        Self {
            groups: RwSignal::new(Vec::new()),
            teams: RwSignal::new(Vec::new()),
            team_filter: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            action_loading: RwSignal::new(false),
            uploading: RwSignal::new(false),
            completing: RwSignal::new(None),
            reporting: RwSignal::new(None),
        }
    }

    pub fn load(self) {
        let team = self.team_filter.get_untracked();
        self.loading.set(true);
        spawn_local(async move {
            match api::fetch_today(Some(&team)).await {
                Ok(groups) => self.groups.set(groups),
                Err(e) => {
                    log::error!("Failed to load today's tasks: {}", e);
                    self.groups.set(Vec::new());
                }
            }
            self.loading.set(false);
        });
    }

    pub fn load_teams(self) {
        spawn_local(async move {
            match fetch_teams().await {
                Ok(teams) => self.teams.set(teams),
                Err(e) => {
                    log::warn!("Failed to load teams: {}", e);
                    self.teams.set(Vec::new());
                }
            }
        });
    }

    /// Runs a mutation with the action flag raised, then reloads the day.
    /// Failures are shown to the user as is.
    pub fn run_action<F>(self, what: &'static str, action: F)
    where
        F: Future<Output = Result<(), ApiError>> + 'static,
    {
        self.action_loading.set(true);
        spawn_local(async move {
            match action.await {
                Ok(()) => {
                    log::info!("{}: done", what);
                    self.load();
                }
                Err(e) => {
                    log::error!("{} failed: {}", what, e);
                    alert(&e.to_string());
                }
            }
            self.action_loading.set(false);
        });
    }

    pub fn busy(&self) -> bool {
        self.action_loading.get() || self.uploading.get()
    }
}

impl Default for TodayState {
    fn default() -> Self {
        Self::new()
    }
}
