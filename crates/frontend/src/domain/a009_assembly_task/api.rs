use contracts::domain::a009_assembly_task::aggregate::AssemblyTask;
use contracts::domain::a009_assembly_task::request::{
    CompleteAllTasksDto, CompleteTaskDto, ReportIssueDto, StartTaskDto, TaskListFilter,
    UpdateAssemblyTaskDto,
};
use contracts::domain::a009_assembly_task::response::{CompleteAllResponse, ReportIssueResponse};
use contracts::domain::a009_assembly_task::today::TodayJobGroup;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{get_json, post_empty, post_json, put_json};

const TASKS: &str = "/api/assembly/tasks";

pub async fn fetch_tasks(filter: &TaskListFilter) -> Result<Vec<AssemblyTask>, ApiError> {
    let query = filter.to_query();
    if query.is_empty() {
        get_json(TASKS).await
    } else {
        get_json(&format!("{}?{}", TASKS, query)).await
    }
}

/// Today's tasks grouped by job, optionally for one team
pub async fn fetch_today(team_id: Option<&str>) -> Result<Vec<TodayJobGroup>, ApiError> {
    match team_id.filter(|t| !t.is_empty()) {
        Some(team) => get_json(&format!("{}/today?teamId={}", TASKS, urlencoding::encode(team))).await,
        None => get_json(&format!("{}/today", TASKS)).await,
    }
}

pub async fn update_task(id: &str, dto: &UpdateAssemblyTaskDto) -> Result<AssemblyTask, ApiError> {
    put_json(&format!("{}/{}", TASKS, id), dto).await
}

pub async fn start_task(id: &str) -> Result<AssemblyTask, ApiError> {
    post_json(&format!("{}/{}/start", TASKS, id), &StartTaskDto::default()).await
}

pub async fn complete_task(id: &str, dto: &CompleteTaskDto) -> Result<AssemblyTask, ApiError> {
    post_json(&format!("{}/{}/complete", TASKS, id), dto).await
}

pub async fn complete_all(job_id: &str, dto: &CompleteAllTasksDto) -> Result<CompleteAllResponse, ApiError> {
    post_json(&format!("{}/complete-all/{}", TASKS, job_id), dto).await
}

pub async fn report_issue(task_id: &str, dto: &ReportIssueDto) -> Result<ReportIssueResponse, ApiError> {
    post_json(&format!("{}/{}/issue", TASKS, task_id), dto).await
}

pub async fn resolve_issue(task_id: &str, issue_id: &str) -> Result<AssemblyTask, ApiError> {
    post_empty(&format!("{}/{}/issues/{}/resolve", TASKS, task_id, issue_id)).await
}
