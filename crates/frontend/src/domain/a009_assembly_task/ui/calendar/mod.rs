pub mod day_cell;
pub mod state;

use self::day_cell::{DayCell, TaskChip};
use self::state::CalendarState;
use super::reschedule_task;
use super::task_detail::TaskDetailModal;
use crate::domain::a005_team::api::fetch_teams;
use crate::domain::a005_team::ui::TeamFilter;
use crate::domain::a009_assembly_task::api;
use crate::shared::components::PageHeader;
use crate::shared::config::app_config;
use crate::shared::date_utils::today_local;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a009_assembly_task::aggregate::AssemblyTask;
use contracts::domain::a009_assembly_task::calendar::{
    build_grid, period_title, shift_period, CalendarViewMode, WEEKDAY_LABELS,
};
use contracts::domain::a009_assembly_task::request::TaskListFilter;
use contracts::domain::a009_assembly_task::schedule::bucket_tasks;
use leptos::ev::DragEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn AssemblyCalendar() -> impl IntoView {
    let today = today_local();
    let state = CalendarState::new(today);
    let config = app_config();

    let load_tasks = move || {
        state.loading.set(true);
        spawn_local(async move {
            match api::fetch_tasks(&TaskListFilter::default()).await {
                Ok(tasks) => state.tasks.set(tasks),
                Err(e) => {
                    log::error!("Failed to load assembly tasks: {}", e);
                    state.tasks.set(Vec::new());
                }
            }
            state.loading.set(false);
        });
    };

    let load_teams = move || {
        spawn_local(async move {
            match fetch_teams().await {
                Ok(teams) => state.teams.set(teams),
                Err(e) => {
                    log::warn!("Failed to load teams: {}", e);
                    state.teams.set(Vec::new());
                }
            }
        });
    };

    // Load on mount
    Effect::new(move |_| {
        load_tasks();
        load_teams();
    });

    let buckets = Memo::new(move |_| {
        let team = state.team();
        state.tasks.with(|tasks| bucket_tasks(tasks, team.as_deref()))
    });
    let grid = Memo::new(move |_| build_grid(state.reference.get(), state.view_mode.get()));

    let on_drop = Callback::new(move |date: NaiveDate| {
        let dragged = state.dragged_task.get_untracked();
        state.dragged_task.set(None);
        if state.rescheduling.get_untracked() {
            log::warn!("Drop ignored: a reschedule is still in flight");
            return;
        }
        let Some(task) = dragged else {
            return;
        };
        reschedule_task(
            &task,
            date,
            move |busy| state.rescheduling.set(busy),
            load_tasks,
        );
    });
    let on_select = Callback::new(move |task: AssemblyTask| state.selected_task.set(Some(task)));

    let shift = move |step: i32| {
        state
            .reference
            .update(|r| *r = shift_period(*r, state.view_mode.get_untracked(), step));
    };

    let unplanned_limit = config.calendar.unplanned_limit;

    view! {
        <div class="assembly-calendar">
            <PageHeader
                title="Assembly calendar"
                subtitle=Signal::derive(move || Some(period_title(state.reference.get(), state.view_mode.get())))
            >
                <Space>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| shift(-1)>
                        {icon("chevron-left")}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| state.reference.set(today)>
                        "Today"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| shift(1)>
                        {icon("chevron-right")}
                    </Button>
                    <div class="segmented">
                        {[CalendarViewMode::Month, CalendarViewMode::Week].into_iter().map(|mode| view! {
                            <button
                                class="segmented__item"
                                class:segmented__item--active=move || state.view_mode.get() == mode
                                on:click=move |_| state.view_mode.set(mode)
                            >
                                {match mode {
                                    CalendarViewMode::Month => "Month",
                                    CalendarViewMode::Week => "Week",
                                }}
                            </button>
                        }).collect_view()}
                    </div>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || format!("{} planned", buckets.with(|b| b.planned_count()))}
                    </Badge>
                    <TeamFilter teams=state.teams selected=state.team_filter />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_tasks()
                        disabled=state.loading
                    >
                        {icon("refresh")}
                    </Button>
                </Space>
            </PageHeader>

            <Show when=move || state.loading.get() || state.rescheduling.get()>
                <div class="loading-strip">
                    <Flex align=FlexAlign::Center gap=FlexGap::Small>
                        <Spinner />
                        {move || if state.rescheduling.get() { "Saving..." } else { "Loading..." }}
                    </Flex>
                </div>
            </Show>

            <div class="assembly-calendar__body">
                <div
                    class="calendar-grid"
                    class:calendar-grid--week=move || state.view_mode.get() == CalendarViewMode::Week
                >
                    {WEEKDAY_LABELS
                        .iter()
                        .map(|label| view! { <div class="calendar-grid__weekday">{*label}</div> })
                        .collect_view()}
                    {move || {
                        let limit = config.cell_limit(state.view_mode.get());
                        grid.get()
                            .into_iter()
                            .map(|day| {
                                let tasks = buckets.with(|b| b.tasks_on(day.date).to_vec());
                                view! {
                                    <DayCell
                                        day=day
                                        tasks=tasks
                                        limit=limit
                                        is_today=day.date == today
                                        dragged_task=state.dragged_task
                                        busy=state.rescheduling
                                        on_drop=on_drop
                                        on_select=on_select
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <aside class="unplanned-panel">
                    <div class="unplanned-panel__header">
                        <span>"Unplanned"</span>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                            {move || buckets.with(|b| b.open_unplanned_total())}
                        </Badge>
                    </div>
                    <div class="unplanned-panel__hint">"Drag a task onto a day to plan it"</div>
                    <div
                        class="unplanned-panel__list"
                        on:dragover=move |ev: DragEvent| ev.prevent_default()
                    >
                        {move || {
                            let open: Vec<AssemblyTask> = buckets
                                .with(|b| b.open_unplanned(unplanned_limit).into_iter().cloned().collect());
                            if open.is_empty() {
                                view! { <div class="unplanned-panel__empty">"No unplanned tasks"</div> }.into_any()
                            } else {
                                open.into_iter()
                                    .map(|task| view! {
                                        <TaskChip
                                            task=task
                                            dragged_task=state.dragged_task
                                            busy=state.rescheduling
                                            on_select=on_select
                                            show_due=true
                                        />
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </aside>
            </div>

            {move || state.selected_task.get().map(|task| view! {
                <TaskDetailModal
                    task=task
                    on_close=Callback::new(move |_| state.selected_task.set(None))
                    on_saved=Callback::new(move |_| {
                        state.selected_task.set(None);
                        load_tasks();
                    })
                />
            })}
        </div>
    }
}
