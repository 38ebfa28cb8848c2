use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::registry::ASSEMBLY_TODAY;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the layout is created
    tabs_store.init_router_integration();

    // Without `?active=` the day starts on today's assembly
    if tabs_store.active.get_untracked().is_none() {
        tabs_store.open_tab(ASSEMBLY_TODAY, tab_label_for_key(ASSEMBLY_TODAY));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
