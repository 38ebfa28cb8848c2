pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Tabs                |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <aside
                    data-zone="left"
                    class="app-sidebar"
                    class:hidden=move || !ctx.left_open.get()
                >
                    {left()}
                </aside>

                <main data-zone="center" class="app-main app-tabs">
                    {center()}
                </main>
            </div>
        </div>
    }
}
