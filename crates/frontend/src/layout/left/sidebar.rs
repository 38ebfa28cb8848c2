//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::{ASSEMBLY_CALENDAR, ASSEMBLY_TODAY, DOCUMENT_ARCHIVE, SETTINGS};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "assembly",
            label: "Assembly",
            icon: "hammer",
            items: vec![
                (ASSEMBLY_TODAY, tab_label_for_key(ASSEMBLY_TODAY), "hammer"),
                (ASSEMBLY_CALENDAR, tab_label_for_key(ASSEMBLY_CALENDAR), "calendar"),
            ],
        },
        MenuGroup {
            id: DOCUMENT_ARCHIVE,
            label: tab_label_for_key(DOCUMENT_ARCHIVE),
            icon: "archive",
            items: vec![],
        },
        MenuGroup {
            id: SETTINGS,
            label: tab_label_for_key(SETTINGS),
            icon: "settings",
            items: vec![],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["assembly".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let has_children = !group.items.is_empty();

                let group_id_for_active = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children && ctx.active.get().as_deref() == Some(group_id_for_active.as_str())
                            }
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group.id, group.label);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let gid_show = group_id.clone();
                            let items = group.items.clone();
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items.iter().map(|&(id, label, icon_name)| view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    ctx.active.get().as_deref() == Some(id)
                                                }
                                                on:click=move |_| ctx.open_tab(id, label)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(icon_name)}
                                                    <span>{label}</span>
                                                </div>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
