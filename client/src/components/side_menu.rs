//! Collapsible dashboard side menu.

use leptos::prelude::*;

use crate::state::dashboard::{ActivePage, DashboardState};

#[component]
pub fn SideMenu(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let collapsed = move || dashboard.get().sidebar_collapsed;

    view! {
        <aside
            class="side-menu"
            class:side-menu--collapsed=collapsed
            style=move || format!("width: {}px;", dashboard.get().sidebar_width())
        >
            <div class="side-menu__head">
                <Show when=move || !collapsed()>
                    <span class="side-menu__brand">"PayNest"</span>
                </Show>
                <button
                    class="btn side-menu__toggle"
                    title="Toggle menu"
                    on:click=move |_| dashboard.update(|d| d.sidebar_collapsed = !d.sidebar_collapsed)
                >
                    {move || if collapsed() { "»" } else { "«" }}
                </button>
            </div>
            <nav class="side-menu__items">
                {ActivePage::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="side-menu__item"
                                class:side-menu__item--active=move || dashboard.get().active == page
                                title=page.label()
                                on:click=move |_| dashboard.update(|d| d.active = page)
                            >
                                <span class="side-menu__icon" aria-hidden="true">{page.icon()}</span>
                                <Show when=move || !collapsed()>
                                    <span class="side-menu__label">{page.label()}</span>
                                </Show>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
