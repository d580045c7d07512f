//! Sticky top navigation bar with a collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the current route from the router and the menu state from
//! `RwSignal<UiState>`. Activating any mobile link closes the menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;
use crate::util::nav::{NAV_LINKS, VOLUNTEER_HREF, desktop_link_class, is_active, mobile_link_class};

/// Site navbar shown on every route.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let menu_open = move || ui.get().menu.is_open();
    let close_menu = move |_| ui.update(|u| u.menu.close());
    let toggle_menu = move |_| ui.update(|u| u.menu.toggle());

    let desktop_links = NAV_LINKS
        .iter()
        .map(|link| {
            let href = link.href;
            view! {
                <a href=href class=move || desktop_link_class(is_active(href, &pathname.get()))>
                    {link.label}
                </a>
            }
        })
        .collect_view();

    let mobile_links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                let href = link.href;
                view! {
                    <a
                        href=href
                        class=move || mobile_link_class(is_active(href, &pathname.get()))
                        on:click=close_menu
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    <span class="navbar__logo" aria-hidden="true">"📖"</span>
                    <span class="navbar__name">"Basti Ki Pathshala"</span>
                </a>

                <div class="navbar__desktop">
                    {desktop_links}
                    <a href=VOLUNTEER_HREF class="btn btn--hero btn--sm">"Join Us"</a>
                </div>

                <button
                    class="navbar__toggle"
                    type="button"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || if menu_open() { "true" } else { "false" }
                    on:click=toggle_menu
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=menu_open>
                <div class="navbar__mobile">
                    {mobile_links()}
                    <div class="navbar__mobile-cta">
                        <a href=VOLUNTEER_HREF class="btn btn--hero btn--sm btn--block" on:click=close_menu>
                            "Join Us"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
