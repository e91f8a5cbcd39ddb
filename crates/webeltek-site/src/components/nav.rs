//! Site navigation

use leptos::*;

use super::{FeatherIcon, Icon};
use crate::content::{COMPANY, LOGO_SRC, NAV_ITEMS};
use crate::model::{follow_link, MenuState};

const CTA_CLASS: &str = "rounded-xl bg-[#0a1d56] px-4 py-2 text-sm font-medium text-[#f8cb19] shadow-glow hover:bg-[#142b70] transition";

#[component]
pub fn SiteNav() -> impl IntoView {
    let menu = create_rw_signal(MenuState::new());

    let toggle = move |_: ev::MouseEvent| {
        menu.update(MenuState::toggle);
        tracing::debug!(open = menu.with_untracked(MenuState::is_open), "mobile menu toggled");
    };

    view! {
        // Top accent line
        <div class="h-1 w-full bg-gradient-to-r from-blue-600 via-blue-700 to-blue-900"></div>

        <header class="sticky top-0 z-40 bg-white/90 backdrop-blur border-b border-blue-100">
            <nav class="mx-auto flex max-w-7xl items-center justify-between px-4 py-4 sm:px-6 lg:px-8">
                <a href="#home" class="flex items-center gap-3" aria-label=format!("{COMPANY} home")>
                    <img src=LOGO_SRC alt=format!("{COMPANY} logo") class="h-10 w-auto"/>
                </a>

                // Desktop Nav
                <div class="hidden md:flex items-center gap-8">
                    <NavLinks class="text-sm hover:text-blue-700 transition"/>
                    <a href="#contact" class=CTA_CLASS>"Get Started"</a>
                </div>

                // Mobile menu button
                <button
                    type="button"
                    class="md:hidden inline-flex h-10 w-10 items-center justify-center rounded-xl border border-blue-200 text-blue-900"
                    aria-expanded=move || menu.with(MenuState::is_open).to_string()
                    on:click=toggle
                >
                    <span class="sr-only">"Menu"</span>
                    <Show
                        when=move || menu.with(MenuState::is_open)
                        fallback=|| view! { <FeatherIcon icon=Icon::Menu class="h-5 w-5"/> }
                    >
                        <FeatherIcon icon=Icon::Close class="h-5 w-5"/>
                    </Show>
                </button>
            </nav>

            // Mobile drawer
            <Show when=move || menu.with(MenuState::is_open)>
                <div class="md:hidden border-t border-blue-100 bg-white">
                    <div class="mx-auto max-w-7xl px-4 py-4 sm:px-6 lg:px-8 flex flex-col gap-4">
                        <NavLinks
                            class="text-sm hover:text-blue-700"
                            drawer=menu
                        />
                        <a
                            href="#contact"
                            class="rounded-xl bg-gradient-to-r from-blue-600 to-blue-800 px-4 py-2 text-sm font-medium text-white w-fit"
                            on:click=move |_| menu.update(|menu| follow_link(Some(menu)))
                        >
                            "Get Started"
                        </a>
                    </div>
                </div>
            </Show>
        </header>
    }
}

/// One anchor per navigation entry, in declaration order.
///
/// Links rendered inside the mobile drawer get its state so following one
/// collapses it.
#[component]
pub fn NavLinks(
    class: &'static str,
    #[prop(optional)] drawer: Option<RwSignal<MenuState>>,
) -> impl IntoView {
    NAV_ITEMS
        .iter()
        .map(|item| {
            view! {
                <a
                    href=item.href
                    class=class
                    on:click=move |_| match drawer {
                        Some(menu) => menu.update(|menu| follow_link(Some(menu))),
                        None => follow_link(None),
                    }
                >
                    {item.label}
                </a>
            }
        })
        .collect::<Vec<_>>()
}
