use leptos::prelude::*;

use crate::content::{NAV_SECTIONS, PROFILE};

use super::theme::use_theme;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-30 border-b border-gray-200 backdrop-blur bg-white/70 dark:border-gray-800 dark:bg-gray-950/70">
            <nav class="mx-auto flex max-w-7xl items-center justify-between px-4 py-3 md:px-6">
                <a href="#hero" class="font-semibold tracking-tight">
                    {PROFILE.site_title}
                </a>
                <div class="flex items-center gap-1">
                    <div class="hidden items-center gap-1 md:flex">
                        {NAV_SECTIONS
                            .iter()
                            .map(|(label, id)| {
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class="rounded-md px-3 py-2 text-sm hover:bg-gray-100 dark:hover:bg-gray-800"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <ThemeSwitch />
                </div>
            </nav>
        </header>
    }
}

#[component]
fn ThemeSwitch() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="ml-2 flex items-center gap-2 rounded-full border border-gray-300 px-3 py-1 text-xs dark:border-gray-700">
            <span aria-hidden="true">"☀"</span>
            <button
                type="button"
                role="switch"
                aria-label="Dark mode"
                aria-checked=move || if theme.is_dark() { "true" } else { "false" }
                on:click=move |_| theme.toggle()
                class=move || {
                    if theme.is_dark() {
                        "relative h-5 w-9 rounded-full bg-violet-500 transition-colors"
                    } else {
                        "relative h-5 w-9 rounded-full bg-gray-300 transition-colors"
                    }
                }
            >
                <span class=move || {
                    if theme.is_dark() {
                        "absolute left-0.5 top-0.5 h-4 w-4 translate-x-4 rounded-full bg-white transition-transform"
                    } else {
                        "absolute left-0.5 top-0.5 h-4 w-4 rounded-full bg-white transition-transform"
                    }
                }></span>
            </button>
            <span aria-hidden="true">"☾"</span>
        </div>
    }
}
