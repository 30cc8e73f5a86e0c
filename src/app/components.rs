use leptos::prelude::*;

#[component]
pub fn Section(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("scroll-mt-24 py-16 md:py-24 {class}")>
            {children()}
        </section>
    }
}

#[component]
pub fn SectionTitle(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mx-auto mb-10 max-w-3xl text-center">
            <div class="mb-3 text-sm uppercase tracking-wider text-violet-600 dark:text-violet-400">
                {subtitle}
            </div>
            <h2 class="text-3xl font-semibold leading-tight md:text-4xl">{title}</h2>
        </div>
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "rounded-xl border border-gray-200 bg-white/70 shadow-sm dark:border-gray-800 dark:bg-gray-900/70 {class}",
        )>{children()}</div>
    }
}

#[component]
pub fn Badge(text: &'static str, #[prop(optional)] outline: bool) -> impl IntoView {
    let class = if outline {
        "rounded-full border border-gray-300 px-3 py-1 text-xs dark:border-gray-700"
    } else {
        "rounded-full bg-gray-200 px-3 py-1 text-xs dark:bg-gray-800"
    };
    view! { <span class=class>{text}</span> }
}

/// Text input with a search glyph, writing every keystroke to `query`.
#[component]
pub fn SearchInput(query: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="relative w-full md:w-96">
            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-500" aria-hidden="true">
                "🔍"
            </span>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                class="w-full rounded-md border border-gray-300 bg-transparent py-2 pl-9 pr-4 focus:outline-none focus:ring-2 focus:ring-violet-500 dark:border-gray-700"
            />
        </div>
    }
}
