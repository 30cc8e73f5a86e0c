mod components;
mod contact;
mod header;
mod homepage;
mod search;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-white text-gray-900 antialiased dark:bg-gray-950 dark:text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    theme::provide_theme();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.site_title) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <div class="relative min-h-screen scroll-smooth">
                <Header />
                <main class="mx-auto w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 dark:border-gray-800 py-10 text-center text-sm text-gray-500">
            <div class="mx-auto max-w-6xl px-4 md:px-6">
                <p>
                    {format!("© {} Data Analyst & AI/ML Enthusiast", env!("BUILD_YEAR"))}
                    " • Built with Rust, Leptos & Tailwind."
                </p>
                <p class="mt-2">"Dark/Light mode • Smooth scroll • Responsive"</p>
            </div>
        </footer>
    }
}
