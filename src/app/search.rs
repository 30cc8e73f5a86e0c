use leptos::{either::Either, prelude::*};

use crate::{
    content::{Certification, Project, CERTIFICATIONS, PROJECTS},
    filter::filter,
};

use super::components::{Badge, Card, SearchInput, Section, SectionTitle};

#[component]
fn NoMatches(what: &'static str, query: RwSignal<String>) -> impl IntoView {
    view! {
        <p class="py-8 text-center text-gray-500">
            {move || format!("No {what} match \"{}\".", query.get())}
        </p>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let projects = Memo::new(move |_| query.with(|q| filter(q, PROJECTS, Project::SEARCH_FIELDS)));

    view! {
        <Section id="projects">
            <SectionTitle title="Projects" subtitle="Selected Work" />
            <div class="mx-auto max-w-6xl px-4 md:px-6">
                <div class="mb-6 flex items-center gap-2">
                    <SearchInput query placeholder="Search by title or tag…" />
                </div>
                {move || {
                    if projects.with(|p| p.is_empty()) {
                        Either::Left(view! { <NoMatches what="projects" query /> })
                    } else {
                        Either::Right(
                            view! {
                                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                                    <For
                                        each=move || projects.get()
                                        key=|p| p.title
                                        children=|project| view! { <ProjectCard project /> }
                                    />
                                </div>
                            },
                        )
                    }
                }}
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <Card class="group h-full overflow-hidden">
            <div class="space-y-4 p-6">
                <h3 class="text-lg font-semibold transition-colors group-hover:text-violet-500">
                    {project.title}
                </h3>
                <p class="text-sm text-gray-600 dark:text-gray-400">{project.blurb}</p>
                <div class="flex flex-wrap gap-2">
                    {project.tags.iter().map(|t| view! { <Badge text=*t outline=true /> }).collect_view()}
                </div>
                <a
                    href=project.link
                    target="_blank"
                    rel="noreferrer"
                    class="inline-flex items-center gap-2 rounded-md bg-gray-200 px-3 py-1.5 text-sm dark:bg-gray-800"
                >
                    "View details ↗"
                </a>
            </div>
        </Card>
    }
}

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let certifications = Memo::new(move |_| {
        query.with(|q| filter(q, CERTIFICATIONS, Certification::SEARCH_FIELDS))
    });

    view! {
        <Section id="certifications">
            <SectionTitle title="Certifications" subtitle="Badges" />
            <div class="mx-auto max-w-6xl px-4 md:px-6">
                <div class="mb-6 flex items-center gap-2">
                    <SearchInput query placeholder="Search certifications…" />
                </div>
                {move || {
                    if certifications.with(|c| c.is_empty()) {
                        Either::Left(view! { <NoMatches what="certifications" query /> })
                    } else {
                        Either::Right(
                            view! {
                                <div class="no-scrollbar flex snap-x gap-4 overflow-x-auto pb-2">
                                    // titles may repeat, so the position breaks ties
                                    <For
                                        each=move || certifications.get().into_iter().enumerate()
                                        key=|(i, c)| (c.title, *i)
                                        children=|(_, certification)| {
                                            view! { <CertificationCard certification /> }
                                        }
                                    />
                                </div>
                            },
                        )
                    }
                }}
            </div>
        </Section>
    }
}

#[component]
fn CertificationCard(certification: &'static Certification) -> impl IntoView {
    view! {
        <Card class="min-w-[280px] snap-center">
            <div class="p-6">
                <div class="mb-2 flex items-center gap-2">
                    <span class="text-violet-500" aria-hidden="true">"🏅"</span>
                    <span class="font-medium">{certification.title}</span>
                </div>
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    {format!("{} • {}", certification.org, certification.year)}
                </p>
                <div class="mt-4 flex items-center gap-2">
                    <Badge text="Verified" />
                    <Badge text="Professional" outline=true />
                </div>
            </div>
        </Card>
    }
}
