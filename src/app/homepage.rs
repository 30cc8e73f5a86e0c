use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{EDUCATION, EXPERIENCE, PROFILE, SKILL_GROUPS, SPECIALTIES, TIMELINE};

use super::{
    components::{Badge, Card, Section, SectionTitle},
    contact::ContactSection,
    search::{CertificationsSection, ProjectsSection},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <About />
        <EducationSection />
        <ExperienceSection />
        <SkillsSection />
        <ProjectsSection />
        <CertificationsSection />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <Section id="hero" class="relative pt-12">
            <div class="mx-auto grid max-w-7xl items-center gap-8 px-4 md:grid-cols-2 md:px-6">
                <div class="order-2 md:order-1">
                    <span class="mb-4 inline-block rounded-full bg-violet-500/15 px-3 py-1 text-sm text-violet-600 dark:text-violet-400">
                        "Data • AI • GenAI"
                    </span>
                    <h1 class="mb-4 text-3xl font-extrabold leading-tight md:text-5xl">
                        {PROFILE.headline}
                    </h1>
                    <p class="mb-6 text-lg text-gray-600 dark:text-gray-400">
                        {format!("\"{}\"", PROFILE.tagline)}
                    </p>
                    <div class="flex flex-wrap gap-3">
                        <a
                            href=PROFILE.resume
                            download=""
                            class="rounded-md bg-violet-600 px-5 py-3 text-white hover:bg-violet-500"
                        >
                            "Download Resume"
                        </a>
                        <a href="#projects" class="rounded-md bg-gray-200 px-5 py-3 dark:bg-gray-800">
                            "View Projects"
                        </a>
                    </div>
                    <div class="mt-6 flex flex-wrap items-center gap-4 text-sm text-gray-500">
                        <span>"Oracle • SQL • PL/SQL"</span>
                        <span>"LLM • Vector DB • LangChain"</span>
                    </div>
                </div>
                <div class="order-1 md:order-2">
                    <div class="relative mx-auto flex aspect-square w-64 items-center justify-center overflow-hidden rounded-3xl border bg-gray-100 shadow-2xl md:w-80 dark:bg-gray-900">
                        <span class="text-gray-500">"Upload your professional photo"</span>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <Section id="about">
            <SectionTitle title="About Me" subtitle="Profile" />
            <div class="mx-auto grid max-w-6xl gap-6 px-4 md:grid-cols-3 md:px-6">
                <Card class="md:col-span-2">
                    <div class="space-y-4 p-6 text-gray-600 dark:text-gray-400">
                        <p>
                            "I am a Data Analyst, SQL Developer, and AI/ML Enthusiast with over 6 years of global experience in delivering data-driven solutions, automating business processes, and building intelligent applications. My expertise spans across core banking systems, data analytics, reporting, and modern AI-powered solutions."
                        </p>
                        <p>
                            <strong class="text-gray-900 dark:text-gray-100">"I specialize in:"</strong>
                        </p>
                        <ul class="list-disc space-y-2 pl-6">
                            {SPECIALTIES
                                .iter()
                                .map(|(area, detail)| {
                                    view! {
                                        <li>
                                            <strong>{format!("{area}:")}</strong>
                                            " "
                                            {*detail}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <p>
                            "With a proven track record in both corporate banking software engineering and data science applications, I thrive at the intersection of data analytics, AI/ML, and financial technology, enabling organizations to make smarter, faster, and more informed decisions."
                        </p>
                    </div>
                </Card>
                <Card>
                    <div class="p-6">
                        <h3 class="mb-4 text-lg font-semibold">"Career Growth"</h3>
                        <CareerTimeline />
                    </div>
                </Card>
            </div>
        </Section>
    }
}

/// Milestones as an ordered list, one step per level.
#[component]
fn CareerTimeline() -> impl IntoView {
    view! {
        <ol class="relative space-y-3 border-l border-violet-500/40 pl-4">
            {TIMELINE
                .iter()
                .map(|m| {
                    view! {
                        <li class="text-sm">
                            <span class="font-mono text-xs text-gray-500">{format!("{:.1}", m.year)}</span>
                            " "
                            <span>{m.label}</span>
                            <span class="ml-1 text-xs text-violet-500">{format!("(Level {})", m.level)}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
        <p class="mt-2 text-xs text-gray-500">"Timeline of impact & responsibility over time."</p>
    }
}

#[component]
fn EducationSection() -> impl IntoView {
    view! {
        <Section id="education">
            <SectionTitle title="Education" subtitle="Academic" />
            <div class="mx-auto grid max-w-5xl gap-4 px-4 md:grid-cols-2 md:px-6">
                {EDUCATION
                    .iter()
                    .map(|e| {
                        view! {
                            <Card>
                                <div class="p-6">
                                    <h3 class="font-semibold">{e.title}</h3>
                                    <p class="mt-2 text-gray-500">{e.year}</p>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    view! {
        <Section id="experience">
            <SectionTitle title="Work Experience" subtitle="Career" />
            <div class="mx-auto grid max-w-6xl gap-6 px-4 md:grid-cols-2 md:px-6">
                {EXPERIENCE
                    .iter()
                    .map(|role| {
                        view! {
                            <Card class="border-violet-500/20">
                                <div class="p-6">
                                    <div class="mb-4 flex items-start justify-between gap-4">
                                        <div>
                                            <h3 class="text-lg font-semibold">{role.company}</h3>
                                            <p class="text-sm text-gray-500">{role.title}</p>
                                        </div>
                                        <Badge text=role.period />
                                    </div>
                                    <ul class="list-disc space-y-2 pl-6 text-gray-600 dark:text-gray-400">
                                        {role.duties.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                                    </ul>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <Section id="skills">
            <SectionTitle title="Skills" subtitle="Toolbox" />
            <div class="mx-auto grid max-w-6xl gap-6 px-4 md:grid-cols-2 md:px-6">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <Card>
                                <div class="p-6">
                                    <h3 class="mb-4 text-lg font-semibold">{format!("› {}", group.name)}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|s| view! { <Badge text=*s outline=true /> })
                                            .collect_view()}
                                    </div>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}
