use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::{
    contact::{ContactError, ContactMessage},
    content::PROFILE,
};

use super::components::{Card, Section, SectionTitle};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <Section id="contact">
            <SectionTitle title="Contact" subtitle="Let's Talk" />
            <div class="mx-auto grid max-w-5xl gap-6 px-4 md:grid-cols-2 md:px-6">
                <Card>
                    <div class="p-6">
                        <h3 class="mb-4 text-lg font-semibold">"Send a Message"</h3>
                        <ContactForm />
                    </div>
                </Card>
                <Card>
                    <div class="space-y-3 p-6">
                        <h3 class="mb-4 text-lg font-semibold">"Connect"</h3>
                        {PROFILE
                            .links
                            .iter()
                            .map(|link| {
                                let external = !link.href.starts_with("mailto:");
                                view! {
                                    <a
                                        href=link.href
                                        target=external.then_some("_blank")
                                        rel=external.then_some("noreferrer")
                                        class="flex items-center gap-2 text-sm hover:text-violet-500"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </Section>
    }
}

const FIELD_CLASS: &str = "w-full rounded-md border border-gray-300 bg-transparent px-4 py-2 focus:outline-none focus:ring-2 focus:ring-violet-500 dark:border-gray-700";

#[component]
fn ContactForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<ContactError>);
    let (sent_to, set_sent_to) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        match ContactMessage::new(&name.value(), &email.value(), &message.value()) {
            Ok(msg) => {
                set_error(None);
                set_sent_to(Some(msg.name().to_string()));
                let href = msg.mailto(PROFILE.email);
                if let Err(e) = window().location().set_href(&href) {
                    log::warn!("couldn't open mail client: {e:?}");
                }
            }
            Err(e) => {
                set_sent_to(None);
                set_error(Some(e));
            }
        }
    };

    view! {
        <form class="space-y-4" novalidate=true on:submit=on_submit>
            <input node_ref=name_ref name="name" placeholder="Name" class=FIELD_CLASS />
            <input
                node_ref=email_ref
                name="email"
                type="email"
                placeholder="Email"
                class=FIELD_CLASS
            />
            <textarea
                node_ref=message_ref
                name="message"
                placeholder="Message"
                class=format!("min-h-[120px] {FIELD_CLASS}")
            ></textarea>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <p class="text-sm text-red-500" role="alert">
                                {e.to_string()}
                            </p>
                        }
                    })
            }}
            {move || {
                sent_to
                    .get()
                    .map(|name| {
                        view! {
                            <p class="text-sm text-green-600" role="status">
                                {format!("Thanks {name}, your mail client should open now.")}
                            </p>
                        }
                    })
            }}
            <div class="flex items-center gap-2">
                <button
                    type="submit"
                    class="rounded-md bg-violet-600 px-4 py-2 text-white hover:bg-violet-500"
                >
                    "Send"
                </button>
                <a
                    href=PROFILE.resume
                    download=""
                    class="rounded-md bg-gray-200 px-4 py-2 dark:bg-gray-800"
                >
                    "Resume"
                </a>
            </div>
        </form>
    }
}
