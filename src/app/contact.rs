use leptos::prelude::*;
use serde::Serialize;

use crate::content::{CONTACT_CHANNELS, SOCIAL_LINKS};

/// Local draft of the message form. Lives only for the current page visit;
/// nothing here is persisted or transmitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let (focused, set_focused) = signal(None::<Field>);
    let (hovering, set_hovering) = signal(false);

    // Submission only writes the draft to the diagnostic log; there is no
    // endpoint behind this form.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = draft.get_untracked();
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::info!("contact form submitted: {json}"),
            Err(err) => log::error!("contact draft failed to serialize: {err}"),
        }
    };

    let field_class = move |field: Field, glow: &'static str| {
        move || {
            let focus = if focused.get() == Some(field) { glow } else { "" };
            format!(
                "w-full px-4 py-3 rounded-md glass-button border-0 bg-muted/20 text-foreground placeholder:text-muted-foreground focus:outline-none transition-all duration-300 {focus}"
            )
        }
    };
    let submit_class = move || {
        let glow = if hovering.get() { "neon-glow-primary scale-105" } else { "" };
        format!(
            "w-full glass-button py-4 text-lg font-semibold group inline-flex items-center justify-center transition-all duration-300 {glow}"
        )
    };

    let channels = CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            let channel = *channel;
            view! {
                <div class="flex items-center group hover:scale-105 transition-all duration-300 cursor-pointer">
                    <div class=format!(
                        "p-3 rounded-full {} {} mr-4 transition-all duration-300",
                        channel.tone.well_class(),
                        channel.tone.group_hover_well_class(),
                    )>
                        <i class=format!("{} {}", channel.icon, channel.tone.text_class())></i>
                    </div>
                    <div>
                        <div class="text-sm text-muted-foreground">{channel.label}</div>
                        <div class=format!(
                            "font-medium {} group-hover:text-foreground transition-colors",
                            channel.tone.text_class(),
                        )>{channel.value}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|link| {
            let link = *link;
            view! {
                <a
                    href=link.href
                    class=format!(
                        "flex items-center p-4 rounded-xl border {} transition-all duration-300 group",
                        link.tone.social_class(),
                    )
                >
                    <i class=format!(
                        "{} {} mr-3 group-hover:animate-pulse",
                        link.icon,
                        link.tone.text_class(),
                    )></i>
                    <span class=format!("{} font-medium", link.tone.text_class())>{link.name}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="contact" class="py-20 px-6 relative">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-6xl font-bold mb-6 gradient-text">"Let's Connect"</h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "Ready to bring your next project to life? Let's discuss how we can create something amazing together."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div
                        class="glass-card p-8 relative group"
                        on:mouseenter=move |_| set_hovering.set(true)
                        on:mouseleave=move |_| set_hovering.set(false)
                    >
                        <div class="mb-8">
                            <h3 class="text-2xl font-bold mb-4 text-primary">"Send a Message"</h3>
                            <p class="text-muted-foreground">
                                "Fill out the form below and I'll get back to you within 24 hours."
                            </p>
                        </div>

                        <form on:submit=on_submit class="space-y-6">
                            <div class="grid md:grid-cols-2 gap-4">
                                <div class="relative">
                                    <input
                                        type="text"
                                        placeholder="Your Name"
                                        required=true
                                        prop:value=move || draft.with(|d| d.name.clone())
                                        on:input=move |ev| {
                                            draft.update(|d| d.name = event_target_value(&ev))
                                        }
                                        on:focus=move |_| set_focused.set(Some(Field::Name))
                                        on:blur=move |_| set_focused.set(None)
                                        class=field_class(Field::Name, "neon-glow-primary")
                                    />
                                    <Show when=move || focused.get() == Some(Field::Name)>
                                        <div class="absolute -top-2 left-3 px-2 bg-background text-xs text-primary">
                                            "Name"
                                        </div>
                                    </Show>
                                </div>

                                <div class="relative">
                                    <input
                                        type="email"
                                        placeholder="your.email@example.com"
                                        required=true
                                        prop:value=move || draft.with(|d| d.email.clone())
                                        on:input=move |ev| {
                                            draft.update(|d| d.email = event_target_value(&ev))
                                        }
                                        on:focus=move |_| set_focused.set(Some(Field::Email))
                                        on:blur=move |_| set_focused.set(None)
                                        class=field_class(Field::Email, "neon-glow-accent")
                                    />
                                    <Show when=move || focused.get() == Some(Field::Email)>
                                        <div class="absolute -top-2 left-3 px-2 bg-background text-xs text-accent">
                                            "Email"
                                        </div>
                                    </Show>
                                </div>
                            </div>

                            <div class="relative">
                                <input
                                    type="text"
                                    placeholder="Project Subject"
                                    required=true
                                    prop:value=move || draft.with(|d| d.subject.clone())
                                    on:input=move |ev| {
                                        draft.update(|d| d.subject = event_target_value(&ev))
                                    }
                                    on:focus=move |_| set_focused.set(Some(Field::Subject))
                                    on:blur=move |_| set_focused.set(None)
                                    class=field_class(Field::Subject, "neon-glow-secondary")
                                />
                                <Show when=move || focused.get() == Some(Field::Subject)>
                                    <div class="absolute -top-2 left-3 px-2 bg-background text-xs text-secondary">
                                        "Subject"
                                    </div>
                                </Show>
                            </div>

                            <div class="relative">
                                <textarea
                                    placeholder="Tell me about your project..."
                                    required=true
                                    prop:value=move || draft.with(|d| d.message.clone())
                                    on:input=move |ev| {
                                        draft.update(|d| d.message = event_target_value(&ev))
                                    }
                                    on:focus=move |_| set_focused.set(Some(Field::Message))
                                    on:blur=move |_| set_focused.set(None)
                                    class=move || format!("min-h-32 {}", field_class(Field::Message, "neon-glow-highlight")())
                                ></textarea>
                                <Show when=move || focused.get() == Some(Field::Message)>
                                    <div class="absolute -top-2 left-3 px-2 bg-background text-xs text-highlight">
                                        "Message"
                                    </div>
                                </Show>
                            </div>

                            <button type="submit" class=submit_class>
                                <i class="fa-solid fa-paper-plane mr-2 group-hover:animate-bounce"></i>
                                "Send Message"
                                <i class="fa-solid fa-bolt ml-2 group-hover:animate-pulse"></i>
                            </button>
                        </form>

                        <Show when=move || hovering.get()>
                            <div class="absolute inset-0 rounded-2xl bg-gradient-to-r from-primary/20 via-accent/20 to-highlight/20 blur-xl animate-pulse pointer-events-none"></div>
                        </Show>
                    </div>

                    <div class="space-y-8">
                        <div class="glass-card p-8">
                            <h3 class="text-2xl font-bold mb-6 text-accent">"Get in Touch"</h3>
                            <div class="space-y-6">{channels}</div>
                        </div>

                        <div class="glass-card p-8">
                            <h3 class="text-2xl font-bold mb-6 text-secondary">"Follow Me"</h3>
                            <div class="grid grid-cols-2 gap-4">{socials}</div>
                        </div>

                        <div class="glass-card p-6 text-center">
                            <div class="flex items-center justify-center mb-3">
                                <div class="w-3 h-3 bg-green-400 rounded-full animate-pulse mr-2"></div>
                                <span class="text-green-400 font-semibold">
                                    "Available for new projects"
                                </span>
                            </div>
                            <p class="text-sm text-muted-foreground">
                                "Currently accepting new client projects for Q2 2024"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_serializes_every_field() {
        let draft = ContactDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "New project".to_string(),
            message: "Let's build something.".to_string(),
        };

        let json = serde_json::to_string(&draft).expect("draft serializes");
        assert!(json.contains("\"name\":\"Ada\""));
        assert!(json.contains("\"email\":\"ada@example.com\""));
        assert!(json.contains("\"subject\":\"New project\""));
        assert!(json.contains("\"message\":\"Let's build something.\""));
    }

    #[test]
    fn test_draft_starts_empty() {
        let draft = ContactDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.email.is_empty());
        assert!(draft.subject.is_empty());
        assert!(draft.message.is_empty());
    }
}
