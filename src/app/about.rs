use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::content::TIMELINE;

#[component]
pub fn AboutSection() -> impl IntoView {
    let item_refs: Vec<NodeRef<html::Div>> = (0..TIMELINE.len()).map(|_| NodeRef::new()).collect();
    let revealed = use_reveal(item_refs.clone(), None);

    let timeline_items = TIMELINE
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let event = *event;
            let node_ref = item_refs[index];
            let is_left = index % 2 == 0;
            let visible = move || revealed.with(|set| set.contains(index));

            let row_class = if is_left {
                "relative flex items-center mb-12 flex-row-reverse"
            } else {
                "relative flex items-center mb-12"
            };
            let dot_class = move || {
                let state = if visible() {
                    format!("{} {} scale-100", event.tone.solid_class(), event.tone.glow_class())
                } else {
                    "bg-muted scale-0".to_string()
                };
                format!(
                    "absolute left-1/2 transform -translate-x-1/2 w-4 h-4 rounded-full transition-all duration-700 {state}"
                )
            };
            let card_class = move || {
                let state = if visible() {
                    "opacity-100 translate-x-0"
                } else if is_left {
                    "opacity-0 translate-x-8"
                } else {
                    "opacity-0 -translate-x-8"
                };
                format!("w-5/12 transition-all duration-700 delay-200 {state}")
            };

            view! {
                <div node_ref=node_ref class=row_class>
                    <div class=dot_class></div>

                    <div class=card_class>
                        <div class="glass-card p-6 hover:neon-glow-primary transition-all duration-300">
                            <div class="flex items-center mb-3">
                                <div class=format!("p-2 rounded-full {} mr-3", event.tone.well_class())>
                                    <i class=format!("{} {}", event.icon, event.tone.text_class())></i>
                                </div>
                                <div class=format!("text-sm font-semibold {}", event.tone.text_class())>
                                    {event.year}
                                </div>
                            </div>

                            <h4 class="text-lg font-bold mb-2 text-foreground">{event.title}</h4>

                            <p class="text-muted-foreground text-sm leading-relaxed">
                                {event.description}
                            </p>
                        </div>
                    </div>

                    <div class="w-5/12"></div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="py-20 px-6 relative overflow-hidden">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-6xl font-bold mb-6 gradient-text">"About Me"</h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto leading-relaxed">
                        "I'm a passionate Laravel developer who believes in creating "
                        <span class="text-primary">"beautiful"</span> ", "
                        <span class="text-accent">"functional"</span> ", and "
                        <span class="text-highlight">"innovative"</span>
                        " web applications that push the boundaries of what's possible."
                    </p>
                </div>

                <div class="glass-card p-8 mb-16">
                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <div>
                            <h3 class="text-2xl font-bold mb-6 text-primary">"My Story"</h3>
                            <p class="text-muted-foreground leading-relaxed mb-6">
                                "Every line of code I write is crafted with purpose and passion. \
                                I started my journey in web development with a simple goal: to \
                                create digital experiences that not only work flawlessly but also \
                                inspire and delight users."
                            </p>
                            <p class="text-muted-foreground leading-relaxed">
                                "Laravel became my framework of choice because of its elegant \
                                syntax and powerful features. I love how it allows me to build \
                                robust applications while maintaining clean, readable code that \
                                stands the test of time."
                            </p>
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div class="glass-card p-6 text-center neon-glow-primary">
                                <div class="text-3xl font-bold text-primary mb-2">"50+"</div>
                                <div class="text-sm text-muted-foreground">"Projects Completed"</div>
                            </div>
                            <div class="glass-card p-6 text-center neon-glow-accent">
                                <div class="text-3xl font-bold text-accent mb-2">"4+"</div>
                                <div class="text-sm text-muted-foreground">"Years Experience"</div>
                            </div>
                            <div class="glass-card p-6 text-center neon-glow-secondary">
                                <div class="text-3xl font-bold text-secondary mb-2">"∞"</div>
                                <div class="text-sm text-muted-foreground">"Lines of Code"</div>
                            </div>
                            <div class="glass-card p-6 text-center neon-glow-highlight">
                                <div class="text-3xl font-bold text-highlight mb-2">"100%"</div>
                                <div class="text-sm text-muted-foreground">"Passion Level"</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="relative">
                    <div class="absolute left-1/2 transform -translate-x-1/2 h-full w-1 bg-gradient-to-b from-primary via-accent to-highlight opacity-50"></div>
                    {timeline_items}
                </div>
            </div>
        </section>
    }
}
