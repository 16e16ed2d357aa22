use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::content::{Tone, SKILL_GROUPS, TECH_STACK};
use crate::reveal::STAGGER_STEP;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let card_refs: Vec<NodeRef<html::Div>> =
        (0..SKILL_GROUPS.len()).map(|_| NodeRef::new()).collect();
    let revealed = use_reveal(card_refs.clone(), Some(STAGGER_STEP));
    let (hovered, set_hovered) = signal(None::<usize>);

    let cards = SKILL_GROUPS
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let group = *group;
            let node_ref = card_refs[index];
            let tone = Tone::cycle(index);
            let visible = move || revealed.with(|set| set.contains(index));
            let is_hovered = move || hovered.get() == Some(index);

            let wrap_class = move || {
                let state = if visible() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-8"
                };
                format!("relative group cursor-pointer transition-all duration-500 {state}")
            };
            let card_class = move || {
                let mut class = String::from("glass-card h-full p-6 transition-all duration-300");
                if is_hovered() {
                    class.push_str(" scale-105 ");
                    class.push_str(tone.glow_class());
                }
                class
            };
            let well_class = move || {
                let strength = if is_hovered() {
                    tone.well_hover_class()
                } else {
                    tone.well_class()
                };
                format!(
                    "w-12 h-12 rounded-full flex items-center justify-center transition-all duration-300 {strength}"
                )
            };
            let icon_class = move || {
                let swell = if is_hovered() { " scale-110" } else { "" };
                format!("{} {} transition-all duration-300{swell}", group.icon, tone.text_class())
            };
            let title_class = move || {
                let color = if is_hovered() { tone.text_class() } else { "text-foreground" };
                format!("text-lg font-bold mb-4 transition-all duration-300 {color}")
            };

            let skill_rows = group
                .skills
                .iter()
                .enumerate()
                .map(|(skill_index, name)| {
                    let row_class = move || {
                        if is_hovered() {
                            format!(
                                "text-sm transition-all duration-300 transform translate-x-1 {}",
                                tone.text_class()
                            )
                        } else {
                            "text-sm transition-all duration-300 text-muted-foreground".to_string()
                        }
                    };
                    let row_style = move || {
                        let delay = if is_hovered() { skill_index * 50 } else { 0 };
                        format!("transition-delay: {delay}ms")
                    };
                    view! {
                        <div class=row_class style=row_style>
                            {format!("• {name}")}
                        </div>
                    }
                })
                .collect_view();

            let bar_class = move || {
                let width = if visible() { "w-full" } else { "w-0" };
                format!(
                    "h-full rounded-full transition-all duration-1000 {width} {}",
                    tone.bar_class()
                )
            };
            let bar_style = format!("transition-delay: {}ms", index * 100 + 300);

            view! {
                <div
                    node_ref=node_ref
                    class=wrap_class
                    on:mouseenter=move |_| set_hovered.set(Some(index))
                    on:mouseleave=move |_| set_hovered.set(None)
                >
                    <div class=card_class>
                        <div class=move || {
                            if is_hovered() { "mb-4 relative floating" } else { "mb-4 relative" }
                        }>
                            <div class=well_class>
                                <i class=icon_class></i>
                            </div>
                            <Show when=is_hovered>
                                <div class=format!(
                                    "absolute inset-0 rounded-full border-2 animate-ping opacity-75 {}",
                                    tone.ring_class(),
                                )></div>
                            </Show>
                        </div>

                        <h3 class=title_class>{group.title}</h3>

                        <div class="space-y-2">{skill_rows}</div>

                        <div class="mt-4">
                            <div class="h-1 bg-muted rounded-full overflow-hidden">
                                <div class=bar_class style=bar_style></div>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let tech_chips = TECH_STACK
        .iter()
        .enumerate()
        .map(|(index, tech)| {
            view! {
                <div
                    class="glass-button px-4 py-2 text-sm font-medium hover:neon-glow-primary transition-all duration-300"
                    style=format!("animation-delay: {}ms", index * 100)
                >
                    {*tech}
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="py-20 px-6 relative">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-6xl font-bold mb-6 gradient-text">
                        "Skills & Expertise"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "Powered by cutting-edge technologies and years of hands-on experience"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">{cards}</div>

                <div class="mt-20 text-center">
                    <h3 class="text-2xl font-bold mb-8 gradient-text">"Tech Stack"</h3>
                    <div class="flex flex-wrap justify-center gap-4">{tech_chips}</div>
                </div>
            </div>
        </section>
    }
}
