use leptos::prelude::*;

use crate::content::PROJECTS;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<usize>);
    let (active, set_active) = signal(None::<usize>);

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let project = *project;
            let tone = project.tone;
            let is_hovered = move || hovered.get() == Some(index);
            let is_active = move || active.get() == Some(index);

            let card_class = move || {
                let mut class = String::from("glass-card p-6 h-full transition-all duration-500");
                if is_hovered() {
                    class.push_str(" scale-105 ");
                    class.push_str(tone.glow_class());
                }
                if is_active() {
                    class.push_str(" ring-2 ring-primary/50");
                }
                class
            };
            let title_class = move || {
                let color = if is_hovered() { tone.text_class() } else { "text-foreground" };
                format!("text-xl font-bold transition-colors duration-300 {color}")
            };
            let actions_class = move || {
                let state = if is_hovered() { "opacity-100" } else { "opacity-0" };
                format!("flex gap-2 ml-4 transition-all duration-300 {state}")
            };

            let tags = project
                .tags
                .iter()
                .enumerate()
                .map(|(tag_index, tag)| {
                    let chip_class = move || {
                        let scale = if is_hovered() { " scale-105" } else { "" };
                        format!(
                            "px-2 py-1 text-xs rounded-full border {}{scale} transition-all duration-300",
                            tone.chip_class()
                        )
                    };
                    view! {
                        <span
                            class=chip_class
                            style=format!("animation-delay: {}ms", tag_index * 50)
                        >
                            {*tag}
                        </span>
                    }
                })
                .collect_view();

            let features_class = move || {
                let state = if is_active() {
                    "opacity-100 max-h-40"
                } else {
                    "opacity-0 max-h-0 overflow-hidden"
                };
                format!("grid grid-cols-2 gap-3 transition-all duration-300 {state}")
            };
            let features = project
                .features
                .iter()
                .enumerate()
                .map(|(feature_index, feature)| {
                    let feature_style = move || {
                        let delay = if is_active() { feature_index * 100 } else { 0 };
                        format!("transition-delay: {delay}ms")
                    };
                    view! {
                        <div
                            class="flex items-center text-xs text-muted-foreground transition-all duration-300"
                            style=feature_style
                        >
                            <div class=format!(
                                "w-1.5 h-1.5 rounded-full {} mr-2 animate-pulse",
                                tone.solid_class(),
                            )></div>
                            {*feature}
                        </div>
                    }
                })
                .collect_view();

            let expand_cue_class = move || {
                let color = if is_hovered() { tone.text_class() } else { "" };
                format!("text-center text-xs text-muted-foreground transition-all duration-300 {color}")
            };

            view! {
                <div
                    class="relative group cursor-pointer"
                    on:mouseenter=move |_| set_hovered.set(Some(index))
                    on:mouseleave=move |_| set_hovered.set(None)
                    on:click=move |_| {
                        set_active
                            .update(|current| {
                                *current = if *current == Some(index) { None } else { Some(index) };
                            });
                    }
                >
                    <div class=card_class>
                        <div class="flex items-start justify-between mb-4">
                            <div class="flex-1">
                                <div class="flex items-center mb-2">
                                    <h3 class=title_class>{project.title}</h3>
                                    <span class=format!(
                                        "ml-3 px-2 py-1 text-xs rounded-full {}",
                                        project.status.badge_class(),
                                    )>{project.status.label()}</span>
                                </div>

                                <p class="text-muted-foreground text-sm leading-relaxed mb-4">
                                    {project.description}
                                </p>
                            </div>

                            <div class=actions_class>
                                <button class="p-2 h-8 w-8 rounded-md hover:bg-white/10 transition-colors">
                                    <i class="fa-brands fa-github"></i>
                                </button>
                                <button class="p-2 h-8 w-8 rounded-md hover:bg-white/10 transition-colors">
                                    <i class="fa-solid fa-arrow-up-right-from-square"></i>
                                </button>
                            </div>
                        </div>

                        <div class="flex flex-wrap gap-2 mb-4">{tags}</div>

                        <div class=features_class>{features}</div>

                        <div class="mt-4 pt-4 border-t border-white/10">
                            <div class=expand_cue_class>
                                {move || {
                                    if is_active() { "Click to collapse" } else { "Click to expand" }
                                }}
                            </div>
                        </div>
                    </div>

                    <Show when=is_hovered>
                        <div class=format!(
                            "absolute -inset-1 {} rounded-2xl blur-xl animate-pulse -z-10",
                            tone.halo_class(),
                        )></div>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="py-20 px-6 relative">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-6xl font-bold mb-6 gradient-text">
                        "Featured Projects"
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "Showcasing innovative solutions built with modern technologies and creative problem-solving"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-8">{cards}</div>

                <div class="text-center mt-12">
                    <button class="glass-button px-8 py-4 text-lg font-semibold group inline-flex items-center">
                        <i class="fa-brands fa-github mr-2 group-hover:animate-spin"></i>
                        "View All Projects"
                    </button>
                </div>
            </div>
        </section>
    }
}
