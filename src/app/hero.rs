use leptos::prelude::*;

use crate::content::{hero_particles, PARTICLE_COUNT};

#[component]
pub fn HeroSection() -> impl IntoView {
    let (mounted, set_mounted) = signal(false);

    // First client-side tick swings the headline block in; the server always
    // renders the pre-entrance state.
    Effect::new(move |_| set_mounted.set(true));

    let entrance = move || {
        let state = if mounted.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-10"
        };
        format!("relative z-10 text-center max-w-4xl mx-auto px-6 transition-all duration-1000 {state}")
    };

    let particles = hero_particles(PARTICLE_COUNT)
        .into_iter()
        .map(|particle| {
            let position = format!(
                "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
                particle.left_pct, particle.top_pct, particle.delay_s, particle.duration_s
            );
            view! {
                <div
                    class=format!(
                        "absolute w-2 h-2 rounded-full animate-particle-float opacity-60 {}",
                        particle.tone.solid_class(),
                    )
                    style=position
                ></div>
            }
        })
        .collect_view();

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 opacity-80" style="background: var(--gradient-hero)"></div>

            <div class="absolute inset-0">{particles}</div>

            <div class=entrance>
                <h1 class="text-6xl md:text-8xl font-bold mb-6 gradient-text">
                    "Next-Gen Developer"
                </h1>

                <p class="text-xl md:text-2xl mb-8 text-muted-foreground font-light">
                    "Crafting " <span class="text-primary font-semibold">"next-generation"</span>
                    " web experiences with "
                    <span class="text-accent font-semibold">"elegant code"</span> " and "
                    <span class="text-highlight font-semibold">"futuristic design"</span>
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-16">
                    <a
                        href="#projects"
                        class="glass-button px-8 py-4 text-lg font-semibold group inline-flex items-center justify-center"
                    >
                        <i class="fa-solid fa-wand-magic-sparkles mr-2 group-hover:animate-spin"></i>
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="glass-button border-accent/50 text-accent hover:bg-accent/10 px-8 py-4 text-lg font-semibold inline-flex items-center justify-center"
                    >
                        "Get In Touch"
                    </a>
                </div>

                <div class="animate-float">
                    <i class="fa-solid fa-chevron-down text-2xl text-primary neon-glow-primary"></i>
                    <p class="text-sm text-muted-foreground mt-2">"Scroll to explore"</p>
                </div>
            </div>
        </section>
    }
}
