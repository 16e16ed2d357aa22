use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::use_window_scroll;

use super::about::AboutSection;
use super::contact::ContactSection;
use super::hero::HeroSection;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;
use crate::parallax::{primary_orb_center, secondary_orb_center, ParallaxFrame};

/// The whole site: five sections stacked over the parallax backdrop.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let (_scroll_x, scroll_y) = use_window_scroll();
    let frame = Memo::new(move |_| ParallaxFrame::at(scroll_y.get()));

    view! {
        <Title text="Next-Gen Developer" />
        <div class="relative min-h-screen">
            <BackgroundLayers frame scroll_y />
            <main class="relative z-10">
                <HeroSection />
                <AboutSection />
                <SkillsSection />
                <ProjectsSection />
                <ContactSection />
                <SiteFooter />
            </main>
        </div>
    }
}

/// Fixed backdrop behind the page content. Each layer consumes one depth of
/// the parallax frame handed down from the page, so nothing here touches
/// document-level style state.
#[component]
fn BackgroundLayers(frame: Memo<ParallaxFrame>, scroll_y: Signal<f64>) -> impl IntoView {
    let glow_background = move || {
        let (px, py) = primary_orb_center(scroll_y.get());
        let (sx, sy) = secondary_orb_center(scroll_y.get());
        format!(
            "background: radial-gradient(circle at {px:.2}% {py:.2}%, hsl(280 100% 70% / 0.1) 0%, transparent 50%), \
             radial-gradient(circle at {sx:.2}% {sy:.2}%, hsl(180 100% 70% / 0.1) 0%, transparent 50%)"
        )
    };
    let grid_style = move || {
        let offset = frame.get().slow;
        format!(
            "background-image: linear-gradient(hsl(280 100% 70% / 0.1) 1px, transparent 1px), \
             linear-gradient(90deg, hsl(280 100% 70% / 0.1) 1px, transparent 1px); \
             background-size: 50px 50px; transform: translate({offset}px, {offset}px)"
        )
    };
    let mid_drift = move || format!("transform: translate3d(0, {}px, 0)", frame.get().medium);
    let fast_drift = move || format!("transform: translate3d(0, {}px, 0)", frame.get().fast);

    view! {
        <div class="fixed inset-0 z-0 pointer-events-none">
            <div class="absolute inset-0 opacity-20" style=glow_background></div>
            <div class="absolute inset-0 opacity-5" style=grid_style></div>
            <div
                class="absolute -left-32 top-1/3 w-96 h-96 rounded-full bg-primary/10 blur-3xl"
                style=mid_drift
            ></div>
            <div
                class="absolute -right-32 top-2/3 w-80 h-80 rounded-full bg-accent/10 blur-3xl"
                style=fast_drift
            ></div>
        </div>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|stamp| stamp.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    view! {
        <footer class="py-8 px-6 border-t border-white/10">
            <div class="max-w-6xl mx-auto text-center">
                <div class="gradient-text text-lg font-semibold mb-2">
                    "Laravel Developer Portfolio"
                </div>
                <p class="text-muted-foreground text-sm">
                    "Crafted with ❤️ using Rust, Leptos & Tailwind CSS"
                </p>
                <p class="text-muted-foreground/60 text-xs mt-2">
                    {format!("v{} · built {}", env!("CARGO_PKG_VERSION"), built)}
                </p>
            </div>
        </footer>
    }
}
