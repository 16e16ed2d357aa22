//! Static content tables for the portfolio page plus the color theme lookup.
//! Everything here is defined at load time and never mutated.

/// The four neon tones of the site palette. Sections pick one per record,
/// either stored in the content table or cycled by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Accent,
    Secondary,
    Highlight,
}

impl Tone {
    /// Cosmetic lookup by position: 0..3 map to the palette in order and
    /// then wrap.
    pub fn cycle(index: usize) -> Self {
        match index % 4 {
            0 => Tone::Primary,
            1 => Tone::Accent,
            2 => Tone::Secondary,
            _ => Tone::Highlight,
        }
    }
}

// Every method below returns a complete class literal so the Tailwind
// scanner finds the names in source; never build these strings piecemeal.
impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Primary => "text-primary",
            Tone::Accent => "text-accent",
            Tone::Secondary => "text-secondary",
            Tone::Highlight => "text-highlight",
        }
    }

    pub fn glow_class(self) -> &'static str {
        match self {
            Tone::Primary => "neon-glow-primary",
            Tone::Accent => "neon-glow-accent",
            Tone::Secondary => "neon-glow-secondary",
            Tone::Highlight => "neon-glow-highlight",
        }
    }

    pub fn solid_class(self) -> &'static str {
        match self {
            Tone::Primary => "bg-primary",
            Tone::Accent => "bg-accent",
            Tone::Secondary => "bg-secondary",
            Tone::Highlight => "bg-highlight",
        }
    }

    /// Translucent icon well behind a glyph.
    pub fn well_class(self) -> &'static str {
        match self {
            Tone::Primary => "bg-primary/20",
            Tone::Accent => "bg-accent/20",
            Tone::Secondary => "bg-secondary/20",
            Tone::Highlight => "bg-highlight/20",
        }
    }

    /// Brighter well while the owning card is hovered.
    pub fn well_hover_class(self) -> &'static str {
        match self {
            Tone::Primary => "bg-primary/30",
            Tone::Accent => "bg-accent/30",
            Tone::Secondary => "bg-secondary/30",
            Tone::Highlight => "bg-highlight/30",
        }
    }

    pub fn group_hover_well_class(self) -> &'static str {
        match self {
            Tone::Primary => "group-hover:bg-primary/30",
            Tone::Accent => "group-hover:bg-accent/30",
            Tone::Secondary => "group-hover:bg-secondary/30",
            Tone::Highlight => "group-hover:bg-highlight/30",
        }
    }

    /// Ping ring around a hovered skill icon.
    pub fn ring_class(self) -> &'static str {
        match self {
            Tone::Primary => "border-primary",
            Tone::Accent => "border-accent",
            Tone::Secondary => "border-secondary",
            Tone::Highlight => "border-highlight",
        }
    }

    /// Small tag pill on a project card.
    pub fn chip_class(self) -> &'static str {
        match self {
            Tone::Primary => "bg-primary/10 text-primary border-primary/20",
            Tone::Accent => "bg-accent/10 text-accent border-accent/20",
            Tone::Secondary => "bg-secondary/10 text-secondary border-secondary/20",
            Tone::Highlight => "bg-highlight/10 text-highlight border-highlight/20",
        }
    }

    /// Social link card, including its hover treatment.
    pub fn social_class(self) -> &'static str {
        match self {
            Tone::Primary => "bg-primary/10 border-primary/20 hover:bg-primary/20 hover:neon-glow-primary",
            Tone::Accent => "bg-accent/10 border-accent/20 hover:bg-accent/20 hover:neon-glow-accent",
            Tone::Secondary => {
                "bg-secondary/10 border-secondary/20 hover:bg-secondary/20 hover:neon-glow-secondary"
            }
            Tone::Highlight => {
                "bg-highlight/10 border-highlight/20 hover:bg-highlight/20 hover:neon-glow-highlight"
            }
        }
    }

    /// Gradient fill of a skill card's progress bar.
    pub fn bar_class(self) -> &'static str {
        match self {
            Tone::Primary => "bg-gradient-to-r from-primary to-primary/60",
            Tone::Accent => "bg-gradient-to-r from-accent to-accent/60",
            Tone::Secondary => "bg-gradient-to-r from-secondary to-secondary/60",
            Tone::Highlight => "bg-gradient-to-r from-highlight to-highlight/60",
        }
    }

    /// Blurred back-glow behind a hovered project card.
    pub fn halo_class(self) -> &'static str {
        match self {
            Tone::Primary => "bg-gradient-to-r from-primary/20 to-transparent",
            Tone::Accent => "bg-gradient-to-r from-accent/20 to-transparent",
            Tone::Secondary => "bg-gradient-to-r from-secondary/20 to-transparent",
            Tone::Highlight => "bg-gradient-to-r from-highlight/20 to-transparent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    InDevelopment,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::InDevelopment => "In Development",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::Live => "bg-green-500/20 text-green-400",
            ProjectStatus::InDevelopment => "bg-yellow-500/20 text-yellow-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub tone: Tone,
    pub features: &'static [&'static str],
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub name: &'static str,
    pub href: &'static str,
    pub tone: Tone,
}

pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: "2020",
        title: "Started Web Development Journey",
        description: "Discovered the power of Laravel and fell in love with elegant code architecture.",
        icon: "fa-solid fa-code",
        tone: Tone::Primary,
    },
    TimelineEvent {
        year: "2021",
        title: "First Professional Project",
        description: "Built my first enterprise-level application, serving thousands of users.",
        icon: "fa-solid fa-rocket",
        tone: Tone::Accent,
    },
    TimelineEvent {
        year: "2022",
        title: "Specialized in Laravel Ecosystem",
        description: "Deep-dived into advanced Laravel features, APIs, and modern PHP practices.",
        icon: "fa-solid fa-heart",
        tone: Tone::Secondary,
    },
    TimelineEvent {
        year: "2024",
        title: "Full-Stack Innovation",
        description: "Mastering cutting-edge technologies and creating futuristic web experiences.",
        icon: "fa-solid fa-bolt",
        tone: Tone::Highlight,
    },
];

pub const SKILL_GROUPS: &[SkillCategory] = &[
    SkillCategory {
        title: "Backend Development",
        icon: "fa-solid fa-server",
        skills: &["Laravel", "PHP 8+", "MySQL", "PostgreSQL", "Redis", "API Design"],
    },
    SkillCategory {
        title: "Frontend Magic",
        icon: "fa-solid fa-laptop-code",
        skills: &["React", "Vue.js", "TypeScript", "Tailwind CSS", "Alpine.js", "Livewire"],
    },
    SkillCategory {
        title: "Database Mastery",
        icon: "fa-solid fa-database",
        skills: &["Eloquent ORM", "Query Optimization", "Database Design", "Migrations", "Seeding"],
    },
    SkillCategory {
        title: "UI/UX Design",
        icon: "fa-solid fa-palette",
        skills: &["Figma", "Adobe XD", "Responsive Design", "User Experience", "Prototyping"],
    },
    SkillCategory {
        title: "Mobile Ready",
        icon: "fa-solid fa-mobile-screen",
        skills: &["Progressive Web Apps", "React Native", "Mobile-First Design", "Cross-Platform"],
    },
    SkillCategory {
        title: "Security & Performance",
        icon: "fa-solid fa-shield-halved",
        skills: &["Authentication", "Authorization", "Performance Optimization", "Caching", "Security"],
    },
    SkillCategory {
        title: "Modern Tools",
        icon: "fa-solid fa-bolt",
        skills: &["Docker", "Git", "Composer", "NPM", "Vite", "Laravel Forge"],
    },
    SkillCategory {
        title: "Cloud & DevOps",
        icon: "fa-solid fa-globe",
        skills: &["AWS", "Digital Ocean", "CI/CD", "Server Management", "Monitoring"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack Laravel e-commerce solution with real-time inventory, payment integration, and advanced analytics dashboard.",
        tags: &["Laravel", "Vue.js", "MySQL", "Stripe API", "Redis"],
        tone: Tone::Primary,
        features: &["Real-time Analytics", "Multi-vendor Support", "Mobile App", "AI Recommendations"],
        status: ProjectStatus::Live,
    },
    Project {
        title: "SaaS Management Tool",
        description: "Multi-tenant SaaS application for project management with team collaboration, time tracking, and automated reporting.",
        tags: &["Laravel", "React", "PostgreSQL", "WebSockets", "Docker"],
        tone: Tone::Accent,
        features: &["Multi-tenant Architecture", "Real-time Collaboration", "Custom Reports", "API Integration"],
        status: ProjectStatus::InDevelopment,
    },
    Project {
        title: "Learning Management System",
        description: "Educational platform with video streaming, interactive quizzes, progress tracking, and certification management.",
        tags: &["Laravel", "Alpine.js", "MySQL", "AWS S3", "FFmpeg"],
        tone: Tone::Secondary,
        features: &["Video Streaming", "Interactive Quizzes", "Progress Tracking", "Certificates"],
        status: ProjectStatus::Live,
    },
    Project {
        title: "API Gateway Service",
        description: "Microservices architecture with API gateway, rate limiting, authentication, and comprehensive monitoring.",
        tags: &["Laravel", "Redis", "Docker", "Kubernetes", "Prometheus"],
        tone: Tone::Highlight,
        features: &["Microservices", "Rate Limiting", "Auto-scaling", "Monitoring"],
        status: ProjectStatus::Live,
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "fa-solid fa-envelope",
        label: "Email",
        value: "hello@developer.com",
        tone: Tone::Primary,
    },
    ContactChannel {
        icon: "fa-solid fa-phone",
        label: "Phone",
        value: "+1 (555) 123-4567",
        tone: Tone::Accent,
    },
    ContactChannel {
        icon: "fa-solid fa-location-dot",
        label: "Location",
        value: "San Francisco, CA",
        tone: Tone::Secondary,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: "fa-brands fa-github",
        name: "GitHub",
        href: "#",
        tone: Tone::Primary,
    },
    SocialLink {
        icon: "fa-brands fa-linkedin",
        name: "LinkedIn",
        href: "#",
        tone: Tone::Accent,
    },
    SocialLink {
        icon: "fa-brands fa-twitter",
        name: "Twitter",
        href: "#",
        tone: Tone::Secondary,
    },
    SocialLink {
        icon: "fa-brands fa-discord",
        name: "Discord",
        href: "#",
        tone: Tone::Highlight,
    },
];

pub const TECH_STACK: &[&str] = &[
    "Laravel",
    "PHP",
    "React",
    "Vue.js",
    "TypeScript",
    "MySQL",
    "Redis",
    "Docker",
    "AWS",
];

pub const PARTICLE_COUNT: usize = 20;

/// One decorative particle drifting over the hero banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParticle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub tone: Tone,
}

/// Particle geometry comes from a fixed hash of the index so the server and
/// the hydrating client render identical markup.
pub fn hero_particles(count: usize) -> Vec<HeroParticle> {
    (0..count)
        .map(|index| HeroParticle {
            left_pct: scatter(index, 1.0) * 100.0,
            top_pct: scatter(index, 2.0) * 100.0,
            delay_s: scatter(index, 3.0) * 6.0,
            duration_s: 6.0 + scatter(index, 4.0) * 4.0,
            tone: Tone::cycle(index + 1),
        })
        .collect()
}

fn scatter(index: usize, lane: f64) -> f64 {
    let n = index as f64 * 12.9898 + lane * 78.233;
    (n.sin() * 43758.5453).fract().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_cycle_order_and_wrap() {
        assert_eq!(Tone::cycle(0), Tone::Primary);
        assert_eq!(Tone::cycle(1), Tone::Accent);
        assert_eq!(Tone::cycle(2), Tone::Secondary);
        assert_eq!(Tone::cycle(3), Tone::Highlight);
        assert_eq!(Tone::cycle(4), Tone::Primary);
        assert_eq!(Tone::cycle(7), Tone::Highlight);
    }

    #[test]
    fn test_timeline_table() {
        assert_eq!(TIMELINE.len(), 4);

        // Years read top to bottom.
        let years: Vec<i32> = TIMELINE
            .iter()
            .map(|event| event.year.parse().expect("numeric year"))
            .collect();
        assert!(years.windows(2).all(|pair| pair[0] < pair[1]));

        // Stored tones follow the same rotation the skills grid computes.
        for (index, event) in TIMELINE.iter().enumerate() {
            assert_eq!(event.tone, Tone::cycle(index));
            assert!(event.icon.starts_with("fa-"));
        }
    }

    #[test]
    fn test_skill_groups_table() {
        assert_eq!(SKILL_GROUPS.len(), 8);
        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty());
            assert!(group.icon.starts_with("fa-"));
        }
        assert_eq!(SKILL_GROUPS[0].title, "Backend Development");
        assert_eq!(SKILL_GROUPS[0].skills.len(), 6);
    }

    #[test]
    fn test_projects_table() {
        assert_eq!(PROJECTS.len(), 4);

        let live = PROJECTS
            .iter()
            .filter(|project| project.status == ProjectStatus::Live)
            .count();
        assert_eq!(live, 3);

        for (index, project) in PROJECTS.iter().enumerate() {
            assert_eq!(project.tone, Tone::cycle(index));
            assert!(!project.tags.is_empty());
            assert_eq!(project.features.len(), 4);
        }
    }

    #[test]
    fn test_contact_tables() {
        assert_eq!(CONTACT_CHANNELS.len(), 3);
        assert_eq!(SOCIAL_LINKS.len(), 4);
        assert_eq!(TECH_STACK.len(), 9);
        assert!(SOCIAL_LINKS.iter().all(|link| link.href == "#"));
    }

    #[test]
    fn test_status_presentation() {
        assert_eq!(ProjectStatus::Live.label(), "Live");
        assert_eq!(ProjectStatus::InDevelopment.label(), "In Development");
        assert!(ProjectStatus::Live.badge_class().contains("green"));
        assert!(ProjectStatus::InDevelopment.badge_class().contains("yellow"));
    }

    #[test]
    fn test_particles_are_deterministic() {
        let first = hero_particles(PARTICLE_COUNT);
        let second = hero_particles(PARTICLE_COUNT);
        assert_eq!(first, second);
        assert_eq!(first.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_particle_geometry_ranges() {
        for particle in hero_particles(PARTICLE_COUNT) {
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!((0.0..100.0).contains(&particle.top_pct));
            assert!((0.0..6.0).contains(&particle.delay_s));
            assert!((6.0..10.0).contains(&particle.duration_s));
        }
    }

    #[test]
    fn test_particle_tones_start_shifted() {
        // The hero rotation starts one step into the palette.
        let particles = hero_particles(4);
        assert_eq!(particles[0].tone, Tone::Accent);
        assert_eq!(particles[1].tone, Tone::Secondary);
        assert_eq!(particles[2].tone, Tone::Highlight);
        assert_eq!(particles[3].tone, Tone::Primary);
    }
}
