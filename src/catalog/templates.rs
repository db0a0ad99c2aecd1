use super::TemplateSeed;

pub(crate) const TEMPLATES: &[TemplateSeed] = &[
    TemplateSeed {
        id: "constellation",
        name: "Constellation Hall",
        description: "Interactive star map where each legend is a star in the Superteam galaxy",
        tags: &["interactive", "space", "dark"],
    },
    TemplateSeed {
        id: "trading-cards",
        name: "Trading Cards",
        description: "Collectible trading card aesthetic with holographic effects",
        tags: &["collectible", "animated", "retro"],
    },
    TemplateSeed {
        id: "trophy-wall",
        name: "Trophy Wall Classic",
        description: "Traditional hall of fame with golden trophies and plaques",
        tags: &["classic", "gold", "prestigious"],
    },
    TemplateSeed {
        id: "timeline",
        name: "Scrollytelling Timeline",
        description: "Scroll-driven narrative journey through Superteam history",
        tags: &["narrative", "scroll", "storytelling"],
    },
    TemplateSeed {
        id: "leaderboard",
        name: "Leaderboard Arena",
        description: "Gamified rankings with XP, levels, and achievements",
        tags: &["gamified", "competitive", "stats"],
    },
    TemplateSeed {
        id: "museum",
        name: "Museum Exhibit",
        description: "3D museum-style rooms with curated legend exhibits",
        tags: &["3d", "immersive", "elegant"],
    },
    TemplateSeed {
        id: "minimalist",
        name: "Minimalist Grid",
        description: "Clean, typography-focused design with subtle interactions",
        tags: &["clean", "typography", "modern"],
    },
    TemplateSeed {
        id: "glassmorphism",
        name: "Glassmorphism",
        description: "Frosted glass cards with vibrant gradient backgrounds",
        tags: &["modern", "glass", "gradient"],
    },
    TemplateSeed {
        id: "brutalist",
        name: "Brutalist",
        description: "Raw, bold typography with stark black and white contrast",
        tags: &["bold", "raw", "typography"],
    },
    TemplateSeed {
        id: "retro-arcade",
        name: "Retro Arcade",
        description: "Pixel art 8-bit aesthetic with arcade game vibes",
        tags: &["pixel", "retro", "gaming"],
    },
];
