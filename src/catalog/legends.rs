use super::{AchievementSeed, LegendSeed, SocialSeed};
use crate::model::{Category, LegendStats};

pub(crate) const LEGENDS: &[LegendSeed] = &[
    // Founders
    LegendSeed {
        id: "founder-1",
        name: "Akshay BD",
        title: "Superteam Co-founder",
        avatar: "/avatars/akshay.jpg",
        category: Category::Founders,
        bio: "Building the most vibrant crypto community in emerging markets. Leading Superteam since Day 1.",
        achievements: &[
            AchievementSeed {
                title: "Superteam Launch",
                description: "Founded Superteam India",
                date: "2021-06",
            },
            AchievementSeed {
                title: "Global Expansion",
                description: "Expanded to 15+ countries",
                date: "2023-01",
            },
        ],
        socials: SocialSeed {
            twitter: Some("akshaybd"),
            website: Some("superteam.fun"),
            ..SocialSeed::NONE
        },
        joined: "2021-06",
        featured: true,
        stats: LegendStats {
            projects: Some(50),
            contributions: Some(200),
            awards: Some(10),
        },
        xp: 42_000,
    },
    LegendSeed {
        id: "founder-2",
        name: "Kash Dhanda",
        title: "Superteam Co-founder",
        avatar: "/avatars/kash.jpg",
        category: Category::Founders,
        bio: "Pioneering web3 education and community building across emerging markets.",
        achievements: &[
            AchievementSeed {
                title: "Instagrant Program",
                description: "Launched rapid grant program",
                date: "2022-03",
            },
            AchievementSeed {
                title: "Bounty Platform",
                description: "Built Superteam Earn",
                date: "2022-08",
            },
        ],
        socials: SocialSeed {
            twitter: Some("kashdhanda"),
            ..SocialSeed::NONE
        },
        joined: "2021-06",
        featured: true,
        stats: LegendStats {
            projects: Some(45),
            contributions: Some(180),
            awards: Some(8),
        },
        xp: 38_500,
    },
    LegendSeed {
        id: "founder-3",
        name: "Tanmay Bhat",
        title: "Community Builder",
        avatar: "/avatars/tanmay.jpg",
        category: Category::Founders,
        bio: "Bringing millions into crypto through content and community engagement.",
        achievements: &[
            AchievementSeed {
                title: "Content Pioneer",
                description: "Crypto education content",
                date: "2021-09",
            },
            AchievementSeed {
                title: "Community Growth",
                description: "100K+ community members",
                date: "2023-06",
            },
        ],
        socials: SocialSeed {
            twitter: Some("tanaborat"),
            ..SocialSeed::NONE
        },
        joined: "2021-09",
        featured: false,
        stats: LegendStats {
            projects: Some(30),
            contributions: Some(100),
            awards: Some(5),
        },
        xp: 15_000,
    },
    // Contributors
    LegendSeed {
        id: "contributor-1",
        name: "Soju",
        title: "Core Developer",
        avatar: "/avatars/soju.jpg",
        category: Category::Contributors,
        bio: "Building critical infrastructure for Solana DeFi ecosystem.",
        achievements: &[
            AchievementSeed {
                title: "SDK Contributions",
                description: "Major Solana SDK improvements",
                date: "2022-05",
            },
            AchievementSeed {
                title: "Open Source",
                description: "500+ GitHub contributions",
                date: "2023-12",
            },
        ],
        socials: SocialSeed {
            twitter: Some("saborat"),
            github: Some("soju-dev"),
            ..SocialSeed::NONE
        },
        joined: "2022-01",
        featured: true,
        stats: LegendStats {
            projects: Some(20),
            contributions: Some(500),
            awards: None,
        },
        xp: 27_500,
    },
    LegendSeed {
        id: "contributor-2",
        name: "Pratik Saria",
        title: "Protocol Engineer",
        avatar: "/avatars/pratik.jpg",
        category: Category::Contributors,
        bio: "Smart contract security expert and DeFi protocol architect.",
        achievements: &[
            AchievementSeed {
                title: "Security Audit",
                description: "Audited 30+ protocols",
                date: "2023-03",
            },
            AchievementSeed {
                title: "Bug Bounties",
                description: "$100K+ in bounties earned",
                date: "2023-09",
            },
        ],
        socials: SocialSeed {
            twitter: Some("pratiksaria"),
            github: Some("pratik-sol"),
            ..SocialSeed::NONE
        },
        joined: "2022-04",
        featured: false,
        stats: LegendStats {
            projects: Some(15),
            contributions: Some(300),
            awards: None,
        },
        xp: 18_000,
    },
    LegendSeed {
        id: "contributor-3",
        name: "Yash Agarwal",
        title: "DevRel Lead",
        avatar: "/avatars/yash.jpg",
        category: Category::Contributors,
        bio: "Empowering developers to build on Solana through education and tooling.",
        achievements: &[
            AchievementSeed {
                title: "Tutorial Series",
                description: "Solana 101 course",
                date: "2022-08",
            },
            AchievementSeed {
                title: "Hackathon Mentor",
                description: "Mentored 50+ teams",
                date: "2023-05",
            },
        ],
        socials: SocialSeed {
            twitter: Some("yashagarwal"),
            github: Some("yash-sol"),
            ..SocialSeed::NONE
        },
        joined: "2022-06",
        featured: false,
        stats: LegendStats {
            projects: Some(25),
            contributions: Some(250),
            awards: None,
        },
        xp: 15_000,
    },
    // Achievers
    LegendSeed {
        id: "achiever-1",
        name: "Sahil",
        title: "Hackathon Champion",
        avatar: "/avatars/sahil.jpg",
        category: Category::Achievers,
        bio: "Three-time Solana hackathon winner, building the future of DeFi.",
        achievements: &[
            AchievementSeed {
                title: "Grizzlython Winner",
                description: "1st place DeFi track",
                date: "2023-03",
            },
            AchievementSeed {
                title: "Hyperdrive Winner",
                description: "Grand prize winner",
                date: "2023-10",
            },
        ],
        socials: SocialSeed {
            twitter: Some("sahilsolana"),
            ..SocialSeed::NONE
        },
        joined: "2022-08",
        featured: true,
        stats: LegendStats {
            projects: Some(12),
            contributions: None,
            awards: Some(7),
        },
        xp: 21_000,
    },
    LegendSeed {
        id: "achiever-2",
        name: "Priya Sharma",
        title: "Grant Recipient",
        avatar: "/avatars/priya.jpg",
        category: Category::Achievers,
        bio: "Built a cross-chain bridge that processes $1M+ daily volume.",
        achievements: &[
            AchievementSeed {
                title: "Instagrant",
                description: "$10K grant for bridge development",
                date: "2022-11",
            },
            AchievementSeed {
                title: "Product Launch",
                description: "Launched to mainnet",
                date: "2023-04",
            },
        ],
        socials: SocialSeed {
            twitter: Some("priyabuilds"),
            linkedin: Some("priya-sharma-sol"),
            ..SocialSeed::NONE
        },
        joined: "2022-09",
        featured: false,
        stats: LegendStats {
            projects: Some(8),
            contributions: None,
            awards: Some(4),
        },
        xp: 9_500,
    },
    LegendSeed {
        id: "achiever-3",
        name: "Raj Patel",
        title: "NFT Artist",
        avatar: "/avatars/raj.jpg",
        category: Category::Achievers,
        bio: "Creating generative art that has earned 10K+ SOL in sales.",
        achievements: &[
            AchievementSeed {
                title: "Collection Launch",
                description: "Sold out 5K NFT collection",
                date: "2022-07",
            },
            AchievementSeed {
                title: "Art Basel",
                description: "Featured at Solana Art Basel",
                date: "2023-12",
            },
        ],
        socials: SocialSeed {
            twitter: Some("rajnft"),
            website: Some("rajart.xyz"),
            ..SocialSeed::NONE
        },
        joined: "2022-05",
        featured: false,
        stats: LegendStats {
            projects: Some(6),
            contributions: None,
            awards: Some(5),
        },
        xp: 12_000,
    },
    // Legends
    LegendSeed {
        id: "legend-1",
        name: "Anatoly Yakovenko",
        title: "Solana Founder",
        avatar: "/avatars/anatoly.jpg",
        category: Category::Legends,
        bio: "Creator of Solana blockchain, revolutionizing blockchain scalability.",
        achievements: &[
            AchievementSeed {
                title: "Solana Launch",
                description: "Launched Solana mainnet",
                date: "2020-03",
            },
            AchievementSeed {
                title: "Firedancer",
                description: "New validator client announcement",
                date: "2023-02",
            },
        ],
        socials: SocialSeed {
            twitter: Some("aaborat"),
            github: Some("anatoly-sol"),
            ..SocialSeed::NONE
        },
        joined: "2020-03",
        featured: true,
        stats: LegendStats {
            projects: Some(100),
            contributions: Some(1000),
            awards: Some(20),
        },
        xp: 65_000,
    },
    LegendSeed {
        id: "legend-2",
        name: "Raj Gokal",
        title: "Solana Co-founder",
        avatar: "/avatars/rajgokal.jpg",
        category: Category::Legends,
        bio: "Building the most performant blockchain for mainstream adoption.",
        achievements: &[
            AchievementSeed {
                title: "Series B",
                description: "$314M funding round",
                date: "2021-06",
            },
            AchievementSeed {
                title: "Ecosystem Growth",
                description: "1000+ projects on Solana",
                date: "2023-01",
            },
        ],
        socials: SocialSeed {
            twitter: Some("rajgokal"),
            ..SocialSeed::NONE
        },
        joined: "2020-03",
        featured: false,
        stats: LegendStats {
            projects: Some(80),
            contributions: None,
            awards: Some(15),
        },
        xp: 52_000,
    },
    LegendSeed {
        id: "legend-3",
        name: "Armani Ferrante",
        title: "Anchor Creator",
        avatar: "/avatars/armani.jpg",
        category: Category::Legends,
        bio: "Created Anchor framework, powering 90% of Solana programs.",
        achievements: &[
            AchievementSeed {
                title: "Anchor Launch",
                description: "Released Anchor framework",
                date: "2021-04",
            },
            AchievementSeed {
                title: "Coral Founding",
                description: "Founded Coral (Backpack)",
                date: "2022-01",
            },
        ],
        socials: SocialSeed {
            twitter: Some("armanif"),
            github: Some("armaniferrante"),
            ..SocialSeed::NONE
        },
        joined: "2021-01",
        featured: true,
        stats: LegendStats {
            projects: Some(50),
            contributions: Some(800),
            awards: Some(12),
        },
        xp: 48_000,
    },
];
