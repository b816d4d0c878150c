//! Authored page content.
//!
//! DESIGN
//! ======
//! Everything the page shows lives here as `'static` constants. Sections
//! take these by reference so tests can swap in their own slices.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

/// Who the page is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
}

/// Outbound profile links and the résumé asset path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkSet {
    pub profile: &'static str,
    pub professional_network: &'static str,
    pub coding_profile: &'static str,
    pub email: &'static str,
    /// Root-relative path; the file must sit in the server's public directory.
    pub resume: &'static str,
}

/// One card in the project carousel. The title doubles as its key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_summary: &'static str,
    pub repository_link: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const IDENTITY: Identity = Identity {
    name: "Tanmay Sharma",
    headline: "Full Stack Developer • AI/ML Enthusiast • B.Tech (ECE) @ DTU",
    summary: "Strong fundamentals in data structures & algorithms, experience building full-stack apps \
              with React & Flask, and integrating AI/ML models for real-world features.",
};

pub const LINKS: LinkSet = LinkSet {
    profile: "https://github.com/centipede0708",
    professional_network: "https://www.linkedin.com/in/tanmay-sharma034687/",
    coding_profile: "https://leetcode.com/u/Tanmay_Sharma_00/",
    email: "mailto:8tanmaysharma@gmail.com",
    resume: "/TANMAY SHARMA_2K22_EC_238.pdf",
};

/// Words cycled by the hero tagline, in display order.
pub const TAGLINE_WORDS: &[&str] = &["I am Tanmay Sharma", "I am a Developer", "I am an AI/ML Enthusiast"];

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Fluid / Particle Simulation",
        description: "2D simulator (Java) — 1000+ particles, optimized spatial partitioning, 60+ FPS.",
        tech_summary: "Java • OOP • Performance",
        repository_link: "https://github.com/centipede0708/Particle-based-Fluid-2D-Simulation-in-JAVA",
    },
    ProjectRecord {
        title: "Expense Tracker",
        description: "Splitwise-style app (React Native) — group splits, real-time balances, resilient storage.",
        tech_summary: "React Native • Expo • JS",
        repository_link: "https://github.com/centipede0708/expense-tracker_for_kapidron",
    },
    ProjectRecord {
        title: "Speech → Sign Language",
        description: "Accessibility web app converting speech to 50+ sign animations (React + Python + Blender).",
        tech_summary: "React • OpenCV • Blender",
        repository_link: "https://github.com/centipede0708/Speech-to-sign-language",
    },
    ProjectRecord {
        title: "Virtual Try-On (AI)",
        description: "End-to-end React + Flask app integrating U²-Net, SCHP, VTON-HD and ONNX runtime optimizations.",
        tech_summary: "React • Flask • ONNX",
        repository_link: "https://github.com/centipede0708?tab=repositories",
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    role: "SDE Intern",
    organization: "Enzat Soft Solutions Pvt. Ltd.",
    period: "June 2025 – July 2025",
    highlights: &[
        "Built a full-stack Virtual Try-On app with React + Flask; integrated AI pipelines and reduced rendering time by 40%.",
        "Integrated U²-Net, SCHP, VTON-HD, and ControlNet for clean face & cloth segmentation.",
        "Designed backend inference pipelines to serve real-time previews via ONNX Runtime.",
    ],
}];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup { title: "Languages", items: &["Java", "Python", "C/C++", "JavaScript", "Kotlin"] },
    SkillGroup { title: "Frontend", items: &["React", "Vite", "Tailwind", "HTML", "CSS"] },
    SkillGroup { title: "ML & Tools", items: &["OpenCV", "ONNX Runtime", "scikit-learn", "OpenAI API"] },
    SkillGroup { title: "Databases/Backend", items: &["Flask", "Node.js", "MongoDB", "MySQL"] },
];

/// Links rendered in the header, in order.
pub fn header_links(links: &LinkSet) -> [(&'static str, &'static str); 2] {
    [("GitHub", links.profile), ("LinkedIn", links.professional_network)]
}

/// Profile links rendered in the footer, in order. The résumé is rendered separately.
pub fn footer_links(links: &LinkSet) -> [(&'static str, &'static str); 3] {
    [("GitHub", links.profile), ("LeetCode", links.coding_profile), ("LinkedIn", links.professional_network)]
}

/// File name offered by the résumé download link.
pub fn resume_file_name(path: &'static str) -> &'static str {
    path.rsplit('/').next().unwrap_or(path)
}
