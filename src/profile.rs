use once_cell::sync::Lazy;

/// A named group of skills, in display order.
#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: &'static str,
    pub items: Vec<&'static str>,
}

impl SkillCategory {
    fn new(name: &'static str, items: &[&'static str]) -> Self {
        Self {
            name,
            items: items.to_vec(),
        }
    }
}

/// The skill catalog consulted by the `skills` command.
///
/// Read-only reference data; catalog order is display order.
pub static SKILL_CATALOG: Lazy<Vec<SkillCategory>> = Lazy::new(|| {
    vec![
        SkillCategory::new(
            "Design",
            &[
                "Figma",
                "Adobe XD",
                "Photoshop",
                "Illustrator",
                "UI/UX",
                "Wireframing",
                "Prototyping",
            ],
        ),
        SkillCategory::new(
            "Frontend",
            &[
                "HTML",
                "CSS",
                "JavaScript",
                "TypeScript",
                "React",
                "Next.js",
                "Tailwind CSS",
                "Three.js",
            ],
        ),
        SkillCategory::new(
            "Backend",
            &[
                "Node.js",
                "Express",
                "MongoDB",
                "PostgreSQL",
                "Firebase",
                "REST API",
                "GraphQL",
            ],
        ),
    ]
});

/// Look up a category by name, ignoring ASCII case.
///
/// Returns the canonical record, so callers render the canonical
/// category name regardless of how the request was capitalized.
pub fn find_category(name: &str) -> Option<&'static SkillCategory> {
    SKILL_CATALOG
        .iter()
        .find(|category| category.name.eq_ignore_ascii_case(name))
}

/// Banner shown when an interactive session starts.
pub const WELCOME_BANNER: &[&str] = &[
    "Welcome to my interactive terminal!",
    "Type 'help' to see available commands.",
    "",
];

/// Label rendered in front of the live input line.
pub const PROMPT_LABEL: &str = "guest@portfolio:~$";

/// Commands offered as one-keypress badges in the hint bar.
pub const QUICK_COMMANDS: &[&str] = &["help", "skills", "about", "contact", "clear"];

pub const ABOUT: &[&str] = &[
    "About Me:",
    "I'm a passionate UI/UX designer and developer with 5+ years of experience",
    "creating beautiful, functional, and user-centered digital experiences.",
    "My background in both design and development allows me to bridge the gap",
    "between aesthetics and functionality.",
];

pub const CONTACT: &[&str] = &[
    "Contact Information:",
    "Email: hello@example.com",
    "LinkedIn: linkedin.com/in/yourname",
    "GitHub: github.com/yourname",
];
