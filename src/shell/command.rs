use crate::profile;

/// The built-in commands, dispatched through a `match` rather than a
/// runtime registry. Adding a command means adding a variant here and
/// an arm in [`Command::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Skills,
    Clear,
    About,
    Contact,
    Echo,
}

/// Deferred side effects a handler can request instead of (or in
/// addition to) returning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Replace the whole scrollback with the cleared notice once the
    /// clear delay elapses.
    ScheduleClear,
}

/// What a handler produced: the lines to append to the scrollback,
/// plus an optional deferred effect.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub effect: Option<Effect>,
}

impl CommandOutput {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            effect: None,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            lines: Vec::new(),
            effect: Some(effect),
        }
    }
}

const HELP_LINES: &[&str] = &[
    "Available commands:",
    "- skills: List all skill categories",
    "- skills [category]: Show skills in a specific category",
    "- echo [text]: Print text back to the terminal",
    "- clear: Clear the terminal",
    "- about: About me",
    "- contact: Contact information",
];

impl Command {
    /// Resolve the first token of a submitted line. Lookup is
    /// case-sensitive: `HELP` is not a command.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Self::Help),
            "skills" => Some(Self::Skills),
            "clear" => Some(Self::Clear),
            "about" => Some(Self::About),
            "contact" => Some(Self::Contact),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Skills => "skills",
            Self::Clear => "clear",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Echo => "echo",
        }
    }

    /// Run the command against the static profile data.
    ///
    /// Handlers are total: any argument list (including none) produces
    /// output, never an error. Arguments the handler does not use are
    /// ignored.
    pub fn run(&self, args: &[&str]) -> CommandOutput {
        match self {
            Self::Help => CommandOutput::lines(owned(HELP_LINES)),
            Self::Skills => run_skills(args),
            Self::Clear => CommandOutput::effect(Effect::ScheduleClear),
            Self::About => CommandOutput::lines(owned(profile::ABOUT)),
            Self::Contact => CommandOutput::lines(owned(profile::CONTACT)),
            Self::Echo => CommandOutput::lines(vec![args.join(" ")]),
        }
    }
}

fn run_skills(args: &[&str]) -> CommandOutput {
    if args.is_empty() {
        let mut lines = vec!["Skill categories:".to_string()];
        for category in profile::SKILL_CATALOG.iter() {
            lines.push(format!("- {}", category.name));
        }
        lines.push("Type 'skills [category]' to see specific skills.".to_string());
        return CommandOutput::lines(lines);
    }

    // Only the first argument names a category; the rest are ignored.
    let requested = args[0];
    match profile::find_category(requested) {
        Some(category) => {
            let mut lines = vec![format!("{} skills:", category.name)];
            for item in &category.items {
                lines.push(format!("- {}", item));
            }
            CommandOutput::lines(lines)
        }
        None => CommandOutput::lines(vec![format!(
            "Category '{}' not found. Type 'skills' to see available categories.",
            requested
        )]),
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
