//! Fixed option tables for interactive prompting and defaults.
//!
//! These mirror the choices the catalogue page styles against. They are plain
//! constants: validation and prompting take them as data, no global state.

/// One selectable icon style: Font Awesome class, text colour, background
/// colour, and a human-readable label for menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconChoice {
    /// Font Awesome icon class, e.g. `fas fa-brain`.
    pub icon: &'static str,
    /// Tailwind text colour class.
    pub color: &'static str,
    /// Tailwind background colour classes (light and dark variants).
    pub bg: &'static str,
    /// Menu label shown to the operator.
    pub label: &'static str,
}

/// Icon styles offered when adding a template.
pub const ICON_CHOICES: [IconChoice; 10] = [
    IconChoice {
        icon: "fas fa-seedling",
        color: "text-green-500",
        bg: "bg-green-50 dark:bg-green-900/20",
        label: "Seedling (Growth/Beginner)",
    },
    IconChoice {
        icon: "fas fa-brain",
        color: "text-purple-500",
        bg: "bg-purple-50 dark:bg-purple-900/20",
        label: "Brain (Thinking/Analysis)",
    },
    IconChoice {
        icon: "fas fa-code",
        color: "text-blue-500",
        bg: "bg-blue-50 dark:bg-blue-900/20",
        label: "Code (Programming)",
    },
    IconChoice {
        icon: "fas fa-chalkboard-teacher",
        color: "text-orange-500",
        bg: "bg-orange-50 dark:bg-orange-900/20",
        label: "Teacher (Education)",
    },
    IconChoice {
        icon: "fas fa-lightbulb",
        color: "text-yellow-500",
        bg: "bg-yellow-50 dark:bg-yellow-900/20",
        label: "Lightbulb (Ideas)",
    },
    IconChoice {
        icon: "fas fa-rocket",
        color: "text-red-500",
        bg: "bg-red-50 dark:bg-red-900/20",
        label: "Rocket (Launch/Speed)",
    },
    IconChoice {
        icon: "fas fa-puzzle-piece",
        color: "text-indigo-500",
        bg: "bg-indigo-50 dark:bg-indigo-900/20",
        label: "Puzzle (Problem Solving)",
    },
    IconChoice {
        icon: "fas fa-book",
        color: "text-teal-500",
        bg: "bg-teal-50 dark:bg-teal-900/20",
        label: "Book (Learning)",
    },
    IconChoice {
        icon: "fas fa-flask",
        color: "text-pink-500",
        bg: "bg-pink-50 dark:bg-pink-900/20",
        label: "Flask (Experiment)",
    },
    IconChoice {
        icon: "fas fa-robot",
        color: "text-gray-500",
        bg: "bg-gray-50 dark:bg-gray-900/20",
        label: "Robot (AI/Automation)",
    },
];

/// Fallback icon style when no valid choice was made (robot on purple).
pub const DEFAULT_ICON: IconChoice = IconChoice {
    icon: "fas fa-robot",
    color: "text-purple-500",
    bg: "bg-purple-50 dark:bg-purple-900/20",
    label: "Robot (AI/Automation)",
};

/// Template difficulty levels, menu order.
pub const DIFFICULTY_CHOICES: [&str; 4] = ["Beginner", "Intermediate", "Advanced", "All Levels"];

/// Template categories, menu order. `Custom` prompts for free text.
pub const CATEGORY_CHOICES: [&str; 10] = [
    "Learning Method",
    "Self Testing",
    "Hands-On",
    "Structured Learning",
    "Problem Solving",
    "Creative Writing",
    "Code Review",
    "Research",
    "Interview Prep",
    "Custom",
];

/// Tool pricing models.
pub const PRICING_CHOICES: [&str; 3] = ["Free", "Freemium", "Paid"];
