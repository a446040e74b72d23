use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Category {
    Mood,
    Event,
    Health,
    Sleep,
    Steps,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mood,
        Category::Event,
        Category::Health,
        Category::Sleep,
        Category::Steps,
    ];

    /// Categories filled in by the fitness backfill.
    pub const FITNESS: [Category; 2] = [Category::Sleep, Category::Steps];

    /// Convert enum → log file string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mood => "Mood",
            Category::Event => "Event",
            Category::Health => "Health",
            Category::Sleep => "Sleep",
            Category::Steps => "Steps",
        }
    }

    /// Convert log file string → enum (exact match, as written by `as_str`)
    pub fn from_log_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}
