use std::str::FromStr;

use crate::foundation::error::ReelError;

/// Routine action a clip depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BrushTeeth,
    WakeUp,
    EatBreakfast,
    Dress,
    Bath,
    WashHands,
    Play,
    Read,
    Clean,
    Default,
}

impl Category {
    /// Every category, in classifier table order with `Default` last.
    pub const ALL: [Category; 10] = [
        Category::BrushTeeth,
        Category::WakeUp,
        Category::EatBreakfast,
        Category::Dress,
        Category::Bath,
        Category::WashHands,
        Category::Play,
        Category::Read,
        Category::Clean,
        Category::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrushTeeth => "brush_teeth",
            Self::WakeUp => "wake_up",
            Self::EatBreakfast => "eat_breakfast",
            Self::Dress => "dress",
            Self::Bath => "bath",
            Self::WashHands => "wash_hands",
            Self::Play => "play",
            Self::Read => "read",
            Self::Clean => "clean",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ReelError::validation(format!("unknown category '{s}'")))
    }
}
