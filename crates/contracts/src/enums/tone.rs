use serde::{Deserialize, Serialize};

/// Visual tone of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Info,
    Warning,
    Success,
    Neutral,
    Danger,
    Accent,
}

impl Tone {
    /// BEM modifier used by the `badge` block in the stylesheet
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Info => "badge badge--info",
            Tone::Warning => "badge badge--warning",
            Tone::Success => "badge badge--success",
            Tone::Neutral => "badge badge--neutral",
            Tone::Danger => "badge badge--error",
            Tone::Accent => "badge badge--accent",
        }
    }
}
