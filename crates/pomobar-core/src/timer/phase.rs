use serde::{Deserialize, Serialize};

/// The current countdown category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Work,
    Break,
    LongBreak,
}

impl Phase {
    pub fn word(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::Break => "Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Phase::Work => "\u{1F345}",
            Phase::Break => "\u{2615}",
            Phase::LongBreak => "\u{1F9D8}",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Phase::Break | Phase::LongBreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_representation_is_kebab_case() {
        assert_eq!(serde_json::to_string(&Phase::Work).unwrap(), "\"work\"");
        assert_eq!(
            serde_json::to_string(&Phase::LongBreak).unwrap(),
            "\"long-break\""
        );
        let parsed: Phase = serde_json::from_str("\"break\"").unwrap();
        assert_eq!(parsed, Phase::Break);
    }

    #[test]
    fn words_and_icons() {
        assert_eq!(Phase::Work.word(), "Work");
        assert_eq!(Phase::LongBreak.word(), "Long Break");
        assert_eq!(Phase::Work.icon(), "🍅");
        assert_eq!(Phase::Break.icon(), "☕");
        assert_eq!(Phase::LongBreak.icon(), "🧘");
        assert!(!Phase::Work.is_break());
        assert!(Phase::LongBreak.is_break());
    }
}
