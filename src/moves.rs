//! Moves that make up a combination: numbered punches, Muay Thai strikes and the duck.

use serde::{Serialize, Serializer};
use std::fmt;

/// Numbered boxing punch. Discriminants are the numbers called out in training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punch {
    Jab = 1,
    Cross = 2,
    LeadHook = 3,
    RearHook = 4,
    LeadUppercut = 5,
    RearUppercut = 6,
}

impl Punch {
    /// All punches in numeric order.
    pub const ALL: [Punch; 6] = [
        Punch::Jab,
        Punch::Cross,
        Punch::LeadHook,
        Punch::RearHook,
        Punch::LeadUppercut,
        Punch::RearUppercut,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.number() == n)
    }

    pub fn label(self) -> &'static str {
        match self {
            Punch::Jab => "Jab",
            Punch::Cross => "Cross",
            Punch::LeadHook => "Lead Hook",
            Punch::RearHook => "Rear Hook",
            Punch::LeadUppercut => "Lead Uppercut",
            Punch::RearUppercut => "Rear Uppercut",
        }
    }
}

/// Muay Thai technique. Strikes have no number, only a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strike {
    LeftElbow,
    RightElbow,
    LeftKnee,
    RightKnee,
    LeftKick,
    RightKick,
}

impl Strike {
    pub const ALL: [Strike; 6] = [
        Strike::LeftElbow,
        Strike::RightElbow,
        Strike::LeftKnee,
        Strike::RightKnee,
        Strike::LeftKick,
        Strike::RightKick,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Strike::LeftElbow => "Left Elbow",
            Strike::RightElbow => "Right Elbow",
            Strike::LeftKnee => "Left Knee",
            Strike::RightKnee => "Right Knee",
            Strike::LeftKick => "Left Kick",
            Strike::RightKick => "Right Kick",
        }
    }
}

/// Presentational grouping of a move. Has no effect on generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCategory {
    Punch,
    Strike,
    Duck,
}

impl MoveCategory {
    /// Stylesheet class used when rendering a move of this category.
    pub fn css_class(self) -> &'static str {
        match self {
            MoveCategory::Punch => "punch",
            MoveCategory::Strike => "muay-thai-strike",
            MoveCategory::Duck => "duck",
        }
    }
}

/// A single entry of a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Punch(Punch),
    Strike(Strike),
    Duck,
}

impl Move {
    pub const DUCK_LABEL: &'static str = "Duck";

    /// Text shown to the trainee: `"2 - Cross"`, `"Left Kick"` or `"Duck"`.
    pub fn describe(&self) -> String {
        match self {
            Move::Punch(p) => format!("{} - {}", p.number(), p.label()),
            Move::Strike(s) => s.label().to_string(),
            Move::Duck => Self::DUCK_LABEL.to_string(),
        }
    }

    pub fn classify(&self) -> MoveCategory {
        match self {
            Move::Punch(_) => MoveCategory::Punch,
            Move::Strike(_) => MoveCategory::Strike,
            Move::Duck => MoveCategory::Duck,
        }
    }

    pub fn is_duck(&self) -> bool {
        matches!(self, Move::Duck)
    }

    pub fn is_strike(&self) -> bool {
        matches!(self, Move::Strike(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Punch> for Move {
    fn from(p: Punch) -> Self {
        Move::Punch(p)
    }
}

impl From<Strike> for Move {
    fn from(s: Strike) -> Self {
        Move::Strike(s)
    }
}

// Punches go out as bare numbers and everything else as its label, so a
// combination reads like `[2, "Duck", 5, 1]` on the JS side.
impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Move::Punch(p) => serializer.serialize_u8(p.number()),
            Move::Strike(s) => serializer.serialize_str(s.label()),
            Move::Duck => serializer.serialize_str(Self::DUCK_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punch_numbers_round_trip() {
        for (i, p) in Punch::ALL.iter().enumerate() {
            assert_eq!(p.number() as usize, i + 1);
            assert_eq!(Punch::from_number(p.number()), Some(*p));
        }
        assert_eq!(Punch::from_number(0), None);
        assert_eq!(Punch::from_number(7), None);
    }

    #[test]
    fn describe_formats_each_kind() {
        assert_eq!(Move::Punch(Punch::Jab).describe(), "1 - Jab");
        assert_eq!(Move::Punch(Punch::RearUppercut).describe(), "6 - Rear Uppercut");
        assert_eq!(Move::Strike(Strike::LeftKick).describe(), "Left Kick");
        assert_eq!(Move::Duck.describe(), "Duck");
        assert_eq!(Move::Punch(Punch::LeadHook).to_string(), "3 - Lead Hook");
    }

    #[test]
    fn classify_and_css_class() {
        assert_eq!(Move::Punch(Punch::Cross).classify(), MoveCategory::Punch);
        assert_eq!(Move::Strike(Strike::RightKnee).classify(), MoveCategory::Strike);
        assert_eq!(Move::Duck.classify(), MoveCategory::Duck);
        assert_eq!(MoveCategory::Strike.css_class(), "muay-thai-strike");
    }

    #[test]
    fn serializes_like_the_js_shape() {
        let moves = vec![
            Move::Punch(Punch::Cross),
            Move::Duck,
            Move::Strike(Strike::RightElbow),
        ];
        let json = serde_json::to_string(&moves).unwrap();
        assert_eq!(json, r#"[2,"Duck","Right Elbow"]"#);
    }
}
