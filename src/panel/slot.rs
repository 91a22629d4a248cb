//! Panel slots
//!
//! The container has five fixed slots. Center is structural: side slots
//! can only be filled while a Center panel exists.

use serde::{Deserialize, Serialize};

/// Position a panel can occupy inside a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

impl Slot {
    /// All slots for iteration. Center comes last so reverse lookups
    /// prefer side slots, although occupancy is exclusive anyway.
    pub const ALL: [Slot; 5] = [Slot::Left, Slot::Right, Slot::Top, Slot::Bottom, Slot::Center];

    /// The four side slots
    pub const SIDES: [Slot; 4] = [Slot::Left, Slot::Right, Slot::Top, Slot::Bottom];

    /// Whether this is one of the four side slots
    pub fn is_side(&self) -> bool {
        !matches!(self, Slot::Center)
    }

    /// Returns the axis a transition to this slot slides along
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Slot::Left | Slot::Right => Some(Axis::Horizontal),
            Slot::Top | Slot::Bottom => Some(Axis::Vertical),
            Slot::Center => None,
        }
    }

    /// Dense index used by the slot registry
    pub(crate) fn index(&self) -> usize {
        match self {
            Slot::Center => 0,
            Slot::Left => 1,
            Slot::Right => 2,
            Slot::Top => 3,
            Slot::Bottom => 4,
        }
    }

    /// Get the display name for this slot
    pub fn display_name(&self) -> &'static str {
        match self {
            Slot::Center => "center",
            Slot::Left => "left",
            Slot::Right => "right",
            Slot::Top => "top",
            Slot::Bottom => "bottom",
        }
    }

    /// Parse a slot from its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Slot> {
        let name = name.trim();
        Slot::ALL
            .into_iter()
            .find(|slot| slot.display_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

/// Axis a side panel slides along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_indices_are_dense_and_unique() {
        let mut seen = [false; 5];
        for slot in Slot::ALL {
            assert!(!seen[slot.index()], "duplicate index for {slot}");
            seen[slot.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_sides_exclude_center() {
        assert!(!Slot::SIDES.contains(&Slot::Center));
        assert!(Slot::SIDES.iter().all(Slot::is_side));
        assert!(!Slot::Center.is_side());
    }

    #[test]
    fn test_slot_axis() {
        assert_eq!(Slot::Left.axis(), Some(Axis::Horizontal));
        assert_eq!(Slot::Right.axis(), Some(Axis::Horizontal));
        assert_eq!(Slot::Top.axis(), Some(Axis::Vertical));
        assert_eq!(Slot::Bottom.axis(), Some(Axis::Vertical));
        assert_eq!(Slot::Center.axis(), None);
    }

    #[test]
    fn test_slot_from_name() {
        assert_eq!(Slot::from_name("left"), Some(Slot::Left));
        assert_eq!(Slot::from_name(" Bottom "), Some(Slot::Bottom));
        assert_eq!(Slot::from_name("CENTER"), Some(Slot::Center));
        assert_eq!(Slot::from_name("middle"), None);
    }

    #[test]
    fn test_slot_serde_lowercase() {
        let yaml = serde_yaml::to_string(&Slot::Top).unwrap();
        assert_eq!(yaml.trim(), "top");
        let slot: Slot = serde_yaml::from_str("right").unwrap();
        assert_eq!(slot, Slot::Right);
    }
}
