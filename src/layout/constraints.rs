//! Constraint model for the panel container
//!
//! Every constraint is an equality `first.attr = second.attr + constant`.
//! The set is derived from the slot registry whenever a slot changes. The
//! two Center offset constraints are the only ones whose constants change
//! afterwards: transitions mutate them in place instead of re-deriving.

use super::geometry::Size;
use crate::panel::{Slot, ViewId};

/// Edge or dimension of an item taking part in a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Width,
    Height,
    Leading,
    Trailing,
    Top,
    Bottom,
    CenterX,
    CenterY,
}

impl Attribute {
    /// Whether this attribute is a dimension rather than a position
    pub fn is_dimension(&self) -> bool {
        matches!(self, Attribute::Width | Attribute::Height)
    }
}

/// One side of a constraint: the container itself or a child view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Container,
    View(ViewId),
}

/// `first.first_attr = second.second_attr + constant`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub first: Item,
    pub first_attr: Attribute,
    pub second: Item,
    pub second_attr: Attribute,
    pub constant: f32,
}

impl Constraint {
    pub fn equal(first: Item, first_attr: Attribute, second: Item, second_attr: Attribute) -> Self {
        Self {
            first,
            first_attr,
            second,
            second_attr,
            constant: 0.0,
        }
    }

    /// Whether the constraint mentions the given view on either side
    pub fn involves(&self, view: ViewId) -> bool {
        self.first == Item::View(view) || self.second == Item::View(view)
    }
}

/// Container width/height equal to the view's (full-bleed sizing)
fn fill_container(view: ViewId) -> [Constraint; 2] {
    [
        Constraint::equal(Item::Container, Attribute::Width, Item::View(view), Attribute::Width),
        Constraint::equal(Item::Container, Attribute::Height, Item::View(view), Attribute::Height),
    ]
}

/// The two anchors that pin a side panel against the Center panel
pub fn side_anchors(side: Slot, center: ViewId, panel: ViewId) -> Option<[Constraint; 2]> {
    let c = Item::View(center);
    let p = Item::View(panel);
    let anchors = match side {
        Slot::Left => [
            Constraint::equal(c, Attribute::Leading, p, Attribute::Trailing),
            Constraint::equal(c, Attribute::CenterY, p, Attribute::CenterY),
        ],
        Slot::Right => [
            Constraint::equal(c, Attribute::Trailing, p, Attribute::Leading),
            Constraint::equal(c, Attribute::CenterY, p, Attribute::CenterY),
        ],
        Slot::Top => [
            Constraint::equal(c, Attribute::CenterX, p, Attribute::CenterX),
            Constraint::equal(c, Attribute::Top, p, Attribute::Bottom),
        ],
        Slot::Bottom => [
            Constraint::equal(c, Attribute::CenterX, p, Attribute::CenterX),
            Constraint::equal(c, Attribute::Bottom, p, Attribute::Top),
        ],
        Slot::Center => return None,
    };
    Some(anchors)
}

/// Center offset for the given foregrounded slot and container bounds
///
/// The Center is pushed fully out of view opposite the revealed side.
pub fn center_offset(side: Slot, bounds: Size) -> (f32, f32) {
    match side {
        Slot::Center => (0.0, 0.0),
        Slot::Left => (-bounds.width, 0.0),
        Slot::Right => (bounds.width, 0.0),
        Slot::Top => (0.0, -bounds.height),
        Slot::Bottom => (0.0, bounds.height),
    }
}

/// The installed constraint set, with handles to the Center offset pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
    center_x: Option<usize>,
    center_y: Option<usize>,
}

impl ConstraintSet {
    /// Derive the full set for a registry snapshot
    ///
    /// Sides are always sized to the container. They are anchored only when
    /// a Center exists; without one they keep their size constraints alone.
    /// `offset` seeds the Center offset pair so re-derivation keeps the
    /// current slide position.
    pub fn derive(center: Option<ViewId>, sides: &[(Slot, ViewId)], offset: (f32, f32)) -> Self {
        let mut set = ConstraintSet::default();

        if let Some(center) = center {
            set.constraints.extend(fill_container(center));

            set.center_x = Some(set.constraints.len());
            set.constraints.push(Constraint {
                constant: offset.0,
                ..Constraint::equal(Item::Container, Attribute::CenterX, Item::View(center), Attribute::CenterX)
            });

            set.center_y = Some(set.constraints.len());
            set.constraints.push(Constraint {
                constant: offset.1,
                ..Constraint::equal(Item::Container, Attribute::CenterY, Item::View(center), Attribute::CenterY)
            });
        }

        for &(side, view) in sides {
            if !side.is_side() {
                continue;
            }
            set.constraints.extend(fill_container(view));
            if let Some(anchors) = center.and_then(|c| side_anchors(side, c, view)) {
                set.constraints.extend(anchors);
            }
        }

        set
    }

    /// Current constants of the Center offset pair, if a Center is installed
    pub fn center_offset(&self) -> Option<(f32, f32)> {
        let x = self.constraints.get(self.center_x?)?.constant;
        let y = self.constraints.get(self.center_y?)?.constant;
        Some((x, y))
    }

    /// Mutate the Center offset pair in place
    ///
    /// Returns true if either constant changed. No-op without a Center.
    pub fn set_center_offset(&mut self, offset: (f32, f32)) -> bool {
        let (Some(ix), Some(iy)) = (self.center_x, self.center_y) else {
            return false;
        };
        let mut changed = false;
        for (index, value) in [(ix, offset.0), (iy, offset.1)] {
            if let Some(constraint) = self.constraints.get_mut(index) {
                if constraint.constant != value {
                    constraint.constant = value;
                    changed = true;
                }
            }
        }
        changed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Constraints that mention the given view
    pub fn for_view(&self, view: ViewId) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().filter(move |c| c.involves(view))
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> Size {
        Size::new(320.0, 480.0)
    }

    #[test]
    fn test_center_offset_table() {
        assert_eq!(center_offset(Slot::Center, size()), (0.0, 0.0));
        assert_eq!(center_offset(Slot::Left, size()), (-320.0, 0.0));
        assert_eq!(center_offset(Slot::Right, size()), (320.0, 0.0));
        assert_eq!(center_offset(Slot::Top, size()), (0.0, -480.0));
        assert_eq!(center_offset(Slot::Bottom, size()), (0.0, 480.0));
    }

    #[test]
    fn test_derive_center_only() {
        let center = ViewId(1);
        let set = ConstraintSet::derive(Some(center), &[], (0.0, 0.0));
        assert_eq!(set.len(), 4);
        assert_eq!(set.center_offset(), Some((0.0, 0.0)));
        assert!(set.iter().all(|c| c.involves(center)));
    }

    #[test]
    fn test_derive_left_anchors_against_center() {
        let center = ViewId(1);
        let left = ViewId(2);
        let set = ConstraintSet::derive(Some(center), &[(Slot::Left, left)], (0.0, 0.0));

        let left_constraints: Vec<_> = set.for_view(left).copied().collect();
        assert_eq!(left_constraints.len(), 4);
        assert!(left_constraints.contains(&Constraint::equal(
            Item::View(center),
            Attribute::Leading,
            Item::View(left),
            Attribute::Trailing,
        )));
        assert!(left_constraints.contains(&Constraint::equal(
            Item::View(center),
            Attribute::CenterY,
            Item::View(left),
            Attribute::CenterY,
        )));
    }

    #[test]
    fn test_derive_bottom_anchors() {
        let anchors = side_anchors(Slot::Bottom, ViewId(1), ViewId(5)).unwrap();
        assert_eq!(anchors[0].first_attr, Attribute::CenterX);
        assert_eq!(anchors[1].first_attr, Attribute::Bottom);
        assert_eq!(anchors[1].second_attr, Attribute::Top);
        assert!(side_anchors(Slot::Center, ViewId(1), ViewId(5)).is_none());
    }

    #[test]
    fn test_sides_without_center_are_only_sized() {
        let right = ViewId(9);
        let set = ConstraintSet::derive(None, &[(Slot::Right, right)], (0.0, 0.0));
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|c| c.first == Item::Container && c.first_attr.is_dimension()));
        assert_eq!(set.center_offset(), None);
    }

    #[test]
    fn test_set_center_offset_reports_change() {
        let mut set = ConstraintSet::derive(Some(ViewId(1)), &[], (0.0, 0.0));
        assert!(set.set_center_offset((-320.0, 0.0)));
        assert_eq!(set.center_offset(), Some((-320.0, 0.0)));
        assert!(!set.set_center_offset((-320.0, 0.0)));

        let mut empty = ConstraintSet::default();
        assert!(!empty.set_center_offset((1.0, 1.0)));
    }

    #[test]
    fn test_derive_keeps_seeded_offset() {
        let set = ConstraintSet::derive(Some(ViewId(1)), &[], (0.0, 480.0));
        assert_eq!(set.center_offset(), Some((0.0, 480.0)));
    }
}
