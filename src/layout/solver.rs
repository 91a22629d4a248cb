//! Frame resolution
//!
//! Resolves a [`ConstraintSet`] into concrete view rectangles for given
//! container bounds. The panel layout only ever produces equality chains
//! rooted at the container, so this is simple propagation rather than a
//! general linear solver: repeat over the constraints, filling any unknown
//! side from a known one, until nothing changes.

use std::collections::{BTreeMap, HashMap};

use super::constraints::{Attribute, ConstraintSet, Item};
use super::geometry::{Rect, Size};
use crate::panel::ViewId;

/// Resolved frames keyed by view
pub type Frames = BTreeMap<ViewId, Rect>;

#[derive(Debug, Clone, Copy, Default)]
struct PartialFrame {
    x: Option<f32>,
    y: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
}

impl PartialFrame {
    fn known(rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
        }
    }

    fn value(&self, attr: Attribute) -> Option<f32> {
        match attr {
            Attribute::Width => self.width,
            Attribute::Height => self.height,
            Attribute::Leading => self.x,
            Attribute::Trailing => Some(self.x? + self.width?),
            Attribute::CenterX => Some(self.x? + self.width? / 2.0),
            Attribute::Top => self.y,
            Attribute::Bottom => Some(self.y? + self.height?),
            Attribute::CenterY => Some(self.y? + self.height? / 2.0),
        }
    }

    /// Fill in whatever `attr = value` determines. Returns true on progress.
    fn solve(&mut self, attr: Attribute, value: f32) -> bool {
        let (slot, resolved) = match attr {
            Attribute::Width => (&mut self.width, Some(value)),
            Attribute::Height => (&mut self.height, Some(value)),
            Attribute::Leading => (&mut self.x, Some(value)),
            Attribute::Trailing => (&mut self.x, self.width.map(|w| value - w)),
            Attribute::CenterX => (&mut self.x, self.width.map(|w| value - w / 2.0)),
            Attribute::Top => (&mut self.y, Some(value)),
            Attribute::Bottom => (&mut self.y, self.height.map(|h| value - h)),
            Attribute::CenterY => (&mut self.y, self.height.map(|h| value - h / 2.0)),
        };
        match (slot.is_none(), resolved) {
            (true, Some(v)) => {
                *slot = Some(v);
                true
            }
            _ => false,
        }
    }

    fn complete(&self) -> Option<Rect> {
        Some(Rect::new(self.x?, self.y?, self.width?, self.height?))
    }
}

/// Resolve every fully-determined view frame
///
/// Views whose position or size cannot be derived (for example a side
/// panel with no Center to anchor to) are left out of the result.
pub fn resolve_frames(set: &ConstraintSet, bounds: Size) -> Frames {
    let container = PartialFrame::known(Rect::from_size(bounds));
    let mut views: HashMap<ViewId, PartialFrame> = HashMap::new();

    for constraint in set.iter() {
        for item in [constraint.first, constraint.second] {
            if let Item::View(id) = item {
                views.entry(id).or_default();
            }
        }
    }

    // Each pass fixes at least one unknown or stops
    let max_passes = set.len() + 1;
    for _ in 0..max_passes {
        let mut progress = false;

        for constraint in set.iter() {
            let lhs = frame_of(&views, &container, constraint.first)
                .and_then(|f| f.value(constraint.first_attr));
            let rhs = frame_of(&views, &container, constraint.second)
                .and_then(|f| f.value(constraint.second_attr));

            match (lhs, rhs) {
                (None, Some(rhs)) => {
                    if let Item::View(id) = constraint.first {
                        if let Some(frame) = views.get_mut(&id) {
                            progress |= frame.solve(constraint.first_attr, rhs + constraint.constant);
                        }
                    }
                }
                (Some(lhs), None) => {
                    if let Item::View(id) = constraint.second {
                        if let Some(frame) = views.get_mut(&id) {
                            progress |= frame.solve(constraint.second_attr, lhs - constraint.constant);
                        }
                    }
                }
                _ => {}
            }
        }

        if !progress {
            break;
        }
    }

    views
        .into_iter()
        .filter_map(|(id, frame)| frame.complete().map(|rect| (id, rect)))
        .collect()
}

fn frame_of<'a>(
    views: &'a HashMap<ViewId, PartialFrame>,
    container: &'a PartialFrame,
    item: Item,
) -> Option<&'a PartialFrame> {
    match item {
        Item::Container => Some(container),
        Item::View(id) => views.get(&id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::constraints::center_offset;
    use crate::panel::Slot;

    const CENTER: ViewId = ViewId(1);
    const LEFT: ViewId = ViewId(2);
    const RIGHT: ViewId = ViewId(3);
    const TOP: ViewId = ViewId(4);
    const BOTTOM: ViewId = ViewId(5);

    fn bounds() -> Size {
        Size::new(400.0, 300.0)
    }

    fn full_set(side: Slot) -> ConstraintSet {
        ConstraintSet::derive(
            Some(CENTER),
            &[
                (Slot::Left, LEFT),
                (Slot::Right, RIGHT),
                (Slot::Top, TOP),
                (Slot::Bottom, BOTTOM),
            ],
            center_offset(side, bounds()),
        )
    }

    #[test]
    fn test_center_fills_container_at_rest() {
        let frames = resolve_frames(&full_set(Slot::Center), bounds());
        assert_eq!(frames[&CENTER], Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(frames[&LEFT], Rect::new(-400.0, 0.0, 400.0, 300.0));
        assert_eq!(frames[&RIGHT], Rect::new(400.0, 0.0, 400.0, 300.0));
        assert_eq!(frames[&TOP], Rect::new(0.0, -300.0, 400.0, 300.0));
        assert_eq!(frames[&BOTTOM], Rect::new(0.0, 300.0, 400.0, 300.0));
    }

    #[test]
    fn test_left_revealed_pushes_center_right() {
        let frames = resolve_frames(&full_set(Slot::Left), bounds());
        assert_eq!(frames[&LEFT], Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(frames[&CENTER], Rect::new(400.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn test_bottom_revealed_pushes_center_up() {
        let frames = resolve_frames(&full_set(Slot::Bottom), bounds());
        assert_eq!(frames[&BOTTOM], Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(frames[&CENTER], Rect::new(0.0, -300.0, 400.0, 300.0));
    }

    #[test]
    fn test_unanchored_side_is_unresolved() {
        let set = ConstraintSet::derive(None, &[(Slot::Right, RIGHT)], (0.0, 0.0));
        let frames = resolve_frames(&set, bounds());
        assert!(frames.is_empty());
    }
}
