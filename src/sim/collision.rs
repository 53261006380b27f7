//! Collision predicates for the side-view stage
//!
//! Everything here is a pure function of geometry: no entity state is
//! touched. Responses (knockback, re-snap, deactivation) live with the
//! entities that own the state.

use super::rect::Rect;

/// Half-open AABB overlap test.
///
/// Boxes that share only an edge do not collide.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.right() <= b.left()
        || b.right() <= a.left()
        || a.bottom() <= b.top()
        || b.bottom() <= a.top())
}

/// Check whether a body is resting on (or has just sunk into) the platform.
///
/// The body's horizontal span is inset by `edge_margin` on both sides before
/// being compared with the platform, so a character may overhang the edge
/// but is dropped once most of it has walked off. The body's vertical centre
/// must still be above the surface; anything that sank deeper is falling
/// past the platform and is left alone.
pub fn on_platform(body: &Rect, platform: &Rect, edge_margin: f32) -> bool {
    body.bottom() > platform.top()
        && body.top() + body.height() / 2.0 < platform.top()
        && body.left() + edge_margin >= platform.left()
        && body.right() - edge_margin <= platform.right()
}

/// A bullet is gone once its trailing edge leaves either side of the screen
pub fn off_screen_horizontal(rect: &Rect, screen_width: f32) -> bool {
    rect.left() > screen_width || rect.right() < 0.0
}

/// A body is gone once its top has passed the bottom of the screen
pub fn below_screen(rect: &Rect, screen_height: f32) -> bool {
    rect.top() > screen_height
}

/// Area swept by a stab: from the attacker's centre line outward in the
/// facing direction, covering the attacker's full height.
pub fn melee_reach(attacker: &Rect, facing: f32, reach: f32) -> Rect {
    let half = attacker.width() / 2.0;
    let width = half + reach;
    let x = if facing >= 0.0 {
        attacker.left() + half
    } else {
        attacker.left() + half - width
    };
    Rect::new(x, attacker.top(), width, attacker.height())
}
