use bevy::math::Vec2;

/// Capability the scene model needs from an externally built payload.
///
/// Both capabilities are optional: a payload without a position is never
/// hit-tested or moved, and one without a radius reports zero.
pub trait Payload: Send + Sync + 'static {
    fn position(&self) -> Option<Vec2> {
        None
    }

    fn position_mut(&mut self) -> Option<&mut Vec2> {
        None
    }

    fn radius(&self) -> f32 {
        0.0
    }
}
