use bevy::math::Vec2;
use terrarium_scene::Payload;

/// Payload of entity items: a body with a position and a size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Critter {
    pub position: Vec2,
    pub radius: f32,
}

impl Payload for Critter {
    fn position(&self) -> Option<Vec2> {
        Some(self.position)
    }

    fn position_mut(&mut self) -> Option<&mut Vec2> {
        Some(&mut self.position)
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Payload of environment items. Ambient habitats cover the whole canvas and have no position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Habitat {
    pub position: Option<Vec2>,
    pub radius: f32,
}

impl Payload for Habitat {
    fn position(&self) -> Option<Vec2> {
        self.position
    }

    fn position_mut(&mut self) -> Option<&mut Vec2> {
        self.position.as_mut()
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}
