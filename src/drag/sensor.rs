use serde::{Deserialize, Serialize};

/// Pointer position in screen units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Activation constraint for pointer-initiated drags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSensor {
    pub activation_distance: f64,
}

impl PointerSensor {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance,
        }
    }

    /// True once the pointer has moved strictly past the activation distance
    pub fn is_activated(&self, origin: Point, position: Point) -> bool {
        origin.distance_to(position) > self.activation_distance
    }
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(3.0)
    }
}
