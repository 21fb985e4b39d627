use vecmath::{vec2_add, vec2_len, vec2_normalized, vec2_scale, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position(pub f64, pub f64);

impl Position {
    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn distance_to(&self, other: Position) -> f64 {
        vec2_len(vec2_sub(other.as_vector(), self.as_vector()))
    }

    /// Unit vector pointing from `self` towards `other`, or `None` when both
    /// points coincide.
    pub fn direction_to(&self, other: Position) -> Option<Vector2<f64>> {
        let delta = vec2_sub(other.as_vector(), self.as_vector());

        if vec2_len(delta) <= ::std::f64::EPSILON {
            None
        } else {
            Some(vec2_normalized(delta))
        }
    }

    pub fn offset(&self, direction: Vector2<f64>, distance: f64) -> Position {
        Position::from_vector(vec2_add(self.as_vector(), vec2_scale(direction, distance)))
    }

    pub fn as_vector(&self) -> Vector2<f64> {
        [self.0, self.1]
    }

    pub fn from_vector(vector: Vector2<f64>) -> Position {
        Position(vector[0], vector[1])
    }
}

/// Heading angle in degrees for a direction vector, measured counter-clockwise
/// from the positive x axis.
pub fn heading_degrees(direction: Vector2<f64>) -> f64 {
    direction[1].atan2(direction[0]).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position(0.0, 0.0);
        let b = Position(3.0, 4.0);

        assert!((a.distance_to(b) - 5.0).abs() < 1e-9);
        assert!((b.distance_to(a) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn direction_to_same_point_is_none() {
        let a = Position(1.5, -2.0);
        assert!(a.direction_to(a).is_none());
    }

    #[test]
    fn offset_moves_along_direction() {
        let a = Position(1.0, 1.0);
        let direction = a.direction_to(Position(1.0, 5.0)).unwrap();
        let moved = a.offset(direction, 2.0);

        assert!((moved.x() - 1.0).abs() < 1e-9);
        assert!((moved.y() - 3.0).abs() < 1e-9);
        assert!((heading_degrees(direction) - 90.0).abs() < 1e-9);
    }
}
