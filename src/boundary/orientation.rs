//! Inward normal directions for the six axis-aligned domain faces.
//! Grounded on `boundary_orientation.hpp`.

/// Which face of the domain a boundary element sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Right,
    Front,
    Back,
    Bottom,
    Top,
}

impl Orientation {
    /// Inward unit normal, pointing from the wall into the fluid volume
    /// (the direction from a boundary cell to its fluid-side neighbour).
    pub fn normal(self) -> (f64, f64, f64) {
        match self {
            Orientation::Left => (1.0, 0.0, 0.0),
            Orientation::Right => (-1.0, 0.0, 0.0),
            Orientation::Front => (0.0, 1.0, 0.0),
            Orientation::Back => (0.0, -1.0, 0.0),
            Orientation::Bottom => (0.0, 0.0, 1.0),
            Orientation::Top => (0.0, 0.0, -1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normals_are_unit_and_axis_aligned() {
        for o in [
            Orientation::Left,
            Orientation::Right,
            Orientation::Front,
            Orientation::Back,
            Orientation::Bottom,
            Orientation::Top,
        ] {
            let (x, y, z) = o.normal();
            assert!((x * x + y * y + z * z - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn opposite_faces_have_opposite_normals() {
        assert_eq!(Orientation::Left.normal(), negate(Orientation::Right.normal()));
        assert_eq!(Orientation::Front.normal(), negate(Orientation::Back.normal()));
        assert_eq!(Orientation::Bottom.normal(), negate(Orientation::Top.normal()));
    }

    fn negate(v: (f64, f64, f64)) -> (f64, f64, f64) {
        (-v.0, -v.1, -v.2)
    }
}
