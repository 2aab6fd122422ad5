use crate::core::data::canvas_rect::Quadrant;

/// Rotation state of the Hilbert traversal. `Up` is the base pattern;
/// the others are its rotations, used by sub-curves so that quadrant
/// visit orders compose into one deterministic path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// Quadrant visit order for one recursion step, paired with the
    /// orientation each sub-curve is traversed with.
    #[must_use]
    pub const fn visit_order(self) -> [(Quadrant, Self); 4] {
        match self {
            Self::Up => [
                (Quadrant::BottomLeft, Self::Right),
                (Quadrant::TopLeft, Self::Up),
                (Quadrant::TopRight, Self::Up),
                (Quadrant::BottomRight, Self::Left),
            ],
            Self::Down => [
                (Quadrant::TopRight, Self::Left),
                (Quadrant::BottomRight, Self::Down),
                (Quadrant::BottomLeft, Self::Down),
                (Quadrant::TopLeft, Self::Right),
            ],
            Self::Left => [
                (Quadrant::BottomRight, Self::Down),
                (Quadrant::BottomLeft, Self::Left),
                (Quadrant::TopLeft, Self::Left),
                (Quadrant::TopRight, Self::Up),
            ],
            Self::Right => [
                (Quadrant::TopLeft, Self::Up),
                (Quadrant::TopRight, Self::Right),
                (Quadrant::BottomRight, Self::Right),
                (Quadrant::BottomLeft, Self::Down),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ORIENTATIONS: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];

    #[test]
    fn every_orientation_visits_each_quadrant_once() {
        for orientation in ALL_ORIENTATIONS {
            let order = orientation.visit_order();

            for quadrant in [
                Quadrant::TopLeft,
                Quadrant::TopRight,
                Quadrant::BottomLeft,
                Quadrant::BottomRight,
            ] {
                let visits = order.iter().filter(|(q, _)| *q == quadrant).count();
                assert_eq!(visits, 1, "{:?} visits {:?} {} times", orientation, quadrant, visits);
            }
        }
    }

    #[test]
    fn up_is_the_base_pattern() {
        let order = Orientation::Up.visit_order();

        assert_eq!(order[0], (Quadrant::BottomLeft, Orientation::Right));
        assert_eq!(order[1], (Quadrant::TopLeft, Orientation::Up));
        assert_eq!(order[2], (Quadrant::TopRight, Orientation::Up));
        assert_eq!(order[3], (Quadrant::BottomRight, Orientation::Left));
    }

    #[test]
    fn first_visited_quadrant_per_orientation() {
        assert_eq!(Orientation::Up.visit_order()[0].0, Quadrant::BottomLeft);
        assert_eq!(Orientation::Down.visit_order()[0].0, Quadrant::TopRight);
        assert_eq!(Orientation::Left.visit_order()[0].0, Quadrant::BottomRight);
        assert_eq!(Orientation::Right.visit_order()[0].0, Quadrant::TopLeft);
    }

    #[test]
    fn sub_orientations_stay_within_the_rotation_set() {
        // The set is closed: recursing can never leave these four states.
        for orientation in ALL_ORIENTATIONS {
            for (_, sub_orientation) in orientation.visit_order() {
                assert!(ALL_ORIENTATIONS.contains(&sub_orientation));
            }
        }
    }
}
