#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// The ten pipe glyphs, named for the arms they are open towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipeShape {
    Horizontal,
    Vertical,
    ElbowDownRight,
    ElbowDownLeft,
    ElbowUpRight,
    ElbowUpLeft,
    TeeRight,
    TeeLeft,
    TeeDown,
    TeeUp,
}

impl PipeShape {
    pub fn from_glyph(glyph: char) -> Option<PipeShape> {
        let shape = match glyph {
            '═' => PipeShape::Horizontal,
            '║' => PipeShape::Vertical,
            '╔' => PipeShape::ElbowDownRight,
            '╗' => PipeShape::ElbowDownLeft,
            '╚' => PipeShape::ElbowUpRight,
            '╝' => PipeShape::ElbowUpLeft,
            '╠' => PipeShape::TeeRight,
            '╣' => PipeShape::TeeLeft,
            '╦' => PipeShape::TeeDown,
            '╩' => PipeShape::TeeUp,
            _ => return None,
        };

        Some(shape)
    }

    pub fn directions(&self) -> &'static [Direction] {
        use Direction::*;

        match self {
            PipeShape::Horizontal => &[Left, Right],
            PipeShape::Vertical => &[Up, Down],
            PipeShape::ElbowDownRight => &[Down, Right],
            PipeShape::ElbowDownLeft => &[Down, Left],
            PipeShape::ElbowUpRight => &[Up, Right],
            PipeShape::ElbowUpLeft => &[Up, Left],
            PipeShape::TeeRight => &[Up, Down, Right],
            PipeShape::TeeLeft => &[Up, Down, Left],
            PipeShape::TeeDown => &[Down, Left, Right],
            PipeShape::TeeUp => &[Up, Left, Right],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_glyph_is_recognized() {
        for glyph in ['═', '║', '╔', '╗', '╚', '╝', '╠', '╣', '╦', '╩'] {
            assert!(
                PipeShape::from_glyph(glyph).is_some(),
                "glyph {} should map to a shape",
                glyph
            );
        }
    }

    #[test]
    fn test_non_pipe_glyphs_are_rejected() {
        assert_eq!(PipeShape::from_glyph('*'), None);
        assert_eq!(PipeShape::from_glyph('A'), None);
        assert_eq!(PipeShape::from_glyph('─'), None); // single-line box drawing
        assert_eq!(PipeShape::from_glyph('x'), None);
    }

    #[test]
    fn test_straight_and_elbow_shapes_have_two_arms() {
        use PipeShape::*;

        for shape in [
            Horizontal,
            Vertical,
            ElbowDownRight,
            ElbowDownLeft,
            ElbowUpRight,
            ElbowUpLeft,
        ] {
            assert_eq!(shape.directions().len(), 2, "{:?}", shape);
        }
    }

    #[test]
    fn test_tee_shapes_have_three_arms() {
        use PipeShape::*;

        for shape in [TeeRight, TeeLeft, TeeDown, TeeUp] {
            assert_eq!(shape.directions().len(), 3, "{:?}", shape);
        }
    }

    #[test]
    fn test_elbow_arms_match_their_corners() {
        use Direction::*;

        assert_eq!(PipeShape::from_glyph('╔').unwrap().directions(), &[Down, Right]);
        assert_eq!(PipeShape::from_glyph('╝').unwrap().directions(), &[Up, Left]);
    }

    #[test]
    fn test_tee_arms_omit_the_closed_side() {
        use Direction::*;

        // ╣ is closed on the right, ╦ is closed on top.
        assert_eq!(PipeShape::from_glyph('╣').unwrap().directions(), &[Up, Down, Left]);
        assert_eq!(PipeShape::from_glyph('╦').unwrap().directions(), &[Down, Left, Right]);
    }
}
