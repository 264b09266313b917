use std::fmt;

pub mod cube;
pub mod engine;
pub mod error;
pub mod face_map;

pub use cube::{CubeState, FACELET_COUNT, FACE_SIZE};
pub use engine::{MoveEngine, MoveToken};
pub use error::{ConfigError, MalformedStateError, MoveError, UnknownFaceError};
pub use face_map::FaceMap;

/// One sticker label. Opaque to everything except loading, saving, and
/// rendering; moves only ever shuffle these around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facelet {
    White,
    Green,
    Yellow,
    Red,
    Orange,
    Blue,
}

impl Facelet {
    pub const ALL: [Facelet; 6] = [
        Facelet::White,
        Facelet::Green,
        Facelet::Yellow,
        Facelet::Red,
        Facelet::Orange,
        Facelet::Blue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Facelet::White => "w",
            Facelet::Green => "g",
            Facelet::Yellow => "y",
            Facelet::Red => "r",
            Facelet::Orange => "o",
            Facelet::Blue => "b",
        }
    }

    pub fn from_label(label: &str) -> Option<Facelet> {
        Facelet::ALL.into_iter().find(|v| v.label() == label)
    }
}

impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the six 3×3 faces. The discriminant fixes each face's slot in the
/// 54-element facelet array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Top = 0,
    Front = 1,
    Down = 2,
    Right = 3,
    Left = 4,
    Back = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Front,
        Face::Down,
        Face::Right,
        Face::Left,
        Face::Back,
    ];

    pub fn letter(self) -> char {
        match self {
            Face::Top => 't',
            Face::Front => 'f',
            Face::Down => 'd',
            Face::Right => 'r',
            Face::Left => 'l',
            Face::Back => 'b',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|v| v.letter() == letter)
    }

    /// First index of this face's block of nine facelets.
    pub fn offset(self) -> usize {
        self as usize * FACE_SIZE
    }

    /// Index of this face's center facelet, which no quarter turn may move.
    pub fn center(self) -> usize {
        self.offset() + FACE_SIZE / 2
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Down,
            Face::Front => Face::Back,
            Face::Down => Face::Top,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Back => Face::Front,
        }
    }

    /// The label every sticker of this face carries in the solved state.
    pub fn solved_facelet(self) -> Facelet {
        match self {
            Face::Top => Facelet::White,
            Face::Front => Facelet::Green,
            Face::Down => Facelet::Yellow,
            Face::Right => Facelet::Red,
            Face::Left => Facelet::Orange,
            Face::Back => Facelet::Blue,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Top => "top",
            Face::Front => "front",
            Face::Down => "down",
            Face::Right => "right",
            Face::Left => "left",
            Face::Back => "back",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Face, Facelet};

    #[test]
    fn letters_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }

        for facelet in Facelet::ALL {
            assert_eq!(Facelet::from_label(facelet.label()), Some(facelet));
        }

        assert_eq!(Face::from_letter('z'), None);
        assert_eq!(Facelet::from_label("x"), None);
    }

    #[test]
    fn offsets_partition_the_state() {
        let mut offsets = Face::ALL.map(Face::offset);
        offsets.sort_unstable();
        assert_eq!(offsets, [0, 9, 18, 27, 36, 45]);
    }

    #[test]
    fn opposites_are_involutions() {
        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
    }
}
