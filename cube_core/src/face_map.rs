use std::collections::HashMap;

use crate::{
    Face,
    cube::{FACE_SIZE, FACELET_COUNT},
    error::{ConfigError, UnknownFaceError},
};

/// How many facelets one quarter turn disturbs: the turned face's outer ring
/// of eight plus three facelets on each of the four adjacent faces. The
/// turned face's center and the whole opposite face stay put.
pub const MOVING_FACELETS: usize = 20;

/// The cycle table behind every move: for each face, the ordered list of
/// disjoint index cycles its clockwise quarter turn induces. Within a cycle,
/// the facelet at position `i` travels to position `i + 1` (wrapping).
///
/// Loaded once at startup and immutable afterwards, so it can sit behind an
/// `Arc` and be read by any number of engine calls at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceMap {
    // Indexed by the `Face` discriminant.
    cycles: [Vec<Vec<usize>>; 6],
}

// The built-in table for the canonical facelet numbering: faces t, f, d, r,
// l, b at offsets 0, 9, 18, 27, 36, 45, each face row-major as seen from
// outside it. Each entry lists the two ring cycles first, then the three
// cycles through the adjacent faces.
const STANDARD: [&[&[usize]]; 6] = [
    // t
    &[
        &[0, 2, 8, 6],
        &[1, 5, 7, 3],
        &[9, 36, 45, 27],
        &[10, 37, 46, 28],
        &[11, 38, 47, 29],
    ],
    // f
    &[
        &[9, 11, 17, 15],
        &[10, 14, 16, 12],
        &[6, 27, 20, 44],
        &[7, 30, 19, 41],
        &[8, 33, 18, 38],
    ],
    // d
    &[
        &[18, 20, 26, 24],
        &[19, 23, 25, 21],
        &[15, 33, 51, 42],
        &[16, 34, 52, 43],
        &[17, 35, 53, 44],
    ],
    // r
    &[
        &[27, 29, 35, 33],
        &[28, 32, 34, 30],
        &[11, 2, 51, 20],
        &[14, 5, 48, 23],
        &[17, 8, 45, 26],
    ],
    // l
    &[
        &[36, 38, 44, 42],
        &[37, 41, 43, 39],
        &[0, 9, 18, 53],
        &[3, 12, 21, 50],
        &[6, 15, 24, 47],
    ],
    // b
    &[
        &[45, 47, 53, 51],
        &[46, 50, 52, 48],
        &[0, 42, 26, 29],
        &[1, 39, 25, 32],
        &[2, 36, 24, 35],
    ],
];

impl FaceMap {
    /// The built-in table matching the canonical facelet numbering. Used when
    /// no mapping document is supplied.
    pub fn standard() -> FaceMap {
        FaceMap {
            cycles: STANDARD
                .map(|face| face.iter().map(|cycle| cycle.to_vec()).collect()),
        }
    }

    /// Parses a mapping document: a JSON object keyed by the six face
    /// letters, each value an ordered list of index cycles.
    ///
    /// Every structural defect is rejected here so that a move can never fail
    /// downstream: a missing or unknown face key, an index outside the state,
    /// an index claimed by two cycles of the same face (the turn would not be
    /// a bijection), coverage other than the 20 moving facelets, a cycle that
    /// disturbs the face's own center or the opposite face, and any cycle
    /// whose length would stop four quarter turns from being the identity.
    pub fn load(doc: &str) -> Result<FaceMap, ConfigError> {
        let mut entries: HashMap<String, Vec<Vec<usize>>> = serde_json::from_str(doc)?;

        let cycles = Face::ALL.map(|face| entries.remove(&face.letter().to_string()));

        if let Some(key) = entries.into_keys().next() {
            return Err(ConfigError::UnknownFace(key));
        }

        let mut table = [const { Vec::new() }; 6];

        for (face, entry) in Face::ALL.into_iter().zip(cycles) {
            let entry = entry.ok_or(ConfigError::MissingFace(face.letter()))?;
            validate_face(face, &entry)?;
            table[face as usize] = entry;
        }

        Ok(FaceMap { cycles: table })
    }

    /// Cycle list for a face. Total: the table is validated to hold all six
    /// faces before a `FaceMap` exists.
    pub fn cycles(&self, face: Face) -> &[Vec<usize>] {
        &self.cycles[face as usize]
    }

    /// Raw-identifier lookup for callers holding unvalidated input.
    pub fn cycles_for(&self, id: char) -> Result<&[Vec<usize>], UnknownFaceError> {
        let face = Face::from_letter(id).ok_or(UnknownFaceError(id))?;
        Ok(self.cycles(face))
    }
}

fn validate_face(face: Face, cycles: &[Vec<usize>]) -> Result<(), ConfigError> {
    let letter = face.letter();
    let mut seen = [false; FACELET_COUNT];
    let mut count = 0;

    for cycle in cycles {
        // Four applications of the turn must reproduce the identity, so
        // every cycle length has to divide 4; a length-one cycle is a fixed
        // point masquerading as a moving facelet.
        if cycle.len() < 2 || 4 % cycle.len() != 0 {
            return Err(ConfigError::NotAQuarterTurn {
                face: letter,
                len: cycle.len(),
            });
        }

        for &index in cycle {
            if index >= FACELET_COUNT {
                return Err(ConfigError::IndexOutOfRange {
                    face: letter,
                    index,
                });
            }

            if seen[index] {
                return Err(ConfigError::OverlappingCycles {
                    face: letter,
                    index,
                });
            }

            seen[index] = true;
            count += 1;
        }
    }

    if count != MOVING_FACELETS {
        return Err(ConfigError::WrongCoverage {
            face: letter,
            count,
        });
    }

    let opposite = face.opposite().offset();
    let pinned = (opposite..opposite + FACE_SIZE).chain([face.center()]);

    for index in pinned {
        if seen[index] {
            return Err(ConfigError::MovesPinnedFacelet {
                face: letter,
                index,
            });
        }
    }

    Ok(())
}
