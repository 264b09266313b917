use itertools::Itertools;

use crate::{Face, Facelet, error::MalformedStateError};

pub const FACE_SIZE: usize = 9;
pub const FACELET_COUNT: usize = 6 * FACE_SIZE;

/// The full labeling of the cube's surface: 54 facelets, one face of nine per
/// [`Face::offset`] slot.
///
/// This is a plain value. Moves never mutate a `CubeState` in place; the
/// engine takes a borrow and hands back the permuted copy, so callers can
/// keep as many independent snapshots as they like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    pub(crate) facelets: [Facelet; FACELET_COUNT],
}

impl CubeState {
    /// The canonical initial arrangement: every face uniformly its own label.
    pub fn solved() -> CubeState {
        let mut facelets = [Facelet::White; FACELET_COUNT];

        for face in Face::ALL {
            for spot in &mut facelets[face.offset()..face.offset() + FACE_SIZE] {
                *spot = face.solved_facelet();
            }
        }

        CubeState { facelets }
    }

    /// Same as [`CubeState::solved`]. A pure constructor rather than an
    /// in-place reset; rebinding the current state is the caller's job.
    pub fn restart() -> CubeState {
        CubeState::solved()
    }

    /// Deserializes a snapshot document: a JSON array of 54 single-letter
    /// labels in canonical order.
    pub fn load(doc: &str) -> Result<CubeState, MalformedStateError> {
        let labels: Vec<String> = serde_json::from_str(doc)?;

        if labels.len() != FACELET_COUNT {
            return Err(MalformedStateError::WrongLength(labels.len()));
        }

        let mut facelets = [Facelet::White; FACELET_COUNT];

        for (spot, label) in facelets.iter_mut().zip(labels) {
            *spot = Facelet::from_label(&label)
                .ok_or(MalformedStateError::IllegalLabel(label))?;
        }

        Ok(CubeState { facelets })
    }

    /// Serializes the snapshot in the exact order it is held, compact JSON.
    /// `save` and [`CubeState::load`] round-trip without reordering or
    /// normalization.
    pub fn save(&self) -> String {
        format!(
            "[\"{}\"]",
            self.facelets.iter().map(|v| v.label()).join("\",\"")
        )
    }

    pub fn facelets(&self) -> &[Facelet; FACELET_COUNT] {
        &self.facelets
    }

    pub fn facelet(&self, idx: usize) -> Facelet {
        self.facelets[idx]
    }

    pub fn is_solved(&self) -> bool {
        *self == CubeState::solved()
    }
}

#[cfg(test)]
mod tests {
    use super::{CubeState, FACELET_COUNT};
    use crate::{Face, Facelet, error::MalformedStateError};

    #[test]
    fn solved_faces_are_uniform() {
        let solved = CubeState::solved();

        for face in Face::ALL {
            for idx in face.offset()..face.offset() + 9 {
                assert_eq!(solved.facelet(idx), face.solved_facelet());
            }
        }
    }

    #[test]
    fn solved_has_nine_of_each_label() {
        let solved = CubeState::solved();

        for label in Facelet::ALL {
            let count = solved.facelets().iter().filter(|&&v| v == label).count();
            assert_eq!(count, 9, "label {label}");
        }
    }

    #[test]
    fn save_load_round_trips() {
        let solved = CubeState::solved();
        let doc = solved.save();

        assert_eq!(CubeState::load(&doc).unwrap(), solved);
        assert_eq!(CubeState::load(&doc).unwrap().save(), doc);
    }

    #[test]
    fn load_preserves_document_order() {
        // A deliberately non-uniform snapshot must come back verbatim.
        let mut labels = Vec::with_capacity(FACELET_COUNT);
        for i in 0..FACELET_COUNT {
            labels.push(Facelet::ALL[i % 6].label());
        }
        let doc = format!("[\"{}\"]", labels.join("\",\""));

        assert_eq!(CubeState::load(&doc).unwrap().save(), doc);
    }

    #[test]
    fn load_rejects_wrong_length() {
        let short = "[\"w\",\"g\",\"y\"]";
        assert!(matches!(
            CubeState::load(short),
            Err(MalformedStateError::WrongLength(3))
        ));
    }

    #[test]
    fn load_rejects_illegal_labels() {
        let mut labels = vec!["w"; FACELET_COUNT];
        labels[17] = "purple";
        let doc = format!("[\"{}\"]", labels.join("\",\""));

        match CubeState::load(&doc) {
            Err(MalformedStateError::IllegalLabel(label)) => assert_eq!(label, "purple"),
            other => panic!("expected IllegalLabel, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_malformed_json() {
        assert!(matches!(
            CubeState::load("not json"),
            Err(MalformedStateError::Json(_))
        ));
    }

    #[test]
    fn restart_is_solved() {
        assert_eq!(CubeState::restart(), CubeState::solved());
        assert!(CubeState::restart().is_solved());
    }
}
