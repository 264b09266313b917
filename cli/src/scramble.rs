use cube_core::{CubeState, Face, MoveEngine, MoveToken};
use rand::Rng;

/// Applies `n` random moves and returns the scrambled state plus the tokens
/// that produced it, in order.
///
/// Every token is round-tripped through the engine's own grammar, so a
/// scrambled cube is always reachable: undoing the tokens in reverse order
/// brings back the starting state.
pub fn scramble<R: Rng>(
    engine: &MoveEngine,
    state: &CubeState,
    n: usize,
    rng: &mut R,
) -> (CubeState, Vec<MoveToken>) {
    let mut state = state.clone();
    let mut tokens = Vec::with_capacity(n);

    for _ in 0..n {
        let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
        let turns = rng.random_range(1..=3);

        let text = if turns == 1 {
            face.letter().to_string()
        } else {
            format!("{}{turns}", face.letter())
        };
        let token = MoveToken::parse(&text).expect("generated text stays inside the move grammar");

        state = engine.apply(&state, token);
        tokens.push(token);
    }

    (state, tokens)
}
