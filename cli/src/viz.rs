use cube_core::{CubeState, Face, Facelet};
use owo_colors::OwoColorize;

/// Prints the unfolded cube net plus the move counter.
///
/// ```text
/// moves: 3
///       w w w
///       ...
/// o o o g g g r r r b b b
///       ...
///       y y y
/// ```
pub fn render(state: &CubeState, moves: usize, colored: bool) {
    println!("moves: {moves}");

    for row in 0..3 {
        println!("      {}", face_row(state, Face::Top, row, colored));
    }

    for row in 0..3 {
        let band = [Face::Left, Face::Front, Face::Right, Face::Back]
            .map(|face| face_row(state, face, row, colored));
        println!("{}", band.join(" "));
    }

    for row in 0..3 {
        println!("      {}", face_row(state, Face::Down, row, colored));
    }

    println!();
}

fn face_row(state: &CubeState, face: Face, row: usize, colored: bool) -> String {
    let start = face.offset() + row * 3;
    let stickers: Vec<String> = (start..start + 3)
        .map(|idx| sticker(state.facelet(idx), colored))
        .collect();

    stickers.join(" ")
}

fn sticker(facelet: Facelet, colored: bool) -> String {
    if !colored {
        return facelet.label().to_owned();
    }

    let label = facelet.label();
    match facelet {
        Facelet::White => label.white().to_string(),
        Facelet::Green => label.green().to_string(),
        Facelet::Yellow => label.yellow().to_string(),
        Facelet::Red => label.red().to_string(),
        Facelet::Orange => label.truecolor(255, 128, 0).to_string(),
        Facelet::Blue => label.blue().to_string(),
    }
}
