use cube_core::MoveToken;

/// Everything one input line can mean. Move tokens are tried last so the
/// command letters stay unambiguous; `r` in particular is always the
/// right-face move, with restart living on `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(MoveToken),
    Help,
    Solve,
    Restart,
    Scramble,
    Quit,
    Invalid(String),
}

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();

    match trimmed {
        "h" => Command::Help,
        "s" => Command::Solve,
        "n" => Command::Restart,
        "x" => Command::Scramble,
        "c" => Command::Quit,
        _ => match MoveToken::parse(trimmed) {
            Ok(token) => Command::Move(token),
            Err(_) => Command::Invalid(trimmed.to_owned()),
        },
    }
}

#[cfg(test)]
mod tests {
    use cube_core::{Face, MoveToken};

    use super::{Command, parse};

    #[test]
    fn command_letters_dispatch() {
        assert_eq!(parse("h"), Command::Help);
        assert_eq!(parse("s"), Command::Solve);
        assert_eq!(parse("n"), Command::Restart);
        assert_eq!(parse("x"), Command::Scramble);
        assert_eq!(parse("c\n"), Command::Quit);
    }

    #[test]
    fn face_letters_become_moves() {
        assert_eq!(parse("t"), Command::Move(MoveToken::parse("t").unwrap()));

        // The old front end overloaded `r` as restart; here it is only ever
        // the right-face move.
        match parse("r") {
            Command::Move(token) => assert_eq!(token.face(), Face::Right),
            other => panic!("expected a move, got {other:?}"),
        }

        assert_eq!(parse(" f2 "), Command::Move(MoveToken::parse("f2").unwrap()));
    }

    #[test]
    fn everything_else_is_invalid() {
        for bad in ["", "z", "help", "t9", "cc"] {
            assert_eq!(parse(bad), Command::Invalid(bad.trim().to_owned()));
        }
    }
}
