use std::io::{self, BufRead, Write};

use cube_core::{CubeState, MoveEngine};
use itertools::Itertools;
use log::debug;

use crate::{
    command::{self, Command},
    config::Config,
    scramble, viz,
};

const HELP: &str = "Valid commands:
  t f d r l b  turn that face one quarter clockwise (append 2 or 3 to repeat)
  h            show this help
  s            solve the cube (not implemented)
  n            start over from the solved cube
  x            scramble with random moves
  c            close the app and save the cube";

const PROMPT: &str = "Insert a face to move (t, f, d, r, l, b), or h for help:";

/// The orchestrator: the one place holding a cube state and a move counter.
/// It threads the state through the engine by rebinding it after every apply;
/// nothing else ever mutates it.
pub struct Session {
    engine: MoveEngine,
    state: CubeState,
    moves: usize,
    config: Config,
}

impl Session {
    pub fn new(engine: MoveEngine, state: CubeState, config: Config) -> Session {
        Session {
            engine,
            state,
            moves: 0,
            config,
        }
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// The read-command/apply/render loop. Iterative with an explicit done
    /// flag; ends on `c` or end of input.
    pub fn run(&mut self) -> color_eyre::Result<()> {
        let stdin = io::stdin();
        let mut done = false;

        self.render();

        while !done {
            println!("{PROMPT}");

            let Some(line) = read_line(&stdin)? else {
                break;
            };

            match command::parse(&line) {
                Command::Move(token) => {
                    debug!("applying {token}");
                    self.state = self.engine.apply(&self.state, token);
                    self.moves += 1;
                    println!("The cube was updated:");
                    self.render();
                }
                Command::Help => println!("{HELP}"),
                Command::Solve => println!("Solving is not implemented."),
                Command::Restart => {
                    self.state = CubeState::restart();
                    self.moves = 0;
                    println!("The cube was restarted.");
                    self.render();
                }
                Command::Scramble => self.scramble(&stdin)?,
                Command::Quit => {
                    println!("Closing the app.");
                    done = true;
                }
                Command::Invalid(text) => {
                    println!("Sorry, the command `{text}` is not valid. Type h for help.");
                }
            }
        }

        Ok(())
    }

    fn scramble(&mut self, stdin: &io::Stdin) -> color_eyre::Result<()> {
        let Some(n) = read_move_count(stdin)? else {
            return Ok(());
        };

        let (state, tokens) =
            scramble::scramble(&self.engine, &self.state, n, &mut rand::rng());

        println!("Scrambled with: {}", tokens.iter().join(" "));
        self.state = state;
        self.moves += n;
        self.render();

        Ok(())
    }

    fn render(&self) {
        viz::render(&self.state, self.moves, self.config.colored);
    }
}

/// One trimmed input line; `None` on end of input.
fn read_line(stdin: &io::Stdin) -> io::Result<Option<String>> {
    let mut line = String::new();

    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_owned()))
}

/// Prompts until the user supplies a number of scramble moves.
fn read_move_count(stdin: &io::Stdin) -> color_eyre::Result<Option<usize>> {
    loop {
        print!("How many random moves? ");
        io::stdout().flush()?;

        let Some(line) = read_line(stdin)? else {
            return Ok(None);
        };

        match line.parse::<usize>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => println!("Please input a whole number."),
        }
    }
}
