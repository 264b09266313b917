use std::{fs, io::ErrorKind, path::PathBuf, sync::Arc};

use clap::Parser;
use cube_core::{CubeState, FaceMap, MoveEngine};
use log::info;

use crate::{config::Config, interface::Session};

mod command;
mod config;
mod interface;
mod scramble;
mod viz;

/// Interactive Rubik's cube: load a saved cube, turn its faces from the
/// terminal, and save it back on close.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the app configuration document
    #[arg(long, short = 'c', default_value = "data/config.json")]
    config: PathBuf,
    /// Path to the saved cube snapshot; written back on close
    #[arg(long, short = 'b', default_value = "data/cube_saved.json")]
    cube: PathBuf,
    /// Path to the face mapping document
    #[arg(long, short = 'm', default_value = "data/face_map.json")]
    mapping: PathBuf,
}

fn main() -> color_eyre::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::load_or_default(&args.config)?;

    // A missing document falls back to the built-ins; a present but invalid
    // one is fatal, since no move may run against an inconsistent table.
    let map = match fs::read_to_string(&args.mapping) {
        Ok(doc) => FaceMap::load(&doc)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(
                "no mapping document at {}, using the standard table",
                args.mapping.display()
            );
            FaceMap::standard()
        }
        Err(e) => return Err(e.into()),
    };

    let state = match fs::read_to_string(&args.cube) {
        Ok(doc) => CubeState::load(&doc)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(
                "no cube snapshot at {}, starting solved",
                args.cube.display()
            );
            CubeState::solved()
        }
        Err(e) => return Err(e.into()),
    };

    let engine = MoveEngine::new(Arc::new(map));
    let mut session = Session::new(engine, state, config);

    session.run()?;

    fs::write(&args.cube, session.state().save())?;
    println!("Cube saved to {}", args.cube.display());

    Ok(())
}
