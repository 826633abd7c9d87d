//! The game module wires the quiz engine to the terminal. It holds everything the engine doesn't
//! know about: the command line, logging, the datasets on disk and the game loop itself.
//!
//! It contains the `init()` function to set everything up and run the game loop until the player
//! quits.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use console::Term;
use fastrand::Rng;
use tracing_subscriber::EnvFilter;

use crate::artwork::FoodArtwork;
use crate::data::{builtin_animals, load_animals};
use crate::input::{choose_food, next_step, Step};
use crate::messages::{data_warning, round_header, stats_line, verdict, welcome};
use crate::quiz::{QuizError, RoundEngine, RoundSnapshot};
use crate::random::RandomSource;
use crate::tracker::Session;

/// This struct holds the command-line arguments, parsed with clap's derive attributes. Every option
/// can also be set through an environment variable.
#[derive(Parser)]
#[command(name = "whateats", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// A JSON file with the animals to quiz on.
    ///
    /// The file holds an array of records with an `id`, a `name`, an `image` and a comma-delimited
    /// `diet`. The animals bundled with the game are used when this is not given.
    #[arg(long, env = "WHATEATS_ANIMALS", value_name = "PATH")]
    animals: Option<PathBuf>,
    /// A JSON file mapping food names to pictures.
    ///
    /// The file holds an object with a `default` picture and a `foods` object mapping names to
    /// pictures. The table bundled with the game is used when this is not given.
    #[arg(long, env = "WHATEATS_ARTWORK", value_name = "PATH")]
    artwork: Option<PathBuf>,
    /// A seed for the random number generator, to replay the same game.
    #[arg(short, long, env = "WHATEATS_SEED", value_name = "NUMBER")]
    seed: Option<u64>,
    /// Log more; repeat for even more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Initializes the game state and runs the game loop until the player quits. This is a `main()`
/// function of sorts though it is still called from main.rs.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - `whateats::data::DataError` when a dataset can't be loaded
/// - `whateats::quiz::QuizError` when a round can't be built or answered
/// - `io::Error` and `dialoguer::Error` when talking to the terminal fails
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let animals = match cli.animals {
        Some(ref path) => load_animals(path)?,
        None => builtin_animals()?,
    };
    let artwork = match cli.artwork {
        Some(ref path) => FoodArtwork::load(path)?,
        None => FoodArtwork::builtin()?,
    };
    let rng = cli.seed.map_or_else(Rng::new, Rng::with_seed);
    tracing::info!(animals = animals.len(), seed = ?cli.seed, "starting game");

    let term = Term::stdout();
    let mut engine = RoundEngine::new(animals, rng);
    let mut session = Session::new();

    init_message(&term)?;
    let mut snapshot = play_step(&term, &mut engine, &mut session, Step::Reset)?;

    // game loop
    loop {
        term.write_line(&round_header(&snapshot, session.stats()))?;

        // let the player pick one of the offered foods and score it
        let chosen = choose_food(&term, &snapshot.options, &artwork)?;
        let result = engine.submit_answer(&mut session, &chosen)?;

        term.write_line(&verdict(&result))?;
        term.write_line(&stats_line(session.stats()))?;

        match next_step(&term)? {
            Step::Quit => break Ok(()),
            step @ (Step::Next | Step::Reset) => {
                term.clear_screen()?;
                snapshot = play_step(&term, &mut engine, &mut session, step)?;
            }
        }
    }
}

/// This function sets up the `tracing` subscriber, picking the level from the number of times the
/// verbose flag was given. Logs go to standard error so they stay out of the prompts' way.
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// This function clears the screen, sets the title of the console window to the name of the game
/// and shows the welcome message.
fn init_message(term: &Term) -> Result<()> {
    term.clear_screen()?;
    term.set_title("whateats");
    term.write_line(&welcome())?;

    Ok(())
}

/// This function starts the next round, or starts over if the player asked for it.
///
/// Animals whose record says nothing about what they eat are reported and skipped, drawing another
/// animal instead. The number of skips is bounded by the size of the dataset, after which the error
/// is returned like any other.
fn play_step<R: RandomSource>(
    term: &Term,
    engine: &mut RoundEngine<R>,
    session: &mut Session,
    step: Step,
) -> Result<RoundSnapshot> {
    let mut skipped = 0;

    loop {
        let outcome = match step {
            Step::Reset => engine.reset(session),
            Step::Next | Step::Quit => engine.start_round(session),
        };

        match outcome {
            Ok(snapshot) => break Ok(snapshot),
            Err(QuizError::NoValidFoodsForAnimal { ref animal })
                if skipped < engine.animals().len() =>
            {
                tracing::warn!(%animal, "skipping animal without a diet");
                term.write_line(&data_warning(animal))?;
                skipped += 1;
            }
            Err(err) => break Err(err.into()),
        }
    }
}
