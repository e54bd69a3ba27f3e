//! Play Dots and Boxes in a terminal.
//!
//! Two people share the keyboard. Lines are entered in dot coordinates as
//! printed around the board: `h 0 1` draws the horizontal line to the right
//! of dot (0, 1), `v 2 0` the vertical line below dot (2, 0).

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dots_boxes::display::{board, scoreboard, status_line};
use dots_boxes::{GridSize, Line, MoveError, Session};

/// Largest number of rows or columns the terminal board can show.
const MAX_DIMENSION: u16 = 26;

/// Dots and Boxes for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "dots")]
#[command(about = "Dots and Boxes for two players at one terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Rows of boxes
    #[arg(short, long, env = "DOTS_ROWS", default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_DIMENSION)))]
    rows: u16,

    /// Columns of boxes
    #[arg(short, long, env = "DOTS_COLS", default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_DIMENSION)))]
    cols: u16,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "dots_boxes=trace"
    #[arg(long)]
    log: Option<String>,
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Draw(Line),
    New(Option<GridSize>),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let mut words = input.split_whitespace();
        match words.next().map(str::to_ascii_lowercase).as_deref() {
            Some("quit" | "exit" | "q") => Ok(Command::Quit),
            Some("help" | "?") => Ok(Command::Help),
            Some("new" | "reset") => {
                let dims: Vec<&str> = words.collect();
                match dims.as_slice() {
                    [] => Ok(Command::New(None)),
                    [rows, cols] => {
                        let rows = dimension(rows, "row")?;
                        let cols = dimension(cols, "column")?;
                        Ok(Command::New(Some(GridSize::new(rows, cols)?)))
                    }
                    _ => anyhow::bail!("expected 'new' or 'new <rows> <cols>'"),
                }
            }
            Some(_) => Ok(Command::Draw(input.parse()?)),
            None => anyhow::bail!("empty input"),
        }
    }
}

/// Parse a row or column count, holding it to the same range as `--rows`/`--cols`.
fn dimension(word: &str, what: &str) -> Result<usize> {
    let n: u16 = word.parse().with_context(|| format!("bad {what} count {word:?}"))?;
    if !(1..=MAX_DIMENSION).contains(&n) {
        anyhow::bail!("{what} count must be between 1 and {MAX_DIMENSION}, got {n}");
    }
    Ok(usize::from(n))
}

const HELP: &str = "\
commands:
  h <row> <col>     draw the horizontal line right of dot (row, col)
  v <row> <col>     draw the vertical line below dot (row, col)
  new [rows cols]   start over, optionally on a new grid
  help              show this message
  quit              leave";

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let state = session.state();
    writeln!(out)?;
    write!(out, "{}", board(state))?;
    writeln!(out, "{}", scoreboard(state))?;
    writeln!(out, "{}", status_line(state))?;
    if state.is_game_over() {
        writeln!(out, "type 'new' to play again")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let size = GridSize::new(usize::from(cli.rows), usize::from(cli.cols))?;
    info!(%size, "starting game");
    let mut session = Session::new(size);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}")?;
    render(&mut out, &session)?;

    for input in stdin.lock().lines() {
        let input = input.context("reading input")?;
        if input.trim().is_empty() {
            continue;
        }

        let command = match input.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err:#}")?;
                continue;
            }
        };
        debug!(?command, "input");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::New(new_size) => {
                match new_size {
                    Some(size) => session.reset_with(size),
                    None => session.reset(),
                }
                render(&mut out, &session)?;
            }
            Command::Draw(line) => match session.try_place_line(line) {
                Ok(placement) => {
                    if placement.extra_turn() {
                        writeln!(
                            out,
                            "{} closed {} box(es) and goes again",
                            placement.player,
                            placement.boxes_completed()
                        )?;
                    }
                    render(&mut out, &session)?;
                }
                Err(MoveError::GameOver) => writeln!(out, "game over, type 'new' to play again")?,
                Err(err) => writeln!(out, "{err}")?,
            },
        }
    }

    Ok(())
}
