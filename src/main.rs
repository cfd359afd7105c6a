use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_trainer::game_state::chess_rules::DEFAULT_AI_SEARCH_DEPTH;
use chess_trainer::game_state::chess_types::{Color, MoveResult, PieceKind, Position};
use chess_trainer::game_state::game_session::{GameSession, SessionConfig};
use chess_trainer::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ComputerSide {
    White,
    Black,
    None,
}

impl ComputerSide {
    fn color(self) -> Option<Color> {
        match self {
            ComputerSide::White => Some(Color::White),
            ComputerSide::Black => Some(Color::Black),
            ComputerSide::None => None,
        }
    }
}

/// Play chess against a minimax opponent in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Search depth in plies for the computer opponent.
    #[arg(
        long,
        default_value_t = DEFAULT_AI_SEARCH_DEPTH,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    depth: u8,

    /// Seed for the engine's random generator (reproducible games).
    #[arg(long)]
    seed: Option<u64>,

    /// Start in training mode: king-safety checks are disabled.
    #[arg(long)]
    training: bool,

    /// Side played by the computer.
    #[arg(long, value_enum, default_value_t = ComputerSide::Black)]
    computer: ComputerSide,
}

const HELP: &str = "\
commands:
  e2 e4        move a piece (add q/r/b/n to choose a promotion: e7 e8 q)
  moves e2     list legal destinations from a square
  board        show the board
  history      show the move list
  record       print the game record
  reset        start a new game
  training on|off
  depth N      set the computer's search depth
  quit";

fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SessionConfig {
        computer_side: cli.computer.color(),
        ai_search_depth: cli.depth,
        allow_illegal_moves: cli.training,
        seed: cli.seed,
    };
    info!(?config, "starting session");

    let mut session = GameSession::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_status(&session, &mut stdout)?;
    writeln!(stdout, "type 'help' for commands")?;

    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => writeln!(stdout, "{HELP}")?,
            ["board"] => print_status(&session, &mut stdout)?,
            ["history"] => {
                for (ply, notation) in session.history().iter().enumerate() {
                    writeln!(stdout, "{:>3}. {notation}", ply + 1)?;
                }
            }
            ["record"] => write!(stdout, "{}", session.game_record())?,
            ["reset"] => {
                session.reset_game();
                print_status(&session, &mut stdout)?;
            }
            ["training", toggle] => match *toggle {
                "on" => session.set_allow_illegal_moves(true),
                "off" => session.set_allow_illegal_moves(false),
                other => writeln!(stdout, "expected on or off, got '{other}'")?,
            },
            ["depth", value] => match value.parse::<u8>() {
                Ok(depth) if depth >= 1 => session.set_ai_difficulty(depth),
                _ => writeln!(stdout, "depth must be a positive number")?,
            },
            ["moves", square] => match Position::from_algebraic(square) {
                Ok(from) => {
                    let targets: Vec<String> = session
                        .legal_moves_from(from)
                        .iter()
                        .map(Position::to_algebraic)
                        .collect();
                    writeln!(stdout, "{from}: {}", targets.join(" "))?;
                }
                Err(err) => writeln!(stdout, "{err}")?,
            },
            [from, to] => submit(&mut session, &mut stdout, from, to, None)?,
            [from, to, promotion] => submit(&mut session, &mut stdout, from, to, Some(*promotion))?,
            _ => writeln!(stdout, "unrecognised command; type 'help'")?,
        }
        stdout.flush()?;
    }

    Ok(())
}

fn submit(
    session: &mut GameSession,
    out: &mut impl Write,
    from: &str,
    to: &str,
    promotion: Option<&str>,
) -> io::Result<()> {
    let (from, to) = match (Position::from_algebraic(from), Position::from_algebraic(to)) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(err), _) | (_, Err(err)) => return writeln!(out, "{err}"),
    };
    let promotion = promotion
        .and_then(|text| text.chars().next())
        .and_then(PieceKind::from_letter);

    match session.move_piece(from, to, promotion) {
        MoveResult::Accepted => print_status(session, out),
        MoveResult::RejectedNoPiece => writeln!(out, "no piece on {from}"),
        MoveResult::RejectedWrongTurn => writeln!(out, "that piece belongs to the other side"),
        MoveResult::RejectedIllegalDestination => writeln!(out, "illegal move {from} {to}"),
        MoveResult::RejectedGameOver => writeln!(out, "the game is over; type 'reset'"),
    }
}

fn print_status(session: &GameSession, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", render_game_state(session.state()))?;
    if let Some(last) = session.history().last() {
        writeln!(out, "last move: {last}")?;
    }
    match session.winner() {
        Some("Draw") => writeln!(out, "game drawn"),
        Some(winner) => writeln!(out, "{winner} wins"),
        None => {
            let side = if session.white_to_move() { Color::White } else { Color::Black };
            if session.in_check(side) {
                writeln!(out, "{side} to move (check)")
            } else {
                writeln!(out, "{side} to move")
            }
        }
    }
}
