use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::{ColoredString, Colorize};
use log::debug;
use rs_wordle_puzzle::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const TILE_WIDTH: usize = 3;
const KEYS_PER_ROW: usize = 10;
const PANEL_GAP: &str = "  ";
const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Play Wordle in the terminal, guessing one, two or four words at once.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The game mode. Solo has one puzzle, duo has two and quad has four.
    #[arg(short, long, default_value = "solo", value_parser = ["solo", "duo", "quad"])]
    mode: String,

    /// The language of the words.
    #[arg(short, long, default_value = "en_us", value_parser = BUILT_IN_LOCALES)]
    locale: String,

    /// Path to a JSON file with `secret_words`, `dict_words` and `unaccented` lists. Replaces the
    /// built-in words for the chosen locale.
    #[arg(short = 'f', long)]
    locale_file: Option<PathBuf>,

    /// Shows the secret word in the title of each puzzle.
    #[arg(short, long)]
    debug: bool,

    /// Where to align the puzzles on the screen.
    #[arg(short, long, value_enum, default_value_t = Alignment::Center)]
    align: Alignment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Alignment {
    Left,
    Center,
    Right,
}

/// A box of text where every line is `width` columns wide, not counting color codes.
struct Panel {
    width: usize,
    lines: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Command line options: {:?}", args);

    let config = SessionConfig::new(&args.mode, &args.locale)?;
    let mut board = match &args.locale_file {
        Some(path) => Board::new(config.mode, Locale::from_path(path)?),
        None => Board::from_config(&config),
    }
    .context("could not set up the game")?;

    let mut editor = DefaultEditor::new()?;
    draw_board(&board, &args);
    while !board.is_over() {
        let line = match editor.readline("Type a word: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        match board.submit(&line) {
            Ok(_) => {
                editor.add_history_entry(line.as_str())?;
                draw_board(&board, &args);
            }
            Err(err) if err.is_recoverable() => {
                println!("{}", err.to_string().as_str().red())
            }
            Err(err) => return Err(err.into()),
        }
    }

    print_outcome(&board);
    Ok(())
}

fn draw_board(board: &Board, args: &Args) {
    // Clear the screen and move the cursor to the top left.
    print!("\x1B[2J\x1B[1;1H");
    println!(
        "Turn {} of {}\n",
        board.turn().min(board.mode().max_guesses),
        board.mode().max_guesses
    );
    let puzzles: Vec<Panel> = board
        .puzzles()
        .iter()
        .map(|puzzle| puzzle_panel(puzzle, args.debug))
        .collect();
    print_panels(&puzzles, args.align);
    let keyboards: Vec<Panel> = board.puzzles().iter().map(keyboard_panel).collect();
    print_panels(&keyboards, args.align);
}

fn print_outcome(board: &Board) {
    match board.outcome() {
        Some(Outcome::Won) => println!("{}", "You won!".bold().green()),
        Some(Outcome::Lost) => {
            let secrets = board.secrets().join(", ");
            let label = if board.puzzles().len() > 1 {
                "The secrets were:"
            } else {
                "The secret was:"
            };
            println!(
                "{} {} {}",
                "You lost!".bold().red(),
                label,
                secrets.as_str().bold().blue()
            );
        }
        None => return,
    }
    for puzzle in board.puzzles() {
        println!("\nPuzzle {}:", puzzle.id());
        for guess in puzzle.guesses() {
            println!("{}", guess.emoji());
        }
    }
}

fn tile(letter: &Letter) -> ColoredString {
    let text = format!(" {} ", letter.character).as_str().bold();
    match letter.status {
        LetterStatus::InPosition => text.green(),
        LetterStatus::InWord => text.yellow(),
        LetterStatus::NotPresent => text.bright_black(),
    }
}

fn key(letter: char, status: Option<LetterStatus>) -> ColoredString {
    match status {
        Some(status) => tile(&Letter::new(letter, status)),
        None => format!(" {} ", letter).as_str().normal(),
    }
}

/// Builds a horizontal border, with an optional label in the middle.
fn border(left: char, right: char, inner: usize, label: Option<ColoredString>) -> String {
    match label {
        Some(label) if label.chars().count() + 2 <= inner => {
            let label_width = label.chars().count() + 2;
            let before = (inner - label_width) / 2;
            let after = inner - label_width - before;
            format!(
                "{}{} {} {}{}",
                left,
                "─".repeat(before),
                label,
                "─".repeat(after),
                right
            )
        }
        _ => format!("{}{}{}", left, "─".repeat(inner), right),
    }
}

fn puzzle_panel(puzzle: &Puzzle, debug: bool) -> Panel {
    let word_length = puzzle.locale().word_length();
    let inner = word_length * TILE_WIDTH;
    let title = if debug {
        Some(puzzle.secret().bold().blue())
    } else {
        None
    };

    let mut lines = vec![border('┌', '┐', inner, title)];
    for guess in puzzle.guesses() {
        let tiles: String = guess.letters.iter().map(|l| tile(l).to_string()).collect();
        lines.push(format!("│{}│", tiles));
    }
    // Solved puzzles don't need placeholders for the guesses they'll never get.
    let filler = if puzzle.is_solved() {
        " ".repeat(inner)
    } else {
        " * ".repeat(word_length)
    };
    for _ in 0..puzzle.remaining_attempts() {
        lines.push(format!("│{}│", filler));
    }
    let footer = if puzzle.is_solved() {
        Some("OK".bold().green())
    } else {
        None
    };
    lines.push(border('└', '┘', inner, footer));

    Panel {
        width: inner + 2,
        lines,
    }
}

fn keyboard_panel(puzzle: &Puzzle) -> Panel {
    let keys: Vec<(char, Option<LetterStatus>)> = puzzle.keyboard().keys().collect();
    let inner = keys.len().clamp(1, KEYS_PER_ROW) * TILE_WIDTH;

    let mut lines = vec![border('┌', '┐', inner, None)];
    for row in keys.chunks(KEYS_PER_ROW) {
        let mut text: String = row
            .iter()
            .map(|&(letter, status)| key(letter, status).to_string())
            .collect();
        text.push_str(&" ".repeat(inner - row.len() * TILE_WIDTH));
        lines.push(format!("│{}│", text));
    }
    lines.push(border('└', '┘', inner, None));

    Panel {
        width: inner + 2,
        lines,
    }
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|columns| columns.parse().ok())
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

fn print_panels(panels: &[Panel], alignment: Alignment) {
    let total_width: usize = panels.iter().map(|panel| panel.width).sum::<usize>()
        + PANEL_GAP.len() * panels.len().saturating_sub(1);
    let free = terminal_width().saturating_sub(total_width);
    let indent = " ".repeat(match alignment {
        Alignment::Left => 0,
        Alignment::Center => free / 2,
        Alignment::Right => free,
    });

    let height = panels
        .iter()
        .map(|panel| panel.lines.len())
        .max()
        .unwrap_or(0);
    for row in 0..height {
        let line: Vec<String> = panels
            .iter()
            .map(|panel| {
                panel
                    .lines
                    .get(row)
                    .cloned()
                    .unwrap_or_else(|| " ".repeat(panel.width))
            })
            .collect();
        println!("{}{}", indent, line.join(PANEL_GAP));
    }
}
