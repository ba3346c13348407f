//! Terminal front-end for the Lucky Five draw game.
//!
//! The engine computes every outcome synchronously; this binary only
//! renders the recorded view and adds a short cosmetic pause between
//! showing the drawn numbers and revealing the match marks.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use lf_core::{
    DrawRequestResult, GameConfig, GameError, GamePhase, GameView, MessageKind, SelectionGame,
    ViewSurface,
};

/// Purely presentational reveal pause; the result is already final.
const REVEAL_DELAY: Duration = Duration::from_millis(400);

#[derive(Parser)]
#[command(name = "luckyfive", about = "Pick numbers, draw, count your matches")]
struct Cli {
    /// RNG seed for reproducible draws (default: entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Numbers available for picking (the pool is 1..=POOL_SIZE)
    #[arg(long, default_value = "10")]
    pool_size: u8,

    /// How many numbers to pick per round
    #[arg(long, default_value = "5")]
    picks: u8,

    /// Minimum matches reported as a win
    #[arg(long, default_value = "3")]
    threshold: u8,
}

#[derive(Debug, PartialEq)]
enum Command {
    Toggle(u8),
    Draw,
    Reset,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "d" | "draw" => Some(Command::Draw),
        "r" | "reset" | "restart" => Some(Command::Reset),
        "h" | "help" | "?" => Some(Command::Help),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => input.parse::<u8>().ok().map(Command::Toggle),
    }
}

fn display_menu() {
    println!();
    println!("── Lucky Five ──");
    println!("  1-N        Toggle a number");
    println!("  d, draw    Draw (restarts after a result)");
    println!("  r, reset   Clear the board");
    println!("  h, help    Show this menu");
    println!("  q, quit    Quit");
}

/// Read one input line; `None` means end of input.
fn prompt(msg: &str) -> Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input).context("failed to read input")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn format_row(numbers: impl Iterator<Item = String>) -> String {
    numbers.collect::<Vec<_>>().join(" ")
}

fn render_pool(config: &GameConfig, view: &GameView) -> String {
    format_row(config.pool().map(|n| {
        if view.highlighted.contains(&n) {
            format!("[{}]", n)
        } else {
            format!(" {} ", n)
        }
    }))
}

fn render_selected(view: &GameView) -> String {
    format_row(view.selected_slots.iter().map(|slot| match slot {
        Some(n) => format!(" {} ", n),
        None => " _ ".to_string(),
    }))
}

fn render_drawn(view: &GameView) -> String {
    format_row(view.draw_slots.iter().map(|slot| match slot.number {
        Some(n) if slot.hit => format!("<{}>", n),
        Some(n) => format!(" {} ", n),
        None => " _ ".to_string(),
    }))
}

fn render(game: &SelectionGame<ViewSurface>) {
    let view = game.surface().view();
    println!();
    println!("Pool:   {}", render_pool(game.config(), view));
    println!("Picked: {}", render_selected(view));
    if view.draw_slots.iter().any(|slot| slot.number.is_some()) {
        println!("Drawn:  {}   (<n> = match)", render_drawn(view));
    }
    let prefix = match view.message.kind {
        MessageKind::Warning => "[!] ",
        MessageKind::Success => "[+] ",
        MessageKind::Default => "    ",
    };
    if !view.message.text.is_empty() {
        println!("{}{}", prefix, view.message.text);
    }
    if view.draw_visible {
        println!("    [{}] ready - press d", view.draw_label);
    }
}

fn run_command(game: &mut SelectionGame<ViewSurface>, command: Command) -> bool {
    debug!("command: {:?}", command);
    match command {
        Command::Toggle(number) => {
            if let Err(error) = game.toggle_number(number) {
                match error {
                    // The engine only messages pool members; range misuse
                    // is reported here
                    GameError::OutOfPool { .. } => println!("{}", error),
                    // Warning already on the game message channel
                    _ => {}
                }
            }
        }
        Command::Draw => match game.request_draw() {
            Ok(DrawRequestResult::Drawn(outcome)) => {
                println!(
                    "Drawing: {}",
                    format_row(outcome.numbers.iter().map(|n| n.to_string()))
                );
                thread::sleep(REVEAL_DELAY);
            }
            Ok(DrawRequestResult::Restarted) => println!("New round."),
            // Warning already on the game message channel
            Err(_) => {}
        },
        Command::Reset => {
            game.reset();
            println!("Board cleared.");
        }
        Command::Help => display_menu(),
        Command::Quit => return false,
    }
    true
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig {
        pool_size: cli.pool_size,
        max_selection: cli.picks,
        match_threshold: cli.threshold,
    };
    let mut game = match cli.seed {
        Some(seed) => SelectionGame::with_seed(config, ViewSurface::new(), seed),
        None => SelectionGame::new(config, ViewSurface::new()),
    }
    .context("invalid game options")?;

    display_menu();
    loop {
        render(&game);
        let hint = match game.phase() {
            GamePhase::Selecting => "pick",
            GamePhase::Drawn => "d to restart",
        };
        let line = match prompt(&format!("({}) > ", hint))? {
            Some(line) => line,
            None => break,
        };
        if line.is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(command) => {
                if !run_command(&mut game, command) {
                    break;
                }
            }
            None => println!("Unknown command: {} (h for help)", line),
        }
    }
    Ok(())
}
