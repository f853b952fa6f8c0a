//! triqui CLI - console tic-tac-toe against the heuristic computer opponent
//!
//! The engine owns the rules and move selection; this binary owns the
//! round loop: rendering, input, turn sequencing, and the scoreboard.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;
use triqui::{Cell, DifficultyLevel, GameEngine, Outcome, Player};

#[derive(Parser)]
#[command(name = "triqui")]
#[command(version, about = "Play tic-tac-toe against a tiered computer opponent", long_about = None)]
struct Cli {
    /// Computer difficulty (easy, harder, expert)
    #[arg(long, default_value_t = DifficultyLevel::Expert)]
    difficulty: DifficultyLevel,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds
    #[arg(long)]
    rounds: Option<u32>,
}

#[derive(Default)]
struct Scoreboard {
    human: u32,
    ties: u32,
    computer: u32,
}

impl Scoreboard {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWin => self.human += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::ComputerWin => self.computer += 1,
            Outcome::InProgress => {}
        }
    }

    fn print(&self) {
        println!(
            "Score: you {} / ties {} / computer {}",
            self.human, self.ties, self.computer
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut engine = GameEngine::new().with_difficulty(cli.difficulty);
    if let Some(seed) = cli.seed {
        engine = engine.with_seed(seed);
    }

    println!("triqui - you are X, the computer is O");
    println!("Difficulty: {}", engine.difficulty_level());

    let mut score = Scoreboard::default();
    let mut human_starts = true;
    let mut round = 0u32;

    loop {
        round += 1;
        let outcome = play_round(&mut engine, &mut input, human_starts)?;

        match outcome {
            Outcome::HumanWin => println!("You win!"),
            Outcome::ComputerWin => println!("The computer wins."),
            Outcome::Tie => println!("It's a tie."),
            Outcome::InProgress => unreachable!("round ended while in progress"),
        }
        score.print();

        // Alternate the opening player between rounds
        human_starts = !human_starts;

        if let Some(limit) = cli.rounds {
            if round >= limit {
                break;
            }
        }
        if !prompt_yes_no(&mut input, "Play again? [y/n] ")? {
            break;
        }
    }

    Ok(())
}

/// Play one round to completion, alternating human and computer moves
fn play_round(
    engine: &mut GameEngine,
    input: &mut impl BufRead,
    human_starts: bool,
) -> Result<Outcome> {
    engine.clear_board();
    println!();

    if !human_starts {
        let opening = engine.compute_computer_move()?;
        println!("Computer opens at {}", opening + 1);
    }

    loop {
        render(engine);

        let location = prompt_location(input)?;
        if !engine.apply_move(Player::Human, location)? {
            println!("Cell {} is already taken", location + 1);
            continue;
        }

        let outcome = engine.evaluate_outcome();
        if outcome.is_terminal() {
            render(engine);
            return Ok(outcome);
        }

        let reply = engine.compute_computer_move()?;
        println!("Computer moves to {}", reply + 1);

        let outcome = engine.evaluate_outcome();
        if outcome.is_terminal() {
            render(engine);
            return Ok(outcome);
        }
    }
}

/// Print the board with 1-9 placeholders on open cells
fn render(engine: &GameEngine) {
    let board = engine.board();
    println!();
    for row in 0..3 {
        let line: Vec<String> = (0..3)
            .map(|col| {
                let location = row * 3 + col;
                match board.get(location) {
                    Cell::Empty => (location + 1).to_string(),
                    mark => mark.to_char().to_string(),
                }
            })
            .collect();
        println!(" {} | {} | {}", line[0], line[1], line[2]);
        if row < 2 {
            println!("-----------");
        }
    }
    println!();
}

/// Prompt until the user enters a number 1-9, returned as a 0-8 location
fn prompt_location(input: &mut impl BufRead) -> Result<usize> {
    loop {
        print!("Your move [1-9]: ");
        io::stdout().flush()?;

        let Some(line) = read_line(input)? else {
            bail!("input closed before the round finished");
        };

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => return Ok(n - 1),
            _ => println!("Enter a number from 1 to 9."),
        }
    }
}

fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}

/// Read one line, returning None at end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}
