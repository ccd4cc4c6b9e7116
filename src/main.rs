//! Terminal front end for the guessing engine.
//!
//! - `play`: you pick the number, the device guesses, you answer
//!   "lower" or "greater"
//! - `simulate`: run many truthful games and print round statistics

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand, ValueEnum};
use guess_engine::{
    EngineConfig, Feedback, GuessEngine, GuessError, PolicyKind, Secret, SimulationReport, Simulator,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "guess-engine")]
#[command(about = "The device guesses your number from lower/greater hints")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively in the terminal
    Play {
        /// Session seed (for reproducible guesses)
        #[arg(long)]
        seed: Option<u64>,

        /// Guess policy
        #[arg(long, default_value = "uniform")]
        policy: PolicyArg,
    },

    /// Simulate games with truthful answers
    Simulate {
        /// Number of games to simulate
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Base seed for secrets and sessions
        #[arg(long)]
        seed: Option<u64>,

        /// Guess policy
        #[arg(long, default_value = "uniform")]
        policy: PolicyArg,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Uniform,
    Bisect,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Uniform => PolicyKind::Uniform,
            PolicyArg::Bisect => PolicyKind::Bisect,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match args.command {
        Command::Play { seed, policy } => {
            let config = EngineConfig {
                seed,
                policy: policy.into(),
            };
            let engine = GuessEngine::new(config);
            let stdin = io::stdin();
            play(&engine, stdin.lock(), io::stdout().lock())?;
        }
        Command::Simulate {
            games,
            seed,
            policy,
            json,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!(games, seed, "starting simulation");

            let engine = GuessEngine::new(EngineConfig::default().with_policy(policy.into()));
            let report = Simulator::new(engine).run(games, seed);

            print!("{}", render_report(&report, json)?);
        }
    }

    Ok(())
}

/// Format a simulation report as text or pretty JSON.
fn render_report(report: &SimulationReport, json: bool) -> serde_json::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)? + "\n")
    } else {
        Ok(report.to_string())
    }
}

/// Read one trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_secret<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<Secret>> {
    loop {
        write!(out, "Pick a number between 1 and 100: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<i32>().ok().and_then(|value| Secret::new(value).ok()) {
            Some(secret) => return Ok(Some(secret)),
            None => writeln!(out, "Invalid number! It has to be between 1 and 100.")?,
        }
    }
}

/// Run games until the player declines a new one or input ends.
fn play<R: BufRead, W: Write>(engine: &GuessEngine, mut input: R, mut out: W) -> io::Result<()> {
    loop {
        let Some(secret) = ask_secret(&mut input, &mut out)? else {
            return Ok(());
        };

        let mut session = engine.start_session(secret);
        while !session.is_won() {
            writeln!(out, "Opponent's guess: {}", session.current_guess())?;
            write!(out, "Is your number lower or greater? ")?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            let feedback = match line.parse::<Feedback>() {
                Ok(feedback) => feedback,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };

            match engine.apply_feedback(&session, feedback) {
                Ok(next) => session = next,
                Err(GuessError::InconsistentFeedback { .. }) => {
                    writeln!(out, "Don't lie! You know that this is wrong...")?;
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }

        writeln!(out, "Opponent's guess: {}", session.current_guess())?;
        writeln!(out)?;
        writeln!(out, "Game Over")?;
        for entry in session.history_entries() {
            writeln!(out, "  {entry}")?;
        }
        if let Some(summary) = session.summary() {
            writeln!(out, "{summary}")?;
        }

        write!(out, "New game? [y/N] ")?;
        out.flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(policy: PolicyKind, script: &str) -> String {
        let engine = GuessEngine::new(EngineConfig::default().with_seed(1).with_policy(policy));
        let mut out = Vec::new();
        play(&engine, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bisect_game_transcript() {
        // Secret 70 with bisect: 50, 75, 62, 68, 71, 69, 70
        let out = run(
            PolicyKind::Bisect,
            "70\ngreater\nlower\ngreater\ngreater\nlower\ngreater\nn\n",
        );

        assert!(out.contains("Opponent's guess: 50"));
        assert!(out.contains("Opponent's guess: 68"));
        assert!(out.contains("Opponent's guess: 70"));
        assert!(out.contains("The device needed 7 rounds to guess the number 70."));
        assert!(out.contains("#7   70"));
        assert!(out.contains("#1   50"));
    }

    #[test]
    fn test_lie_is_rejected() {
        let out = run(PolicyKind::Bisect, "70\nlower\n");
        assert!(out.contains("Don't lie!"));
        assert!(!out.contains("Game Over"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let out = run(PolicyKind::Bisect, "abc\n150\n70\nsideways\n");
        assert_eq!(out.matches("Invalid number!").count(), 2);
        assert!(out.contains("unrecognized feedback"));
    }

    fn bisect_report() -> SimulationReport {
        let engine = GuessEngine::new(EngineConfig::default().with_policy(PolicyKind::Bisect));
        Simulator::new(engine).run(50, 3)
    }

    #[test]
    fn test_simulate_text_report() {
        let report = bisect_report();
        let text = render_report(&report, false).unwrap();

        assert!(text.starts_with("games:  50\n"));
        assert!(text.contains(&format!("rounds: min {} / max {}", report.min_rounds, report.max_rounds)));
        for (rounds, count) in report.sorted_histogram() {
            assert!(text.contains(&format!("{rounds:>3} rounds: {count}")));
        }
    }

    #[test]
    fn test_simulate_json_report() {
        let report = bisect_report();
        let json = render_report(&report, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["games"], 50);
        assert_eq!(value["min_rounds"], report.min_rounds);
        assert_eq!(value["max_rounds"], report.max_rounds);
        assert!(value["max_rounds"].as_u64().unwrap() <= 7);

        let histogram = value["histogram"].as_object().unwrap();
        let total: u64 = histogram.values().map(|n| n.as_u64().unwrap()).sum();
        assert_eq!(total, 50);
    }
}
