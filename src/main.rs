use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use ttt_core::{Board, Mark};
use ttt_engine::{Advisor, EngineConfig, Roles};

mod render;

/// Perfect-play move advice for tic-tac-toe positions
#[derive(Parser, Debug)]
#[command(name = "tictactoe-advisor", version, about)]
struct Args {
    /// Boards as nine symbols (X, O and - for empty), e.g. "XX-/OO-/---"
    boards: Vec<String>,

    /// Read boards from a file, one per line; blank lines and lines starting with '#' are skipped
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Mark the engine plays for
    #[arg(long, value_enum, ignore_case = true, default_value_t = MarkArg::X)]
    maximizer: MarkArg,

    /// Reject boards where this mark has fewer cells than its opponent
    #[arg(long, value_enum, ignore_case = true)]
    first_mover: Option<MarkArg>,

    /// Use alpha-beta pruning (same answers, fewer nodes)
    #[arg(long)]
    prune: bool,

    /// List the value of every available move
    #[arg(long)]
    all: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::new(Roles::new(self.maximizer.into())).with_pruning(self.prune);
        if let Some(first) = self.first_mover {
            config = config.with_first_mover(first.into());
        }
        config
    }

    // Pairs each board text with a label saying where it came from
    fn inputs(&self) -> Result<Vec<(String, String)>> {
        let mut inputs: Vec<(String, String)> = self
            .boards
            .iter()
            .enumerate()
            .map(|(i, board)| (format!("argument {}", i + 1), board.clone()))
            .collect();

        if let Some(path) = &self.file {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read boards from {}", path.display()))?;
            for (i, line) in contents.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                inputs.push((format!("{}:{}", path.display(), i + 1), line.to_string()));
            }
        }

        if inputs.is_empty() {
            bail!("no boards given; pass them as arguments or with --file");
        }
        Ok(inputs)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn analyze(advisor: &Advisor, text: &str, show_all: bool) -> Result<()> {
    let board: Board = text.parse().context("could not read board")?;
    let config = advisor.config();

    println!("State of the game:");
    println!("{}", board);

    let recommendation = advisor.advise(&board)?;
    println!("{}", recommendation.summary(config));

    if let Some(best) = recommendation.best {
        if show_all {
            println!("Move values:");
            for scored in advisor.score_moves(&board)? {
                println!("  {}: {}", scored.position, scored.score);
            }
        }
        println!(
            "{}",
            render::render(&board, Some((best.position, config.roles.maximizer())))
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.engine_config();
    log::info!("engine config: {:?}", config);
    let advisor = Advisor::new(config);

    let inputs = args.inputs()?;
    let mut failed = 0;
    for (label, text) in &inputs {
        println!("== {}", label);
        if let Err(err) = analyze(&advisor, text, args.all) {
            log::error!("{}: {:#}", label, err);
            failed += 1;
        }
        println!();
    }

    if failed > 0 {
        bail!("{} of {} boards could not be analyzed", failed, inputs.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_build_config() {
        let args = Args::parse_from([
            "tictactoe-advisor",
            "--maximizer",
            "o",
            "--first-mover",
            "X",
            "--prune",
            "---/---/---",
        ]);
        let config = args.engine_config();
        assert_eq!(config.roles.maximizer(), Mark::O);
        assert_eq!(config.first_mover, Some(Mark::X));
        assert!(config.pruning);
        assert_eq!(args.boards, vec!["---/---/---".to_string()]);
    }

    #[test]
    fn test_no_boards_is_an_error() {
        let args = Args::parse_from(["tictactoe-advisor"]);
        assert!(args.inputs().is_err());
    }

    #[test]
    fn test_analyze_reports_bad_board() {
        let advisor = Advisor::default();
        assert!(analyze(&advisor, "XXX/OOO/---", false).is_err());
        assert!(analyze(&advisor, "XO", false).is_err());
        assert!(analyze(&advisor, "XX-/OO-/---", true).is_ok());
    }
}
