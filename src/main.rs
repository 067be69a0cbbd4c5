use anyhow::{Context, Result, bail};
use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{default_log_path, init_logging};
use hangman::tui::TuiInterface;
use hangman::{SessionSummary, WordBank, game_loop, load_wordbank_from_file};
use std::io;

fn main() -> Result<()> {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(default_log_path)
        && let Err(e) = init_logging(&path, cli.verbose)
    {
        eprintln!("Logging disabled: could not open '{}': {e}", path.display());
    }

    let wordbank = match &cli.wordbank_path {
        Some(path) => WordBank::new(
            load_wordbank_from_file(path)
                .with_context(|| format!("Failed to load word list from '{}'", path.display()))?,
        ),
        None => WordBank::embedded(),
    };
    if wordbank.is_empty() {
        bail!("The word list contains no playable words.");
    }
    let wordbank = wordbank.with_max_strikes(usize::from(cli.max_strikes));
    // Startup configuration is logged in release builds too.
    log::info!(
        "loaded {} words, {} strikes per round",
        wordbank.words().len(),
        cli.max_strikes
    );

    if cli.tui {
        let summary = {
            let mut interface = TuiInterface::new().context("Failed to initialize terminal")?;
            game_loop(&wordbank, &mut interface)
        };
        // The alternate screen is gone once the interface is dropped.
        print_summary(&summary);
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&wordbank, &mut interface);
    }
    Ok(())
}

fn print_summary(summary: &SessionSummary) {
    println!(
        "Thanks for playing! You won {} of {} round(s).",
        summary.wins(),
        summary.rounds.len()
    );
}
