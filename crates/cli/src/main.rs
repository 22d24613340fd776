mod config;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use scorekeeper_engine::{ScoreUiState, Session};
use scorekeeper_storage::BlobStore;

use crate::config::{Cli, Command, rules_for};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let store = cli.open_store()?;
    let mut session = Session::open(store);

    match cli.command {
        Command::Play {
            sport,
            left,
            right,
            golden_point,
            super_tie_break,
        } => {
            session.start_match_with_rules(
                rules_for(sport, golden_point, super_tie_break),
                &left,
                &right,
            );
            play(&mut session)?;
        }
        Command::History => print_history(&session),
        Command::ClearHistory => {
            session.clear_history();
            println!("History cleared");
        }
    }
    Ok(())
}

const HELP: &str = "l/r point left/right, s swap server, u undo, e end and save, q quit";

fn play(session: &mut Session<Box<dyn BlobStore>>) -> Result<()> {
    println!("{HELP}");
    let mut out = io::stdout();
    render(&mut out, session.ui_state())?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line?.trim() {
            "l" if !session.ui_state().finished => session.add_point_left(),
            "r" if !session.ui_state().finished => session.add_point_right(),
            "l" | "r" => {
                println!("Match is over. u to undo, q to quit");
                continue;
            }
            "s" => session.toggle_server(),
            "u" => {
                if !session.undo() {
                    println!("Nothing to undo");
                    continue;
                }
            }
            "e" => session.end_match_and_save(),
            "q" => break,
            "" => continue,
            other => {
                println!("Unknown command {other:?}. {HELP}");
                continue;
            }
        }
        render(&mut out, session.ui_state())?;
        if session.ui_state().finished {
            println!("{} wins", session.ui_state().winner_name());
        }
    }
    Ok(())
}

fn render(out: &mut impl Write, ui: &ScoreUiState) -> io::Result<()> {
    let (left_points, right_points) = ui.point_labels();
    let serve = |left: bool| if ui.server_left == left { "*" } else { " " };
    let mut line = format!(
        "{}{} {:>4} | {:<4} {}{}   games {}-{}   sets {}-{}",
        serve(true),
        ui.left_name,
        left_points,
        right_points,
        ui.right_name,
        serve(false),
        ui.left_games,
        ui.right_games,
        ui.left_sets,
        ui.right_sets,
    );
    if ui.in_tie_break {
        line.push_str("   tie-break");
    }
    if !ui.set_summary.is_empty() {
        line.push_str(&format!("   [{}]", ui.set_summary));
    }
    writeln!(out, "{line}")?;
    out.flush()
}

fn print_history(session: &Session<Box<dyn BlobStore>>) {
    let history = session.history();
    if history.is_empty() {
        println!("No matches yet");
        return;
    }
    for rec in history {
        println!("{}  {}", rec.title(), rec.result_line());
    }
}
