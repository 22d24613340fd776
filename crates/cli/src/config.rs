//! Command-line configuration for the terminal scoreboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use scorekeeper_core::{MatchRules, Sport};
use scorekeeper_storage::{BlobStore, MemoryBlobStore, SqliteBlobStore};

#[derive(Parser, Debug)]
#[command(name = "scorekeeper")]
#[command(about = "Keep score of tennis and padel matches", long_about = None)]
pub struct Cli {
    /// Database file holding the match history
    #[arg(long, env = "SCOREKEEPER_DB", default_value = "scorekeeper.db", global = true)]
    pub db: PathBuf,

    /// Keep history in memory only
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a match, reading one command per line from stdin
    Play {
        #[arg(long, value_enum, default_value_t = SportArg::Tennis)]
        sport: SportArg,

        #[arg(long, default_value = "")]
        left: String,

        #[arg(long, default_value = "")]
        right: String,

        /// Deuce is decided by a single point
        #[arg(long)]
        golden_point: bool,

        /// Play the deciding set's tie-break to ten
        #[arg(long)]
        super_tie_break: bool,
    },

    /// List saved matches, newest first
    History,

    /// Delete every saved match
    ClearHistory,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SportArg {
    Tennis,
    Padel,
}

impl From<SportArg> for Sport {
    fn from(arg: SportArg) -> Self {
        match arg {
            SportArg::Tennis => Sport::Tennis,
            SportArg::Padel => Sport::Padel,
        }
    }
}

pub fn rules_for(sport: SportArg, golden_point: bool, super_tie_break: bool) -> MatchRules {
    MatchRules::new(sport.into())
        .with_golden_point(golden_point)
        .with_super_tie_break_final_set(super_tie_break)
}

impl Cli {
    pub fn open_store(&self) -> anyhow::Result<Box<dyn BlobStore>> {
        if self.memory {
            log::info!("using in-memory history");
            return Ok(Box::new(MemoryBlobStore::new()));
        }
        log::info!("opening history at {}", self.db.display());
        Ok(Box::new(SqliteBlobStore::open(&self.db)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["scorekeeper", "history"]).unwrap();
        assert!(!cli.memory);
        assert!(matches!(cli.command, Command::History));
    }

    #[test]
    fn play_options() {
        let cli = Cli::try_parse_from([
            "scorekeeper",
            "--memory",
            "play",
            "--sport",
            "padel",
            "--left",
            "A",
            "--golden-point",
        ])
        .unwrap();
        assert!(cli.memory);
        match cli.command {
            Command::Play {
                sport,
                left,
                right,
                golden_point,
                super_tie_break,
            } => {
                let rules = rules_for(sport, golden_point, super_tie_break);
                assert_eq!(rules.sport, Sport::Padel);
                assert!(rules.golden_point);
                assert!(!rules.super_tie_break_final_set);
                assert_eq!(left, "A");
                assert_eq!(right, "");
            }
            other => panic!("expected Play, got {other:?}"),
        }
    }
}
