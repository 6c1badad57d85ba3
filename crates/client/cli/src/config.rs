//! Command-line and environment configuration.
use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};
use duel_core::DuelKind;

/// Drive the duel engine from a terminal
///
/// Engine rules additionally honor the `DUEL_*` environment variables.
#[derive(Parser, Debug)]
#[command(name = "duelctl")]
#[command(about = "Play scripted duels against the duel engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding `characters.ron` and `engine.toml` (bundled content when unset)
    #[arg(long, global = true, env = "DUELCTL_DATA_DIR")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a scripted duel between two bots
    Demo(DemoArgs),

    /// Print the character catalog
    Characters,
}

#[derive(Args, Clone, Debug)]
pub struct DemoArgs {
    /// Play a ranked duel (rewards are paid) instead of a friendly one
    #[arg(long)]
    pub ranked: bool,

    /// Turn limit before the bot on turn forfeits
    #[arg(
        long,
        env = "DUELCTL_MAX_TURNS",
        default_value_t = 60,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub turns: u32,

    /// Print every engine event as a JSON line on stdout
    #[arg(long, env = "DUELCTL_DUMP_EVENTS", value_parser = FalseyValueParser::new())]
    pub events: bool,

    /// Character ids for the two bots (first eligible ones when omitted)
    #[arg(num_args = 0..=2)]
    pub characters: Vec<String>,
}

impl DemoArgs {
    pub fn kind(&self) -> DuelKind {
        if self.ranked {
            DuelKind::Ranked
        } else {
            DuelKind::Friendly
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_demo_flags_and_characters() {
        let cli = Cli::try_parse_from([
            "duelctl",
            "demo",
            "--ranked",
            "--turns",
            "12",
            "Saber",
            "Yuichi_Katagiri",
        ])
        .unwrap();
        let Command::Demo(args) = cli.command else {
            panic!("expected demo command");
        };
        assert_eq!(args.kind(), DuelKind::Ranked);
        assert_eq!(args.turns, 12);
        assert_eq!(args.characters, vec!["Saber", "Yuichi_Katagiri"]);
    }

    #[test]
    fn data_dir_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["duelctl", "characters", "--data", "content"]).unwrap();
        assert!(matches!(cli.command, Command::Characters));
        assert_eq!(cli.data, Some(PathBuf::from("content")));
    }

    #[test]
    fn rejects_unknown_flags_and_bad_turns() {
        assert!(Cli::try_parse_from(["duelctl", "demo", "--fast"]).is_err());
        assert!(Cli::try_parse_from(["duelctl", "demo", "--turns"]).is_err());
        assert!(Cli::try_parse_from(["duelctl", "demo", "--turns", "0"]).is_err());
    }
}
