use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// CSV file with `source,destination,cost` rows to load on start-up
    connections: Option<PathBuf>,

    /// Where the REPL keeps its command history
    #[arg(long, value_name = "PATH", default_value = ".route_history")]
    history: PathBuf,

    /// Number of history entries to keep
    #[arg(long, value_name = "N", default_value_t = 100)]
    history_size: usize,

    /// Do not read or write a history file
    #[arg(long, default_value = "false")]
    no_history: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg {
    pub connections: Option<PathBuf>,
    pub history: Option<(PathBuf, usize)>,
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        let history = if cli.no_history {
            None
        } else {
            Some((cli.history, cli.history_size))
        };

        Cfg {
            connections: cli.connections,
            history,
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}
