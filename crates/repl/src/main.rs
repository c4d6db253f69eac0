//! Interactive console to register connections and query delivery routes
use anyhow::anyhow;
use log::info;
use reedline_repl_rs::Repl;
use route_core::graph::Graph;

mod cli;
mod commands;
mod import;
mod output;

use commands::Context;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cfg = cli::parse();

    let mut graph = Graph::new();
    if let Some(path) = &cfg.connections {
        let added = import::load_file(&mut graph, path)?;
        info!("Preloaded {} connections", added);
    }

    let mut repl = Repl::new(Context::new(graph))
        .with_name("Route planner")
        .with_version("v0.1.0")
        .with_description("Least-cost delivery routes between named locations")
        .with_banner("--- DELIVERY ROUTING ---\nRegister connections with `add`, then ask for a `route`");

    if let Some((path, size)) = cfg.history {
        repl = repl.with_history(path, size);
    }

    for (command, callback) in commands::all() {
        repl = repl.with_command(command, callback);
    }

    repl.run().map_err(|err| anyhow!("{}", err))
}
