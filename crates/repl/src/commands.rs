use std::path::Path;

use anyhow::anyhow;
use log::warn;
use rand::seq::SliceRandom;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::Result;
use route_core::{graph::Graph, search::dijkstra::Dijkstra};

use crate::{import, output};

#[derive(Default)]
pub struct Context {
    pub graph: Graph,
}

impl Context {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn arg<'a, T>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    args.get_one::<T>(name)
        .ok_or_else(|| anyhow!("Missing argument <{}>", name))
}

/// Failed commands are printed, the session goes on.
fn render(result: anyhow::Result<String>) -> Result<Option<String>> {
    Ok(Some(result.unwrap_or_else(|err| {
        warn!("{:#}", err);
        format!("Error: {:#}", err)
    })))
}

pub fn add_connection(args: &ArgMatches, context: &mut Context) -> anyhow::Result<String> {
    let from = arg::<String>(args, "from")?;
    let to = arg::<String>(args, "to")?;
    let cost = *arg::<f64>(args, "cost")?;

    context.graph.add_connection(from.as_str(), to.as_str(), cost)?;
    Ok(format!("Added connection {} -> {} ({})", from, to, cost))
}

pub fn load(args: &ArgMatches, context: &mut Context) -> anyhow::Result<String> {
    let path = arg::<String>(args, "path")?;

    let added = import::load_file(&mut context.graph, Path::new(path))?;
    Ok(format!(
        "Loaded {} connections\n{}",
        added,
        output::graph_info(&context.graph)
    ))
}

pub fn route(args: &ArgMatches, context: &mut Context) -> anyhow::Result<String> {
    let from = arg::<String>(args, "from")?;
    let to = arg::<String>(args, "to")?;

    let mut dijkstra = Dijkstra::new(&context.graph);
    Ok(match dijkstra.search(from, to) {
        Ok(route) => output::route_found(&route, &dijkstra.stats),
        Err(err) => output::route_error(&err),
    })
}

/// Runs `n` queries between random locations and reports their timings.
pub fn measure(args: &ArgMatches, context: &mut Context) -> anyhow::Result<String> {
    let n = args.get_one::<usize>("n").copied().unwrap_or(10);
    let g = &context.graph;

    let sources: Vec<&str> = g
        .known_locations()
        .map(|l| l.as_str())
        .filter(|l| g.has_outgoing(l))
        .collect();
    let targets: Vec<&str> = g.known_locations().map(|l| l.as_str()).collect();

    let mut rng = rand::thread_rng();
    let mut res = String::new();
    for _ in 0..n {
        let (Some(src), Some(dst)) = (sources.choose(&mut rng), targets.choose(&mut rng)) else {
            return Err(anyhow!("Add some connections first"));
        };

        let mut dijkstra = Dijkstra::new(g);
        let found = dijkstra.search(src, dst).is_ok();
        res.push_str(&format!(
            "{} -> {}: {:?}{}\n",
            src,
            dst,
            dijkstra.stats.duration.unwrap_or_default(),
            if found { "" } else { " (no route)" }
        ));
    }
    res.pop();

    Ok(res)
}

fn add_cb(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    render(add_connection(&args, context))
}

fn load_cb(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    render(load(&args, context))
}

fn route_cb(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    render(route(&args, context))
}

fn measure_cb(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    render(measure(&args, context))
}

fn info_cb(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(output::graph_info(&context.graph)))
}

fn locations_cb(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(output::location_list(&context.graph)))
}

type Callback = fn(ArgMatches, &mut Context) -> Result<Option<String>>;

/// Every REPL command together with its handler.
pub fn all() -> Vec<(Command, Callback)> {
    vec![
        (
            Command::new("add")
                .arg(Arg::new("from").required(true).help("Origin of the connection"))
                .arg(Arg::new("to").required(true).help("Destination of the connection"))
                .arg(
                    Arg::new("cost")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true)
                        .required(true)
                        .help("Time or distance"),
                )
                .about("Register a one-way connection"),
            add_cb,
        ),
        (
            Command::new("load")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .help("CSV file with source,destination,cost rows"),
                )
                .about("Import connections from a CSV file"),
            load_cb,
        ),
        (
            Command::new("route")
                .arg(Arg::new("from").required(true).help("Where the courier is now"))
                .arg(Arg::new("to").required(true).help("Delivery destination"))
                .about("Calculate the cheapest route using Dijkstra's algorithm"),
            route_cb,
        ),
        (
            Command::new("locations").about("List registered locations"),
            locations_cb,
        ),
        (Command::new("info").about("Print graph info"), info_cb),
        (
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random routes to calculate"),
                )
                .about("Measure `n` random route calculations"),
            measure_cb,
        ),
    ]
}
