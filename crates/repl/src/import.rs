use std::{fs::File, io, path::Path};

use anyhow::Context;
use log::{debug, info};
use route_core::{constants::Weight, graph::Graph};
use serde::Deserialize;

/// One row of a connections file.
#[derive(Debug, Deserialize)]
struct ConnectionRecord {
    source: String,
    destination: String,
    cost: Weight,
}

/// Reads `source,destination,cost` rows into `graph`.
///
/// Fields are trimmed and lines starting with `#` are skipped. Import stops at
/// the first bad row; rows before it stay in the graph.
///
/// Returns the number of connections added.
pub fn load_connections<R: io::Read>(graph: &mut Graph, reader: R) -> anyhow::Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut added = 0;
    for (row, result) in reader.deserialize().enumerate() {
        let record: ConnectionRecord = result.with_context(|| {
            format!(
                "Failed to parse row {} ({} connections imported before it)",
                row + 1,
                added
            )
        })?;

        graph
            .add_connection(record.source, record.destination, record.cost)
            .with_context(|| {
                format!(
                    "Rejected row {} ({} connections imported before it)",
                    row + 1,
                    added
                )
            })?;
        added += 1;
    }

    debug!("Imported {} connections", added);
    Ok(added)
}

pub fn load_file(graph: &mut Graph, path: &Path) -> anyhow::Result<usize> {
    info!("Loading connections from {:?}", path);

    let file = File::open(path).with_context(|| format!("Could not open {:?}", path))?;
    let added = load_connections(graph, file)
        .with_context(|| format!("Could not load connections from {:?}", path))?;

    info!(
        "Graph has {} locations and {} connections",
        graph.num_locations(),
        graph.num_connections()
    );
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_core::search::shortest_path;

    #[test]
    fn load_and_query() {
        let data = "\
source,destination,cost
# the bridge is closed on sundays
A, B, 1
B, C, 2.5
A, C ,4
";
        let mut g = Graph::new();
        let added = load_connections(&mut g, data.as_bytes()).unwrap();

        assert_eq!(added, 3);
        assert_eq!(g.num_locations(), 3);

        let route = shortest_path(&g, "A", "C").unwrap();
        assert_eq!(route.to_string(), "A -> B -> C");
        assert_eq!(route.cost(), 3.5);
    }

    #[test]
    fn names_keep_inner_whitespace() {
        let data = "source,destination,cost\nMain Street,Old Harbor,3\n";
        let mut g = Graph::new();
        load_connections(&mut g, data.as_bytes()).unwrap();

        assert!(g.has_outgoing("Main Street"));
        assert!(g.contains("Old Harbor"));
    }

    #[test]
    fn negative_cost_stops_import() {
        let data = "source,destination,cost\nA,B,1\nB,C,-3\nC,D,1\n";
        let mut g = Graph::new();
        let err = load_connections(&mut g, data.as_bytes()).unwrap_err();

        assert!(format!("{:#}", err).contains("row 2"));
        assert!(format!("{:#}", err).contains("invalid cost"));
        assert_eq!(g.num_connections(), 1);
    }

    #[test]
    fn malformed_cost_is_reported() {
        let data = "source,destination,cost\nA,B,fast\n";
        let mut g = Graph::new();
        let err = load_connections(&mut g, data.as_bytes()).unwrap_err();

        assert!(format!("{:#}", err).contains("row 1"));
        assert!(g.is_empty());
    }

    #[test]
    fn missing_file() {
        let mut g = Graph::new();
        assert!(load_file(&mut g, Path::new("does/not/exist.csv")).is_err());
    }
}
