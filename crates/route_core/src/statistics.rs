use std::{
    fmt::{Debug, Display},
    time::{Duration, Instant},
};

use crate::graph::Graph;

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled in {:?}",
            self.nodes_settled,
            self.duration.unwrap_or_default()
        )
    }
}

pub fn average_out_degree(g: &Graph) -> f64 {
    if g.num_locations() == 0 {
        return 0.0;
    }
    g.num_connections() as f64 / g.num_locations() as f64
}

pub fn max_out_degree(g: &Graph) -> usize {
    (0..g.num_locations())
        .map(|node| g.out_degree(crate::graph::node_index(node)))
        .max()
        .unwrap_or(0)
}
