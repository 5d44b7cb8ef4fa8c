//! Random network construction

use netjudge_common::constants::MIN_VERTEX_COUNT;
use netjudge_common::network::vertex_name;
use netjudge_common::{Controller, Edge, HarnessError, HarnessResult, Network};

use crate::random::RandomSource;

/// Network plus the chosen controller and start vertices
#[derive(Debug, Clone)]
pub struct GeneratedNetwork {
    pub network: Network,
    pub controller: usize,
    pub start: usize,
}

impl GeneratedNetwork {
    pub fn start_vertex(&self) -> String {
        vertex_name(self.start)
    }

    pub fn controller_vertex(&self) -> String {
        vertex_name(self.controller)
    }
}

/// Build a random network over vertices `v_0 .. v_{n-1}`.
///
/// Every `v_u -> v_{u+1}` edge is present; each longer forward edge
/// `v_u -> v_w` (`w >= u + 2`) is added with probability `p`. One controller
/// is drawn uniformly, then a start vertex different from it.
pub fn generate(
    vertex_count: usize,
    p: f64,
    rng: &mut dyn RandomSource,
) -> HarnessResult<GeneratedNetwork> {
    if vertex_count < MIN_VERTEX_COUNT {
        return Err(HarnessError::invalid_argument(format!(
            "n needs to be at least {}",
            MIN_VERTEX_COUNT
        )));
    }

    let mut network = Network::default();

    for u in 0..vertex_count - 1 {
        network.rows.push(Edge::between(u, u + 1));
        for w in u + 2..vertex_count {
            if rng.chance(p) {
                network.rows.push(Edge::between(u, w));
            }
        }
    }

    let controller = rng.index(vertex_count);
    network.controllers.push(Controller::at(controller));

    let mut start = controller;
    while start == controller {
        start = rng.index(vertex_count);
    }

    Ok(GeneratedNetwork {
        network,
        controller,
        start,
    })
}

/// Directory name `<prefix>_<floor(100 p)>_<n>`
pub fn instance_name(prefix: &str, p: f64, vertex_count: usize) -> String {
    format!("{}_{}_{}", prefix, (p * 100.0) as i64, vertex_count)
}
