use crate::algorithms::assign::StepBudget;
use crate::algorithms::validity::is_color_valid;
use crate::error::AssignError;
use crate::graph::RegionGraph;
use crate::model::{ColorIndex, Pin, VertexId};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Single randomized pass: shuffle the free vertices, give each the first palette
/// color that is still valid. Fails as soon as one vertex has no valid color, even if
/// another order would have succeeded.
pub fn color_greedy<R: Rng + ?Sized>(
    graph: &RegionGraph,
    palette_len: usize,
    pin: Option<Pin>,
    rng: &mut R,
    budget: &mut StepBudget,
) -> Result<Vec<Option<ColorIndex>>, AssignError> {
    let mut partial: Vec<Option<ColorIndex>> = vec![None; graph.vertex_count()];
    if let Some(p) = pin {
        partial[p.vertex as usize] = Some(p.color);
    }
    let mut order: Vec<VertexId> = graph
        .vertices()
        .filter(|v| pin.map_or(true, |p| p.vertex != *v))
        .collect();
    order.shuffle(rng);
    for v in order {
        let mut chosen = None;
        for c in 0..palette_len as ColorIndex {
            if !budget.take() {
                return Err(budget.failure());
            }
            if is_color_valid(graph, v, c, &partial) {
                chosen = Some(c);
                break;
            }
        }
        match chosen {
            Some(c) => partial[v as usize] = Some(c),
            None => {
                debug!("greedy pass stuck at vertex {:?}", graph.name(v));
                return Err(budget.failure());
            }
        }
    }
    Ok(partial)
}
