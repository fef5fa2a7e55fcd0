use crate::algorithms::assign::StepBudget;
use crate::algorithms::validity::is_color_valid;
use crate::error::AssignError;
use crate::graph::RegionGraph;
use crate::model::{ColorIndex, Pin, VertexId};
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

// One search level: the vertex being colored, its shuffled candidate colors and the
// next candidate to try. The frame's current color lives in `partial`.
struct Frame {
    vertex: VertexId,
    colors: Vec<ColorIndex>,
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(vertex: VertexId, palette_len: usize, rng: &mut R) -> Self {
        let mut colors: Vec<ColorIndex> = (0..palette_len as ColorIndex).collect();
        colors.shuffle(rng);
        Frame {
            vertex,
            colors,
            next: 0,
        }
    }
}

/// Depth-first search over the free vertices in arena order with per-vertex shuffled
/// color order. Exhaustive: fails only when no completion of the pin exists or the
/// step budget runs out.
pub fn color_backtracking<R: Rng + ?Sized>(
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
    let order: Vec<VertexId> = graph
        .vertices()
        .filter(|v| pin.map_or(true, |p| p.vertex != *v))
        .collect();
    if order.is_empty() {
        return Ok(partial);
    }

    let mut stack: Vec<Frame> = Vec::with_capacity(order.len());
    stack.push(Frame::new(order[0], palette_len, rng));
    while let Some(frame) = stack.last_mut() {
        // Undo this level's previous attempt before trying its next color
        partial[frame.vertex as usize] = None;
        let mut placed = false;
        while frame.next < frame.colors.len() {
            let c = frame.colors[frame.next];
            frame.next += 1;
            if !budget.take() {
                return Err(budget.failure());
            }
            if is_color_valid(graph, frame.vertex, c, &partial) {
                partial[frame.vertex as usize] = Some(c);
                placed = true;
                break;
            }
        }
        let depth = stack.len();
        if !placed {
            trace!("backtracking at index {}", depth - 1);
            stack.pop();
        } else if depth == order.len() {
            return Ok(partial);
        } else {
            stack.push(Frame::new(order[depth], palette_len, rng));
        }
    }
    Err(budget.failure())
}
