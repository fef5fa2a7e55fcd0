use crate::graph::RegionGraph;
use crate::model::{ColorAssignment, ColorIndex, TileId, VertexId};
use serde::Serialize;

/// The one place coloring constraints live: `color` is usable for `vertex` unless an
/// already-colored graph neighbour or tile sibling holds it.
pub fn is_color_valid(
    graph: &RegionGraph,
    vertex: VertexId,
    color: ColorIndex,
    partial: &[Option<ColorIndex>],
) -> bool {
    let holds = |v: VertexId| partial.get(v as usize).copied().flatten() == Some(color);
    if graph.neighbors(vertex).iter().any(|&n| holds(n)) {
        return false;
    }
    !graph.tile_siblings(vertex).any(holds)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Conflict {
    /// Both ends of an edge share a color (reported once, `a < b`).
    Edge { a: VertexId, b: VertexId },
    /// Two members of one tile share a color (`a < b`).
    Tile { tile: TileId, a: VertexId, b: VertexId },
    /// The assignment has no color for this vertex.
    Missing { vertex: VertexId },
}

/// Every constraint the assignment breaks against `graph`.
pub fn find_conflicts(graph: &RegionGraph, assignment: &ColorAssignment) -> Vec<Conflict> {
    let mut out = Vec::new();
    for v in graph.vertices() {
        if assignment.color_of(v).is_none() {
            out.push(Conflict::Missing { vertex: v });
        }
    }
    for u in graph.vertices() {
        let Some(cu) = assignment.color_of(u) else { continue };
        for &v in graph.neighbors(u) {
            if u < v && assignment.color_of(v) == Some(cu) {
                out.push(Conflict::Edge { a: u, b: v });
            }
        }
    }
    for (t, tile) in graph.tiles().iter().enumerate() {
        for i in 0..tile.members.len() {
            for j in i + 1..tile.members.len() {
                let (a, b) = (tile.members[i], tile.members[j]);
                match (assignment.color_of(a), assignment.color_of(b)) {
                    (Some(ca), Some(cb)) if ca == cb => out.push(Conflict::Tile {
                        tile: t as TileId,
                        a: a.min(b),
                        b: a.max(b),
                    }),
                    _ => {}
                }
            }
        }
    }
    out
}

/// Total over the graph, no extra entries, and conflict free.
pub fn is_valid_assignment(graph: &RegionGraph, assignment: &ColorAssignment) -> bool {
    assignment.len() == graph.vertex_count() && find_conflicts(graph, assignment).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::grid;

    #[test]
    fn neighbour_and_tile_both_block() {
        let g = grid::build(1, 2);
        let top = g.lookup("A1-Top").unwrap();
        let right = g.lookup("A1-Right").unwrap();
        let bottom = g.lookup("A1-Bottom").unwrap();
        let other_left = g.lookup("A2-Left").unwrap();
        let mut partial = vec![None; g.vertex_count()];
        // Bottom is not adjacent to Top but shares the tile
        partial[bottom as usize] = Some(2);
        assert!(!is_color_valid(&g, top, 2, &partial));
        assert!(is_color_valid(&g, top, 1, &partial));
        // Cross-tile edge
        partial[other_left as usize] = Some(1);
        assert!(!is_color_valid(&g, right, 1, &partial));
        assert!(is_color_valid(&g, right, 0, &partial));
    }

    #[test]
    fn conflicts_are_reported_by_kind() {
        let g = grid::build(1, 1);
        // Top/Bottom share a color: tile conflict only (they are not adjacent)
        let a = ColorAssignment::from_complete(vec![0, 1, 0, 2]);
        assert_eq!(find_conflicts(&g, &a), vec![Conflict::Tile { tile: 0, a: 0, b: 2 }]);
        // Top/Right share a color: both an edge and a tile conflict
        let b = ColorAssignment::from_complete(vec![0, 0, 1, 2]);
        let c = find_conflicts(&g, &b);
        assert!(c.contains(&Conflict::Edge { a: 0, b: 1 }));
        assert!(c.contains(&Conflict::Tile { tile: 0, a: 0, b: 1 }));
        let short = ColorAssignment::from_complete(vec![0, 1, 2]);
        assert!(find_conflicts(&g, &short).contains(&Conflict::Missing { vertex: 3 }));
        assert!(is_valid_assignment(&g, &ColorAssignment::from_complete(vec![3, 2, 1, 0])));
    }
}
