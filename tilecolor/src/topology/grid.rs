use crate::graph::{RegionGraph, Topology};
use crate::limits;
use crate::model::Side;
use crate::topology::ident::tile_label;
use log::debug;

/// Rectangular grid of square tiles, each split into four triangles meeting at
/// the center. Degenerate dimensions give an empty graph.
pub fn build(rows: i32, cols: i32) -> RegionGraph {
    let rows = limits::clamp_dim(rows, limits::MAX_ROWS);
    let cols = limits::clamp_dim(cols, limits::MAX_COLS);
    if rows == 0 || cols == 0 {
        debug!("degenerate grid {}x{}, building empty graph", rows, cols);
        return RegionGraph::new(Topology::Grid { rows: 0, cols: 0 });
    }
    let mut g = RegionGraph::new(Topology::Grid { rows, cols });
    for r in 0..rows {
        for c in 0..cols {
            g.add_tile(tile_label(r, c));
        }
    }
    // Row-major tile ids
    let tile = |r: u32, c: u32| r * cols + c;
    for r in 0..rows {
        for c in 0..cols {
            let t = tile(r, c);
            let v = |side: Side| g.tiles[t as usize].members[side as usize];
            let (top, right, bottom, left) =
                (v(Side::Top), v(Side::Right), v(Side::Bottom), v(Side::Left));
            g.add_edge(top, right);
            g.add_edge(top, left);
            g.add_edge(right, bottom);
            g.add_edge(bottom, left);
            if c + 1 < cols {
                let other = g.tiles[tile(r, c + 1) as usize].members[Side::Left as usize];
                g.add_edge(right, other);
            }
            if r + 1 < rows {
                let other = g.tiles[tile(r + 1, c) as usize].members[Side::Top as usize];
                g.add_edge(bottom, other);
            }
        }
    }
    debug_assert!(g.check_symmetry().is_ok(), "grid builder produced an asymmetric edge");
    debug!(
        "built {}x{} grid: {} vertices, {} edges",
        rows,
        cols,
        g.vertex_count(),
        g.edge_count()
    );
    g
}
