use crate::algorithms::assign::ColorAssigner;
use crate::graph::Topology;
use crate::model::{PaletteEntry, Side, TileId, VertexId};
use crate::topology::layout::TileKind;
use crate::Board;
use serde::Serialize;
use serde_json::Value;

pub(crate) const SNAPSHOT_VERSION: u32 = 1;

pub(crate) fn to_json_impl<A: ColorAssigner>(b: &Board<A>) -> Value {
    #[derive(Serialize)]
    struct TileSer<'a> {
        id: TileId,
        name: &'a str,
        kind: TileKind,
        members: [VertexId; 4],
    }
    #[derive(Serialize)]
    struct VertexSer<'a> {
        id: VertexId,
        name: &'a str,
        tile: TileId,
        side: Side,
        neighbors: &'a [VertexId],
        color: Option<&'a str>,
    }
    #[derive(Serialize)]
    struct Doc<'a> {
        version: u32,
        topology: Topology,
        rows: u32,
        cols: u32,
        palette: &'a [PaletteEntry],
        tiles: Vec<TileSer<'a>>,
        vertices: Vec<VertexSer<'a>>,
    }
    let g = b.graph();
    let (rows, cols) = b.dimensions();
    let kinds = b.layout().kinds();
    let tiles = g
        .tiles()
        .iter()
        .enumerate()
        .map(|(i, t)| TileSer {
            id: i as TileId,
            name: &t.name,
            kind: kinds.get(i).copied().unwrap_or(TileKind::Standard),
            members: t.members,
        })
        .collect();
    let mut vertices = Vec::with_capacity(g.vertex_count());
    for v in g.vertices() {
        let (Some(name), Some(tile), Some(side)) = (g.name(v), g.tile_of(v), g.side(v)) else {
            continue;
        };
        vertices.push(VertexSer {
            id: v,
            name,
            tile,
            side,
            neighbors: g.neighbors(v),
            color: b
                .assignment()
                .color_of(v)
                .and_then(|c| b.palette().entry(c))
                .map(|e| e.name.as_str()),
        });
    }
    let doc = Doc {
        version: SNAPSHOT_VERSION,
        topology: g.topology(),
        rows,
        cols,
        palette: b.palette().entries(),
        tiles,
        vertices,
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}
