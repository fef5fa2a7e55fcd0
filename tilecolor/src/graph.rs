use crate::error::BuildError;
use crate::model::{Side, TileId, VertexId};
use crate::topology::ident;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which builder produced a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Topology {
    Grid { rows: u32, cols: u32 },
    Circle,
}

#[derive(Clone, Debug)]
pub struct Tile {
    pub name: String,
    /// Indexed by `Side as usize`.
    pub members: [VertexId; 4],
}

/// Vertex arena plus symmetric adjacency lists. Vertex ids are dense indices;
/// names exist only for the boundary (renderer events, JSON).
#[derive(Clone, Debug)]
pub struct RegionGraph {
    pub(crate) topology: Topology,
    pub(crate) names: Vec<String>,
    pub(crate) sides: Vec<Side>,
    pub(crate) vertex_tile: Vec<TileId>,
    pub(crate) adjacency: Vec<Vec<VertexId>>,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) by_name: HashMap<String, VertexId>,
}

impl RegionGraph {
    pub fn new(topology: Topology) -> Self {
        RegionGraph {
            topology,
            names: Vec::new(),
            sides: Vec::new(),
            vertex_tile: Vec::new(),
            adjacency: Vec::new(),
            tiles: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Creates a tile and its four vertices (Top, Right, Bottom, Left).
    pub(crate) fn add_tile(&mut self, name: String) -> TileId {
        let tile = self.tiles.len() as TileId;
        let mut members = [0; 4];
        for side in Side::ALL {
            let v = self.names.len() as VertexId;
            let vname = ident::vertex_label(&name, side);
            self.by_name.insert(vname.clone(), v);
            self.names.push(vname);
            self.sides.push(side);
            self.vertex_tile.push(tile);
            self.adjacency.push(Vec::new());
            members[side as usize] = v;
        }
        self.tiles.push(Tile { name, members });
        tile
    }

    /// Records `a -- b` on both endpoints. Self loops, unknown ids and duplicates are rejected.
    pub(crate) fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b {
            return false;
        }
        let n = self.adjacency.len();
        if a as usize >= n || b as usize >= n {
            return false;
        }
        if self.adjacency[a as usize].contains(&b) {
            return false;
        }
        self.adjacency[a as usize].push(b);
        self.adjacency[b as usize].push(a);
        true
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        0..self.names.len() as VertexId
    }

    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adjacency
            .get(v as usize)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn tile_of(&self, v: VertexId) -> Option<TileId> {
        self.vertex_tile.get(v as usize).copied()
    }

    pub fn tile(&self, t: TileId) -> Option<&Tile> {
        self.tiles.get(t as usize)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The other members of `v`'s tile, excluding `v`.
    pub fn tile_siblings(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.tile_of(v)
            .and_then(|t| self.tile(t))
            .into_iter()
            .flat_map(|t| t.members.iter().copied())
            .filter(move |&m| m != v)
    }

    pub fn tile_by_name(&self, name: &str) -> Option<TileId> {
        self.tiles
            .iter()
            .position(|t| t.name == name)
            .map(|i| i as TileId)
    }

    pub fn name(&self, v: VertexId) -> Option<&str> {
        self.names.get(v as usize).map(|s| s.as_str())
    }

    pub fn side(&self, v: VertexId) -> Option<Side> {
        self.sides.get(v as usize).copied()
    }

    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    pub fn vertex_at(&self, tile: TileId, side: Side) -> Option<VertexId> {
        self.tile(tile).map(|t| t.members[side as usize])
    }

    /// Verifies every recorded edge has its reverse and points at a real, distinct vertex.
    pub fn check_symmetry(&self) -> Result<(), BuildError> {
        let n = self.adjacency.len();
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            let u = u as VertexId;
            for &v in neighbors {
                if v == u {
                    return Err(BuildError::SelfLoop { vertex: u });
                }
                if v as usize >= n {
                    return Err(BuildError::DanglingEdge { from: u, to: v });
                }
                if !self.adjacency[v as usize].contains(&u) {
                    return Err(BuildError::AsymmetricEdge { from: u, to: v });
                }
            }
        }
        Ok(())
    }
}
