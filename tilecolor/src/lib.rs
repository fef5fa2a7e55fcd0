pub mod config;
pub mod error;
pub mod graph;
pub mod limits;
pub mod model;
pub mod topology {
    pub mod circle;
    pub mod grid;
    pub mod ident;
    pub mod layout;
}
pub mod algorithms {
    pub mod assign;
    pub mod backtrack;
    pub mod greedy;
    pub mod recolor;
    pub mod validity;
}
mod json;

use algorithms::assign::{ColorAssigner, SeededAssigner};
use algorithms::recolor::{Interaction, Recolorer};
use algorithms::validity::{find_conflicts, Conflict};
use config::EngineConfig;
use error::{AssignError, ConfigError};
use graph::{RegionGraph, Topology};
use log::debug;
use model::{ColorAssignment, ColorIndex, Palette, Pin, Side, TileColors, VertexId};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use topology::layout::TileLayout;

pub use algorithms::assign::Strategy;

// Keeps layout draws independent of the assigner's stream for the same seed.
const LAYOUT_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Packed per-vertex colors for renderers: `rgba` holds 4 bytes per id,
/// all zero for an uncolored vertex.
pub struct ColorArrays {
    pub ids: Vec<u32>,
    pub rgba: Vec<u8>,
}

/// A tile board: region graph, render layout, palette and the committed coloring.
///
/// Every rebuild recolors from the configured anchor pin; pointer events then
/// cycle the hovered region through the palette.
pub struct Board<A = SeededAssigner> {
    config: EngineConfig,
    palette: Palette,
    graph: RegionGraph,
    layout: TileLayout,
    layout_rng: SmallRng,
    recolorer: Recolorer<A>,
}

impl Board<SeededAssigner> {
    /// Grid board with the default palette and search settings.
    pub fn new(rows: i32, cols: i32) -> Self {
        let config = EngineConfig::default();
        let assigner = SeededAssigner::from_config(&config);
        let mut b = Board::from_parts(config, Palette::default(), assigner);
        b.resize(rows, cols);
        b
    }

    pub fn with_config(rows: i32, cols: i32, config: EngineConfig) -> Result<Self, ConfigError> {
        let assigner = SeededAssigner::from_config(&config);
        Board::with_assigner(rows, cols, config, assigner)
    }

    /// The fixed 16-region circle board.
    pub fn circle(config: EngineConfig) -> Result<Self, ConfigError> {
        let palette = config.palette()?;
        config.anchor_color_index(&palette)?;
        let assigner = SeededAssigner::from_config(&config);
        let mut b = Board::from_parts(config, palette, assigner);
        b.graph = topology::circle::build_fixed();
        b.layout = TileLayout::circle();
        b.recolor_from_anchor();
        Ok(b)
    }
}

impl<A: ColorAssigner> Board<A> {
    pub fn with_assigner(
        rows: i32,
        cols: i32,
        config: EngineConfig,
        assigner: A,
    ) -> Result<Self, ConfigError> {
        let palette = config.palette()?;
        config.anchor_color_index(&palette)?;
        let mut b = Board::from_parts(config, palette, assigner);
        b.resize(rows, cols);
        Ok(b)
    }

    fn from_parts(config: EngineConfig, palette: Palette, assigner: A) -> Self {
        let layout_rng = SmallRng::seed_from_u64(config.seed ^ LAYOUT_SEED_SALT);
        Board {
            config,
            palette,
            graph: RegionGraph::new(Topology::Grid { rows: 0, cols: 0 }),
            layout: TileLayout::generate(0, 0, &mut SmallRng::seed_from_u64(0)),
            layout_rng,
            recolorer: Recolorer::new(assigner),
        }
    }

    /// Rebuilds as a `rows x cols` grid (also from a circle board), drops hover
    /// state and recolors from the anchor.
    pub fn resize(&mut self, rows: i32, cols: i32) {
        self.graph = topology::grid::build(rows, cols);
        self.layout = TileLayout::generate(rows, cols, &mut self.layout_rng);
        self.recolor_from_anchor();
    }

    fn recolor_from_anchor(&mut self) {
        self.recolorer.reset_interaction();
        let pin = self.anchor_pin();
        debug!(
            "recoloring {} vertices from anchor {:?}",
            self.graph.vertex_count(),
            pin.map(|p| self.graph.name(p.vertex))
        );
        // A failure is already logged and leaves a consistent committed assignment.
        let _ = self.recolorer.recolor_all(&self.graph, &self.palette, pin);
    }

    /// The configured anchor vertex, or the first vertex when the graph lacks it.
    pub fn anchor_pin(&self) -> Option<Pin> {
        let vertex = self
            .graph
            .lookup(&self.config.anchor_vertex)
            .or_else(|| self.graph.vertices().next())?;
        let color = self.config.anchor_color_index(&self.palette).unwrap_or(0);
        Some(Pin { vertex, color })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn graph(&self) -> &RegionGraph {
        &self.graph
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    pub fn assignment(&self) -> &ColorAssignment {
        self.recolorer.committed()
    }

    pub fn assigner(&self) -> &A {
        self.recolorer.assigner()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.layout.rows(), self.layout.cols())
    }

    fn vertex(&self, name: &str) -> Result<VertexId, AssignError> {
        self.graph
            .lookup(name)
            .ok_or_else(|| AssignError::UnknownVertex(name.to_string()))
    }

    /// Pointer entered the named region.
    pub fn region_enter(&mut self, name: &str) -> Result<Interaction, AssignError> {
        let v = self.vertex(name)?;
        Ok(self.recolorer.enter(&self.graph, &self.palette, v))
    }

    /// Pointer left the named region. False for unknown names.
    pub fn region_leave(&mut self, name: &str) -> bool {
        match self.graph.lookup(name) {
            Some(v) => {
                self.recolorer.leave(v);
                true
            }
            None => false,
        }
    }

    pub fn is_hovered(&self, name: &str) -> bool {
        self.graph
            .lookup(name)
            .is_some_and(|v| self.recolorer.is_hovered(v))
    }

    /// One recolor proposal on the named region, bypassing the hover guard.
    pub fn interact(&mut self, name: &str) -> Result<Interaction, AssignError> {
        let v = self.vertex(name)?;
        Ok(self.recolorer.on_interact(&self.graph, &self.palette, v))
    }

    /// Colors the whole board with `vertex = color`. The committed assignment is
    /// kept on failure.
    pub fn pin(&mut self, vertex: &str, color: &str) -> Result<(), AssignError> {
        let v = self.vertex(vertex)?;
        let c = self
            .palette
            .index_of(color)
            .ok_or_else(|| AssignError::UnknownColor(color.to_string()))?;
        self.recolorer
            .recolor_all(&self.graph, &self.palette, Some(Pin { vertex: v, color: c }))
    }

    fn color_index(&self, name: &str) -> Option<ColorIndex> {
        self.graph
            .lookup(name)
            .and_then(|v| self.assignment().color_of(v))
    }

    /// Palette name of the region's committed color.
    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.color_index(name)
            .and_then(|c| self.palette.entry(c))
            .map(|e| e.name.as_str())
    }

    pub fn hex_of(&self, name: &str) -> Option<String> {
        self.color_index(name)
            .and_then(|c| self.palette.rgba(c))
            .map(|c| c.to_hex())
    }

    /// Vertex name -> hex for every colored region.
    pub fn hex_colors(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        for (v, c) in self.assignment().iter() {
            if let (Some(name), Some(rgba)) = (self.graph.name(v), self.palette.rgba(c)) {
                out.insert(name.to_string(), rgba.to_hex());
            }
        }
        out
    }

    pub fn tile_colors(&self, tile: &str) -> Option<TileColors> {
        let t = self.graph.tile_by_name(tile)?;
        let hex = |side: Side| {
            self.graph
                .vertex_at(t, side)
                .and_then(|v| self.assignment().color_of(v))
                .and_then(|c| self.palette.rgba(c))
                .map(|c| c.to_hex())
        };
        Some(TileColors {
            top: hex(Side::Top)?,
            right: hex(Side::Right)?,
            bottom: hex(Side::Bottom)?,
            left: hex(Side::Left)?,
        })
    }

    pub fn color_arrays(&self) -> ColorArrays {
        let mut ids = Vec::with_capacity(self.graph.vertex_count());
        let mut rgba = Vec::with_capacity(self.graph.vertex_count() * 4);
        for v in self.graph.vertices() {
            ids.push(v);
            match self
                .assignment()
                .color_of(v)
                .and_then(|c| self.palette.rgba(c))
            {
                Some(c) => rgba.extend_from_slice(&[c.r, c.g, c.b, c.a]),
                None => rgba.extend_from_slice(&[0, 0, 0, 0]),
            }
        }
        ColorArrays { ids, rgba }
    }

    /// Conflicts in the committed assignment; empty for a valid board.
    pub fn validate(&self) -> Vec<Conflict> {
        find_conflicts(&self.graph, self.assignment())
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
}
