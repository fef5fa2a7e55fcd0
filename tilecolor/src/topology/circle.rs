// Fixed circle board: one circle inscribed in a square made of four quadrant tiles.
// Each quadrant owns two straight triangles on the square's border and two arc
// sections of the disc. Angles below follow SVG orientation (0 deg = east, clockwise).

use crate::graph::{RegionGraph, Topology};
use crate::model::Side;
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "TL",
            Quadrant::TopRight => "TR",
            Quadrant::BottomLeft => "BL",
            Quadrant::BottomRight => "BR",
        }
    }

    /// Sides drawn as straight triangles; the other two are arc sections.
    pub fn straight_sides(self) -> [Side; 2] {
        match self {
            Quadrant::TopLeft => [Side::Top, Side::Left],
            Quadrant::TopRight => [Side::Top, Side::Right],
            Quadrant::BottomLeft => [Side::Left, Side::Bottom],
            Quadrant::BottomRight => [Side::Right, Side::Bottom],
        }
    }

    /// Arc sections as (side, start deg, end deg).
    pub fn arcs(self) -> [(Side, u16, u16); 2] {
        match self {
            Quadrant::TopLeft => [(Side::Bottom, 180, 225), (Side::Right, 225, 270)],
            Quadrant::TopRight => [(Side::Left, 270, 315), (Side::Bottom, 315, 360)],
            Quadrant::BottomLeft => [(Side::Right, 90, 135), (Side::Top, 135, 180)],
            Quadrant::BottomRight => [(Side::Top, 0, 45), (Side::Left, 45, 90)],
        }
    }
}

use Quadrant::{BottomLeft as BL, BottomRight as BR, TopLeft as TL, TopRight as TR};
use Side::{Bottom, Left, Right, Top};

type Region = (Quadrant, Side);

// Arc sections around the disc, clockwise from east; neighbours share a radius.
const RING: [Region; 8] = [
    (BR, Top),
    (BR, Left),
    (BL, Right),
    (BL, Top),
    (TL, Bottom),
    (TL, Right),
    (TR, Left),
    (TR, Bottom),
];

// Arc section -> the straight triangle lying outside it.
const ARC_TO_TRIANGLE: [(Region, Region); 8] = [
    ((BR, Top), (BR, Right)),
    ((BR, Left), (BR, Bottom)),
    ((BL, Right), (BL, Bottom)),
    ((BL, Top), (BL, Left)),
    ((TL, Bottom), (TL, Left)),
    ((TL, Right), (TL, Top)),
    ((TR, Left), (TR, Top)),
    ((TR, Bottom), (TR, Right)),
];

// Triangles sharing a quadrant diagonal, then triangles sharing a midline.
const TRIANGLE_PAIRS: [(Region, Region); 8] = [
    ((BR, Right), (BR, Bottom)),
    ((BL, Bottom), (BL, Left)),
    ((TL, Left), (TL, Top)),
    ((TR, Top), (TR, Right)),
    ((TL, Top), (TR, Top)),
    ((TR, Right), (BR, Right)),
    ((BR, Bottom), (BL, Bottom)),
    ((BL, Left), (TL, Left)),
];

/// The 16-vertex circle board. Adjacency is a constant fixture.
pub fn build_fixed() -> RegionGraph {
    let mut g = RegionGraph::new(Topology::Circle);
    for q in Quadrant::ALL {
        g.add_tile(q.label().to_string());
    }
    let vid = |(q, side): Region| (q as usize * 4 + side as usize) as u32;
    for i in 0..RING.len() {
        g.add_edge(vid(RING[i]), vid(RING[(i + 1) % RING.len()]));
    }
    for (a, b) in ARC_TO_TRIANGLE.iter().chain(TRIANGLE_PAIRS.iter()) {
        g.add_edge(vid(*a), vid(*b));
    }
    debug_assert!(g.check_symmetry().is_ok(), "circle fixture is asymmetric");
    debug!(
        "built circle board: {} vertices, {} edges",
        g.vertex_count(),
        g.edge_count()
    );
    g
}
