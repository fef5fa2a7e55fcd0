use crate::algorithms::assign::ColorAssigner;
use crate::algorithms::validity::is_valid_assignment;
use crate::error::AssignError;
use crate::graph::RegionGraph;
use crate::model::{ColorAssignment, ColorIndex, Palette, Pin, VertexId};
use log::{debug, info};
use std::collections::HashSet;

/// What a single interaction did to the committed coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// A new assignment with `vertex = color` was committed.
    Recolored { vertex: VertexId, color: ColorIndex },
    /// No coloring exists (or was found) for the proposal; nothing changed.
    Rejected { vertex: VertexId, proposed: ColorIndex },
    /// Repeated enter on a hovered vertex, or a vertex outside the graph.
    Ignored,
}

impl Interaction {
    pub fn is_recolored(&self) -> bool {
        matches!(self, Interaction::Recolored { .. })
    }
}

/// Holds the committed assignment and drives hover-to-cycle recoloring.
///
/// The committed assignment only ever changes by wholesale replacement with a
/// successful search result; a failed attempt leaves it untouched.
#[derive(Debug)]
pub struct Recolorer<A> {
    assigner: A,
    committed: ColorAssignment,
    hovered: HashSet<VertexId>,
    // Consecutive rejected proposals on one vertex: (vertex, rejected count)
    rejections: Option<(VertexId, usize)>,
}

impl<A: ColorAssigner> Recolorer<A> {
    pub fn new(assigner: A) -> Self {
        Recolorer {
            assigner,
            committed: ColorAssignment::empty(),
            hovered: HashSet::new(),
            rejections: None,
        }
    }

    pub fn committed(&self) -> &ColorAssignment {
        &self.committed
    }

    pub fn assigner(&self) -> &A {
        &self.assigner
    }

    pub fn is_hovered(&self, vertex: VertexId) -> bool {
        self.hovered.contains(&vertex)
    }

    /// Forgets hover markers and proposal progress; used when the graph is rebuilt.
    pub fn reset_interaction(&mut self) {
        self.hovered.clear();
        self.rejections = None;
    }

    /// Colors the whole graph around `pin` and commits on success. On failure the
    /// committed assignment is kept only if it is still a valid coloring of `graph`.
    pub fn recolor_all(
        &mut self,
        graph: &RegionGraph,
        palette: &Palette,
        pin: Option<Pin>,
    ) -> Result<(), AssignError> {
        match self.assigner.assign(graph, palette, pin) {
            Ok(next) => {
                self.committed = next;
                self.rejections = None;
                Ok(())
            }
            Err(e) => {
                if !is_valid_assignment(graph, &self.committed) {
                    self.committed = ColorAssignment::empty();
                }
                info!("full recolor failed: {}", e);
                Err(e)
            }
        }
    }

    /// The color the next interaction on `vertex` will ask for: the committed color
    /// advanced by one plus the number of proposals already rejected for it. Without
    /// a committed color the cycle starts at the first palette entry.
    pub fn next_proposal(&self, vertex: VertexId, palette: &Palette) -> Option<ColorIndex> {
        if palette.is_empty() {
            return None;
        }
        let k = palette.len();
        let rejected = match self.rejections {
            Some((v, n)) if v == vertex => n,
            _ => 0,
        };
        Some(match self.committed.color_of(vertex) {
            Some(c) if k > 1 => palette.advance(c, 1 + rejected % (k - 1)),
            Some(c) => c,
            None => palette.advance(0, rejected),
        })
    }

    /// Pins `vertex` to its next proposed color and recolors everything else.
    pub fn on_interact(
        &mut self,
        graph: &RegionGraph,
        palette: &Palette,
        vertex: VertexId,
    ) -> Interaction {
        if vertex as usize >= graph.vertex_count() {
            return Interaction::Ignored;
        }
        let Some(proposed) = self.next_proposal(vertex, palette) else {
            return Interaction::Ignored;
        };
        let pin = Pin {
            vertex,
            color: proposed,
        };
        match self.assigner.assign(graph, palette, Some(pin)) {
            Ok(next) => {
                self.committed = next;
                self.rejections = None;
                debug!("committed {:?} = {}", graph.name(vertex), proposed);
                Interaction::Recolored {
                    vertex,
                    color: proposed,
                }
            }
            Err(e) => {
                let n = match self.rejections {
                    Some((v, n)) if v == vertex => n + 1,
                    _ => 1,
                };
                self.rejections = Some((vertex, n));
                info!(
                    "keeping previous coloring, {:?} = {} rejected: {}",
                    graph.name(vertex),
                    proposed,
                    e
                );
                Interaction::Rejected { vertex, proposed }
            }
        }
    }

    /// Pointer entered a region. Re-entering without a leave in between is a no-op.
    pub fn enter(
        &mut self,
        graph: &RegionGraph,
        palette: &Palette,
        vertex: VertexId,
    ) -> Interaction {
        if vertex as usize >= graph.vertex_count() || !self.hovered.insert(vertex) {
            return Interaction::Ignored;
        }
        self.on_interact(graph, palette, vertex)
    }

    /// Pointer left a region; only clears the hover marker.
    pub fn leave(&mut self, vertex: VertexId) {
        self.hovered.remove(&vertex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::assign::{SeededAssigner, Strategy};
    use crate::topology::grid;

    /// Rejects any pin whose color is in `refuse`; otherwise delegates.
    struct Picky {
        inner: SeededAssigner,
        refuse: Vec<ColorIndex>,
        calls: usize,
    }

    impl ColorAssigner for Picky {
        fn assign(
            &mut self,
            graph: &RegionGraph,
            palette: &Palette,
            pin: Option<Pin>,
        ) -> Result<ColorAssignment, AssignError> {
            self.calls += 1;
            if let Some(p) = pin {
                if self.refuse.contains(&p.color) {
                    return Err(AssignError::NoValidColoring {
                        steps: 0,
                        budget_exhausted: false,
                    });
                }
            }
            self.inner.assign(graph, palette, pin)
        }
    }

    fn picky(refuse: Vec<ColorIndex>) -> Picky {
        Picky {
            inner: SeededAssigner::new(Strategy::Backtracking, None, 5),
            refuse,
            calls: 0,
        }
    }

    #[test]
    fn rejected_proposal_advances_from_committed_color() {
        let g = grid::build(2, 2);
        let p = Palette::default();
        let top = g.lookup("A1-Top").unwrap();
        let mut r = Recolorer::new(picky(vec![1]));
        assert!(r.recolor_all(&g, &p, Some(Pin { vertex: top, color: 0 })).is_ok());
        let before = r.committed().clone();

        assert_eq!(r.next_proposal(top, &p), Some(1));
        assert_eq!(
            r.on_interact(&g, &p, top),
            Interaction::Rejected { vertex: top, proposed: 1 }
        );
        assert_eq!(r.committed(), &before);
        assert_eq!(r.next_proposal(top, &p), Some(2));
        assert_eq!(
            r.on_interact(&g, &p, top),
            Interaction::Recolored { vertex: top, color: 2 }
        );
        assert_eq!(r.committed().color_of(top), Some(2));
        // Success resets the cycle to committed + 1
        assert_eq!(r.next_proposal(top, &p), Some(3));
    }

    #[test]
    fn proposals_skip_the_committed_color_when_everything_is_rejected() {
        let g = grid::build(1, 1);
        let p = Palette::default();
        let top = g.lookup("A1-Top").unwrap();
        let mut r = Recolorer::new(picky(vec![1, 2, 3]));
        assert!(r.recolor_all(&g, &p, Some(Pin { vertex: top, color: 0 })).is_ok());
        let seen: Vec<ColorIndex> = (0..6)
            .map(|_| match r.on_interact(&g, &p, top) {
                Interaction::Rejected { proposed, .. } => proposed,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn interacting_elsewhere_restarts_the_cycle() {
        let g = grid::build(1, 2);
        let p = Palette::default();
        let a = g.lookup("A1-Top").unwrap();
        let b = g.lookup("A2-Top").unwrap();
        let mut r = Recolorer::new(picky((0..4).collect()));
        assert!(r.recolor_all(&g, &p, None).is_ok());
        let ca = r.committed().color_of(a).unwrap();
        r.on_interact(&g, &p, a);
        assert_eq!(r.next_proposal(a, &p), Some(p.advance(ca, 2)));
        r.on_interact(&g, &p, b);
        assert_eq!(r.next_proposal(a, &p), Some(p.advance(ca, 1)));
    }

    #[test]
    fn enter_is_idempotent_until_leave() {
        let g = grid::build(2, 2);
        let p = Palette::default();
        let v = g.lookup("B2-Left").unwrap();
        let mut r = Recolorer::new(picky(vec![]));
        assert!(r.recolor_all(&g, &p, None).is_ok());
        let calls = r.assigner().calls;
        assert!(r.enter(&g, &p, v).is_recolored());
        assert_eq!(r.enter(&g, &p, v), Interaction::Ignored);
        assert_eq!(r.enter(&g, &p, v), Interaction::Ignored);
        assert_eq!(r.assigner().calls, calls + 1);
        assert!(r.is_hovered(v));
        r.leave(v);
        assert!(!r.is_hovered(v));
        assert!(r.enter(&g, &p, v).is_recolored());
        assert_eq!(r.assigner().calls, calls + 2);
    }

    #[test]
    fn unknown_vertex_is_ignored() {
        let g = grid::build(1, 1);
        let p = Palette::default();
        let mut r = Recolorer::new(picky(vec![]));
        assert_eq!(r.on_interact(&g, &p, 40), Interaction::Ignored);
        assert_eq!(r.enter(&g, &p, 40), Interaction::Ignored);
        assert!(!r.is_hovered(40));
    }

    #[test]
    fn uncommitted_vertex_starts_at_first_color() {
        let g = grid::build(1, 1);
        let p = Palette::default();
        let r = Recolorer::new(picky(vec![]));
        assert_eq!(r.next_proposal(0, &p), Some(0));
    }

    #[test]
    fn failed_full_recolor_drops_stale_assignment() {
        let small = grid::build(1, 1);
        let big = grid::build(1, 2);
        let p = Palette::default();
        let mut r = Recolorer::new(picky(vec![0]));
        assert!(r.recolor_all(&small, &p, Some(Pin { vertex: 0, color: 1 })).is_ok());
        let kept = r.committed().clone();
        assert!(r.recolor_all(&small, &p, Some(Pin { vertex: 0, color: 0 })).is_err());
        assert_eq!(r.committed(), &kept);
        assert!(r.recolor_all(&big, &p, Some(Pin { vertex: 0, color: 0 })).is_err());
        assert!(r.committed().is_empty());
    }

    /// Hands out one fixed assignment, then fails every call.
    struct Once(Option<ColorAssignment>);

    impl ColorAssigner for Once {
        fn assign(
            &mut self,
            _graph: &RegionGraph,
            _palette: &Palette,
            _pin: Option<Pin>,
        ) -> Result<ColorAssignment, AssignError> {
            self.0.take().ok_or(AssignError::NoValidColoring {
                steps: 0,
                budget_exhausted: true,
            })
        }
    }

    #[test]
    fn failed_recolor_on_reshaped_graph_drops_conflicting_assignment() {
        let wide = grid::build(1, 2);
        let tall = grid::build(2, 1);
        assert_eq!(wide.vertex_count(), tall.vertex_count());
        let p = Palette::default();
        // A2 is [2, 0, 1, 3]: fine beside A1, but B1-Top would match A1-Bottom.
        let colors = ColorAssignment::from_complete(vec![0, 1, 2, 3, 2, 0, 1, 3]);
        assert!(is_valid_assignment(&wide, &colors));
        assert!(!is_valid_assignment(&tall, &colors));

        let mut r = Recolorer::new(Once(Some(colors.clone())));
        assert!(r.recolor_all(&wide, &p, None).is_ok());
        assert_eq!(r.committed(), &colors);
        assert!(r.recolor_all(&tall, &p, None).is_err());
        assert!(r.committed().is_empty());
    }

    #[test]
    fn failed_recolor_keeps_assignment_still_valid_for_new_graph() {
        let g = grid::build(1, 1);
        let p = Palette::default();
        let colors = ColorAssignment::from_complete(vec![3, 2, 1, 0]);
        let mut r = Recolorer::new(Once(Some(colors.clone())));
        assert!(r.recolor_all(&g, &p, None).is_ok());
        assert!(r.recolor_all(&grid::build(1, 1), &p, None).is_err());
        assert_eq!(r.committed(), &colors);
    }
}
