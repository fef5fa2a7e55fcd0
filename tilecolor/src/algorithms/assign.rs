use crate::algorithms::backtrack::color_backtracking;
use crate::algorithms::greedy::color_greedy;
use crate::algorithms::validity::is_valid_assignment;
use crate::config::EngineConfig;
use crate::error::AssignError;
use crate::graph::RegionGraph;
use crate::model::{ColorAssignment, ColorIndex, Palette, Pin};
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Complete search; finds a coloring whenever one exists.
    #[default]
    Backtracking,
    /// One randomized pass; may fail where a coloring exists.
    Greedy,
}

/// Counts tentative color trials; `None` limit means unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepBudget {
    limit: Option<u64>,
    used: u64,
}

impl StepBudget {
    pub fn new(limit: Option<u64>) -> Self {
        StepBudget { limit, used: 0 }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Spends one step; false once the limit is reached.
    pub fn take(&mut self) -> bool {
        if let Some(limit) = self.limit {
            if self.used >= limit {
                return false;
            }
        }
        self.used += 1;
        true
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn is_exhausted(&self) -> bool {
        self.limit.map_or(false, |l| self.used >= l)
    }

    pub(crate) fn failure(&self) -> AssignError {
        AssignError::NoValidColoring {
            steps: self.used,
            budget_exhausted: self.is_exhausted(),
        }
    }
}

/// Produces a total valid coloring of `graph` honoring `pin`, or fails without
/// exposing any partial state.
pub fn assign<R: Rng + ?Sized>(
    graph: &RegionGraph,
    palette: &Palette,
    pin: Option<Pin>,
    strategy: Strategy,
    rng: &mut R,
    step_budget: Option<u64>,
) -> Result<ColorAssignment, AssignError> {
    if let Some(p) = pin {
        if p.vertex as usize >= graph.vertex_count() {
            return Err(AssignError::InvalidPin {
                vertex: p.vertex,
                vertex_count: graph.vertex_count(),
            });
        }
        if p.color as usize >= palette.len() {
            return Err(AssignError::InvalidColor {
                color: p.color,
                palette_len: palette.len(),
            });
        }
    }
    let mut budget = StepBudget::new(step_budget);
    let searched = match strategy {
        Strategy::Backtracking => color_backtracking(graph, palette.len(), pin, rng, &mut budget),
        Strategy::Greedy => color_greedy(graph, palette.len(), pin, rng, &mut budget),
    };
    let partial = match searched {
        Ok(p) => p,
        Err(e) => {
            warn!("{:?} coloring failed: {}", strategy, e);
            return Err(e);
        }
    };
    let colors: Vec<ColorIndex> = partial
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| budget.failure())?;
    let out = ColorAssignment::from_complete(colors);
    debug_assert!(is_valid_assignment(graph, &out), "search returned an invalid coloring");
    debug!(
        "{:?} colored {} vertices in {} steps",
        strategy,
        out.len(),
        budget.used()
    );
    Ok(out)
}

/// Seam between the recolorer and the search; lets callers swap search policy.
pub trait ColorAssigner {
    fn assign(
        &mut self,
        graph: &RegionGraph,
        palette: &Palette,
        pin: Option<Pin>,
    ) -> Result<ColorAssignment, AssignError>;
}

/// Default assigner: configured strategy and budget, driven by an owned seeded rng.
#[derive(Clone, Debug)]
pub struct SeededAssigner {
    strategy: Strategy,
    step_budget: Option<u64>,
    rng: SmallRng,
}

impl SeededAssigner {
    pub fn new(strategy: Strategy, step_budget: Option<u64>, seed: u64) -> Self {
        SeededAssigner {
            strategy,
            step_budget,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.strategy, config.step_budget, config.seed)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl ColorAssigner for SeededAssigner {
    fn assign(
        &mut self,
        graph: &RegionGraph,
        palette: &Palette,
        pin: Option<Pin>,
    ) -> Result<ColorAssignment, AssignError> {
        assign(graph, palette, pin, self.strategy, &mut self.rng, self.step_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{circle, grid};

    #[test]
    fn pin_is_checked_against_graph_and_palette() {
        let g = grid::build(1, 1);
        let p = Palette::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let bad_vertex = Pin { vertex: 4, color: 0 };
        assert!(matches!(
            assign(&g, &p, Some(bad_vertex), Strategy::Backtracking, &mut rng, None),
            Err(AssignError::InvalidPin { vertex: 4, vertex_count: 4 })
        ));
        let bad_color = Pin { vertex: 0, color: 4 };
        assert!(matches!(
            assign(&g, &p, Some(bad_color), Strategy::Greedy, &mut rng, None),
            Err(AssignError::InvalidColor { color: 4, palette_len: 4 })
        ));
    }

    #[test]
    fn seeded_assigner_is_reproducible() {
        let g = circle::build_fixed();
        let p = Palette::default();
        let pin = Some(Pin { vertex: 0, color: 1 });
        let a = SeededAssigner::new(Strategy::Backtracking, None, 77).assign(&g, &p, pin);
        let b = SeededAssigner::new(Strategy::Backtracking, None, 77).assign(&g, &p, pin);
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn budget_accounting() {
        let mut b = StepBudget::new(Some(2));
        assert!(b.take() && b.take());
        assert!(!b.take());
        assert!(b.is_exhausted());
        assert_eq!(b.used(), 2);
        let mut u = StepBudget::unlimited();
        for _ in 0..1000 {
            assert!(u.take());
        }
        assert!(!u.is_exhausted());
    }
}
