// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Direction-committed multicast routing.
//!
//! Each source fans out to every target in one rotational direction. The
//! direction is chosen per source by totalling the cost of the clockwise
//! paths to all targets and the cost of the counterclockwise paths to all
//! targets, and committing to the cheaper list. Ties go clockwise.
//!
//! The cost of a path is defined by a [RoutingStrategy]:
//!  - [TempCon](tempcon::TempCon): the weighted congestion/temperature score.
//!  - [ShortestPathFirst](spf::ShortestPathFirst): the hop count.
//!
//! The chosen direction applies to all targets of a source; it is not
//! re-optimised per target, so the result is not necessarily the cheapest
//! route to every individual target.

use log::{debug, trace};

use crate::path::Direction;
use crate::ring::Ring;
use crate::types::{NodeId, Path, RingResult};

pub mod spf;
pub mod tempcon;

/// Trait required for multicast routing strategies to implement.
pub trait RoutingStrategy {
    /// Short name used when logging and reporting.
    fn name(&self) -> &str;

    /// Cost of a single path under this strategy. Lower is better and the
    /// value is reported as the path score.
    fn path_cost(&self, ring: &Ring, path: &[NodeId]) -> RingResult<f64>;
}

/// The paths committed to for a single source.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceRoutes {
    source: NodeId,
    direction: Direction,
    paths: Vec<Path>,
    scores: Vec<f64>,
}

impl SourceRoutes {
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The direction every path of this source was built in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// One path per target, in target order.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// The score of each path in [paths](Self::paths).
    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    #[must_use]
    pub fn total_score(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Routes for every source, kept in the order sources were first given.
///
/// A source only has an entry when it was routed to at least one target, so
/// routing with no targets leaves every source without one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MulticastRoutes {
    routes: Vec<SourceRoutes>,
}

impl MulticastRoutes {
    /// A repeated source keeps its original position but takes the new
    /// routes.
    fn insert(&mut self, routes: SourceRoutes) {
        match self.routes.iter_mut().find(|r| r.source == routes.source) {
            Some(existing) => *existing = routes,
            None => self.routes.push(routes),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceRoutes> {
        self.routes.iter()
    }

    pub fn sources(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.routes.iter().map(|r| r.source)
    }

    #[must_use]
    pub fn get(&self, source: NodeId) -> Option<&SourceRoutes> {
        self.routes.iter().find(|r| r.source == source)
    }

    #[must_use]
    pub fn paths(&self, source: NodeId) -> Option<&[Path]> {
        self.get(source).map(SourceRoutes::paths)
    }

    #[must_use]
    pub fn scores(&self, source: NodeId) -> Option<&[f64]> {
        self.get(source).map(SourceRoutes::scores)
    }

    /// Every routed path across all sources.
    pub fn all_paths(&self) -> impl Iterator<Item = (NodeId, &Path)> {
        self.routes
            .iter()
            .flat_map(|r| r.paths.iter().map(move |p| (r.source, p)))
    }
}

impl<'a> IntoIterator for &'a MulticastRoutes {
    type Item = &'a SourceRoutes;
    type IntoIter = std::slice::Iter<'a, SourceRoutes>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Paths from `source` to every target in one direction, with their costs.
fn paths_in_direction(
    strategy: &dyn RoutingStrategy,
    ring: &Ring,
    source: NodeId,
    targets: &[NodeId],
    direction: Direction,
) -> RingResult<(Vec<Path>, Vec<f64>)> {
    let mut paths = Vec::with_capacity(targets.len());
    let mut scores = Vec::with_capacity(targets.len());
    for &target in targets {
        let path = direction.path(ring, source, target)?;
        let score = strategy.path_cost(ring, &path)?;
        trace!(
            "{}: {source}->{target} {direction} score {score:.4}",
            strategy.name()
        );
        paths.push(path);
        scores.push(score);
    }
    Ok((paths, scores))
}

/// Route from every source to every target, committing each source to the
/// direction with the lowest total cost under `strategy`.
///
/// Empty `sources` or `targets` produce empty routes, with no entry for any
/// source.
pub fn route_multicast(
    strategy: &dyn RoutingStrategy,
    ring: &Ring,
    sources: &[NodeId],
    targets: &[NodeId],
) -> RingResult<MulticastRoutes> {
    let mut routes = MulticastRoutes::default();
    if sources.is_empty() || targets.is_empty() {
        return Ok(routes);
    }

    for &source in sources {
        let (clock_paths, clock_scores) =
            paths_in_direction(strategy, ring, source, targets, Direction::Clockwise)?;
        let (counter_paths, counter_scores) =
            paths_in_direction(strategy, ring, source, targets, Direction::Counterclockwise)?;

        let clock_total: f64 = clock_scores.iter().sum();
        let counter_total: f64 = counter_scores.iter().sum();

        let (direction, paths, scores) = if clock_total <= counter_total {
            (Direction::Clockwise, clock_paths, clock_scores)
        } else {
            (Direction::Counterclockwise, counter_paths, counter_scores)
        };
        debug!(
            "{}: source {source} commits {direction} (clockwise {clock_total:.4}, counterclockwise {counter_total:.4})",
            strategy.name()
        );

        routes.insert(SourceRoutes {
            source,
            direction,
            paths,
            scores,
        });
    }
    Ok(routes)
}
