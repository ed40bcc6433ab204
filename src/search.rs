//! Nearest-object search.
//!
//! Breadth-first search over the four-connected board, starting at a tile
//! and looking for the closest tile accepted by a predicate. Only unoccupied
//! tiles are expanded; anything else (heroes, wells, mines, obstacles) is
//! tested against the predicate and then treated as a dead end. The first
//! match is the nearest one, with ties broken by North, East, South, West
//! expansion order.
//!
//! Visited nodes live in a flat arena and refer to their parent by index, so
//! the first step of the winning path is recovered by walking the parent
//! chain back to the origin.

use crate::board::*;
use crate::direction::*;
use crate::error::PredicateError;
use crate::location::*;
use crate::tile::*;
use log::*;
use std::collections::VecDeque;

/// Where the nearest match is and how to get there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PathInfo {
    /// Location of the matched tile.
    pub location: Location,
    /// First step to take from the start tile.
    pub direction: Direction,
    /// Number of hops along the shortest walkable route.
    pub distance: u32,
}

/// Counters for a single search call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Unoccupied tiles pulled off the frontier and expanded.
    pub tiles_expanded: u32,
    /// Tiles handed to the predicate.
    pub predicate_calls: u32,
    /// Predicate calls that failed and were counted as "no match".
    pub predicate_faults: u32,
}

/// A visited coordinate. `step` is the direction taken from `parent` to
/// reach it; the origin has neither.
#[derive(Copy, Clone, Debug)]
struct SearchNode {
    location: Location,
    step: Option<Direction>,
    parent: Option<usize>,
}

/// Find the nearest tile accepted by `predicate`, reachable from `start`
/// through unoccupied tiles only.
pub fn find_nearest_object_direction_and_distance<F>(
    board: &Board,
    start: Location,
    predicate: F,
) -> Option<PathInfo>
where
    F: FnMut(&Tile) -> Result<bool, PredicateError>,
{
    let mut stats = SearchStats::default();
    find_nearest_with_stats(board, start, predicate, &mut stats)
}

/// Infallible-predicate convenience wrapper.
pub fn find_nearest<F>(board: &Board, start: Location, mut predicate: F) -> Option<PathInfo>
where
    F: FnMut(&Tile) -> bool,
{
    find_nearest_object_direction_and_distance(board, start, |tile| Ok(predicate(tile)))
}

/// As [`find_nearest_object_direction_and_distance`], recording counters in
/// `stats`.
pub fn find_nearest_with_stats<F>(
    board: &Board,
    start: Location,
    mut predicate: F,
    stats: &mut SearchStats,
) -> Option<PathInfo>
where
    F: FnMut(&Tile) -> Result<bool, PredicateError>,
{
    if !board.contains(start) {
        return None;
    }

    let mut arena: Vec<SearchNode> = Vec::new();
    let mut visited = BoardDataArray::new(board.side(), false);
    let mut queue: VecDeque<usize> = VecDeque::new();

    arena.push(SearchNode {
        location: start,
        step: None,
        parent: None,
    });
    visited.set(start, true);
    queue.push_back(0);

    while let Some(node_index) = queue.pop_front() {
        let current = arena[node_index].location;
        stats.tiles_expanded += 1;

        for direction in SEARCH_ORDER {
            let next = match board.neighbor(current, direction) {
                Some(tile) => tile,
                None => continue,
            };

            if *visited.get(next.location) {
                continue;
            }

            stats.predicate_calls += 1;
            let is_goal = match predicate(next) {
                Ok(matched) => matched,
                Err(err) => {
                    stats.predicate_faults += 1;
                    warn!(
                        "Predicate failed on tile ({}, {}), treating as no match: {}",
                        next.row(),
                        next.col(),
                        err
                    );
                    false
                }
            };

            if is_goal {
                let (first_step, distance) = trace_back(&arena, node_index, direction);
                trace!(
                    "Search from ({}, {}) matched ({}, {}) at distance {} after expanding {} tiles",
                    start.row(),
                    start.col(),
                    next.row(),
                    next.col(),
                    distance,
                    stats.tiles_expanded
                );
                return Some(PathInfo {
                    location: next.location,
                    direction: first_step,
                    distance,
                });
            }

            if next.is_unoccupied() {
                visited.set(next.location, true);
                arena.push(SearchNode {
                    location: next.location,
                    step: Some(direction),
                    parent: Some(node_index),
                });
                queue.push_back(arena.len() - 1);
            }
        }
    }

    trace!(
        "Search from ({}, {}) found nothing after expanding {} tiles",
        start.row(),
        start.col(),
        stats.tiles_expanded
    );

    None
}

/// Walk from `node_index` (the parent of the match) back to the origin.
/// Returns the first step out of the origin and the total hop count.
fn trace_back(arena: &[SearchNode], node_index: usize, last_step: Direction) -> (Direction, u32) {
    let mut first_step = last_step;
    let mut distance = 1;
    let mut node = arena[node_index];

    while let (Some(step), Some(parent)) = (node.step, node.parent) {
        first_step = step;
        distance += 1;
        node = arena[parent];
    }

    (first_step, distance)
}

/// First step toward the tile at `target`.
pub fn find_tile(board: &Board, start: Location, target: Location) -> Option<PathInfo> {
    find_nearest(board, start, |tile| tile.location == target)
}
