//! Radius queries.
//!
//! Two notions of "nearby" that are never mixed up:
//!
//! - Manhattan disks ignore what sits between the center and a tile. They
//!   answer "how close is this as the crow flies".
//! - Path disks use the same occupancy rules as the nearest-object search:
//!   occupied tiles within range are included, but the frontier only grows
//!   through unoccupied tiles. They answer "what could I actually reach".
//!
//! Rings are the tiles at exactly the given distance: disk(R) minus
//! disk(R - 1).

use crate::board::*;
use crate::direction::*;
use crate::location::*;
use crate::tile::*;
use fnv::FnvHashSet;
use std::collections::VecDeque;

/// Every tile within Manhattan distance `radius` of `center`, row-major.
///
/// Row and column ranges are clipped to the board first, so the work is
/// bounded by the board size whatever the radius.
pub fn tiles_in_manhattan_circle(board: &Board, center: Location, radius: i32) -> Vec<&Tile> {
    if radius < 0 || !board.contains(center) {
        return Vec::new();
    }

    let last = board.side() as i64 - 1;
    let cr = center.row() as i64;
    let cc = center.col() as i64;
    let r = radius as i64;
    let mut tiles = Vec::new();

    for row in (cr - r).max(0)..=(cr + r).min(last) {
        let remaining = r - (row - cr).abs();
        for col in (cc - remaining).max(0)..=(cc + remaining).min(last) {
            if let Some(tile) = board.get_rc(row, col) {
                tiles.push(tile);
            }
        }
    }

    tiles
}

/// Tiles at exactly Manhattan distance `radius` from `center`.
pub fn tiles_on_manhattan_circle(board: &Board, center: Location, radius: i32) -> Vec<&Tile> {
    difference(
        tiles_in_manhattan_circle(board, center, radius),
        &tiles_in_manhattan_circle(board, center, radius.saturating_sub(1)),
    )
}

/// Every tile within `radius` hops of `center` along walkable routes, in
/// breadth-first order. The center is always first.
pub fn tiles_in_path_circle(board: &Board, center: Location, radius: i32) -> Vec<&Tile> {
    let center_tile = match board.get(center) {
        Some(tile) if radius >= 0 => tile,
        _ => return Vec::new(),
    };

    let mut tiles = vec![center_tile];
    if radius == 0 {
        return tiles;
    }

    let radius = radius as u32;
    let mut visited = BoardDataArray::new(board.side(), false);
    let mut queue: VecDeque<(Location, u32)> = VecDeque::new();

    visited.set(center, true);
    queue.push_back((center, 0));

    while let Some((loc, dist)) = queue.pop_front() {
        let next_dist = dist + 1;
        for direction in SEARCH_ORDER {
            let next = match board.neighbor(loc, direction) {
                Some(tile) => tile,
                None => continue,
            };
            if *visited.get(next.location) {
                continue;
            }

            visited.set(next.location, true);
            tiles.push(next);

            if next.is_unoccupied() && next_dist < radius {
                queue.push_back((next.location, next_dist));
            }
        }
    }

    tiles
}

/// Tiles at exactly `radius` hops from `center` along walkable routes.
pub fn tiles_on_path_circle(board: &Board, center: Location, radius: i32) -> Vec<&Tile> {
    difference(
        tiles_in_path_circle(board, center, radius),
        &tiles_in_path_circle(board, center, radius.saturating_sub(1)),
    )
}

/// Elements of `a` whose location is not in `b`, keeping `a`'s order.
pub fn difference<'a>(a: Vec<&'a Tile>, b: &[&Tile]) -> Vec<&'a Tile> {
    let exclude: FnvHashSet<Location> = b.iter().map(|t| t.location).collect();
    a.into_iter()
        .filter(|t| !exclude.contains(&t.location))
        .collect()
}

/// Elements of `a` whose location is also in `b`, keeping `a`'s order.
pub fn intersection<'a>(a: &[&'a Tile], b: &[&Tile]) -> Vec<&'a Tile> {
    let keep: FnvHashSet<Location> = b.iter().map(|t| t.location).collect();
    a.iter()
        .copied()
        .filter(|t| keep.contains(&t.location))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: u32, col: u32) -> Location {
        Location::from_coords(row, col)
    }

    fn locations(tiles: &[&Tile]) -> Vec<Location> {
        tiles.iter().map(|t| t.location).collect()
    }

    #[test]
    fn manhattan_disk_sizes() {
        let board = BoardBuilder::new(9).build().unwrap();
        let center = loc(4, 4);
        assert_eq!(tiles_in_manhattan_circle(&board, center, 0).len(), 1);
        assert_eq!(tiles_in_manhattan_circle(&board, center, 1).len(), 5);
        assert_eq!(tiles_in_manhattan_circle(&board, center, 2).len(), 13);
        assert_eq!(tiles_on_manhattan_circle(&board, center, 1).len(), 4);
        assert_eq!(tiles_on_manhattan_circle(&board, center, 2).len(), 8);
        assert!(tiles_in_manhattan_circle(&board, center, -1).is_empty());
    }

    #[test]
    fn manhattan_disk_clips_at_edges() {
        let board = BoardBuilder::new(9).build().unwrap();
        let corner = loc(0, 0);
        assert_eq!(
            locations(&tiles_in_manhattan_circle(&board, corner, 1)),
            vec![loc(0, 0), loc(0, 1), loc(1, 0)]
        );
        assert_eq!(tiles_on_manhattan_circle(&board, corner, 1).len(), 2);
    }

    #[test]
    fn huge_radius_covers_the_board_once() {
        let board = BoardBuilder::new(3).build().unwrap();
        let disk = tiles_in_manhattan_circle(&board, loc(1, 1), i32::MAX);
        assert_eq!(
            locations(&disk),
            board.tiles().map(|t| t.location).collect::<Vec<_>>()
        );
        assert!(tiles_on_manhattan_circle(&board, loc(1, 1), i32::MAX).is_empty());
        assert_eq!(tiles_on_manhattan_circle(&board, loc(0, 0), 4).len(), 1);
    }

    #[test]
    fn manhattan_disk_ignores_occupancy() {
        let board = BoardBuilder::new(5)
            .obstacle(1, 2)
            .obstacle(2, 1)
            .obstacle(2, 3)
            .obstacle(3, 2)
            .build()
            .unwrap();
        assert_eq!(tiles_in_manhattan_circle(&board, loc(2, 2), 2).len(), 13);
        assert_eq!(tiles_in_path_circle(&board, loc(2, 2), 2).len(), 5);
    }

    #[test]
    fn path_disk_radius_zero_and_negative() {
        let board = BoardBuilder::new(3).hero(1, 1, 0, 0, 100).build().unwrap();
        assert_eq!(
            locations(&tiles_in_path_circle(&board, loc(1, 1), 0)),
            vec![loc(1, 1)]
        );
        assert!(tiles_in_path_circle(&board, loc(1, 1), -1).is_empty());
    }

    #[test]
    fn path_disk_stops_at_occupied_tiles() {
        // Hero in a corridor: the mine at (0,1) is included but nothing
        // behind it is.
        let board = BoardBuilder::new(4)
            .hero(0, 0, 0, 0, 100)
            .mine(0, 1, None)
            .obstacle(1, 0)
            .build()
            .unwrap();

        let disk = locations(&tiles_in_path_circle(&board, loc(0, 0), 3));
        assert_eq!(disk, vec![loc(0, 0), loc(0, 1), loc(1, 0)]);
    }

    #[test]
    fn path_disk_respects_hop_limit() {
        let board = BoardBuilder::new(5).build().unwrap();
        let disk = tiles_in_path_circle(&board, loc(2, 2), 1);
        assert_eq!(
            locations(&disk),
            vec![loc(2, 2), loc(1, 2), loc(2, 3), loc(3, 2), loc(2, 1)]
        );
        // On an open board path and Manhattan disks agree.
        assert_eq!(tiles_in_path_circle(&board, loc(2, 2), 2).len(), 13);
    }

    #[test]
    fn path_ring_is_exact_distance() {
        let board = BoardBuilder::new(5).obstacle(1, 2).build().unwrap();
        let ring = locations(&tiles_on_path_circle(&board, loc(2, 2), 2));
        // (0,2) is only reachable in 4 hops around the obstacle.
        assert!(!ring.contains(&loc(0, 2)));
        assert!(ring.contains(&loc(1, 1)));
        assert!(ring.contains(&loc(4, 2)));
        assert!(!ring.contains(&loc(1, 2)));
    }

    #[test]
    fn set_helpers_keep_order() {
        let board = BoardBuilder::new(3).build().unwrap();
        let all: Vec<&Tile> = board.tiles().collect();
        let middle = tiles_in_manhattan_circle(&board, loc(1, 1), 0);
        assert_eq!(difference(all.clone(), &middle).len(), 8);
        assert_eq!(locations(&intersection(&all, &middle)), vec![loc(1, 1)]);
    }
}
