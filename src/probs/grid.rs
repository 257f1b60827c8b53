//! Grid analysis primitives shared by the connectivity problems.
//!
//! Both operate on a logical `rows x cols` grid through a passability
//! predicate, so they work equally on interior content and on augmented
//! grids with carved openings.

use std::collections::VecDeque;

const NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Breadth-first distance map from `start` over axis-adjacent passable cells.
///
/// Returns a row-major map of non-negative distances, with `-1` for cells
/// never reached. A non-passable `start` yields an all-`-1` map.
pub fn distance_map(
    rows: usize,
    cols: usize,
    start: (usize, usize),
    passable: impl Fn(usize, usize) -> bool,
) -> Vec<i32> {
    let mut map = vec![-1i32; rows * cols];
    if start.0 >= rows || start.1 >= cols || !passable(start.0, start.1) {
        return map;
    }

    map[start.0 * cols + start.1] = 0;
    let mut queue = VecDeque::from([start]);
    while let Some((r, c)) = queue.pop_front() {
        let here = map[r * cols + c];
        for (dr, dc) in NEIGHBORS {
            let (nr, nc) = (r as i64 + dr, c as i64 + dc);
            if nr < 0 || nc < 0 || nr >= rows as i64 || nc >= cols as i64 {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if map[nr * cols + nc] == -1 && passable(nr, nc) {
                map[nr * cols + nc] = here + 1;
                queue.push_back((nr, nc));
            }
        }
    }
    map
}

/// Counts connected components of passable cells (4-connectivity).
///
/// A grid with no passable cell has zero regions.
pub fn count_regions(
    rows: usize,
    cols: usize,
    passable: impl Fn(usize, usize) -> bool,
) -> usize {
    let mut visited = vec![false; rows * cols];
    let mut regions = 0usize;
    for r in 0..rows {
        for c in 0..cols {
            if visited[r * cols + c] || !passable(r, c) {
                continue;
            }
            regions += 1;
            // Flood fill this component.
            let mut queue = VecDeque::from([(r, c)]);
            visited[r * cols + c] = true;
            while let Some((fr, fc)) = queue.pop_front() {
                for (dr, dc) in NEIGHBORS {
                    let (nr, nc) = (fr as i64 + dr, fc as i64 + dc);
                    if nr < 0 || nc < 0 || nr >= rows as i64 || nc >= cols as i64 {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    if !visited[nr * cols + nc] && passable(nr, nc) {
                        visited[nr * cols + nc] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
        }
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_map_open_grid() {
        let map = distance_map(3, 3, (0, 0), |_, _| true);
        // Manhattan distances on an obstacle-free grid.
        assert_eq!(map, vec![0, 1, 2, 1, 2, 3, 2, 3, 4]);
    }

    #[test]
    fn test_distance_map_with_wall() {
        // Vertical wall in the middle column, gap at the bottom.
        let wall = |r: usize, c: usize| !(c == 1 && r < 2);
        let map = distance_map(3, 3, (0, 0), wall);
        assert_eq!(map[0], 0);
        assert_eq!(map[1], -1);
        // Around the wall: down, down, right, right, up, up.
        assert_eq!(map[2], 6);
    }

    #[test]
    fn test_distance_map_unreachable_start() {
        let map = distance_map(2, 2, (0, 0), |_, _| false);
        assert!(map.iter().all(|&d| d == -1));
    }

    #[test]
    fn test_count_regions_single() {
        assert_eq!(count_regions(3, 3, |_, _| true), 1);
    }

    #[test]
    fn test_count_regions_split_by_wall() {
        // Unbroken middle column wall splits the grid in two.
        let passable = |_: usize, c: usize| c != 1;
        assert_eq!(count_regions(3, 3, passable), 2);
    }

    #[test]
    fn test_count_regions_empty() {
        assert_eq!(count_regions(3, 3, |_, _| false), 0);
    }

    #[test]
    fn test_count_regions_diagonal_is_not_adjacent() {
        // Two passable cells touching only diagonally are separate regions.
        let passable = |r: usize, c: usize| (r, c) == (0, 0) || (r, c) == (1, 1);
        assert_eq!(count_regions(2, 2, passable), 2);
    }
}
