//! Door-maze connectivity problem.
//!
//! The canonical instantiation of the benchmark contract: a binary maze
//! whose border carries two deterministically placed door openings. Quality
//! asks for a single connected region with a long enough door-to-door path,
//! diversity is normalized Hamming distance between flat encodings, and
//! controllability targets an exact path length.

use super::grid;
use crate::error::Error;
use crate::problem::Problem;
use crate::random::create_rng;
use crate::reward::range_reward;
use crate::space::{ArraySpace, Content, FreezeOptions, FrozenArraySpace, IntSpace, Space};
use rand::Rng;

/// Cell types of the maze interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Passable floor.
    Empty = 0,
    /// Solid wall.
    Wall = 1,
}

impl Tile {
    /// The cell value this tile is encoded as.
    pub const fn value(self) -> i64 {
        self as i64
    }
}

/// Configuration for [`DoorMazeProblem`].
///
/// # Builder Pattern
///
/// ```
/// use pcg_bench::probs::DoorMazeConfig;
///
/// let config = DoorMazeConfig::default()
///     .with_size(20, 10)
///     .with_target(40)
///     .with_door_seed(7);
/// ```
#[derive(Debug, Clone)]
pub struct DoorMazeConfig {
    /// Interior grid width.
    pub width: usize,

    /// Interior grid height.
    pub height: usize,

    /// Target door-to-door path length for full quality.
    ///
    /// `None` defaults to half the maximum achievable path.
    pub target: Option<i64>,

    /// Seed of the deterministic door placement.
    pub door_seed: u64,

    /// Minimum perimeter distance between the two doors; must be at least 1.
    ///
    /// `None` defaults to `min(width, height)`.
    pub door_separation: Option<usize>,

    /// Fraction of cells two contents must differ in for full pairwise
    /// diversity; must lie in `(0, 1]`.
    pub diversity: f64,

    /// Optional frozen-tile constraints on the content space.
    pub freeze: Option<FreezeOptions<i64>>,
}

impl Default for DoorMazeConfig {
    fn default() -> Self {
        Self {
            width: 14,
            height: 14,
            target: None,
            door_seed: 42,
            door_separation: None,
            diversity: 0.4,
            freeze: None,
        }
    }
}

impl DoorMazeConfig {
    /// Sets the interior grid size.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the target door-to-door path length.
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the door placement seed.
    pub fn with_door_seed(mut self, seed: u64) -> Self {
        self.door_seed = seed;
        self
    }

    /// Sets the minimum perimeter distance between the doors.
    pub fn with_door_separation(mut self, separation: usize) -> Self {
        self.door_separation = Some(separation);
        self
    }

    /// Sets the diversity threshold fraction.
    pub fn with_diversity(mut self, diversity: f64) -> Self {
        self.diversity = diversity;
        self
    }

    /// Adds frozen-tile constraints to the content space.
    pub fn with_freeze(mut self, freeze: FreezeOptions<i64>) -> Self {
        self.freeze = Some(freeze);
        self
    }

    /// Checks parameter sanity without constructing the problem.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if let Some(target) = self.target {
            if target < 1 {
                return Err(Error::Config(format!(
                    "path target must be at least 1, got {target}"
                )));
            }
            let max_path = max_path_for(self.width, self.height);
            if target > max_path {
                return Err(Error::Config(format!(
                    "path target {target} exceeds the maximum achievable path {max_path}"
                )));
            }
        }
        if self.door_separation == Some(0) {
            return Err(Error::Config(
                "door separation must be at least 1".into(),
            ));
        }
        // A zero threshold would score identical contents as fully diverse.
        if !(self.diversity > 0.0 && self.diversity <= 1.0) {
            return Err(Error::Config(format!(
                "diversity threshold {} outside (0, 1]",
                self.diversity
            )));
        }
        Ok(())
    }
}

/// Derived features of one door-maze content.
///
/// Computed once per content by [`DoorMazeProblem::info`] and reused by all
/// three scoring functions. Door coordinates and the distance map refer to
/// the augmented `(height+2) x (width+2)` grid.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectivityInfo {
    /// BFS distance from door 1 to door 2; 0 when unreachable.
    pub door_path: i64,
    /// Connected empty regions of the interior (doors excluded).
    pub regions: usize,
    /// Row-major flat encoding of the interior content.
    pub flat: Vec<i64>,
    /// BFS distance map over the augmented grid; -1 for unvisited cells.
    pub d_map: Content<i32>,
    /// First door, `(row, col)` in augmented coordinates.
    pub door1: (usize, usize),
    /// Second door, `(row, col)` in augmented coordinates.
    pub door2: (usize, usize),
}

/// Longest door-to-door path a `width x height` interior can force.
fn max_path_for(width: usize, height: usize) -> i64 {
    let cells = (width * height) as i64;
    (cells + 1) / 2 + width.max(height) as i64
}

/// Places two door openings on the augmented grid border.
///
/// Doors land on non-corner border cells of the `(height+2) x (width+2)`
/// augmented grid, with a perimeter walk distance of at least
/// `min_separation` between them; a separation below 1 is treated as 1, so
/// the doors are always distinct. Placement is a pure function of its
/// arguments: the same inputs always produce the same pair.
///
/// Fails with [`Error::GridTooSmall`] when no border cell satisfies the
/// separation constraint against the first door.
pub fn place_doors(
    width: usize,
    height: usize,
    seed: u64,
    min_separation: usize,
) -> Result<((usize, usize), (usize, usize)), Error> {
    let (aw, ah) = (width + 2, height + 2);

    // Non-corner border cells as an ordered perimeter cycle, clockwise
    // from the top-left.
    let mut border = Vec::with_capacity(2 * (width + height));
    border.extend((1..aw - 1).map(|c| (0, c)));
    border.extend((1..ah - 1).map(|r| (r, aw - 1)));
    border.extend((1..aw - 1).rev().map(|c| (ah - 1, c)));
    border.extend((1..ah - 1).rev().map(|r| (r, 0)));

    // Separation 0 would let both doors land on the same cell.
    let min_separation = min_separation.max(1);
    let cycle = border.len();
    let mut rng = create_rng(seed);
    let first = rng.random_range(0..cycle);

    let candidates: Vec<usize> = (0..cycle)
        .filter(|&i| {
            let forward = (i + cycle - first) % cycle;
            let distance = forward.min(cycle - forward);
            distance >= min_separation
        })
        .collect();
    if candidates.is_empty() {
        return Err(Error::GridTooSmall {
            width,
            height,
            min_separation,
        });
    }
    let second = candidates[rng.random_range(0..candidates.len())];
    Ok((border[first], border[second]))
}

/// Binary maze with two door openings in the border wall.
///
/// Content is a `(height, width)` grid over [`Tile`] values; the doors live
/// on the augmented border and are never part of the mutable interior.
/// Control is a target door-to-door path length.
#[derive(Debug, Clone)]
pub struct DoorMazeProblem {
    width: usize,
    height: usize,
    max_path: i64,
    target: i64,
    diversity: f64,
    space: FrozenArraySpace<IntSpace>,
    control: IntSpace,
    door1: (usize, usize),
    door2: (usize, usize),
}

impl DoorMazeProblem {
    /// Constructs the problem, validating the config and placing the doors.
    pub fn new(config: DoorMazeConfig) -> Result<Self, Error> {
        config.validate()?;
        let (width, height) = (config.width, config.height);

        let max_path = max_path_for(width, height);
        let target = config.target.unwrap_or(max_path / 2).max(1);
        let cerror = (target / 10).max(1);

        let base = ArraySpace::new([height, width], IntSpace::new(2));
        let space = match config.freeze {
            Some(options) => FrozenArraySpace::new(base, options)?,
            None => FrozenArraySpace::passthrough(base),
        };
        let control = IntSpace::bounded((target + cerror).min(max_path - 1), max_path);

        let separation = config.door_separation.unwrap_or(width.min(height));
        let (door1, door2) = place_doors(width, height, config.door_seed, separation)?;

        Ok(Self {
            width,
            height,
            max_path,
            target,
            diversity: config.diversity,
            space,
            control,
            door1,
            door2,
        })
    }

    /// Interior grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Interior grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Target door-to-door path length for full quality.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Upper bound used to normalize path rewards.
    pub fn max_path(&self) -> i64 {
        self.max_path
    }

    /// The two door openings in augmented coordinates.
    pub fn doors(&self) -> ((usize, usize), (usize, usize)) {
        (self.door1, self.door2)
    }

    /// The content space, frozen layer included.
    pub fn content_space(&self) -> &FrozenArraySpace<IntSpace> {
        &self.space
    }

    /// Builds the augmented grid: interior padded with walls, doors carved.
    fn augmented(&self, content: &Content<i64>) -> Vec<i64> {
        let (aw, ah) = (self.width + 2, self.height + 2);
        let mut grid = vec![Tile::Wall.value(); aw * ah];
        for r in 0..self.height {
            for c in 0..self.width {
                grid[(r + 1) * aw + (c + 1)] = content.data()[r * self.width + c];
            }
        }
        grid[self.door1.0 * aw + self.door1.1] = Tile::Empty.value();
        grid[self.door2.0 * aw + self.door2.1] = Tile::Empty.value();
        grid
    }
}

impl Problem for DoorMazeProblem {
    type Content = Content<i64>;
    type Control = i64;
    type Info = ConnectivityInfo;

    fn sample_content<R: Rng>(&self, rng: &mut R) -> Content<i64> {
        self.space.sample(rng)
    }

    fn sample_control<R: Rng>(&self, rng: &mut R) -> i64 {
        self.control.sample(rng)
    }

    fn info(&self, content: &Content<i64>) -> Result<ConnectivityInfo, Error> {
        self.space.base().validate(content)?;

        let (aw, ah) = (self.width + 2, self.height + 2);
        let augmented = self.augmented(content);
        let d_map = grid::distance_map(ah, aw, self.door1, |r, c| {
            augmented[r * aw + c] == Tile::Empty.value()
        });

        let at_door2 = d_map[self.door2.0 * aw + self.door2.1];
        let door_path = if at_door2 > 0 { i64::from(at_door2) } else { 0 };

        let regions = grid::count_regions(self.height, self.width, |r, c| {
            content.data()[r * self.width + c] == Tile::Empty.value()
        });

        Ok(ConnectivityInfo {
            door_path,
            regions,
            flat: content.to_flat(),
            d_map: Content::new([ah, aw], d_map)?,
            door1: self.door1,
            door2: self.door2,
        })
    }

    fn quality(&self, info: &ConnectivityInfo) -> f64 {
        let cells = (self.width * self.height) as f64;
        let regions = range_reward(info.regions as f64, 0.0, 1.0, 1.0, Some(cells / 10.0));
        let path = range_reward(
            info.door_path as f64,
            0.0,
            self.target as f64,
            self.max_path as f64,
            None,
        );
        // Product, not mean: a grid whose doors are unreachable from each
        // other scores 0 no matter how few regions it has, and vice versa.
        regions * path
    }

    fn diversity(&self, a: &ConnectivityInfo, b: &ConnectivityInfo) -> f64 {
        let cells = (self.width * self.height) as f64;
        let hamming = a
            .flat
            .iter()
            .zip(&b.flat)
            .filter(|(x, y)| x != y)
            .count();
        range_reward(hamming as f64, 0.0, self.diversity * cells, cells, None)
    }

    fn controllability(&self, info: &ConnectivityInfo, control: &i64) -> f64 {
        let cerror = (control / 10).max(1);
        range_reward(
            info.door_path as f64,
            0.0,
            (control - cerror) as f64,
            (control + cerror) as f64,
            Some(self.max_path as f64),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::evaluate;
    use crate::random::create_rng;

    fn empty_grid(width: usize, height: usize) -> Content<i64> {
        Content::filled([height, width], Tile::Empty.value())
    }

    fn full_grid(width: usize, height: usize) -> Content<i64> {
        Content::filled([height, width], Tile::Wall.value())
    }

    /// Shortest door-to-door route on an obstacle-free augmented grid.
    ///
    /// Doors on different border sides connect by a monotone staircase of
    /// Manhattan length; doors on the same side must dip one row or column
    /// into the interior, adding two steps.
    fn open_grid_route(door1: (usize, usize), door2: (usize, usize), aw: usize, ah: usize) -> i64 {
        let manhattan = door1.0.abs_diff(door2.0) + door1.1.abs_diff(door2.1);
        let same_side = (door1.0 == door2.0 && (door1.0 == 0 || door1.0 == ah - 1))
            || (door1.1 == door2.1 && (door1.1 == 0 || door1.1 == aw - 1));
        (manhattan + if same_side { 2 } else { 0 }) as i64
    }

    #[test]
    fn test_placement_is_deterministic() {
        for seed in 0..30 {
            let a = place_doors(9, 6, seed, 6).unwrap();
            let b = place_doors(9, 6, seed, 6).unwrap();
            assert_eq!(a, b, "seed {seed} gave different doors across calls");
        }
    }

    #[test]
    fn test_placement_respects_constraints() {
        let (width, height, separation) = (9usize, 6usize, 6usize);
        let (aw, ah) = (width + 2, height + 2);
        let corners = [
            (0, 0),
            (0, aw - 1),
            (ah - 1, 0),
            (ah - 1, aw - 1),
        ];
        for seed in 0..100 {
            let (door1, door2) = place_doors(width, height, seed, separation).unwrap();
            for door in [door1, door2] {
                let on_border =
                    door.0 == 0 || door.0 == ah - 1 || door.1 == 0 || door.1 == aw - 1;
                assert!(on_border, "seed {seed}: door {door:?} not on border");
                assert!(
                    !corners.contains(&door),
                    "seed {seed}: door {door:?} on a corner"
                );
            }
            assert_ne!(door1, door2, "seed {seed}: doors coincide");
        }
    }

    #[test]
    fn test_placement_keeps_doors_distinct_at_zero_separation() {
        for seed in 0..50 {
            let (door1, door2) = place_doors(5, 5, seed, 0).unwrap();
            assert_ne!(door1, door2, "seed {seed}: doors coincide");
        }
    }

    #[test]
    fn test_placement_rejects_impossible_separation() {
        // Perimeter of the 4x4 augmented grid caps the walk distance at 8.
        let err = place_doors(4, 4, 42, 100).unwrap_err();
        assert_eq!(
            err,
            Error::GridTooSmall {
                width: 4,
                height: 4,
                min_separation: 100
            }
        );
    }

    #[test]
    fn test_open_grid_scenario() {
        for seed in [0u64, 7, 42, 99] {
            let problem = DoorMazeProblem::new(
                DoorMazeConfig::default()
                    .with_size(6, 6)
                    .with_target(2)
                    .with_door_seed(seed),
            )
            .unwrap();
            let info = problem.info(&empty_grid(6, 6)).unwrap();

            assert_eq!(info.regions, 1, "seed {seed}");
            let (door1, door2) = problem.doors();
            assert_eq!(
                info.door_path,
                open_grid_route(door1, door2, 8, 8),
                "seed {seed}: wrong path on the open grid"
            );
            // One region and a path well past the tiny target.
            assert_eq!(problem.quality(&info), 1.0, "seed {seed}");
        }
    }

    #[test]
    fn test_open_grid_below_target_has_partial_quality() {
        // An open 6x6 grid's direct route is at most width + height + 2
        // steps, well short of a target of 20.
        let problem = DoorMazeProblem::new(
            DoorMazeConfig::default().with_size(6, 6).with_target(20),
        )
        .unwrap();
        let info = problem.info(&empty_grid(6, 6)).unwrap();
        assert!(info.door_path < problem.target());
        let quality = problem.quality(&info);
        assert!(quality < 1.0);
        assert!(quality > 0.0, "a connected route earns partial credit");
    }

    #[test]
    fn test_disconnected_scenario() {
        let (width, height) = (5usize, 5usize);
        // Unbroken vertical wall through interior column 2.
        let mut data = vec![Tile::Empty.value(); width * height];
        for r in 0..height {
            data[r * width + 2] = Tile::Wall.value();
        }
        let content = Content::new([height, width], data).unwrap();

        // Find a seed whose doors open on opposite vertical borders, so the
        // wall separates them.
        let seed = (0..200)
            .find(|&seed| {
                place_doors(width, height, seed, width.min(height))
                    .is_ok_and(|(d1, d2)| d1.1 == 0 && d2.1 == width + 1)
            })
            .expect("some seed places doors left and right");

        let problem = DoorMazeProblem::new(
            DoorMazeConfig::default()
                .with_size(width, height)
                .with_door_seed(seed),
        )
        .unwrap();
        let info = problem.info(&content).unwrap();

        assert_eq!(info.regions, 2);
        assert_eq!(info.door_path, 0, "wall should cut the doors apart");
        // Unreachable doors zero the score no matter the region count.
        assert_eq!(problem.quality(&info), 0.0);
    }

    #[test]
    fn test_all_walls_scores_zero() {
        let problem = DoorMazeProblem::new(DoorMazeConfig::default().with_size(5, 5)).unwrap();
        let info = problem.info(&full_grid(5, 5)).unwrap();
        assert_eq!(info.regions, 0);
        assert_eq!(info.door_path, 0);
        assert_eq!(problem.quality(&info), 0.0);
    }

    #[test]
    fn test_info_is_deterministic() {
        let problem = DoorMazeProblem::new(DoorMazeConfig::default().with_size(6, 4)).unwrap();
        let mut rng = create_rng(3);
        let content = problem.sample_content(&mut rng);
        let a = problem.info(&content).unwrap();
        let b = problem.info(&content).unwrap();
        assert_eq!(a.door_path, b.door_path);
        assert_eq!(a.regions, b.regions);
        assert_eq!(a.flat, b.flat);
        assert_eq!(a.d_map, b.d_map);
    }

    #[test]
    fn test_info_rejects_bad_content() {
        let problem = DoorMazeProblem::new(DoorMazeConfig::default().with_size(6, 4)).unwrap();
        let wrong_shape = empty_grid(4, 6);
        assert!(matches!(
            problem.info(&wrong_shape).unwrap_err(),
            Error::ShapeMismatch { .. }
        ));

        let out_of_range = Content::filled([4, 6], 5i64);
        assert!(matches!(
            problem.info(&out_of_range).unwrap_err(),
            Error::ValueOutOfDomain { .. }
        ));
    }

    #[test]
    fn test_controllability_plateau_and_falloff() {
        let problem = DoorMazeProblem::new(
            DoorMazeConfig::default().with_size(6, 6).with_target(2),
        )
        .unwrap();
        let info = problem.info(&empty_grid(6, 6)).unwrap();
        let path = info.door_path;

        // Hitting the target exactly is full marks.
        assert_eq!(problem.controllability(&info, &path), 1.0);
        // Within tolerance still scores 1.
        assert_eq!(problem.controllability(&info, &(path + 1)), 1.0);
        // Far away decays below 1.
        let far = problem.max_path();
        assert!(problem.controllability(&info, &far) < 1.0);
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let problem = DoorMazeProblem::new(DoorMazeConfig::default().with_size(7, 5)).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let content = problem.sample_content(&mut rng);
            let info = problem.info(&content).unwrap();
            let quality = problem.quality(&info);
            assert!((0.0..=1.0).contains(&quality));

            let control = problem.sample_control(&mut rng);
            let controllability = problem.controllability(&info, &control);
            assert!((0.0..=1.0).contains(&controllability));
        }
    }

    #[test]
    fn test_diversity_pairwise() {
        let problem = DoorMazeProblem::new(DoorMazeConfig::default().with_size(5, 5)).unwrap();
        let empty = problem.info(&empty_grid(5, 5)).unwrap();
        let full = problem.info(&full_grid(5, 5)).unwrap();

        assert_eq!(problem.diversity(&empty, &empty), 0.0);
        // Every cell differs, far past the 40% threshold.
        assert_eq!(problem.diversity(&empty, &full), 1.0);
    }

    #[test]
    fn test_frozen_variant_pins_cells() {
        let problem = DoorMazeProblem::new(
            DoorMazeConfig::default().with_size(6, 6).with_freeze(
                FreezeOptions::Positions {
                    value: Tile::Wall.value(),
                    positions: vec![vec![0, 0], vec![3, 3]],
                },
            ),
        )
        .unwrap();
        assert_eq!(problem.content_space().frozen_count(), 2);

        let mut rng = create_rng(11);
        for _ in 0..20 {
            let content = problem.sample_content(&mut rng);
            assert_eq!(content.get(&[0, 0]), Some(&Tile::Wall.value()));
            assert_eq!(content.get(&[3, 3]), Some(&Tile::Wall.value()));
            // Frozen content still evaluates normally.
            problem.info(&content).unwrap();
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(matches!(
            DoorMazeProblem::new(DoorMazeConfig::default().with_size(0, 5)).unwrap_err(),
            Error::Config(_)
        ));
        assert!(matches!(
            DoorMazeProblem::new(DoorMazeConfig::default().with_target(0)).unwrap_err(),
            Error::Config(_)
        ));
        assert!(matches!(
            DoorMazeProblem::new(DoorMazeConfig::default().with_diversity(1.5)).unwrap_err(),
            Error::Config(_)
        ));
        assert!(matches!(
            DoorMazeProblem::new(DoorMazeConfig::default().with_door_separation(0)).unwrap_err(),
            Error::Config(_)
        ));
        // 4x4 caps the achievable path at (16 + 1) / 2 + 4 = 12.
        assert!(matches!(
            DoorMazeProblem::new(
                DoorMazeConfig::default().with_size(4, 4).with_target(13)
            )
            .unwrap_err(),
            Error::Config(_)
        ));
        DoorMazeProblem::new(DoorMazeConfig::default().with_size(4, 4).with_target(12)).unwrap();
    }

    #[test]
    fn test_batch_evaluation_end_to_end() {
        let problem = DoorMazeProblem::new(
            DoorMazeConfig::default().with_size(6, 6).with_target(2),
        )
        .unwrap();
        let mut rng = create_rng(42);
        let batch = [
            empty_grid(6, 6),
            problem.sample_content(&mut rng),
            problem.sample_content(&mut rng),
        ];
        let controls = [problem.target()];
        let report = evaluate(&problem, &batch, Some(&controls)).unwrap();

        assert_eq!(report.quality.len(), 3);
        assert_eq!(report.quality[0], 1.0);
        assert!((0.0..=1.0).contains(&report.diversity));
        assert!(report.diversity > 0.0, "random grids should differ");
        assert_eq!(report.controllability.unwrap().len(), 3);
        assert!(report.details.errors.iter().all(Option::is_none));
    }
}
