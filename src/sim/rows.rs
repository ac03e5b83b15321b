//! Procedural platform row generation
//!
//! A row spans the playfield width and is cut into 1-5 gaps, each wide
//! enough for the ball to pass, with the solid remainder emitted as
//! platform segments. Segments plus gaps tile `[0, width)` exactly, so
//! every generated row is passable by construction.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rect::Rect;
use super::state::Platform;
use crate::consts::*;

/// Layout parameters for generated rows, validated once at run start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowConfig {
    /// Row span; rows tile `[0, width)`
    pub width: i32,
    pub platform_height: i32,
    /// Smallest gap ever cut
    pub base_gap: i32,
    /// Gap widths are drawn from `[base_gap, base_gap + gap_variance]`
    pub gap_variance: i32,
    pub min_gaps: u32,
    pub max_gaps: u32,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            base_gap: BASE_GAP,
            gap_variance: GAP_VARIANCE,
            min_gaps: MIN_GAPS,
            max_gaps: MAX_GAPS,
        }
    }
}

/// A layout that cannot produce a passable row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("gap count range [{min}, {max}] is empty or zero")]
    BadGapCount { min: u32, max: u32 },
    #[error("base gap {base_gap} is narrower than the player clearance {clearance}")]
    GapTooNarrow { base_gap: i32, clearance: i32 },
    #[error("lane width {lane_width} cannot fit a {max_gap} wide gap with solid ends")]
    LaneTooNarrow { lane_width: i32, max_gap: i32 },
}

impl RowConfig {
    /// Reject any configuration that could ever cut an impassable or
    /// negative-width segment. Called once at run start.
    pub fn validate(&self) -> Result<(), RowError> {
        if self.min_gaps == 0 || self.min_gaps > self.max_gaps {
            return Err(RowError::BadGapCount {
                min: self.min_gaps,
                max: self.max_gaps,
            });
        }
        let clearance = PLAYER_SIZE + GAP_CLEARANCE;
        if self.base_gap < clearance {
            return Err(RowError::GapTooNarrow {
                base_gap: self.base_gap,
                clearance,
            });
        }
        // The worst case is the narrowest lane fitting the widest gap plus
        // a solid pixel on each side
        let lane_width = self.width / self.max_gaps as i32;
        let max_gap = self.base_gap + self.gap_variance;
        if lane_width < max_gap + 2 {
            return Err(RowError::LaneTooNarrow {
                lane_width,
                max_gap,
            });
        }
        Ok(())
    }
}

/// Generate one row at vertical position `y` with a random gap count.
pub fn generate_row(cfg: &RowConfig, y: i32, rng: &mut Pcg32) -> Vec<Platform> {
    let num_gaps = rng.random_range(cfg.min_gaps..=cfg.max_gaps);
    generate_row_with_gaps(cfg, y, num_gaps, rng)
}

/// Generate one row with exactly `num_gaps` gaps.
///
/// The row divides into `num_gaps` equal lanes (the integer-division
/// remainder joins the final segment). Each lane gets one gap at a random
/// offset; the solid run from the previous gap's end to the next gap's
/// start is emitted as a single platform, so segments stay contiguous
/// across lane boundaries.
///
/// `cfg` must have been validated; the draw ranges below are non-empty for
/// any configuration `validate` accepts.
pub fn generate_row_with_gaps(
    cfg: &RowConfig,
    y: i32,
    num_gaps: u32,
    rng: &mut Pcg32,
) -> Vec<Platform> {
    let lane_width = cfg.width / num_gaps as i32;
    let mut platforms = Vec::with_capacity(num_gaps as usize + 1);
    let mut cursor = 0;

    for lane in 0..num_gaps as i32 {
        let lane_start = lane * lane_width;
        let gap_width = rng.random_range(cfg.base_gap..=cfg.base_gap + cfg.gap_variance);
        let padding = rng.random_range(1..=lane_width - gap_width - 1);
        let gap_start = lane_start + padding;
        if gap_start > cursor {
            platforms.push(Platform::scrolling(Rect::new(
                cursor,
                y,
                gap_start - cursor,
                cfg.platform_height,
            )));
        }
        cursor = gap_start + gap_width;
    }
    if cursor < cfg.width {
        platforms.push(Platform::scrolling(Rect::new(
            cursor,
            y,
            cfg.width - cursor,
            cfg.platform_height,
        )));
    }

    platforms
}

/// The maximal gap intervals `(start, end)` of a row's segments over
/// `[0, width)`, sorted left to right.
pub fn gap_spans(segments: &[Rect], width: i32) -> Vec<(i32, i32)> {
    let mut solid: Vec<(i32, i32)> = segments.iter().map(|r| (r.left(), r.right())).collect();
    solid.sort_unstable();

    let mut gaps = Vec::new();
    let mut cursor = 0;
    for (left, right) in solid {
        if left > cursor {
            gaps.push((cursor, left));
        }
        cursor = cursor.max(right);
    }
    if cursor < width {
        gaps.push((cursor, width));
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rects(platforms: &[Platform]) -> Vec<Rect> {
        platforms.iter().map(|p| p.movable.rect).collect()
    }

    /// Segments sorted left to right must tile `[0, width)` together with
    /// their gaps: no overlaps, no stray coverage.
    fn assert_exact_tiling(segments: &[Rect], gaps: &[(i32, i32)], width: i32) {
        let mut spans: Vec<(i32, i32)> = segments
            .iter()
            .map(|r| (r.left(), r.right()))
            .chain(gaps.iter().copied())
            .collect();
        spans.sort_unstable();
        let mut cursor = 0;
        for (left, right) in spans {
            assert_eq!(left, cursor, "hole or overlap at {left}");
            assert!(right > left, "empty span at {left}");
            cursor = right;
        }
        assert_eq!(cursor, width);
    }

    #[test]
    fn test_validate_rejects_degenerate_layouts() {
        let narrow_lanes = RowConfig {
            width: 100,
            ..RowConfig::default()
        };
        assert!(matches!(
            narrow_lanes.validate(),
            Err(RowError::LaneTooNarrow { .. })
        ));

        let tight_gap = RowConfig {
            base_gap: PLAYER_SIZE,
            ..RowConfig::default()
        };
        assert!(matches!(
            tight_gap.validate(),
            Err(RowError::GapTooNarrow { .. })
        ));

        let no_gaps = RowConfig {
            min_gaps: 0,
            ..RowConfig::default()
        };
        assert!(matches!(
            no_gaps.validate(),
            Err(RowError::BadGapCount { .. })
        ));

        assert!(RowConfig::default().validate().is_ok());
    }

    #[test]
    fn test_two_gap_row_tiles_400() {
        let cfg = RowConfig {
            width: 400,
            ..RowConfig::default()
        };
        cfg.validate().unwrap();

        for seed in 0..200 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let row = rects(&generate_row_with_gaps(&cfg, 560, 2, &mut rng));

            // Two lanes cut three contiguous solid runs
            assert!(row.len() == 3 || row.len() == 4, "got {} segments", row.len());
            let gaps = gap_spans(&row, cfg.width);
            assert_eq!(gaps.len(), 2);
            for (start, end) in &gaps {
                assert!(end - start >= cfg.base_gap);
                assert!(end - start <= cfg.base_gap + cfg.gap_variance);
            }
            assert_exact_tiling(&row, &gaps, cfg.width);
        }
    }

    #[test]
    fn test_row_geometry() {
        let cfg = RowConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let row = generate_row(&cfg, 560, &mut rng);

        for platform in &row {
            assert!(!platform.is_static);
            assert_eq!(platform.movable.rect.y, 560);
            assert_eq!(platform.movable.rect.height, cfg.platform_height);
            assert_eq!(platform.movable.vel.vy, RISE_RATE);
            assert!(platform.movable.rect.width > 0);
        }
    }

    #[test]
    fn test_every_row_is_passable_across_seeds() {
        let cfg = RowConfig::default();
        for seed in 0..10_000u64 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let row = rects(&generate_row(&cfg, 560, &mut rng));
            let gaps = gap_spans(&row, cfg.width);

            assert!(
                gaps.iter().any(|(start, end)| end - start >= PLAYER_SIZE),
                "seed {seed} produced no passable gap"
            );
            assert!(!gaps.is_empty() && gaps.len() <= cfg.max_gaps as usize);
        }
    }

    #[test]
    fn test_gap_spans() {
        let segments = [
            Rect::new(0, 0, 100, 20),
            Rect::new(150, 0, 100, 20),
            Rect::new(300, 0, 50, 20),
        ];
        assert_eq!(gap_spans(&segments, 400), vec![(100, 150), (250, 300), (350, 400)]);

        // A row with no segments is one big gap
        assert_eq!(gap_spans(&[], 400), vec![(0, 400)]);

        // Full coverage has no gaps
        assert_eq!(gap_spans(&[Rect::new(0, 0, 400, 20)], 400), vec![]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rows_always_tile_exactly(
                seed in proptest::num::u64::ANY,
                width in 400i32..1600,
                num_gaps in 1u32..=5,
            ) {
                let cfg = RowConfig { width, ..RowConfig::default() };
                prop_assume!(cfg.validate().is_ok());

                let mut rng = Pcg32::seed_from_u64(seed);
                let row = rects(&generate_row_with_gaps(&cfg, 560, num_gaps, &mut rng));
                let gaps = gap_spans(&row, width);

                prop_assert_eq!(gaps.len(), num_gaps as usize);
                for (start, end) in &gaps {
                    prop_assert!(end - start >= cfg.base_gap);
                }
                assert_exact_tiling(&row, &gaps, width);
            }
        }
    }
}
