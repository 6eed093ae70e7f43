//! Word placement on an occupancy grid
//!
//! The grid tracks which pixels are taken (by placed words or by masked-out
//! regions) and answers "is this rectangle free" in O(1) through a
//! summed-area table. Candidate positions are sampled from a seeded RNG so
//! layouts are reproducible.

use image::GrayImage;
use rand::rngs::StdRng;
use rand::Rng;

/// Mask pixels at or above this luminance are excluded from placement,
/// so words fill only the dark shape of the mask.
pub const MASK_THRESHOLD: u8 = 250;

/// Positions sampled before giving up on the current font size.
const PLACEMENT_ATTEMPTS: usize = 300;

/// Pixel occupancy grid with a summed-area table for rectangle queries.
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    occupied: Vec<bool>,
    // (width + 1) x (height + 1) summed-area table over `occupied`
    integral: Vec<u32>,
}

impl OccupancyGrid {
    pub fn new(width: u32, height: u32) -> Self {
        let mut grid = Self {
            width,
            height,
            occupied: vec![false; (width * height) as usize],
            integral: Vec::new(),
        };
        grid.rebuild_integral();
        grid
    }

    /// Mark mask regions as occupied. The mask must match the grid
    /// dimensions.
    pub fn apply_mask(&mut self, mask: &GrayImage) {
        debug_assert_eq!(mask.dimensions(), (self.width, self.height));
        for (x, y, pixel) in mask.enumerate_pixels() {
            if pixel.0[0] >= MASK_THRESHOLD {
                self.occupied[(y * self.width + x) as usize] = true;
            }
        }
        self.rebuild_integral();
    }

    fn rebuild_integral(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;
        self.integral = vec![0u32; (w + 1) * (h + 1)];

        for y in 0..h {
            let mut row_sum = 0u32;
            for x in 0..w {
                row_sum += self.occupied[y * w + x] as u32;
                self.integral[(y + 1) * (w + 1) + (x + 1)] =
                    self.integral[y * (w + 1) + (x + 1)] + row_sum;
            }
        }
    }

    fn region_sum(&self, x: u32, y: u32, w: u32, h: u32) -> u32 {
        let stride = (self.width + 1) as usize;
        let (x, y, w, h) = (x as usize, y as usize, w as usize, h as usize);
        self.integral[(y + h) * stride + (x + w)] + self.integral[y * stride + x]
            - self.integral[y * stride + (x + w)]
            - self.integral[(y + h) * stride + x]
    }

    /// Check whether a w x h rectangle at (x, y) is entirely free.
    pub fn is_free(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        if x + w > self.width || y + h > self.height {
            return false;
        }
        self.region_sum(x, y, w, h) == 0
    }

    /// Mark a rectangle as occupied.
    pub fn mark(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for yy in y..y_end {
            for xx in x..x_end {
                self.occupied[(yy * self.width + xx) as usize] = true;
            }
        }
        self.rebuild_integral();
    }

    /// Sample random positions until a free spot for a w x h rectangle is
    /// found, or the attempt budget runs out.
    pub fn find_spot(&self, w: u32, h: u32, rng: &mut StdRng) -> Option<(u32, u32)> {
        if w == 0 || h == 0 || w > self.width || h > self.height {
            return None;
        }

        let max_x = self.width - w;
        let max_y = self.height - h;

        for _ in 0..PLACEMENT_ATTEMPTS {
            let x = rng.gen_range(0..=max_x);
            let y = rng.gen_range(0..=max_y);
            if self.is_free(x, y, w, h) {
                return Some((x, y));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use rand::SeedableRng;

    #[test]
    fn test_empty_grid_is_free() {
        let grid = OccupancyGrid::new(100, 100);
        assert!(grid.is_free(0, 0, 100, 100));
        assert!(grid.is_free(50, 50, 10, 10));
    }

    #[test]
    fn test_out_of_bounds_not_free() {
        let grid = OccupancyGrid::new(100, 100);
        assert!(!grid.is_free(95, 95, 10, 10));
    }

    #[test]
    fn test_mark_blocks_region() {
        let mut grid = OccupancyGrid::new(100, 100);
        grid.mark(10, 10, 20, 20);

        assert!(!grid.is_free(10, 10, 20, 20));
        assert!(!grid.is_free(15, 15, 5, 5));
        assert!(!grid.is_free(5, 5, 10, 10)); // overlaps the corner
        assert!(grid.is_free(40, 40, 20, 20));
        assert!(grid.is_free(30, 10, 10, 10)); // adjacent, not overlapping
    }

    #[test]
    fn test_find_spot_avoids_occupied() {
        let mut grid = OccupancyGrid::new(40, 40);
        // Block the top half; placements must land in the bottom half.
        grid.mark(0, 0, 40, 20);

        let mut rng = StdRng::seed_from_u64(42);
        let (x, y) = grid
            .find_spot(10, 10, &mut rng)
            .expect("bottom half has room");
        assert!(y >= 20);
        assert!(grid.is_free(x, y, 10, 10));
    }

    #[test]
    fn test_find_spot_full_grid() {
        let mut grid = OccupancyGrid::new(20, 20);
        grid.mark(0, 0, 20, 20);

        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(grid.find_spot(5, 5, &mut rng), None);
    }

    #[test]
    fn test_find_spot_too_large() {
        let grid = OccupancyGrid::new(20, 20);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(grid.find_spot(30, 5, &mut rng), None);
        assert_eq!(grid.find_spot(0, 5, &mut rng), None);
    }

    #[test]
    fn test_find_spot_deterministic() {
        let grid = OccupancyGrid::new(200, 200);

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        assert_eq!(
            grid.find_spot(20, 10, &mut rng_a),
            grid.find_spot(20, 10, &mut rng_b)
        );
    }

    #[test]
    fn test_apply_mask_blocks_white_regions() {
        let mut grid = OccupancyGrid::new(10, 10);
        // White left half, black right half.
        let mask = GrayImage::from_fn(10, 10, |x, _| {
            if x < 5 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        grid.apply_mask(&mask);

        assert!(!grid.is_free(0, 0, 5, 10));
        assert!(grid.is_free(5, 0, 5, 10));
    }
}
