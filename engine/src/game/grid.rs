use super::session_rng::SessionRng;
use super::types::Point;

// Playable area in tile units. Rows above hud_rows belong to the score bar
// and are outside the field for both movement and spawning.
#[derive(Clone, Debug)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
    pub hud_rows: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32, hud_rows: i32) -> Self {
        Self {
            cols,
            rows,
            hud_rows,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.cols && point.y >= self.hud_rows && point.y < self.rows
    }

    pub fn random_cell(&self, rng: &mut SessionRng) -> Point {
        Point::new(
            rng.random_range(0..self.cols),
            rng.random_range(self.hud_rows..self.rows),
        )
    }

    pub fn playable_cells(&self) -> usize {
        (self.cols as usize) * ((self.rows - self.hud_rows) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_respects_hud_band() {
        let grid = Grid::new(15, 16, 1);
        assert!(grid.contains(Point::new(0, 1)));
        assert!(grid.contains(Point::new(14, 15)));
        assert!(!grid.contains(Point::new(0, 0)));
        assert!(!grid.contains(Point::new(-1, 5)));
        assert!(!grid.contains(Point::new(15, 5)));
        assert!(!grid.contains(Point::new(5, 16)));
    }

    #[test]
    fn test_random_cell_stays_in_playable_band() {
        let grid = Grid::new(10, 12, 2);
        let mut rng = SessionRng::new(42);
        for _ in 0..1000 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.contains(cell));
        }
    }

    #[test]
    fn test_playable_cells_excludes_hud() {
        let grid = Grid::new(10, 12, 2);
        assert_eq!(grid.playable_cells(), 100);
    }
}
