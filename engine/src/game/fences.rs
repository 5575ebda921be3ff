use super::types::Point;

#[derive(Clone, Debug)]
pub struct FenceField {
    positions: Vec<Point>,
    capacity: usize,
}

impl FenceField {
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: Vec::new(),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn try_append(&mut self, position: Point) -> bool {
        if self.positions.len() >= self.capacity {
            return false;
        }
        self.positions.push(position);
        true
    }

    pub fn contains(&self, position: Point) -> bool {
        self.positions.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.positions.len() >= self.capacity
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }
}
