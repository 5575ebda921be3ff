use std::collections::VecDeque;

use super::types::{Direction, Point};

pub const MIN_SEGMENTS: usize = 3;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    pub fn new(head: Point, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        let mut body = VecDeque::with_capacity(MIN_SEGMENTS);
        for i in 0..MIN_SEGMENTS as i32 {
            body.push_back(Point::new(head.x - dx * i, head.y - dy * i));
        }

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    pub fn hits_own_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn steer(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = direction;
        }
    }

    // The pending direction commits only here, so two inputs between moves
    // cannot fold the head back through the neck.
    pub fn advance(&mut self) {
        self.direction = self.pending_direction;
        let (dx, dy) = self.direction.delta();
        let head = self.head();
        self.body.push_front(Point::new(head.x + dx, head.y + dy));
        self.body.pop_back();
    }

    pub fn grow(&mut self, count: usize) {
        for _ in 0..count {
            let last = *self.body.back().expect("Snake body should never be empty");
            let prev = self.body.iter().nth_back(1).copied().unwrap_or(last);
            self.body
                .push_back(Point::new(last.x + (last.x - prev.x), last.y + (last.y - prev.y)));
        }
    }

    pub fn shrink(&mut self, count: usize) {
        for _ in 0..count {
            if self.body.len() <= MIN_SEGMENTS {
                break;
            }
            self.body.remove(self.body.len() - 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_moving_right() -> Snake {
        Snake::new(Point::new(5, 8), Direction::Right)
    }

    #[test]
    fn test_new_builds_three_segments_trailing_the_head() {
        let snake = snake_moving_right();
        let segments: Vec<Point> = snake.segments().collect();
        assert_eq!(
            segments,
            vec![Point::new(5, 8), Point::new(4, 8), Point::new(3, 8)]
        );
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = snake_moving_right();
        for _ in 0..20 {
            snake.advance();
            assert_eq!(snake.len(), MIN_SEGMENTS);
        }
    }

    #[test]
    fn test_advance_follows_the_leader() {
        let mut snake = snake_moving_right();
        snake.steer(Direction::Down);
        snake.advance();

        let segments: Vec<Point> = snake.segments().collect();
        assert_eq!(
            segments,
            vec![Point::new(5, 9), Point::new(5, 8), Point::new(4, 8)]
        );
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut snake = snake_moving_right();
        snake.steer(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Right);

        snake.advance();
        assert_eq!(snake.head(), Point::new(6, 8));
    }

    #[test]
    fn test_steer_rejects_reversal_of_committed_direction_only() {
        let mut snake = snake_moving_right();
        snake.steer(Direction::Up);
        // Down opposes the buffered Up, but the snake is still traveling
        // Right until the next move, so it is accepted.
        snake.steer(Direction::Down);
        assert_eq!(snake.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_grow_extrapolates_tail_offset() {
        let mut snake = snake_moving_right();
        snake.grow(1);

        assert_eq!(snake.len(), 4);
        let segments: Vec<Point> = snake.segments().collect();
        assert_eq!(segments[3], Point::new(2, 8));
    }

    #[test]
    fn test_grow_after_turn_continues_tail_direction() {
        let mut snake = snake_moving_right();
        snake.steer(Direction::Up);
        snake.advance();
        // Tail still lies along the horizontal axis, so growth extends it there.
        snake.grow(2);

        let segments: Vec<Point> = snake.segments().collect();
        assert_eq!(segments[3], Point::new(3, 8));
        assert_eq!(segments[4], Point::new(2, 8));
    }

    #[test]
    fn test_shrink_removes_segment_before_tail() {
        let mut snake = snake_moving_right();
        snake.grow(3);
        assert_eq!(snake.len(), 6);

        let tail_before = snake.segments().last().unwrap();
        snake.shrink(1);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.segments().last().unwrap(), tail_before);
    }

    #[test]
    fn test_shrink_stops_at_floor() {
        let mut snake = snake_moving_right();
        snake.grow(2);
        snake.shrink(10);
        assert_eq!(snake.len(), MIN_SEGMENTS);

        snake.shrink(1);
        assert_eq!(snake.len(), MIN_SEGMENTS);
    }

    #[test]
    fn test_hits_own_body_after_loop() {
        let mut snake = snake_moving_right();
        snake.grow(4);

        snake.steer(Direction::Down);
        snake.advance();
        snake.steer(Direction::Left);
        snake.advance();
        snake.steer(Direction::Up);
        snake.advance();

        assert!(snake.hits_own_body());
    }

    #[test]
    fn test_occupies_checks_every_segment() {
        let snake = snake_moving_right();
        assert!(snake.occupies(Point::new(3, 8)));
        assert!(!snake.occupies(Point::new(6, 8)));
    }
}
