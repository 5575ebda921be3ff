use super::session_rng::SessionRng;
use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FruitKind {
    Normal,
    Red,
    Blue,
    Orange,
    Purple,
}

impl FruitKind {
    pub const SPECIAL: [FruitKind; 4] = [
        FruitKind::Red,
        FruitKind::Blue,
        FruitKind::Orange,
        FruitKind::Purple,
    ];

    // One in four fruits is special, uniform across the special kinds.
    pub fn roll(rng: &mut SessionRng) -> Self {
        if rng.random_range(0..4) == 0 {
            Self::SPECIAL[rng.random_range(0..Self::SPECIAL.len())]
        } else {
            FruitKind::Normal
        }
    }

    pub fn is_special(&self) -> bool {
        !matches!(self, FruitKind::Normal)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fruit {
    pub position: Point,
    pub kind: FruitKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_covers_all_kinds() {
        let mut rng = SessionRng::new(42);
        let mut seen_normal = 0u32;
        let mut seen_special = 0u32;
        for _ in 0..1000 {
            match FruitKind::roll(&mut rng) {
                FruitKind::Normal => seen_normal += 1,
                _ => seen_special += 1,
            }
        }
        // Expected split is 3:1; leave generous slack for the fixed seed.
        assert!(seen_normal > 600);
        assert!(seen_special > 150);
    }

    #[test]
    fn test_special_kinds_are_all_special() {
        for kind in FruitKind::SPECIAL {
            assert!(kind.is_special());
        }
        assert!(!FruitKind::Normal.is_special());
    }
}
