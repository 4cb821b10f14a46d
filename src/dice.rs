use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{DiceEvent, DiceFlavor};

/// A pair of dice. The flavor tags which physical pair this is (the
/// yellow/red production pair, the event pair, ...); `user_set` marks
/// faces imposed by a rule variant instead of rolled, so downstream
/// logic can tell a forced roll from a genuine one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    faces: [u8; 2],
    flavor: DiceFlavor,
    user_set: bool,
}

impl Dice {
    /// Fresh unrolled dice; faces read 0 until the first roll.
    pub fn new(flavor: DiceFlavor) -> Self {
        Self {
            faces: [0, 0],
            flavor,
            user_set: false,
        }
    }

    pub fn roll(&mut self) {
        let mut rng = rand::thread_rng();
        self.roll_with_rng(&mut rng);
    }

    /// Each face drawn independently and uniformly from [1,6]. Clears the
    /// override flag.
    pub fn roll_with_rng(&mut self, rng: &mut impl Rng) {
        self.faces = [rng.gen_range(1..=6), rng.gen_range(1..=6)];
        self.user_set = false;
    }

    /// Forced-dice override used by rule variants that let a player (or a
    /// scenario script) impose the result.
    pub fn set_num(&mut self, faces: [u8; 2], user_set: bool) {
        self.faces = faces;
        self.user_set = user_set;
    }

    pub fn faces(&self) -> [u8; 2] {
        self.faces
    }

    pub fn total(&self) -> u8 {
        self.faces[0] + self.faces[1]
    }

    pub fn flavor(&self) -> DiceFlavor {
        self.flavor
    }

    pub fn is_user_set(&self) -> bool {
        self.user_set
    }

    /// Event triggered by the first face, for the event pair. `None` for
    /// unrolled dice or faces outside the die's range.
    pub fn event(&self) -> Option<DiceEvent> {
        DiceEvent::from_face(self.faces[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn roll_stays_in_range_and_clears_override() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut dice = Dice::new(DiceFlavor::YellowRed);
        dice.set_num([6, 6], true);
        assert!(dice.is_user_set());

        for _ in 0..1000 {
            dice.roll_with_rng(&mut rng);
            let [a, b] = dice.faces();
            assert!((1..=6).contains(&a));
            assert!((1..=6).contains(&b));
            assert!(!dice.is_user_set());
        }
    }

    #[test]
    fn roll_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut dice = Dice::new(DiceFlavor::None);
        let mut counts = [0u32; 6];
        let rolls = 6000;
        for _ in 0..rolls {
            dice.roll_with_rng(&mut rng);
            counts[(dice.faces()[0] - 1) as usize] += 1;
        }
        // Expect ~1000 per face; a wide tolerance keeps this stable.
        for count in counts {
            assert!((700..=1300).contains(&count), "skewed face count {count}");
        }
    }

    #[test]
    fn set_num_marks_the_override() {
        let mut dice = Dice::new(DiceFlavor::Event);
        dice.set_num([3, 5], true);
        assert_eq!(dice.faces(), [3, 5]);
        assert_eq!(dice.total(), 8);
        assert!(dice.is_user_set());
    }

    #[test]
    fn event_follows_the_first_face() {
        let mut dice = Dice::new(DiceFlavor::Event);
        assert_eq!(dice.event(), None); // unrolled

        dice.set_num([2, 4], false);
        assert_eq!(dice.event(), Some(DiceEvent::AdvanceBarbarianShip));
        dice.set_num([6, 1], false);
        assert_eq!(dice.event(), Some(DiceEvent::TradeCard));
    }

    #[test]
    fn serde_round_trip() {
        let mut dice = Dice::new(DiceFlavor::RedYellow);
        dice.set_num([4, 2], true);
        let json = serde_json::to_string(&dice).unwrap();
        let back: Dice = serde_json::from_str(&json).unwrap();
        assert_eq!(dice, back);
    }
}
