//! The rule that turns quiz answers into an animal.

use rand::Rng;

use crate::error::SelectionError;
use crate::types::{Animal, QuizInputs};

/// Result returned whenever the pizza/blue combination is chosen.
pub const PENGUIN: &str = "Penguin";

/// Pick the animal for one quiz submission.
///
/// Pizza and blue always give `"Penguin"`, even with an empty registry.
/// Any other answers pick uniformly among `animals` using `rng`. The
/// remaining quiz answers do not influence the outcome.
pub fn determine_animal<R: Rng + ?Sized>(
    animals: &[Animal],
    inputs: &QuizInputs,
    rng: &mut R,
) -> Result<String, SelectionError> {
    if inputs.food == "pizza" && inputs.color == "blue" {
        return Ok(PENGUIN.to_string());
    }
    if animals.is_empty() {
        return Err(SelectionError::NoAnimalsAvailable);
    }
    let index = rng.gen_range(0..animals.len());
    Ok(animals[index].name.clone())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::types::AnimalId;

    fn animal(id: u64, name: &str) -> Animal {
        Animal {
            id: AnimalId::Number(id),
            name: name.to_string(),
            kind: "mammal".to_string(),
        }
    }

    fn inputs(food: &str, color: &str) -> QuizInputs {
        QuizInputs {
            food: food.to_string(),
            color: color.to_string(),
            ..QuizInputs::default()
        }
    }

    #[test]
    fn pizza_and_blue_is_always_penguin() {
        let mut rng = StdRng::seed_from_u64(1);
        let animals = vec![animal(1, "Koala"), animal(2, "Dog")];
        for _ in 0..50 {
            let result = determine_animal(&animals, &inputs("pizza", "blue"), &mut rng).unwrap();
            assert_eq!(result, PENGUIN);
        }
    }

    #[test]
    fn pizza_and_blue_ignores_empty_registry() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = determine_animal(&[], &inputs("pizza", "blue"), &mut rng).unwrap();
        assert_eq!(result, PENGUIN);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut rng = StdRng::seed_from_u64(3);
        let animals = vec![animal(1, "Koala")];
        let result = determine_animal(&animals, &inputs("Pizza", "blue"), &mut rng).unwrap();
        assert_eq!(result, "Koala");
    }

    #[test]
    fn other_answers_pick_from_registry() {
        let mut rng = StdRng::seed_from_u64(4);
        let animals = vec![animal(1, "Koala")];
        let result = determine_animal(&animals, &inputs("taco", "red"), &mut rng).unwrap();
        assert_eq!(result, "Koala");
    }

    #[test]
    fn empty_registry_without_penguin_rule_fails() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = determine_animal(&[], &inputs("taco", "red"), &mut rng).unwrap_err();
        assert_eq!(err, SelectionError::NoAnimalsAvailable);
    }

    #[test]
    fn unused_answers_do_not_change_the_pick() {
        let animals = vec![animal(1, "Koala"), animal(2, "Dog"), animal(3, "Owl")];
        let plain = inputs("taco", "red");
        let decorated = QuizInputs {
            drink: "coffee".to_string(),
            tv_show: "Planet Earth".to_string(),
            time_of_day: "morning".to_string(),
            pastime: "hiking".to_string(),
            ..plain.clone()
        };
        let mut a = StdRng::seed_from_u64(6);
        let mut b = StdRng::seed_from_u64(6);
        for _ in 0..20 {
            assert_eq!(
                determine_animal(&animals, &plain, &mut a).unwrap(),
                determine_animal(&animals, &decorated, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn picks_are_roughly_uniform() {
        let animals = vec![
            animal(1, "Koala"),
            animal(2, "Dog"),
            animal(3, "Owl"),
            animal(4, "Fox"),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 10_000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..trials {
            let name = determine_animal(&animals, &inputs("sushi", "green"), &mut rng).unwrap();
            *counts.entry(name).or_default() += 1;
        }
        assert_eq!(counts.len(), animals.len());
        for (name, count) in counts {
            assert!(
                (2_000..=3_000).contains(&count),
                "{name} picked {count} times out of {trials}"
            );
        }
    }
}
