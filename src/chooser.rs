//! Uniform random draw over a set's options

use rand::Rng;

use crate::error::{ChooserError, ChooserResult};

/// Pick one option with probability 1/n.
///
/// `set` is only used to label the [`ChooserError::EmptySet`] error.
pub fn choose<'a, R: Rng + ?Sized>(
    set: &str,
    options: &'a [String],
    rng: &mut R,
) -> ChooserResult<&'a str> {
    if options.is_empty() {
        return Err(ChooserError::EmptySet(set.to_string()));
    }
    let idx = rng.random_range(0..options.len());
    Ok(&options[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn abc() -> Vec<String> {
        ["a", "b", "c"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_choose_returns_member() {
        let options = abc();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let picked = choose("letters", &options, &mut rng).unwrap();
            assert!(options.iter().any(|o| o == picked));
        }
    }

    #[test]
    fn test_choose_empty_set() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            choose("nothing", &[], &mut rng),
            Err(ChooserError::EmptySet("nothing".to_string()))
        );
    }

    #[test]
    fn test_choose_single_option() {
        let options = vec!["only".to_string()];
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose("one", &options, &mut rng), Ok("only"));
    }

    #[test]
    fn test_choose_is_uniform() {
        let options = abc();
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 10_000;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(choose("letters", &options, &mut rng).unwrap()).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        for (option, count) in counts {
            let freq = count as f64 / draws as f64;
            assert!(
                (freq - 1.0 / 3.0).abs() < 0.03,
                "option {option} drawn with frequency {freq}"
            );
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let options = abc();
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                choose("letters", &options, &mut rng1),
                choose("letters", &options, &mut rng2)
            );
        }
    }
}
