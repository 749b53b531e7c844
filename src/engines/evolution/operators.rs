use crate::types::{MutationStrategy, Problem};
use rand::Rng;

/// Uniform sample without replacement of `min(sample_size, population_len)` indices
pub fn sample_indices<R: Rng>(population_len: usize, sample_size: usize, rng: &mut R) -> Vec<usize> {
    let amount = sample_size.min(population_len);
    rand::seq::index::sample(rng, population_len, amount).into_vec()
}

/// Uniform choice from [`MutationStrategy::AUTO_SELECTABLE`]
pub fn choose_strategy<R: Rng>(rng: &mut R) -> MutationStrategy {
    let pool = &MutationStrategy::AUTO_SELECTABLE;
    pool[rng.gen_range(0..pool.len())]
}

/// Stable sort by descending score, then keep the first `k`
pub fn retain_top_k(mut problems: Vec<Problem>, k: usize) -> Vec<Problem> {
    problems.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    problems.truncate(k);
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn scored(content: &str, score: f64) -> Problem {
        let mut problem = Problem::new(content);
        problem.score = score;
        problem
    }

    #[test]
    fn test_sample_is_without_replacement() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let indices = sample_indices(10, 4, &mut rng);
            assert_eq!(indices.len(), 4);
            assert_eq!(indices.iter().collect::<HashSet<_>>().len(), 4);
            assert!(indices.iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn test_sample_caps_at_population() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut indices = sample_indices(3, 10, &mut rng);
        indices.sort();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(sample_indices(0, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_sample() {
        let a = sample_indices(100, 5, &mut StdRng::seed_from_u64(7));
        let b = sample_indices(100, 5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_choose_strategy_never_adds_constraints() {
        let mut rng = StdRng::seed_from_u64(3);
        let chosen: HashSet<_> = (0..300).map(|_| choose_strategy(&mut rng)).collect();

        assert_eq!(chosen.len(), 3);
        assert!(!chosen.contains(&MutationStrategy::AddConstraints));
    }

    #[test]
    fn test_retain_top_k_keeps_best_in_order() {
        let problems = vec![scored("a", 0.1), scored("b", 0.9), scored("c", 0.5), scored("d", 0.7)];

        let kept = retain_top_k(problems, 2);

        assert_eq!(kept.iter().map(|p| p.content.as_str()).collect::<Vec<_>>(), vec!["b", "d"]);
    }

    #[test]
    fn test_retain_top_k_is_stable_for_ties() {
        let problems = vec![scored("first", 0.5), scored("second", 0.5), scored("third", 0.5)];

        let kept = retain_top_k(problems, 2);

        assert_eq!(kept[0].content, "first");
        assert_eq!(kept[1].content, "second");
    }
}
