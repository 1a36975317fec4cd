//! Property tests for the consistency filter

use polarity_core::{ClassifiedSentence, ConsistencyFilter, Polarity};
use proptest::prelude::*;

fn polarity_strategy() -> impl Strategy<Value = Polarity> {
    prop_oneof![Just(Polarity::Positive), Just(Polarity::Negative)]
}

fn document(polarities: &[Polarity]) -> Vec<ClassifiedSentence> {
    polarities
        .iter()
        .enumerate()
        .map(|(i, &p)| ClassifiedSentence::new(format!("sentence {i}"), p))
        .collect()
}

proptest! {
    #[test]
    fn output_is_ordered_subsequence(polarities in prop::collection::vec(polarity_strategy(), 0..64)) {
        let classified = document(&polarities);
        let outcome = ConsistencyFilter::new().apply(&classified);

        let kept = outcome.kept_indices();
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(kept.len(), outcome.sentences().len());
        for (&index, sentence) in kept.iter().zip(outcome.sentences()) {
            prop_assert_eq!(classified[index].sentence(), sentence.as_str());
        }
    }

    #[test]
    fn first_sentence_always_kept(polarities in prop::collection::vec(polarity_strategy(), 1..64)) {
        let outcome = ConsistencyFilter::new().apply(&document(&polarities));
        prop_assert_eq!(outcome.kept_indices().first(), Some(&0));
        prop_assert_eq!(outcome.sentences()[0].as_str(), "sentence 0");
    }

    #[test]
    fn uniform_polarity_is_unchanged(
        polarity in polarity_strategy(),
        len in 0usize..64,
    ) {
        let polarities = vec![polarity; len];
        let outcome = ConsistencyFilter::new().apply(&document(&polarities));
        prop_assert_eq!(outcome.sentences().len(), len);
        prop_assert!(outcome.removed_indices().is_empty());
    }

    #[test]
    fn kept_and_removed_partition_input(polarities in prop::collection::vec(polarity_strategy(), 0..64)) {
        let outcome = ConsistencyFilter::new().apply(&document(&polarities));
        if !outcome.fallback_applied() {
            let mut all: Vec<usize> = outcome
                .kept_indices()
                .iter()
                .chain(outcome.removed_indices())
                .copied()
                .collect();
            all.sort_unstable();
            prop_assert_eq!(all, (0..polarities.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn fallback_returns_full_input(polarities in prop::collection::vec(polarity_strategy(), 0..64)) {
        let classified = document(&polarities);
        let outcome = ConsistencyFilter::new().apply(&classified);
        if outcome.fallback_applied() {
            let original: Vec<&str> = classified.iter().map(|c| c.sentence()).collect();
            prop_assert_eq!(outcome.sentences(), original.as_slice());
        }
        prop_assert_eq!(outcome.sentences().is_empty(), polarities.is_empty());
    }

    #[test]
    fn removed_exactly_when_isolated(polarities in prop::collection::vec(polarity_strategy(), 0..64)) {
        let marks = ConsistencyFilter::new().removal_marks(&polarities);
        prop_assert_eq!(marks.len(), polarities.len());

        for (i, &marked) in marks.iter().enumerate() {
            let isolated = i > 0
                && polarities[i] != polarities[i - 1]
                && polarities.get(i + 1).map_or(true, |&next| next != polarities[i]);
            prop_assert_eq!(marked, isolated, "index {}", i);
        }
    }

    #[test]
    fn filtering_is_idempotent(polarities in prop::collection::vec(polarity_strategy(), 0..64)) {
        let filter = ConsistencyFilter::new();
        let classified = document(&polarities);
        let first = filter.apply(&classified);

        let survivors: Vec<ClassifiedSentence> = first
            .kept_indices()
            .iter()
            .map(|&i| classified[i].clone())
            .collect();
        let second = filter.apply(&survivors);

        prop_assert_eq!(second.sentences(), first.sentences());
        prop_assert!(second.removed_indices().is_empty());
    }
}
