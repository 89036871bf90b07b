use crate::common::test_helpers::{labelled_dataset, sample_dataset};
use proptest::prelude::*;
use std::collections::HashSet;
use suggestion_rank::{Dataset, ErrorId, Portion, RankingError, SubsetSelector};
use test_case::test_case;

fn names(dataset: &Dataset) -> Vec<String> {
    dataset.error_names()
}

#[test]
fn test_subset_with_filter() {
    let dataset = sample_dataset();

    let all = dataset.subset(&SubsetSelector::filter(|_| true));
    assert_eq!(all.ids(), dataset.ids());

    let (none, rest) = dataset.split(&SubsetSelector::filter(|_| false));
    assert!(none.is_empty());
    assert_eq!(rest.ids(), dataset.ids());

    let (first, rest) = dataset.split(&SubsetSelector::filter(|e| e.name == "Error1"));
    assert_eq!(names(&first), vec!["Error1"]);
    assert_eq!(names(&rest), vec!["Error2"]);

    let (second, rest) = dataset.split(&SubsetSelector::filter(|e| e.name == "Error2"));
    assert_eq!(names(&second), vec!["Error2"]);
    assert_eq!(names(&rest), vec!["Error1"]);
}

#[test_case(Portion::Count(2), &["Error1", "Error2"], &[] ; "count covering all")]
#[test_case(Portion::Count(1), &["Error1"], &["Error2"] ; "count one")]
#[test_case(Portion::Count(0), &[], &["Error1", "Error2"] ; "count zero")]
#[test_case(Portion::Count(7), &["Error1", "Error2"], &[] ; "count clamped")]
#[test_case(Portion::Fraction(0.3), &[], &["Error1", "Error2"] ; "fraction truncated to zero")]
#[test_case(Portion::Fraction(0.5), &["Error1"], &["Error2"] ; "fraction half")]
#[test_case(Portion::Fraction(0.7), &["Error1"], &["Error2"] ; "fraction truncated to one")]
fn test_subset_with_first(portion: Portion, selected: &[&str], complement: &[&str]) {
    let (head, rest) = sample_dataset().split(&SubsetSelector::First(portion));
    assert_eq!(names(&head), selected);
    assert_eq!(names(&rest), complement);
}

#[test_case(Portion::Count(2), &["Error1", "Error2"], &[] ; "count covering all")]
#[test_case(Portion::Count(1), &["Error2"], &["Error1"] ; "count one")]
#[test_case(Portion::Count(0), &[], &["Error1", "Error2"] ; "count zero")]
#[test_case(Portion::Fraction(0.3), &[], &["Error1", "Error2"] ; "fraction truncated to zero")]
#[test_case(Portion::Fraction(0.5), &["Error2"], &["Error1"] ; "fraction half")]
#[test_case(Portion::Fraction(0.7), &["Error2"], &["Error1"] ; "fraction truncated to one")]
fn test_subset_with_last(portion: Portion, selected: &[&str], complement: &[&str]) {
    let (tail, rest) = sample_dataset().split(&SubsetSelector::Last(portion));
    assert_eq!(names(&tail), selected);
    assert_eq!(names(&rest), complement);
}

#[test]
fn test_selector_from_bounds() {
    assert!(matches!(
        SubsetSelector::from_bounds(None, None),
        Err(RankingError::Configuration { .. })
    ));
    assert!(matches!(
        SubsetSelector::from_bounds(Some(1.0), Some(0.3)),
        Err(RankingError::Configuration { .. })
    ));
    assert!(matches!(
        SubsetSelector::from_bounds(Some(-0.5), None),
        Err(RankingError::Configuration { .. })
    ));
    assert!(matches!(
        SubsetSelector::from_bounds(None, Some(1.5)),
        Err(RankingError::Configuration { .. })
    ));
    assert!(matches!(
        SubsetSelector::from_bounds(Some(1.0), None).unwrap(),
        SubsetSelector::First(Portion::Count(1))
    ));
    assert!(matches!(
        SubsetSelector::from_bounds(None, Some(0.25)).unwrap(),
        SubsetSelector::Last(Portion::Fraction(f)) if f == 0.25
    ));
}

#[test]
fn test_subset_of_subset_keeps_shared_errors() {
    let dataset = labelled_dataset(&[&[true], &[false, true], &[true, false], &[true]]);
    let tail = dataset.subset(&SubsetSelector::last(3usize));
    let inner = tail.subset(&SubsetSelector::first(1usize));

    assert_eq!(inner.ids(), &[dataset.ids()[1]]);
    inner.set_confidences(&[0.1, 0.9]).unwrap();
    assert_eq!(dataset.error(1).unwrap().rank().unwrap(), 1);
}

proptest! {
    #[test]
    fn subset_and_complement_partition_the_dataset(
        sizes in prop::collection::vec(0usize..4, 0..12),
        fraction in 0.0f64..1.0,
        count in 0usize..16,
        from_back in any::<bool>(),
        use_fraction in any::<bool>(),
    ) {
        let errors: Vec<Vec<bool>> = sizes
            .iter()
            .map(|&n| (0..n).map(|j| j == 0).collect())
            .collect();
        let slices: Vec<&[bool]> = errors.iter().map(Vec::as_slice).collect();
        let dataset = labelled_dataset(&slices);

        let portion = if use_fraction { Portion::Fraction(fraction) } else { Portion::Count(count) };
        let selector = if from_back { SubsetSelector::Last(portion) } else { SubsetSelector::First(portion) };
        let (selected, complement) = dataset.split(&selector);

        prop_assert_eq!(selected.len() + complement.len(), dataset.len());
        prop_assert_eq!(selected.len(), portion.resolve(dataset.len()));

        let mut merged: Vec<ErrorId> = selected.ids().iter().chain(complement.ids()).copied().collect();
        merged.sort();
        prop_assert_eq!(merged.as_slice(), dataset.ids());

        // Both sides keep the original relative order
        prop_assert!(selected.ids().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(complement.ids().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filtered_subset_and_complement_partition_the_dataset(
        mask in prop::collection::vec(any::<bool>(), 0..12),
    ) {
        let errors: Vec<Vec<bool>> = (0..mask.len()).map(|i| vec![i % 2 == 0; i % 3]).collect();
        let slices: Vec<&[bool]> = errors.iter().map(Vec::as_slice).collect();
        let dataset = labelled_dataset(&slices);

        let chosen: HashSet<String> = mask
            .iter()
            .enumerate()
            .filter(|&(_, &keep)| keep)
            .map(|(i, _)| format!("e{i}"))
            .collect();
        let (selected, complement) =
            dataset.split(&SubsetSelector::filter(|e| chosen.contains(&e.name)));

        let expected: Vec<ErrorId> = dataset
            .ids()
            .iter()
            .zip(&mask)
            .filter(|&(_, &keep)| keep)
            .map(|(&id, _)| id)
            .collect();
        let rest: Vec<ErrorId> = dataset
            .ids()
            .iter()
            .zip(&mask)
            .filter(|&(_, &keep)| !keep)
            .map(|(&id, _)| id)
            .collect();
        prop_assert_eq!(selected.ids(), expected.as_slice());
        prop_assert_eq!(complement.ids(), rest.as_slice());
        prop_assert!(selected.error_names().iter().all(|name| chosen.contains(name)));
        prop_assert!(complement.error_names().iter().all(|name| !chosen.contains(name)));
    }
}
