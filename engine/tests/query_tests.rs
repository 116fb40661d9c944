use engine::artifact::Artifact;
use engine::{search, DocId, Index, SearchOutcome, Weight};

fn build_index(words: &[(&str, &[(DocId, Weight)])], articles: &[DocId]) -> Index {
    let artifact = Artifact {
        words: words
            .iter()
            .map(|(word, pairs)| (word.to_string(), pairs.to_vec()))
            .collect(),
        articles: articles
            .iter()
            .map(|id| (*id, format!("<p>article {id}</p>")))
            .collect(),
    };
    Index::from_artifact(artifact).unwrap()
}

fn found(outcome: SearchOutcome) -> Vec<DocId> {
    match outcome {
        SearchOutcome::Found(ids) => ids,
        SearchOutcome::NotFound => panic!("expected a match"),
    }
}

#[test]
fn single_word_ranks_postings_by_descending_weight() {
    let index = build_index(&[("cat", &[(1, 3), (2, 5)])], &[1, 2]);
    assert_eq!(found(search(&index, "cat")), vec![2, 1]);
}

#[test]
fn two_word_query_keeps_only_documents_matching_both() {
    // Worked example: only doc 2 appears in both lists, total weight 7.
    let index = build_index(
        &[("cat", &[(1, 3), (2, 5)]), ("dog", &[(2, 2), (3, 4)])],
        &[1, 2, 3],
    );
    assert_eq!(found(search(&index, "cat")), vec![2, 1]);
    assert_eq!(found(search(&index, "dog")), vec![3, 2]);
    assert_eq!(found(search(&index, "cat dog")), vec![2]);
}

#[test]
fn accumulated_weights_drive_multi_word_ranking() {
    // doc 2 totals 5+2=7, doc 4 totals 10+1=11, so 4 outranks 2.
    let index = build_index(
        &[
            ("cat", &[(1, 3), (2, 5), (4, 10)]),
            ("dog", &[(2, 2), (4, 1), (3, 4)]),
        ],
        &[1, 2, 3, 4],
    );
    assert_eq!(found(search(&index, "cat dog")), vec![4, 2]);
}

#[test]
fn multi_word_results_are_a_subset_of_each_single_word() {
    let index = build_index(
        &[
            ("cat", &[(1, 3), (2, 5), (4, 10)]),
            ("dog", &[(2, 2), (4, 1), (3, 4)]),
        ],
        &[1, 2, 3, 4],
    );
    let both = found(search(&index, "cat dog"));
    let cats = found(search(&index, "cat"));
    let dogs = found(search(&index, "dog"));
    for id in &both {
        assert!(cats.contains(id));
        assert!(dogs.contains(id));
    }
}

#[test]
fn unindexed_word_misses_the_whole_query() {
    let index = build_index(&[("cat", &[(1, 3), (2, 5)])], &[1, 2]);
    assert_eq!(search(&index, "cat bird"), SearchOutcome::NotFound);
    assert_eq!(search(&index, "bird"), SearchOutcome::NotFound);
}

#[test]
fn disjoint_posting_lists_yield_not_found() {
    let index = build_index(&[("cat", &[(1, 3)]), ("dog", &[(2, 2)])], &[1, 2]);
    assert_eq!(search(&index, "cat dog"), SearchOutcome::NotFound);
}

#[test]
fn empty_and_whitespace_queries_match_nothing() {
    let index = build_index(&[("cat", &[(1, 3)])], &[1]);
    assert_eq!(search(&index, ""), SearchOutcome::NotFound);
    assert_eq!(search(&index, "   \t "), SearchOutcome::NotFound);
}

#[test]
fn repeated_query_word_scores_like_a_single_occurrence() {
    let index = build_index(&[("cat", &[(1, 3), (2, 5)])], &[1, 2]);
    assert_eq!(search(&index, "cat cat"), search(&index, "cat"));
}

#[test]
fn same_query_twice_returns_identical_results() {
    let index = build_index(
        &[("cat", &[(1, 3), (2, 5)]), ("dog", &[(2, 2), (3, 4)])],
        &[1, 2, 3],
    );
    assert_eq!(search(&index, "cat dog"), search(&index, "cat dog"));
}

#[test]
fn equal_weights_group_into_one_bucket_between_heavier_and_lighter() {
    let index = build_index(&[("cat", &[(1, 5), (2, 5), (3, 2), (4, 9)])], &[1, 2, 3, 4]);
    let ranked = found(search(&index, "cat"));
    assert_eq!(ranked[0], 4);
    // ids 1 and 2 tie at weight 5; their relative order is unspecified
    let tied: Vec<DocId> = ranked[1..3].to_vec();
    assert!(tied.contains(&1) && tied.contains(&2));
    assert_eq!(ranked[3], 3);
}

#[test]
fn matching_is_case_sensitive_exact_lookup() {
    let index = build_index(&[("cat", &[(1, 3)])], &[1]);
    assert_eq!(search(&index, "Cat"), SearchOutcome::NotFound);
}
