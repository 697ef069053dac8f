//! End-to-end scenarios for the match engine.

use prefixsim::matching::{MatchConfig, MatchEngine, SimilarityLevel, exec, rank};

#[test]
fn test_shared_first_token() {
    let results = exec(&["new york", "new jersey"], "new", 0.2);

    let mut values: Vec<&str> = results.iter().map(|m| m.value.as_str()).collect();
    values.sort_unstable();
    assert_eq!(values, vec!["new jersey", "new york"]);
    assert!(results.iter().all(|m| m.similarity >= 0.2 && m.similarity <= 1.0));
}

#[test]
fn test_prefix_matching_is_not_fuzzy_recovery() {
    assert!(exec(&["apple pie"], "aple", 0.6).is_empty());
    assert!(exec(&["apple pie"], "aple", 0.0).is_empty());
    assert_eq!(exec(&["apple pie"], "appl", 0.0).len(), 1);
}

#[test]
fn test_second_token_matches() {
    let results = exec(&["new york", "old york"], "york", 0.0);
    assert_eq!(results.len(), 2);
}

#[test]
fn test_ranked_results() {
    let dictionary = ["new", "new york", "new jersey", "newark", "boston"];
    let ranked = rank(exec(&dictionary, "new", 0.0));
    let values: Vec<&str> = ranked.iter().map(|m| m.value.as_str()).collect();

    // new (1.0), newark (0.5), new york (0.375), new jersey (0.3)
    assert_eq!(values, vec!["new", "newark", "new york", "new jersey"]);
}

#[test]
fn test_levels_are_monotonic() {
    let dictionary = [
        "car",
        "cart",
        "carton",
        "cartography",
        "car park",
        "carousel ride",
    ];
    let engine = MatchEngine::new();

    let mut previous = usize::MAX;
    for level in SimilarityLevel::ALL {
        let count = engine.exec_level(&dictionary, "car", level).len();
        assert!(count <= previous, "{level} accepted more than a lower level");
        previous = count;
    }
    assert_eq!(
        engine.exec_level(&dictionary, "car", SimilarityLevel::ExtraLow).len(),
        dictionary.len()
    );
}

#[test]
fn test_small_stack_pages() {
    let engine = MatchEngine::with_config(MatchConfig {
        stack_page_size: 1,
        ..Default::default()
    });
    let dictionary: Vec<String> = (0..200).map(|i| format!("item {i}")).collect();
    let results = engine.exec(&dictionary, "item", 0.0);
    assert_eq!(results.len(), 200);
}

#[test]
fn test_unicode_phrases() {
    let results = exec(&["Café Crème", "cafeteria"], "CAFÉ", 0.0);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].value, "Café Crème");
}
