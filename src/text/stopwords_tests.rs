use super::*;

#[test]
fn test_english_filter_basic() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["the", "dark", "knight"];
    let filtered = filter.filter(&tokens).expect("filter should succeed");
    assert_eq!(filtered, vec!["dark", "knight"]);
}

#[test]
fn test_english_filter_case_insensitive_preserves_case() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["The", "Godfather", "OF", "Crime"];
    let filtered = filter.filter(&tokens).expect("filter should succeed");
    assert_eq!(filtered, vec!["Godfather", "Crime"]);
}

#[test]
fn test_custom_stop_words() {
    let filter = StopWordsFilter::new(vec!["movie", "FILM"]);
    let tokens = vec!["movie", "heist", "film", "night"];
    let filtered = filter.filter(&tokens).expect("filter should succeed");
    assert_eq!(filtered, vec!["heist", "night"]);
}

#[test]
fn test_all_stop_words_filtered_to_empty() {
    let filter = StopWordsFilter::english();
    let tokens = vec!["the", "and", "is", "of", "two"];
    let filtered = filter.filter(&tokens).expect("filter should succeed");
    assert!(filtered.is_empty());
}

#[test]
fn test_empty_tokens() {
    let filter = StopWordsFilter::english();
    let tokens: Vec<&str> = vec![];
    let filtered = filter.filter(&tokens).expect("filter should succeed");
    assert!(filtered.is_empty());
}

#[test]
fn test_genre_words_are_not_stop_words() {
    let filter = StopWordsFilter::english();
    for genre in ["drama", "crime", "action", "sci", "fi", "comedy", "thriller"] {
        assert!(!filter.is_stop_word(genre), "{genre} must survive filtering");
    }
}

#[test]
fn test_len_and_is_empty() {
    let english = StopWordsFilter::english();
    assert_eq!(english.len(), 183);
    assert!(!english.is_empty());

    let custom = StopWordsFilter::new(vec!["foo", "Foo", "bar"]);
    assert_eq!(custom.len(), 2);

    let empty = StopWordsFilter::new(Vec::<String>::new());
    assert!(empty.is_empty());
}

#[test]
fn test_stop_words_list_unique_and_lowercase() {
    let unique: HashSet<&str> = ENGLISH_STOP_WORDS.iter().copied().collect();
    assert_eq!(unique.len(), ENGLISH_STOP_WORDS.len());
    for word in ENGLISH_STOP_WORDS {
        assert_eq!(*word, word.to_lowercase());
    }
}

#[test]
fn test_stop_words_list_sorted_for_lookup() {
    assert!(ENGLISH_STOP_WORDS.windows(2).all(|w| w[0] < w[1]));
    assert!(is_english_stop_word("the"));
    assert!(is_english_stop_word("yourselves"));
    assert!(!is_english_stop_word("heist"));
    assert!(!is_english_stop_word("The"));
}

#[test]
fn test_english_filter_matches_sorted_list() {
    let filter = StopWordsFilter::english();
    for word in ENGLISH_STOP_WORDS {
        assert!(filter.is_stop_word(word));
        assert!(filter.is_stop_word(&word.to_uppercase()));
    }
    assert!(!filter.is_stop_word("number"));
    assert!(!filter.is_stop_word("various"));
}
