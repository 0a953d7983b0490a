use crate::enrichment::search::{DEFAULT_SEARCH_ENGINES, is_search_referer, keywords};
use pretty_assertions::assert_eq;

fn engines() -> Vec<String> {
    DEFAULT_SEARCH_ENGINES.iter().map(|e| e.to_string()).collect()
}

#[test]
fn search_referer_matches_engine_host() {
    assert!(is_search_referer(
        "https://www.google.com/search?q=rust",
        &engines()
    ));
    assert!(is_search_referer(
        "https://search.yahoo.com/search?p=rust",
        &engines()
    ));
}

#[test]
fn search_referer_ignores_engine_name_outside_host() {
    assert!(!is_search_referer(
        "https://example.com/?ref=google",
        &engines()
    ));
}

#[test]
fn search_referer_requires_whole_host_labels() {
    for referer in [
        "https://www.basketball.com/news?q=finals",
        "https://www.taskrabbit.com/",
        "https://flask.palletsprojects.com/?q=routing",
        "https://notgoogle.com/?q=rust",
    ] {
        assert!(!is_search_referer(referer, &engines()), "{referer}");
    }
}

#[test]
fn search_referer_matches_engine_on_any_label() {
    assert!(is_search_referer("https://ask.com/web?q=rust", &engines()));
    assert!(is_search_referer("https://www.google.co.uk/?q=rust", &engines()));
    assert!(is_search_referer(
        "https://www.search.example.org/?q=rust",
        &["search.example".to_string()]
    ));
}

#[test]
fn search_referer_rejects_garbage() {
    assert!(!is_search_referer("", &engines()));
    assert!(!is_search_referer("not a url", &engines()));
}

#[test]
fn keywords_reads_q_parameter() {
    assert_eq!(
        keywords("https://www.google.com/search?q=rust+borrow%20checker"),
        Some("rust borrow checker".to_string())
    );
}

#[test]
fn keywords_falls_back_to_other_parameters() {
    assert_eq!(
        keywords("https://search.yahoo.com/search?ei=UTF-8&p=tokio"),
        Some("tokio".to_string())
    );
}

#[test]
fn keywords_missing_or_empty_is_none() {
    assert_eq!(keywords("https://www.google.com/"), None);
    assert_eq!(keywords("https://www.google.com/search?q=++"), None);
    assert_eq!(keywords("::"), None);
}
