//! Unit tests for [`SearchLinkStage`](crate::SearchLinkStage).

use crate::{build_search_url, ResponseStage, SearchLinkStage, SEARCH_LINK_TEXT};

fn count_links(text: &str) -> usize {
    text.matches(SEARCH_LINK_TEXT).count()
}

#[tokio::test]
async fn test_keyword_in_user_text_injects_one_link() {
    let stage = SearchLinkStage::default();
    let out = stage
        .apply("How do I set up my Ring doorbell?", "Here is what to do.".to_string())
        .await;

    assert!(out.starts_with("Here is what to do."));
    assert_eq!(count_links(&out), 1);
    assert!(out.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
}

#[tokio::test]
async fn test_no_keyword_leaves_response_unchanged() {
    let stage = SearchLinkStage::default();
    let out = stage
        .apply("What's the weather", "It is sunny.".to_string())
        .await;

    assert_eq!(out, "It is sunny.");
}

#[tokio::test]
async fn test_matching_is_case_insensitive() {
    let stage = SearchLinkStage::new(["Installation"]);

    assert_eq!(stage.matched_keyword("INSTALLATION help please"), Some("installation"));
    assert_eq!(stage.matched_keyword("nothing here"), None);
}

#[tokio::test]
async fn test_multiple_keywords_still_inject_once() {
    let stage = SearchLinkStage::default();
    let out = stage
        .apply(
            "How to install and set up the printer, step by step",
            "Sure.".to_string(),
        )
        .await;

    assert_eq!(count_links(&out), 1);
}

#[tokio::test]
async fn test_empty_keyword_list_never_injects() {
    let stage = SearchLinkStage::new(Vec::<String>::new());
    let out = stage.apply("how to do anything", "ok".to_string()).await;

    assert_eq!(out, "ok");
}

#[test]
fn test_search_url_is_percent_encoded() {
    let url = build_search_url("Ring doorbell & Wi-Fi?");

    assert_eq!(
        url,
        "https://www.google.com/search?q=step%20by%20step%20guide%20for%20Ring%20doorbell%20%26%20Wi-Fi%3F"
    );
}

#[test]
fn test_blank_keywords_are_dropped() {
    let stage = SearchLinkStage::new(["", "  ", "setup"]);

    assert_eq!(stage.matched_keyword("a b c"), None);
    assert_eq!(stage.matched_keyword("Setup"), Some("setup"));
}
