use super::support::{self, Canned, TestApi};
use crate::error::LookupError;

fn respond(target: &str) -> Canned {
    if target.contains("rel_syn") {
        Canned::Json(r#"[{"word":"glad","numSyllables":1,"frequency":10.0}]"#.into())
    } else {
        Canned::Json(r#"[{"word":"ha"}]"#.into())
    }
}

#[test]
fn synonym_url_encodes_query_and_requests_metadata() {
    let client = support::test_client("https://api.datamuse.com");
    let url = client.synonym_url("ice cream").expect("synonym url");
    assert_eq!(
        url.as_str(),
        "https://api.datamuse.com/words?rel_syn=ice+cream&md=s%2Cf"
    );
}

#[test]
fn definition_url_uses_exact_spelling_match() {
    let client = support::test_client("https://api.datamuse.com");
    let url = client.definition_url("happy").expect("definition url");
    assert_eq!(url.as_str(), "https://api.datamuse.com/words?sp=happy&md=d");
}

#[test]
fn suggestion_url_targets_the_sug_endpoint() {
    let client = support::test_client("https://api.datamuse.com");
    let url = client.suggestion_url("hap").expect("suggestion url");
    assert_eq!(url.as_str(), "https://api.datamuse.com/sug?s=hap");
}

#[test]
fn unparseable_base_url_is_a_url_error() {
    let client = support::test_client("not a url");
    assert!(matches!(
        client.synonym_url("happy"),
        Err(LookupError::Url(_))
    ));
}

#[tokio::test]
async fn decodes_word_records_from_the_words_endpoint() {
    let api = TestApi::serve(respond).await;
    let client = support::test_client(&api.base_url);

    let url = client.synonym_url("happy").expect("url");
    let records = client.words(url).await.expect("fetch words");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].word, "glad");
    assert_eq!(records[0].num_syllables, Some(1));
    assert_eq!(records[0].frequency, Some(10.0));
}

#[tokio::test]
async fn decodes_suggestion_entries_from_the_sug_endpoint() {
    let api = TestApi::serve(respond).await;
    let client = support::test_client(&api.base_url);

    let url = client.suggestion_url("ha").expect("url");
    let suggestions = client.suggestions(url).await.expect("fetch suggestions");

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].word, "ha");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Discard port, nothing listens there.
    let client = support::test_client("http://127.0.0.1:9");
    let url = client.suggestion_url("ha").expect("url");
    assert!(matches!(
        client.suggestions(url).await,
        Err(LookupError::Transport(_))
    ));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    fn garbage(_: &str) -> Canned {
        Canned::Garbage
    }

    let api = TestApi::serve(garbage).await;
    let client = support::test_client(&api.base_url);

    let url = client.definition_url("happy").expect("url");
    assert!(matches!(
        client.words(url).await,
        Err(LookupError::Decode(_))
    ));
}
