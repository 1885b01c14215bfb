use super::*;

use chrono::{TimeZone, Utc};
use tweetpulse_core::Tweet;
use tweetpulse_db::MemoryTweetStore;

fn tweet(n: usize, username: &str, translated: &str) -> Tweet {
    Tweet {
        id: format!("64b7f0c2a1e4c93f5d2e8b{n:02x}"),
        conversation_id: format!("16812345678901300{n:02}"),
        date: Utc.with_ymd_and_hms(2023, 7, 20, 1, 30, 0).unwrap(),
        time: "08:30:00".to_string(),
        user_id: "55443322".to_string(),
        username: username.to_string(),
        tweet: translated.to_string(),
        mentions: vec![],
        replies_count: 0,
        retweets_count: 0,
        likes_count: 0,
        hashtags: vec![],
        translated: translated.to_string(),
        extra: serde_json::Map::new(),
    }
}

fn aggregator() -> SentimentAggregator {
    let store = MemoryTweetStore::new(vec![
        tweet(1, "jakarta_commuter", "Terrible traffic again, really bad"),
        tweet(2, "anak_krl", "The MRT is comfortable, love it"),
        tweet(3, "ojol_driver", "Heavy rain this afternoon"),
    ]);
    SentimentAggregator::new(Arc::new(store), Arc::new(LexiconScorer::new()))
}

#[test]
fn parses_summary_command() {
    let cli = Cli::try_parse_from(["tweetpulse-cli", "summary"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Summary));
    assert!(cli.fixture.is_none());
    assert!(!cli.json);
}

#[test]
fn parses_page_with_number() {
    let cli = Cli::try_parse_from(["tweetpulse-cli", "page", "--page", "3"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Page { page: Some(3) }));
}

#[test]
fn parses_page_without_number() {
    let cli = Cli::try_parse_from(["tweetpulse-cli", "page"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Page { page: None }));
}

#[test]
fn parses_negative_page_number() {
    let cli = Cli::try_parse_from(["tweetpulse-cli", "page", "--page", "-2"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Page { page: Some(-2) }));
}

#[test]
fn global_flags_are_accepted_after_subcommand() {
    let cli = Cli::try_parse_from([
        "tweetpulse-cli",
        "negative-words",
        "--json",
        "--fixture",
        "tweets.json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::NegativeWords));
    assert!(cli.json);
    assert_eq!(cli.fixture, Some(PathBuf::from("tweets.json")));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["tweetpulse-cli"]).is_err());
}

#[tokio::test]
async fn summary_renders_table() {
    let output = run(&aggregator(), &Commands::Summary, false)
        .await
        .expect("summary");
    assert_eq!(
        output,
        "SENTIMENT   COUNT\npositive    1\nnegative    1\nneutral     1\ntotal       3"
    );
}

#[tokio::test]
async fn summary_renders_json() {
    let output = run(&aggregator(), &Commands::Summary, true)
        .await
        .expect("summary");
    let json: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(
        json,
        serde_json::json!({ "positive": 1, "negative": 1, "neutral": 1 })
    );
}

#[tokio::test]
async fn page_renders_rows_and_footer() {
    let output = run(&aggregator(), &Commands::Page { page: None }, false)
        .await
        .expect("page");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with("64b7f0c2a1e4c93f5d2e8b01"));
    assert!(lines[1].contains("jakarta_commuter"));
    assert!(lines[1].ends_with("negative   bad, terrible"));
    assert!(lines[2].ends_with("positive"));
    assert!(lines[3].ends_with("neutral"));
    assert_eq!(lines[4], "page 1 of 1");
}

#[tokio::test]
async fn page_past_end_says_so() {
    let output = run(&aggregator(), &Commands::Page { page: Some(4) }, false)
        .await
        .expect("page");
    assert_eq!(output, "no tweets on this page\npage 4 of 1");
}

#[tokio::test]
async fn negative_words_render_ranked() {
    let output = run(&aggregator(), &Commands::NegativeWords, false)
        .await
        .expect("negative words");
    assert_eq!(
        output,
        "RANK  WORD                COUNT\n1     bad                 1\n2     terrible            1"
    );
}

#[tokio::test]
async fn negative_words_json_keeps_rank_order() {
    let output = run(&aggregator(), &Commands::NegativeWords, true)
        .await
        .expect("negative words");
    let compact: String = output.split_whitespace().collect();
    assert_eq!(compact, r#"{"bad":1,"terrible":1}"#);
}

#[tokio::test]
async fn empty_store_reports_no_negative_words() {
    let aggregator = SentimentAggregator::new(
        Arc::new(MemoryTweetStore::default()),
        Arc::new(LexiconScorer::new()),
    );
    let output = run(&aggregator, &Commands::NegativeWords, false)
        .await
        .expect("negative words");
    assert_eq!(output, "no negative words found");
}

#[tokio::test]
async fn missing_fixture_is_an_error() {
    let result = open_store(Some(std::path::Path::new("/nonexistent/tweets.json"))).await;
    assert!(result.is_err());
}
