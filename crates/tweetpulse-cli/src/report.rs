//! Plain-text tables for the report commands.

use tweetpulse_sentiment::{PageResult, SentimentCounts, WordFrequencyTable};

pub(crate) fn render_summary(counts: &SentimentCounts) -> String {
    let mut lines = vec![format!("{:<12}COUNT", "SENTIMENT")];
    for (label, count) in [
        ("positive", counts.positive),
        ("negative", counts.negative),
        ("neutral", counts.neutral),
    ] {
        lines.push(format!("{label:<12}{count}"));
    }
    lines.push(format!("{:<12}{}", "total", counts.total()));
    lines.join("\n")
}

pub(crate) fn render_page(page: &PageResult) -> String {
    let footer = format!("page {} of {}", page.current_page, page.total_pages);
    if page.sentiment_result.is_empty() {
        return format!("no tweets on this page\n{footer}");
    }

    let mut lines = vec![format!(
        "{:<26}{:<20}{:<11}NEGATIVE WORDS",
        "ID", "USER", "SENTIMENT"
    )];
    for row in &page.sentiment_result {
        lines.push(
            format!(
                "{:<26}{:<20}{:<11}{}",
                row.tweet.id,
                row.tweet.username,
                row.sentiment.as_str(),
                row.negative_words.join(", ")
            )
            .trim_end()
            .to_string(),
        );
    }
    lines.push(footer);
    lines.join("\n")
}

pub(crate) fn render_negative_words(table: &WordFrequencyTable) -> String {
    if table.is_empty() {
        return "no negative words found".to_string();
    }

    let mut lines = vec![format!("{:<6}{:<20}COUNT", "RANK", "WORD")];
    for (rank, (word, count)) in table.entries().iter().enumerate() {
        lines.push(format!("{:<6}{word:<20}{count}", rank + 1));
    }
    lines.join("\n")
}
