//! Plain-text report rendering for a corpus summary

use crate::models::{CorpusSummary, Sentiment, TermCount};
use std::fmt::Write;

fn bar(percentage: f64) -> String {
    "█".repeat((percentage / 2.0) as usize)
}

fn pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn term_lines(out: &mut String, terms: &[TermCount], limit: usize) {
    for (i, t) in terms.iter().take(limit).enumerate() {
        let _ = writeln!(out, "  {:2}. {:15} ({} times)", i + 1, t.term, t.count);
    }
}

/// Render a corpus summary as a plain-text report
pub fn render_text_report(summary: &CorpusSummary) -> String {
    let mut out = String::new();
    let total = summary.total;

    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(out, "{:^70}", "Review Sentiment Analysis Report");
    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(
        out,
        "Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Total Reviews: {total}");
    if summary.defaulted > 0 {
        let _ = writeln!(
            out,
            "Defaulted (blank text): {} review(s) scored neutral at 0.50",
            summary.defaulted
        );
    }

    let _ = writeln!(out, "\n[Sentiment Distribution]");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for sentiment in Sentiment::ALL {
        let count = summary.sentiment_counts.get(sentiment);
        let p = pct(count, total);
        let _ = writeln!(
            out,
            "{:8}: {:4} reviews ({:6.2}%) {}",
            sentiment.as_str(),
            count,
            p,
            bar(p)
        );
    }

    if let Some(stats) = &summary.rating_stats {
        let _ = writeln!(out, "\n[Rating Statistics]");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "Rated Reviews: {}", stats.count);
        let _ = writeln!(out, "Average Rating: {:.2} / 5.0", stats.mean);
        let _ = writeln!(out, "Median Rating: {:.1}", stats.median);
        let _ = writeln!(out, "Standard Deviation: {:.2}", stats.std_dev);

        if !summary.by_star.is_empty() {
            let _ = writeln!(out, "\n[Rating-Sentiment Cross Analysis]");
            let _ = writeln!(out, "{}", "-".repeat(40));
            for row in &summary.by_star {
                let stars =
                    "★".repeat(row.stars as usize) + &"☆".repeat(5 - row.stars as usize);
                let _ = writeln!(out, "{stars} ({} total):", row.counts.total());
                for sentiment in Sentiment::ALL {
                    let count = row.counts.get(sentiment);
                    if count > 0 {
                        let _ = writeln!(
                            out,
                            "    {:8}: {:3} ({:5.1}%)",
                            sentiment.as_str(),
                            count,
                            pct(count, row.counts.total())
                        );
                    }
                }
            }
        }
    }

    let _ = writeln!(out, "\n[High Frequency Words]");
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "Overall Top Words:");
    term_lines(&mut out, &summary.themes.overall, 15);
    for (label, terms) in [
        ("Positive Reviews:", &summary.themes.positive),
        ("Negative Reviews:", &summary.themes.negative),
        ("Neutral Reviews:", &summary.themes.neutral),
    ] {
        if !terms.is_empty() {
            let _ = writeln!(out, "\n{label}");
            term_lines(&mut out, terms, 5);
        }
    }

    if !summary.themes.positive_phrases.is_empty() || !summary.themes.negative_phrases.is_empty() {
        let _ = writeln!(out, "\n[Key Phrases]");
        let _ = writeln!(out, "{}", "-".repeat(40));
        for (label, phrases) in [
            ("Positive Review Key Phrases:", &summary.themes.positive_phrases),
            ("Negative Review Key Phrases:", &summary.themes.negative_phrases),
        ] {
            if !phrases.is_empty() {
                let _ = writeln!(out, "{label}");
                for p in phrases {
                    let _ = writeln!(out, "  • \"{}\" ({} times)", p.term, p.count);
                }
            }
        }
    }

    if !summary.pros_cons.pros.is_empty() || !summary.pros_cons.cons.is_empty() {
        let _ = writeln!(out, "\n[Pros & Cons]");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "Strengths:");
        for (i, t) in summary.pros_cons.pros.iter().take(5).enumerate() {
            let _ = writeln!(out, "  {}. {} (mentioned {} times)", i + 1, t.term, t.count);
        }
        let _ = writeln!(out, "Weaknesses:");
        for (i, t) in summary.pros_cons.cons.iter().take(5).enumerate() {
            let _ = writeln!(out, "  {}. {} (mentioned {} times)", i + 1, t.term, t.count);
        }
    }

    let _ = writeln!(out, "\n[Confidence Statistics]");
    let _ = writeln!(out, "{}", "-".repeat(40));
    let c = &summary.confidence_stats;
    let _ = writeln!(out, "Average Confidence: {:.1}%", c.mean * 100.0);
    let _ = writeln!(out, "High (>80%): {:4} ({:.1}%)", c.high, pct(c.high, total));
    let _ = writeln!(out, "Medium (50-80%): {:4} ({:.1}%)", c.medium, pct(c.medium, total));
    let _ = writeln!(out, "Low (<50%): {:4} ({:.1}%)", c.low, pct(c.low, total));

    let _ = writeln!(out, "\n[Consistency]");
    let _ = writeln!(out, "{}", "-".repeat(40));
    let cons = &summary.consistency;
    if cons.total_flagged > 0 {
        let _ = writeln!(
            out,
            "⚠ Found {} review(s) with sentiment-rating mismatch",
            cons.total_flagged
        );
        if cons.low_rating_positive > 0 {
            let _ = writeln!(
                out,
                "   - {} low-rating review(s) classified as positive",
                cons.low_rating_positive
            );
        }
        if cons.high_rating_negative > 0 {
            let _ = writeln!(
                out,
                "   - {} high-rating review(s) classified as negative",
                cons.high_rating_negative
            );
        }
        for flag in &cons.samples {
            let _ = writeln!(
                out,
                "   • {} (rating {:.0}, {} at {:.0}%)",
                flag.source_id,
                flag.rating,
                flag.sentiment,
                flag.confidence * 100.0
            );
        }
    } else {
        let _ = writeln!(out, "✓ Sentiment labels are consistent with ratings");
    }

    out
}
