//! Integration tests for review sentiment analysis

use review_insight::{
    // Analysis
    AnalysisPipeline, ConsistencyChecker, CorpusAggregator,
    // Classifiers
    Classifier, LocalRuleClassifier,
    // Models
    AnalysisResult, Review, Sentiment,
    // Scoring
    SentimentScorer,
};

mod scoring_properties {
    use super::*;

    #[test]
    fn test_high_rating_without_lexicon_matches_is_positive() {
        let scorer = SentimentScorer::new();
        let text = "arrived in two days, box intact";

        for rating in [4.0, 4.5, 5.0] {
            let (sentiment, confidence) = scorer.score_text(text, Some(rating));
            assert_eq!(sentiment, Sentiment::Positive, "rating {rating}");
            assert!(
                (0.55..=0.65).contains(&confidence),
                "rating {rating}: confidence {confidence}"
            );
        }
    }

    #[test]
    fn test_mid_rating_without_lexicon_matches_is_neutral() {
        let scorer = SentimentScorer::new();
        let (sentiment, confidence) = scorer.score_text("arrived in two days", Some(3.0));

        assert_eq!(sentiment, Sentiment::Neutral);
        assert!((confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_low_rating_without_lexicon_matches_is_negative() {
        let scorer = SentimentScorer::new();
        let (sentiment, confidence) = scorer.score_text("arrived in two days", Some(2.0));

        assert_eq!(sentiment, Sentiment::Negative);
        assert!((confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text_is_neutral_regardless_of_rating() {
        let scorer = SentimentScorer::new();

        for rating in [None, Some(1.0), Some(3.0), Some(5.0)] {
            assert_eq!(scorer.score_text("", rating), (Sentiment::Neutral, 0.5));
            assert_eq!(scorer.score_text(" \t\n ", rating), (Sentiment::Neutral, 0.5));
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let scorer = SentimentScorer::new();
        let cases = [
            ("Great quality but slow shipping", Some(4.0)),
            ("It's just okay", Some(3.0)),
            ("waste of money", Some(1.0)),
            ("no opinion here", None),
        ];

        for (text, rating) in cases {
            let first = scorer.score_text(text, rating);
            for _ in 0..5 {
                assert_eq!(scorer.score_text(text, rating), first, "{text}");
            }
        }
    }

    #[test]
    fn test_mixed_signal_collapses_to_neutral() {
        let scorer = SentimentScorer::new();
        // Exactly one positive word and one negative word, no phrases, no rating.
        let (sentiment, confidence) = scorer.score_text("nice but damaged", None);

        assert_eq!(sentiment, Sentiment::Neutral);
        assert!((confidence - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_positive_counter_is_monotonic_in_trigger_phrases() {
        let scorer = SentimentScorer::new();
        let base = "the packaging was plain";
        let extended = format!("{base} and I highly recommend it");

        for rating in [None, Some(2.0), Some(4.0)] {
            let before = scorer.evidence(base, rating);
            let after = scorer.evidence(&extended, rating);
            assert!(after.positive >= before.positive);
        }
    }

    #[test]
    fn test_single_phrase_does_not_flip_negative_to_positive() {
        let scorer = SentimentScorer::new();
        let base = "terrible awful broken useless defective junk";
        let (before, _) = scorer.score_text(base, None);
        assert_eq!(before, Sentiment::Negative);

        // Adding one recommend phrase narrows the gap but the negative side
        // still dominates by more than the fallback margin.
        let extended = format!("{base} but highly recommend");
        let (after, _) = scorer.score_text(&extended, None);
        assert_ne!(after, Sentiment::Positive);
    }
}

mod decision_ladder {
    use super::*;

    #[test]
    fn test_hedging_outweighs_single_neutral_word() {
        let scorer = SentimentScorer::new();
        let word_only = scorer.evidence("okay purchase", None);
        let hedged = scorer.evidence("just okay purchase", None);

        assert_eq!(word_only.neutral, 1);
        assert_eq!(hedged.neutral, 1 + 2);
    }

    #[test]
    fn test_mid_rating_biases_neutral_even_with_positive_text() {
        let scorer = SentimentScorer::new();
        // Three stars with mildly positive text: the dominant neutral prior
        // keeps the call neutral.
        let (sentiment, _) = scorer.score_text("good product", Some(3.0));
        assert_eq!(sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_rating_confirms_matching_text() {
        let scorer = SentimentScorer::new();

        let (positive, conf_p) = scorer.score_text("love the quality, works great", Some(5.0));
        assert_eq!(positive, Sentiment::Positive);
        assert!(conf_p >= 0.7);

        let (negative, conf_n) = scorer.score_text("broken and useless, hate it", Some(1.0));
        assert_eq!(negative, Sentiment::Negative);
        assert!(conf_n >= 0.7);
    }

    #[test]
    fn test_text_contradicting_rating_degrades_to_neutral() {
        let scorer = SentimentScorer::new();

        // Five stars over flatly negative text: opposite side more than double.
        let (sentiment, confidence) = scorer.score_text(
            "terrible horrible broken useless defective junk awful",
            Some(5.0),
        );
        assert_eq!(sentiment, Sentiment::Neutral);
        assert!((confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_text_only_fallback_requires_clear_margin() {
        let scorer = SentimentScorer::new();

        // Margin of exactly 2 is not enough without a rating anchor.
        let (tied, confidence) = scorer.score_text("great excellent product", None);
        assert_eq!(tied, Sentiment::Neutral);
        assert!((confidence - 0.6).abs() < 1e-9);

        // A wider margin resolves.
        let (clear, _) = scorer.score_text("great excellent wonderful product", None);
        assert_eq!(clear, Sentiment::Positive);
    }
}

mod consistency {
    use super::*;

    fn result(rating: Option<f64>, sentiment: Sentiment) -> AnalysisResult {
        AnalysisResult {
            source_id: "r".to_string(),
            text: "text".to_string(),
            sentiment,
            confidence: 0.8,
            rating,
        }
    }

    #[test]
    fn test_low_rating_positive_review_is_flagged() {
        // A one-star review whose text resolves positive must be flagged.
        let flagged = result(Some(1.0), Sentiment::Positive);
        assert!(ConsistencyChecker::flag(&flagged));

        let report = ConsistencyChecker::new().check(&[flagged]);
        assert_eq!(report.total_flagged, 1);
        assert_eq!(report.low_rating_positive, 1);
    }

    #[test]
    fn test_flag_exists_iff_mismatch_holds() {
        let cases = [
            (Some(1.0), Sentiment::Positive, true),
            (Some(2.0), Sentiment::Positive, true),
            (Some(4.0), Sentiment::Negative, true),
            (Some(5.0), Sentiment::Negative, true),
            (Some(3.0), Sentiment::Positive, false),
            (Some(3.0), Sentiment::Negative, false),
            (Some(1.0), Sentiment::Neutral, false),
            (None, Sentiment::Positive, false),
        ];

        for (rating, sentiment, expected) in cases {
            let r = result(rating, sentiment);
            assert_eq!(ConsistencyChecker::flag(&r), expected, "{rating:?} {sentiment:?}");
        }
    }

    #[test]
    fn test_checker_does_not_alter_results() {
        let results = vec![result(Some(1.0), Sentiment::Positive)];
        let before = results[0].clone();
        ConsistencyChecker::new().check(&results);

        assert_eq!(results[0].sentiment, before.sentiment);
        assert_eq!(results[0].confidence, before.confidence);
    }
}

mod aggregation {
    use super::*;

    #[test]
    fn test_end_to_end_corpus_counts() {
        let pipeline = AnalysisPipeline::new();
        let reviews = vec![
            // Five 5-star reviews with no negative words
            Review::new("p1", "Absolutely love it, excellent quality and works great", Some(5.0)),
            Review::new("p2", "Fantastic value, fast shipping and easy to use", Some(5.0)),
            Review::new("p3", "Best purchase this year, wonderful and useful", Some(5.0)),
            Review::new("p4", "Works perfectly, highly recommend", Some(5.0)),
            Review::new("p5", "Beautiful design, my family liked it", Some(5.0)),
            // Three 1-star reviews with strong negative phrases
            Review::new("n1", "Terrible quality, waste of money", Some(1.0)),
            Review::new("n2", "Broken on arrival, do not recommend", Some(1.0)),
            Review::new("n3", "Awful, defective and useless junk", Some(1.0)),
            // Two 3-star reviews with hedging phrases
            Review::new("m1", "It's just okay I guess", Some(3.0)),
            Review::new("m2", "Just okay, could be better", Some(3.0)),
        ];

        let run = pipeline.run(&reviews);
        assert_eq!(run.summary.sentiment_counts.positive, 5);
        assert_eq!(run.summary.sentiment_counts.negative, 3);
        assert_eq!(run.summary.sentiment_counts.neutral, 2);
        assert_eq!(run.summary.total, 10);
        assert_eq!(run.summary.consistency.total_flagged, 0);
    }

    #[test]
    fn test_summary_is_order_independent() {
        let pipeline = AnalysisPipeline::new();
        let mut reviews = vec![
            Review::new("a", "excellent battery and great screen", Some(5.0)),
            Review::new("b", "poor battery, screen broke", Some(1.0)),
            Review::new("c", "battery is just okay", Some(3.0)),
        ];

        let forward = pipeline.run(&reviews).summary;
        reviews.reverse();
        let backward = pipeline.run(&reviews).summary;

        assert_eq!(forward.sentiment_counts, backward.sentiment_counts);
        assert_eq!(forward.themes.overall, backward.themes.overall);
        assert_eq!(forward.pros_cons.pros, backward.pros_cons.pros);
    }

    #[test]
    fn test_theme_ranking_is_deterministic() {
        let aggregator = CorpusAggregator::new();
        let results: Vec<AnalysisResult> = ["delta alpha", "alpha delta"]
            .iter()
            .enumerate()
            .map(|(i, text)| AnalysisResult {
                source_id: format!("r{i}"),
                text: text.to_string(),
                sentiment: Sentiment::Neutral,
                confidence: 0.6,
                rating: None,
            })
            .collect();

        let summary = aggregator.summarize(&results);
        // Equal counts: lexicographic order breaks the tie.
        assert_eq!(summary.themes.overall[0].term, "alpha");
        assert_eq!(summary.themes.overall[1].term, "delta");
    }

    #[test]
    fn test_pros_cons_from_corpus() {
        let pipeline = AnalysisPipeline::new();
        let reviews = vec![
            Review::new("a", "Well made and sturdy, arrived quickly", Some(5.0)),
            Review::new("b", "Sturdy but expensive for what it is", Some(3.0)),
            Review::new("c", "Flimsy plastic, not worth the price", Some(2.0)),
        ];

        let summary = pipeline.run(&reviews).summary;
        let pros: Vec<&str> = summary.pros_cons.pros.iter().map(|t| t.term.as_str()).collect();
        let cons: Vec<&str> = summary.pros_cons.cons.iter().map(|t| t.term.as_str()).collect();

        assert!(pros.contains(&"good quality"));
        assert!(pros.contains(&"fast delivery"));
        assert!(cons.contains(&"poor quality"));
        assert!(cons.contains(&"overpriced"));
    }

    #[test]
    fn test_blank_reviews_reported_not_fatal() {
        let pipeline = AnalysisPipeline::new();
        let reviews = vec![
            Review::new("a", "", Some(5.0)),
            Review::new("b", "love it, works great", Some(5.0)),
        ];

        let summary = pipeline.run(&reviews).summary;
        assert_eq!(summary.total, 2);
        assert_eq!(summary.defaulted, 1);
        assert_eq!(summary.sentiment_counts.neutral, 1);
        assert_eq!(summary.sentiment_counts.positive, 1);
    }
}

mod classifier_strategies {
    use super::*;

    #[tokio::test]
    async fn test_local_classifier_agrees_with_scorer() {
        let classifier = LocalRuleClassifier::new();
        let scorer = SentimentScorer::new();
        let review = Review::new("r1", "great quality, highly recommend", Some(5.0));

        let via_classifier = classifier.classify(&review).await;
        let via_scorer = scorer.score(&review);

        assert_eq!(via_classifier.sentiment, via_scorer.sentiment);
        assert_eq!(via_classifier.confidence, via_scorer.confidence);
    }

    #[tokio::test]
    async fn test_pipeline_with_classifier_matches_local_run() {
        let pipeline = AnalysisPipeline::new();
        let classifier = LocalRuleClassifier::new();
        let reviews = vec![
            Review::new("a", "excellent, love it", Some(5.0)),
            Review::new("b", "just okay", Some(3.0)),
        ];

        let direct = pipeline.run(&reviews);
        let via_trait = pipeline.run_with(&classifier, &reviews).await;

        assert_eq!(
            direct.summary.sentiment_counts,
            via_trait.summary.sentiment_counts
        );
    }
}

mod custom_lexicon {
    use super::*;
    use review_insight::Lexicon;
    use std::io::Write;

    #[test]
    fn test_swapped_lexicon_changes_classification() {
        let path = std::env::temp_dir().join(format!(
            "review_insight_lexicon_{}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"{
                "version": "test-1",
                "positive": ["doubleplusgood"],
                "negative": ["doubleplusungood"],
                "neutral": ["unremarkable"]
            }"#,
        )
        .unwrap();

        let lexicon = Lexicon::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(lexicon.version(), "test-1");

        let scorer = SentimentScorer::new().with_lexicon(lexicon);
        // Built-in positive vocabulary is unknown to the custom lexicon.
        let (unknown, _) = scorer.score_text("excellent wonderful great product", None);
        assert_eq!(unknown, Sentiment::Neutral);

        let acc = scorer.evidence("doubleplusgood doubleplusgood doubleplusgood doubleplusgood", None);
        assert_eq!(acc.positive, 4);
    }

    #[test]
    fn test_empty_word_set_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "review_insight_badlex_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"positive": [], "negative": ["bad"], "neutral": ["ok"]}"#)
            .unwrap();

        let result = Lexicon::from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
