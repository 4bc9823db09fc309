//! Integration tests: full analysis pipeline against test-repos/sample-site/

use lucid::analyzer::AnalysisEngine;
use lucid::config::{load_config, Config};
use lucid::{ContentReport, Rule, Severity, TaggerStatus};
use std::path::{Path, PathBuf};

const SITE_ROOT: &str = "test-repos/sample-site";
const GUIDE: &str = "test-repos/sample-site/coffee-guide.md";
const STUFFED: &str = "test-repos/sample-site/stuffed.txt";
const NOTE: &str = "test-repos/sample-site/notes/short-note.txt";

fn site_config() -> Config {
    load_config(Path::new(SITE_ROOT), None).expect("sample-site config loads")
}

fn analyze(path: &str) -> ContentReport {
    let config = site_config();
    AnalysisEngine::new()
        .analyze_file(Path::new(path), Some(&config))
        .unwrap_or_else(|e| panic!("analyze({}) failed: {}", path, e))
}

// --- Config pickup ---

#[test]
fn site_config_supplies_keywords() {
    let config = site_config();
    assert_eq!(config.keywords, vec!["coffee".to_string()]);
    assert_eq!(config.ignore, vec!["**/drafts/**".to_string()]);

    let r = analyze(GUIDE);
    assert_eq!(r.keywords, vec!["coffee".to_string()]);
}

// --- Score sanity ---

#[test]
fn guide_keyword_density_in_range() {
    let r = analyze(GUIDE);
    let keywords = r.analysis.keywords.value().expect("keywords complete");
    let coffee = &keywords.density[0];
    assert_eq!(coffee.keyword, "coffee");
    assert!(coffee.count >= 3, "coffee count = {}", coffee.count);
    assert!(
        coffee.density >= 1.0 && coffee.density <= 5.0,
        "density = {}",
        coffee.density
    );
    assert_eq!(r.summary.keyword_score, 100);
}

#[test]
fn guide_scores_above_stuffed() {
    let guide = analyze(GUIDE);
    let stuffed = analyze(STUFFED);
    assert!(
        guide.summary.overall_score > stuffed.summary.overall_score,
        "guide {} vs stuffed {}",
        guide.summary.overall_score,
        stuffed.summary.overall_score
    );
}

#[test]
fn guide_all_sections_complete() {
    let r = analyze(GUIDE);
    assert!(r.analysis.failed_sections().is_empty());
    assert!(r.analysis.word_count > 100);
    assert!(r.analysis.sentence_count > 10);
}

#[test]
fn guide_covers_every_sentence_type() {
    let r = analyze(GUIDE);
    let linguistic = r.analysis.linguistic.value().unwrap();
    let types = linguistic.grammar.sentence_types;
    assert!(types.declarative > 0);
    assert!(types.interrogative > 0);
    assert!(types.exclamatory > 0);
    assert!(types.imperative > 0);
    assert!(!types.has_empty_bucket());
}

#[test]
fn guide_uses_builtin_tagger() {
    let r = analyze(GUIDE);
    let linguistic = r.analysis.linguistic.value().unwrap();
    assert_eq!(
        linguistic.tagger,
        TaggerStatus::Used {
            name: "rule-based".to_string()
        }
    );
    let pos = linguistic.parts_of_speech.as_ref().expect("pos counts");
    assert!(pos.values().sum::<usize>() > 0);
    assert!(linguistic.grammar.verb_tenses.is_some());
}

#[test]
fn stuffed_keyword_score_zero() {
    let r = analyze(STUFFED);
    assert_eq!(r.summary.keyword_score, 0);
    let density = &r.analysis.keywords.value().unwrap().density[0];
    assert_eq!(density.count, 6);
    assert_eq!(density.density, 54.55);
}

// --- Findings ---

#[test]
fn stuffed_reports_keyword_stuffing() {
    let r = analyze(STUFFED);
    let stuffing: Vec<_> = r
        .issues
        .iter()
        .filter(|i| i.rule == Rule::KeywordStuffing)
        .collect();
    assert_eq!(stuffing.len(), 1);
    assert!(stuffing[0].message.contains("\"coffee\""));
    assert!(stuffing[0].suggestion.is_some());
}

#[test]
fn short_documents_flagged_as_too_short() {
    let r = analyze(GUIDE);
    let short = r
        .issues
        .iter()
        .find(|i| i.rule == Rule::ContentTooShort)
        .expect("guide is under 300 words");
    assert_eq!(short.severity, Severity::Warning);
    assert!(short.message.contains("300 words"));
}

#[test]
fn override_switches_rule_off_for_notes() {
    let r = analyze(NOTE);
    assert!(
        r.issues.iter().all(|i| i.rule != Rule::ContentTooShort),
        "content-too-short is off under notes/: {:?}",
        r.issues
    );
}

#[test]
fn findings_do_not_change_scores() {
    let config = site_config();
    let engine = AnalysisEngine::new();
    let note = engine.analyze_file(Path::new(NOTE), Some(&config)).unwrap();
    let plain = engine
        .analyze_file(
            Path::new(NOTE),
            Some(&Config {
                keywords: vec!["coffee".to_string()],
                ..Config::default()
            }),
        )
        .unwrap();
    assert_ne!(note.issues.len(), plain.issues.len());
    assert_eq!(note.summary, plain.summary);
}

// --- Batch ---

#[test]
fn parallel_matches_sequential() {
    let config = site_config();
    let engine = AnalysisEngine::new();
    let paths: Vec<PathBuf> = [GUIDE, STUFFED, NOTE].iter().map(PathBuf::from).collect();
    let refs: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();

    let sequential: Vec<_> = engine
        .analyze_many(&refs, Some(&config))
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    let parallel: Vec<_> = engine
        .analyze_parallel(&paths, Some(&config))
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(sequential.len(), 3);
    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s.file_path, p.file_path);
        assert_eq!(s.summary, p.summary);
        assert_eq!(s.issues.len(), p.issues.len());
    }
}

#[test]
fn aggregate_stats_over_site() {
    let reports = vec![analyze(GUIDE), analyze(STUFFED), analyze(NOTE)];
    let stats = AnalysisEngine::aggregate_stats(&reports);

    assert_eq!(stats.documents_analyzed, 3);
    assert_eq!(
        stats.total_words,
        reports.iter().map(|r| r.analysis.word_count).sum::<usize>()
    );
    assert_eq!(
        stats.total_issues,
        reports.iter().map(|r| r.issues.len()).sum::<usize>()
    );
    assert_eq!(stats.partial_results, 0);

    let min = reports.iter().map(|r| r.summary.overall_score).min().unwrap();
    let max = reports.iter().map(|r| r.summary.overall_score).max().unwrap();
    assert!(stats.average_score >= min && stats.average_score <= max);
}

// --- Library entry points ---

#[test]
fn lib_analyze_file_finds_config_in_work_dir() {
    let r = lucid::analyze_file(Path::new(STUFFED), Path::new(SITE_ROOT), None).unwrap();
    assert_eq!(r.keywords, vec!["coffee".to_string()]);
    assert!(r.issues.iter().any(|i| i.rule == Rule::KeywordStuffing));
}

#[test]
fn lib_analyze_text_is_deterministic() {
    let text = std::fs::read_to_string(GUIDE).unwrap();
    let a = lucid::analyze_text(&text, &["coffee"]).unwrap();
    let b = lucid::analyze_text(&text, &["coffee"]).unwrap();
    assert_eq!(a, b);
}
