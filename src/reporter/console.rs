//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::analyzer::scoring::ScoreCalculator;
use crate::tagger::PosTag;
use crate::{ContentReport, Grade, Issue, Section, SentimentLabel, Severity, TaggerStatus};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single document
    pub fn report(&self, report: &ContentReport) {
        self.print_header(report);
        self.print_score(report);
        self.print_breakdown(report);
        self.print_keywords(report);
        self.print_sentiment(report);
        self.print_readability(report);
        self.print_linguistic(report);

        if !report.issues.is_empty() {
            self.print_issues(report);
        }

        self.print_recommendations(report);
        println!();
    }

    /// Report multiple documents with summary
    pub fn report_many(&self, reports: &[ContentReport], stats: &AggregateStats) {
        for report in reports {
            self.report(report);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, report: &ContentReport) {
        println!(
            "{}: {} ({})",
            report.file_path.display(),
            report.summary.overall_score,
            self.colorize_grade(&report.grade)
        );
    }

    fn print_header(&self, report: &ContentReport) {
        println!();
        println!(
            "{}",
            format!("📝 Content Quality Analysis: {}", report.file_path.display()).bold()
        );
        let keywords = if report.keywords.is_empty() {
            "none".to_string()
        } else {
            report.keywords.join(", ")
        };
        println!(
            "   Words: {} | Sentences: {} | Keywords: {}",
            report.analysis.word_count, report.analysis.sentence_count, keywords
        );
        println!();
    }

    fn print_score(&self, report: &ContentReport) {
        let grade_str = self.colorize_grade(&report.grade);
        let score_bar = self.create_score_bar(report.summary.overall_score);

        println!("   Score: {} {}", score_bar, grade_str.bold());
        println!(
            "   {}",
            ScoreCalculator::grade_description(report.grade).dimmed()
        );
        println!();
    }

    fn print_breakdown(&self, report: &ContentReport) {
        println!("   {}", "Score Breakdown:".bold());

        let summary = &report.summary;
        let categories = [
            ("Keyword Optimization", summary.keyword_score),
            ("Readability", summary.readability_score),
            ("Content Quality", summary.content_score),
        ];
        for (name, score) in categories {
            let bar = self.create_mini_bar(score, 100);
            let score_str = format!("{:>3}/100", score);
            let colored_score = if score >= 70 {
                score_str.green()
            } else if score >= 50 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!("   {} {} {}", bar, colored_score, name);
        }
        println!();
    }

    fn print_keywords(&self, report: &ContentReport) {
        println!("   {}", "Keywords:".bold());
        match &report.analysis.keywords {
            Section::Complete(result) => {
                for d in &result.density {
                    println!(
                        "   \"{}\" {}% ({} occurrences)",
                        d.keyword, d.density, d.count
                    );
                }
                let top = if self.verbose { result.tfidf.len() } else { 5 };
                let terms: Vec<String> = result
                    .tfidf
                    .iter()
                    .take(top)
                    .map(|t| format!("{} ({})", t.term, t.frequency))
                    .collect();
                if !terms.is_empty() {
                    println!("   {} {}", "Top terms:".dimmed(), terms.join(", "));
                }
            }
            Section::Failed(f) => self.print_failed(&f.message),
        }
        println!();
    }

    fn print_sentiment(&self, report: &ContentReport) {
        println!("   {}", "Sentiment:".bold());
        match &report.analysis.sentiment {
            Section::Complete(result) => {
                let label = format!("{} ({:.2})", result.label, result.score);
                let label = match result.label {
                    SentimentLabel::VeryPositive | SentimentLabel::Positive => label.green(),
                    SentimentLabel::Neutral => label.normal(),
                    _ => label.red(),
                };
                println!("   Overall: {}", label);
                println!(
                    "   Sentences: {} positive, {} neutral, {} negative",
                    result.distribution.positive,
                    result.distribution.neutral,
                    result.distribution.negative
                );
            }
            Section::Failed(f) => self.print_failed(&f.message),
        }
        println!();
    }

    fn print_readability(&self, report: &ContentReport) {
        println!("   {}", "Readability:".bold());
        match &report.analysis.readability {
            Section::Complete(r) => {
                println!("   Flesch-Kincaid: {} ({})", r.flesch_kincaid, r.level);
                println!(
                    "   Avg sentence length: {} words | Avg word length: {} chars",
                    r.avg_sentence_length, r.avg_word_length
                );
                if self.verbose {
                    println!(
                        "   Syllables: {} ({} per word)",
                        r.total_syllables, r.syllables_per_word
                    );
                }
            }
            Section::Failed(f) => self.print_failed(&f.message),
        }
        println!();
    }

    fn print_linguistic(&self, report: &ContentReport) {
        println!("   {}", "Language:".bold());
        match &report.analysis.linguistic {
            Section::Complete(l) => {
                let types = &l.grammar.sentence_types;
                println!(
                    "   Sentence types: {} declarative, {} interrogative, {} exclamatory, {} imperative",
                    types.declarative, types.interrogative, types.exclamatory, types.imperative
                );
                let clauses = &l.grammar.clauses;
                println!(
                    "   Clauses: {} simple, {} compound, {} complex",
                    clauses.simple, clauses.compound, clauses.complex
                );
                let v = &l.vocabulary;
                println!(
                    "   Vocabulary: {} unique of {} ({}% lexical density), {} long words",
                    v.unique_words, v.total_words, v.lexical_density, v.long_word_count
                );

                if let Some(ref pos) = l.parts_of_speech {
                    let parts: Vec<String> = PosTag::WORD_CLASSES
                        .iter()
                        .map(|tag| format!("{} {}", pos.get(tag).copied().unwrap_or(0), tag))
                        .collect();
                    println!("   Parts of speech: {}", parts.join(", "));
                }
                if let Some(ref tenses) = l.grammar.verb_tenses {
                    println!(
                        "   Verb tenses: {} present, {} past, {} future",
                        tenses.present, tenses.past, tenses.future
                    );
                }
                if self.verbose {
                    let status = match &l.tagger {
                        TaggerStatus::Used { name } => format!("tagger: {}", name),
                        TaggerStatus::Unavailable { reason } => {
                            format!("tagger unavailable: {}", reason)
                        }
                        TaggerStatus::Disabled => "tagger disabled".to_string(),
                    };
                    println!("   {}", status.dimmed());
                }
            }
            Section::Failed(f) => self.print_failed(&f.message),
        }
        println!();
    }

    fn print_failed(&self, message: &str) {
        println!("   {} {}", "✗".red(), format!("unavailable: {}", message).dimmed());
    }

    fn print_issues(&self, report: &ContentReport) {
        println!("   {}", "Issues Found:".bold());

        let by_severity = |sev: Severity| report.issues.iter().filter(move |i| i.severity == sev);

        for issue in by_severity(Severity::Error) {
            self.print_issue(issue);
        }
        for issue in by_severity(Severity::Warning) {
            self.print_issue(issue);
        }
        for issue in by_severity(Severity::Info) {
            self.print_issue(issue);
        }

        println!();
    }

    fn print_issue(&self, issue: &Issue) {
        let icon = match issue.severity {
            Severity::Error => "✗".red(),
            Severity::Warning => "⚠".yellow(),
            Severity::Info => "ℹ".blue(),
        };

        println!(
            "   {} [{}] {}",
            icon,
            issue.rule.to_string().dimmed(),
            issue.message
        );

        if let Some(ref suggestion) = issue.suggestion {
            println!("       {} {}", "→".dimmed(), suggestion.italic());
        }
    }

    fn print_recommendations(&self, report: &ContentReport) {
        if report.summary.overall_score >= 90 {
            return;
        }
        let recs = ScoreCalculator::recommendations(&report.summary);
        println!("   {}", "Recommendations:".bold());
        for rec in recs.iter().take(3) {
            println!("   {} {}", "→".cyan(), rec);
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Documents analyzed: {}",
            stats.documents_analyzed.to_string().bold()
        );
        println!(
            "   Average score:      {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_grade(&stats.average_grade)
        );
        println!("   Total words:        {}", stats.total_words);
        println!("   Total issues:       {}", stats.total_issues);
        if stats.partial_results > 0 {
            println!(
                "   Partial results:    {}",
                stats.partial_results.to_string().yellow()
            );
        }
        println!();
    }

    fn colorize_grade(&self, grade: &Grade) -> colored::ColoredString {
        let s = grade.to_string();
        match grade {
            Grade::A => s.green().bold(),
            Grade::B => s.green(),
            Grade::C => s.yellow(),
            Grade::D => s.red(),
            Grade::F => s.red().bold(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score >= 80 {
                bar.green().to_string()
            } else if score >= 60 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: u8, max: u8) -> String {
        let filled = (score as usize * 10) / max as usize;
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
