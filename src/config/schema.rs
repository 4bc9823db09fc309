//! Config schema and deserialization

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Rule severity override (error, warning, info, off)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Error,
    Warning,
    Info,
    /// Disable the rule entirely
    Off,
}

impl RuleSeverity {
    /// Convert to crate::Severity if not Off
    pub fn to_severity(self) -> Option<crate::Severity> {
        match self {
            RuleSeverity::Error => Some(crate::Severity::Error),
            RuleSeverity::Warning => Some(crate::Severity::Warning),
            RuleSeverity::Info => Some(crate::Severity::Info),
            RuleSeverity::Off => None,
        }
    }
}

/// Which part-of-speech tagger the lexical analyzer uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaggerSetting {
    /// Built-in rule-based tagger (default)
    #[default]
    Builtin,
    /// Heuristic grammar statistics only
    Off,
}

/// Per-path override configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Glob patterns this override applies to
    pub files: Vec<String>,

    /// Optional threshold override for matched files
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Replace the keyword list for matched files
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    /// Optional rule overrides for matched files
    #[serde(default)]
    pub rules: HashMap<String, RuleSeverity>,

    #[serde(default)]
    pub tagger: Option<TaggerSetting>,
}

/// Root config structure for .lucidrc.json
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum overall score (exit 1 if below). Default: 0
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Keywords to measure; the first one drives the keyword score
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Per-rule severity overrides. Key is rule name in kebab-case.
    #[serde(default)]
    pub rules: HashMap<String, RuleSeverity>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Document extensions picked up when walking a directory (default: txt, md, markdown)
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub tagger: TaggerSetting,

    /// Per-path configuration overrides
    #[serde(default)]
    pub overrides: Vec<ConfigOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extends: None,
            threshold: None,
            keywords: Vec::new(),
            rules: HashMap::new(),
            ignore: Vec::new(),
            extensions: Vec::new(),
            tagger: TaggerSetting::Builtin,
            overrides: Vec::new(),
        }
    }
}

/// Trim keywords and drop the ones left blank (`--keywords ",cat"`)
fn clean_keywords(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_threshold: Option<u8>,
        cli_keywords: &[String],
        cli_no_tagger: bool,
    ) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self.keywords = clean_keywords(&self.keywords);
        for override_cfg in &mut self.overrides {
            if let Some(ref keywords) = override_cfg.keywords {
                override_cfg.keywords = Some(clean_keywords(keywords));
            }
        }
        let cli_keywords = clean_keywords(cli_keywords);
        if !cli_keywords.is_empty() {
            self.keywords = cli_keywords;
            // keywords given on the command line apply to every file
            for override_cfg in &mut self.overrides {
                override_cfg.keywords = None;
            }
        }
        if cli_no_tagger {
            self.tagger = TaggerSetting::Off;
            for override_cfg in &mut self.overrides {
                override_cfg.tagger = None;
            }
        }
        self
    }

    /// Get the effective severity for a rule, or None if not in config
    pub fn rule_severity(&self, rule_id: &str) -> Option<RuleSeverity> {
        self.rules.get(rule_id).copied()
    }

    /// Get effective config for a specific file path, applying overrides
    pub fn effective_for_file(&self, file_path: &Path) -> EffectiveConfig {
        let mut effective = EffectiveConfig {
            threshold: self.threshold,
            keywords: clean_keywords(&self.keywords),
            rules: self.rules.clone(),
            tagger: self.tagger,
        };

        // Apply matching overrides in order
        for override_cfg in &self.overrides {
            if Self::matches_override(file_path, &override_cfg.files) {
                if let Some(threshold) = override_cfg.threshold {
                    effective.threshold = Some(threshold);
                }
                if let Some(ref keywords) = override_cfg.keywords {
                    effective.keywords = clean_keywords(keywords);
                }
                for (rule, severity) in &override_cfg.rules {
                    effective.rules.insert(rule.clone(), *severity);
                }
                if let Some(tagger) = override_cfg.tagger {
                    effective.tagger = tagger;
                }
            }
        }

        effective
    }

    /// Check if a file path matches any of the override patterns
    fn matches_override(file_path: &Path, patterns: &[String]) -> bool {
        let path_str = file_path.to_string_lossy();
        for pattern in patterns {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(file_path)
                    || path_str.contains(pattern.trim_start_matches("**/"))
                {
                    return true;
                }
            }
        }
        false
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.keywords.is_empty() {
            self.keywords = base.keywords;
        }
        if self.tagger == TaggerSetting::Builtin {
            self.tagger = base.tagger;
        }

        for (rule, severity) in base.rules {
            self.rules.entry(rule).or_insert(severity);
        }

        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        if self.extensions.is_empty() {
            self.extensions = base.extensions;
        }

        // Prepend base overrides
        let mut all_overrides = base.overrides;
        all_overrides.append(&mut self.overrides);
        self.overrides = all_overrides;
    }

    /// Extensions of documents to analyze, without the leading dot
    pub fn document_extensions(&self) -> Vec<&str> {
        if self.extensions.is_empty() {
            vec!["txt", "md", "markdown"]
        } else {
            self.extensions
                .iter()
                .map(|s| s.trim_start_matches('.'))
                .collect()
        }
    }

    /// True when the path has one of the configured document extensions
    pub fn is_document(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.document_extensions()
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }
}

/// Effective configuration for a specific file (after applying overrides)
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub threshold: Option<u8>,
    pub keywords: Vec<String>,
    pub rules: HashMap<String, RuleSeverity>,
    pub tagger: TaggerSetting,
}
