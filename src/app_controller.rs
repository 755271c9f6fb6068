use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::analysis::{LessonReport, SpeechStats, VocabularyAnalyzer};
use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::spelling::SpellingDictionary;
use crate::tagger::LexiconModel;
use crate::transcript::Transcript;

// @module: Application controller for lesson analysis

/// Main application controller for vocabulary analysis
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Analysis service with its model and dictionary
    analyzer: VocabularyAnalyzer,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let model = Arc::new(LexiconModel::new());

        // A missing dictionary file is a config error; an absent path just
        // disables correction
        let dictionary = Arc::new(
            SpellingDictionary::from_config(&config.spelling)
                .context("Failed to load spelling dictionary")?,
        );

        if !dictionary.is_enabled() {
            warn!("No spelling dictionary configured, correction disabled");
        }

        let analyzer = VocabularyAnalyzer::new(model, dictionary, &config.analysis);

        Ok(Self { config, analyzer })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.language.is_empty()
    }

    /// Analyze one lesson transcript against a reference book text
    pub fn run<P: AsRef<Path>>(&self, transcript_path: P, book_path: P) -> Result<LessonReport> {
        let transcript_path = transcript_path.as_ref();
        let book_path = book_path.as_ref();

        info!("Analyzing lesson transcript: {}", transcript_path.display());

        let transcript_text = FileManager::read_to_string(transcript_path)?;
        let book_text = FileManager::read_to_string(book_path)?;

        self.analyze_texts(&transcript_text, &book_text)
    }

    /// Analyze already-loaded transcript and book text
    pub fn analyze_texts(&self, transcript_text: &str, book_text: &str) -> Result<LessonReport> {
        let result = self
            .analyzer
            .analyze_vocabulary(transcript_text, book_text)
            .context("Vocabulary analysis failed")?;

        let mut report = LessonReport::from_result(&result);

        if report.is_error() {
            warn!("No student speech found in transcript");
            return Ok(report);
        }

        // Speaking statistics only exist when the transcript parses as timed
        // blocks; plain tagged text is still analyzable without them
        match Transcript::parse(transcript_text) {
            Ok(transcript) => {
                debug!("{}", transcript);
                report = report.with_speech_stats(SpeechStats::from_transcript(&transcript));
            }
            Err(e) => {
                debug!("Transcript not parseable as timed blocks: {}", e);
            }
        }

        info!(
            "Analysis completed: {} meaningful words, {} outside book",
            report.summary.total_meaningful_words, report.summary.words_outside_book
        );

        Ok(report)
    }

    /// Serialize a report to pretty JSON
    pub fn render_report(report: &LessonReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report")
    }

    /// Write a report to a file as pretty JSON
    pub fn write_report<P: AsRef<Path>>(report: &LessonReport, path: P) -> Result<()> {
        let rendered = Self::render_report(report)?;
        FileManager::write_string(path, &rendered)
    }
}
