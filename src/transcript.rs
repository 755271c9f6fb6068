use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::{Result, Context, anyhow};
use log::warn;

// @module: Lesson transcript parsing and student speech segmentation

// @const: SRT timestamp range regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})").unwrap()
});

// @const: Embedded timestamp range, tolerant of spacing around the arrow
static TIMESTAMP_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}:\d{2}:\d{2},\d{3}\s*-->\s*\d{2}:\d{2}:\d{2},\d{3}").unwrap()
});

// @const: Student turn marker
static STUDENT_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[S\]:\s*").unwrap());

// @const: Start of a new subtitle block: integer index then the opening of a timecode
static BLOCK_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\d+\s+\d{2}:").unwrap());

// @const: Leading integer line number
static LINE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\s+").unwrap());

// @const: Any speaker tag marker
static SPEAKER_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(?:T|S)\]:\s*").unwrap());

/// Who produced an utterance in the lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// Teacher turn, tagged `[T]:`
    Teacher,
    /// Student turn, tagged `[S]:`
    Student,
}

impl Speaker {
    /// Detect the speaker from the first tag in an utterance line
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        if trimmed.starts_with("[S]:") {
            Some(Speaker::Student)
        } else if trimmed.starts_with("[T]:") {
            Some(Speaker::Teacher)
        } else {
            None
        }
    }

    /// The tag marker for this speaker
    pub fn tag(&self) -> &'static str {
        match self {
            Speaker::Teacher => "[T]:",
            Speaker::Student => "[S]:",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Speaker::Teacher => write!(f, "teacher"),
            Speaker::Student => write!(f, "student"),
        }
    }
}

// @struct: Single transcript turn
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Speaker, when the utterance carried a tag
    pub speaker: Option<Speaker>,

    // @field: Utterance text with tags stripped
    pub text: String,
}

impl TranscriptEntry {
    /// Creates a new transcript entry - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(
        seq_num: usize,
        start_time_ms: u64,
        end_time_ms: u64,
        speaker: Option<Speaker>,
        text: String,
    ) -> Self {
        TranscriptEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            speaker,
            text,
        }
    }

    // @creates: Validated transcript entry
    // @validates: Time range and non-empty text
    pub fn new_validated(
        seq_num: usize,
        start_time_ms: u64,
        end_time_ms: u64,
        speaker: Option<Speaker>,
        text: String,
    ) -> Result<Self> {
        // Validate time range
        if end_time_ms <= start_time_ms {
            return Err(anyhow!(
                "Invalid time range: end time {} <= start time {}",
                end_time_ms,
                start_time_ms
            ));
        }

        // Validate text is not empty (after trimming)
        let trimmed_text = text.trim();
        if trimmed_text.is_empty() {
            return Err(anyhow!("Empty utterance text for entry {}", seq_num));
        }

        Ok(TranscriptEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            speaker,
            text: trimmed_text.to_string(),
        })
    }

    /// Parse an SRT timestamp to milliseconds
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        // Parse HH:MM:SS,mmm format
        let parts: Vec<&str> = timestamp.split(&[':', ',', '.'][..]).collect();

        if parts.len() != 4 {
            return Err(anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        // Validate time components
        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }

    /// Duration of this turn in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.end_time_ms.saturating_sub(self.start_time_ms)
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        match self.speaker {
            Some(speaker) => writeln!(f, "{} {}", speaker.tag(), self.text)?,
            None => writeln!(f, "{}", self.text)?,
        }
        writeln!(f)
    }
}

/// Parsed lesson transcript with speaker-attributed turns
#[derive(Debug)]
pub struct Transcript {
    /// List of transcript entries
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Parse SRT-style transcript content into speaker-attributed entries
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();

        // State variables for parsing
        let mut current_seq_num: Option<usize> = None;
        let mut current_start_time_ms: Option<u64> = None;
        let mut current_end_time_ms: Option<u64> = None;
        let mut current_speaker: Option<Speaker> = None;
        let mut current_text = String::new();
        let mut line_count = 0;

        // Helper function to add the current entry if complete
        let mut add_current_entry =
            |seq_num: usize, start_ms: u64, end_ms: u64, speaker: Option<Speaker>, text: &str| {
                if !text.trim().is_empty() {
                    match TranscriptEntry::new_validated(
                        seq_num,
                        start_ms,
                        end_ms,
                        speaker,
                        text.trim().to_string(),
                    ) {
                        Ok(entry) => {
                            entries.push(entry);
                        }
                        Err(e) => {
                            warn!("Skipping invalid transcript entry {}: {}", seq_num, e);
                        }
                    }
                } else {
                    warn!("Skipping empty transcript entry {}", seq_num);
                }
            };

        for line in content.lines() {
            line_count += 1;
            let trimmed = line.trim();

            // Empty line finalizes the current entry
            if trimmed.is_empty() {
                if let (Some(seq_num), Some(start_ms), Some(end_ms)) =
                    (current_seq_num, current_start_time_ms, current_end_time_ms)
                {
                    if !current_text.is_empty() {
                        add_current_entry(seq_num, start_ms, end_ms, current_speaker, &current_text);

                        // Reset state for next entry
                        current_seq_num = None;
                        current_start_time_ms = None;
                        current_end_time_ms = None;
                        current_speaker = None;
                        current_text.clear();
                    }
                }
                continue;
            }

            // Try to parse as sequence number (only if we're starting a new entry)
            if current_seq_num.is_none() && current_text.is_empty() {
                if let Ok(num) = trimmed.parse::<usize>() {
                    current_seq_num = Some(num);
                    continue;
                }
            }

            // Try to parse as timestamp
            if current_seq_num.is_some()
                && current_start_time_ms.is_none()
                && current_end_time_ms.is_none()
            {
                if let Some(caps) = TIMESTAMP_REGEX.captures(trimmed) {
                    match (
                        Self::parse_timestamp_to_ms(&caps, 1),
                        Self::parse_timestamp_to_ms(&caps, 5),
                    ) {
                        (Ok(start_ms), Ok(end_ms)) => {
                            current_start_time_ms = Some(start_ms);
                            current_end_time_ms = Some(end_ms);
                            continue;
                        }
                        _ => {
                            warn!("Invalid timestamp format at line {}: {}", line_count, trimmed);
                        }
                    }
                }
            }

            // A timecode line while reading text starts a new block: tagged
            // transcripts often omit the blank separator line, so the block
            // index was consumed as text on the previous line
            if current_start_time_ms.is_some() {
                if let Some(caps) = TIMESTAMP_REGEX.captures(trimmed) {
                    if let (Ok(start_ms), Ok(end_ms)) = (
                        Self::parse_timestamp_to_ms(&caps, 1),
                        Self::parse_timestamp_to_ms(&caps, 5),
                    ) {
                        let new_seq = pop_trailing_index(&mut current_text);

                        if let (Some(seq_num), Some(prev_start), Some(prev_end)) =
                            (current_seq_num, current_start_time_ms, current_end_time_ms)
                        {
                            if !current_text.is_empty() {
                                add_current_entry(
                                    seq_num,
                                    prev_start,
                                    prev_end,
                                    current_speaker,
                                    &current_text,
                                );
                            }
                        }

                        current_seq_num = Some(new_seq.unwrap_or(0));
                        current_start_time_ms = Some(start_ms);
                        current_end_time_ms = Some(end_ms);
                        current_speaker = None;
                        current_text.clear();
                        continue;
                    }
                }
            }

            // If we have a sequence number and timestamps, this must be utterance text
            if current_seq_num.is_some()
                && current_start_time_ms.is_some()
                && current_end_time_ms.is_some()
            {
                // The first tagged line decides the speaker for the whole turn
                if current_speaker.is_none() {
                    current_speaker = Speaker::from_line(trimmed);
                }
                let untagged = SPEAKER_TAG_REGEX.replace_all(trimmed, "");
                if !current_text.is_empty() {
                    current_text.push('\n');
                }
                current_text.push_str(untagged.trim());
            } else {
                // Text before sequence number or timestamps is likely malformed
                warn!(
                    "Unexpected text at line {} before sequence number or timestamp: {}",
                    line_count, trimmed
                );
            }
        }

        // Add the last entry if there is one
        if let (Some(seq_num), Some(start_ms), Some(end_ms)) =
            (current_seq_num, current_start_time_ms, current_end_time_ms)
        {
            if !current_text.is_empty() {
                add_current_entry(seq_num, start_ms, end_ms, current_speaker, &current_text);
            }
        }

        if entries.is_empty() {
            warn!("No valid transcript entries found in content");
            return Err(anyhow!("No valid transcript entries were found in the content"));
        }

        // Sort by start time to ensure correct order
        entries.sort_by_key(|entry| entry.start_time_ms);

        // Renumber entries to ensure sequential order
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.seq_num = i + 1;
        }

        Ok(Transcript { entries })
    }

    /// Parse timestamp to milliseconds
    fn parse_timestamp_to_ms(caps: &regex::Captures, start_idx: usize) -> Result<u64> {
        let hours: u64 = caps
            .get(start_idx)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let minutes: u64 = caps
            .get(start_idx + 1)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let seconds: u64 = caps
            .get(start_idx + 2)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let millis: u64 = caps
            .get(start_idx + 3)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));

        Ok((hours * 3600 + minutes * 60 + seconds) * 1000 + millis)
    }

    /// Number of turns attributed to the given speaker
    pub fn turn_count(&self, speaker: Speaker) -> usize {
        self.entries
            .iter()
            .filter(|e| e.speaker == Some(speaker))
            .count()
    }

    /// Total speaking time of the given speaker in milliseconds
    pub fn speaking_time_ms(&self, speaker: Speaker) -> u64 {
        self.entries
            .iter()
            .filter(|e| e.speaker == Some(speaker))
            .map(|e| e.duration_ms())
            .sum()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Lesson Transcript")?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        writeln!(f, "Student turns: {}", self.turn_count(Speaker::Student))?;
        writeln!(f, "Teacher turns: {}", self.turn_count(Speaker::Teacher))?;
        Ok(())
    }
}

/// Remove a trailing bare-integer line from accumulated text and return it.
/// That line is the index of the block that follows.
fn pop_trailing_index(text: &mut String) -> Option<usize> {
    let (rest, last_line) = match text.rfind('\n') {
        Some(idx) => (&text[..idx], &text[idx + 1..]),
        None => ("", text.as_str()),
    };

    let index: usize = last_line.trim().parse().ok()?;
    let rest_len = rest.len();
    text.truncate(rest_len);
    Some(index)
}

/// Extract student speech from a tagged transcript.
///
/// A student turn begins at a `[S]:` marker and runs until the next subtitle
/// block (an integer index followed by the opening of a timecode) or end of
/// input, so multi-line utterances are kept whole. Timecode ranges, leading
/// line numbers, and residual tag markers are stripped from each captured
/// span, and the cleaned spans are joined with single spaces.
///
/// Returns an empty string when the transcript has no `[S]:` markers.
pub fn extract_student_speech(transcript: &str) -> String {
    let mut spans: Vec<&str> = Vec::new();
    let mut pos = 0;

    // Capture each student span up to the next block boundary, resuming the
    // scan after the span so nested markers are not captured twice
    while let Some(tag) = STUDENT_TAG_REGEX.find_at(transcript, pos) {
        let start = tag.end();
        let end = BLOCK_BOUNDARY_REGEX
            .find(&transcript[start..])
            .map_or(transcript.len(), |boundary| start + boundary.start());
        spans.push(&transcript[start..end]);
        pos = end;
    }

    let cleaned: Vec<String> = spans
        .iter()
        .map(|span| {
            let stripped = TIMESTAMP_RANGE_REGEX.replace_all(span, "");
            let stripped = LINE_NUMBER_REGEX.replace_all(&stripped, "");
            let stripped = SPEAKER_TAG_REGEX.replace_all(&stripped, "");
            stripped.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|span| !span.is_empty())
        .collect();

    cleaned.join(" ")
}
