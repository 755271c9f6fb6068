/*!
 * Common test utilities for the vocascope test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample lesson transcript file for testing
pub fn create_test_transcript(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_TRANSCRIPT)
}

/// Creates a small SymSpell frequency dictionary file for testing
pub fn create_test_dictionary(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "reading 120\n\
                   really 110\n\
                   enjoy 100\n\
                   books 90\n\
                   stories 80\n\
                   library 70\n\
                   fun 60\n";
    create_test_file(dir, filename, content)
}

/// Lesson transcript with interleaved teacher and student turns
pub const SAMPLE_TRANSCRIPT: &str = "1\n\
00:00:01,000 --> 00:00:03,000\n\
[T]: What did you do last weekend?\n\
2\n\
00:00:04,000 --> 00:00:08,000\n\
[S]: I really enjoy reading books.\n\
3\n\
00:00:09,000 --> 00:00:11,000\n\
[T]: Good job.\n\
4\n\
00:00:12,000 --> 00:00:16,000\n\
[S]: I visited the library with my brother.\n";

/// Transcript containing only teacher turns
pub const TEACHER_ONLY_TRANSCRIPT: &str = "1\n\
00:00:01,000 --> 00:00:03,000\n\
[T]: Open your books to page ten.\n\
2\n\
00:00:04,000 --> 00:00:06,000\n\
[T]: Read the first paragraph.\n";
