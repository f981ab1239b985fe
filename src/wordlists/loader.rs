//! Word list loading utilities
//!
//! Reads custom word lists (one word per line, `#` starts a comment line) and
//! converts embedded constants into [`Word`]s.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error from loading a word list file
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    InvalidWord {
        line: usize,
        text: String,
        source: WordError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Cannot read word list: {err}"),
            Self::InvalidWord { line, text, source } => {
                write!(f, "Line {line}: '{text}' is not a usable word: {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidWord { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Load words from a file
///
/// Every non-blank, non-comment line must be a valid [`Word`]; the first
/// invalid one is reported with its 1-based line number.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::InvalidWord` for the first unusable entry.
///
/// # Examples
/// ```no_run
/// use unscramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_words(&content)
}

/// Parse word list text
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first unusable entry.
pub fn parse_words(content: &str) -> Result<Vec<Word>, LoadError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            Word::new(text).map_err(|source| LoadError::InvalidWord {
                line,
                text: text.to_string(),
                source,
            })
        })
        .collect()
}

/// Convert embedded string slice to Word vector, skipping unusable entries
///
/// # Examples
/// ```
/// use unscramble::wordlists::loader::words_from_slice;
/// use unscramble::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["bat", "Cup", "fox"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "bat");
        assert_eq!(words[1].text(), "cup");
        assert_eq!(words[2].text(), "fox");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["bat", "a", "x-ray", "zzz", "cup"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "bat");
        assert_eq!(words[1].text(), "cup");
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let words = parse_words("# animals\nbat\n\n  fox  \n# more\nowl\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["bat", "fox", "owl"]);
    }

    #[test]
    fn parse_reports_line_of_invalid_word() {
        let err = parse_words("bat\n\ncup\naaa\nfox\n").unwrap_err();
        match err {
            LoadError::InvalidWord { line, text, source } => {
                assert_eq!(line, 4);
                assert_eq!(text, "aaa");
                assert_eq!(source, WordError::SingleLetter('a'));
            }
            LoadError::Io(err) => panic!("unexpected io error: {err}"),
        }
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "unscramble-loader-test-{}.txt",
            std::process::id()
        ));
        fs::write(&path, "melody\nharbor\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "harbor");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(err.to_string().starts_with("Cannot read word list"));
    }
}
