//! N-gram pattern extraction and frequency ranking

use ngramcat_core::{Error, Result, MAX_NGRAM_LEN, MAX_PATTERNS};
use regex::Regex;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Marker padding both ends of every word.
///
/// Never part of a word: it is not a letter, so the non-letter collapse
/// removes it from the input before padding.
pub const BOUNDARY: char = '_';

/// Markers appended after each word, enough for one full-length n-gram
/// starting on the last letter.
const TRAILING_PAD: usize = MAX_NGRAM_LEN - 1;

/// How words are broken into n-gram units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtractionMode {
    /// Lowercased Unicode code points
    #[default]
    CodePoints,
    /// Raw UTF-8 bytes, no case folding
    Bytes,
}

/// A ranked n-gram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Encoded n-gram (UTF-8 in code-point mode, raw bytes otherwise)
    pub gram: Vec<u8>,

    /// Occurrences in the extracted text
    pub count: u32,

    /// Zero-based position in the profile (0 = most frequent)
    pub rank: usize,
}

impl Pattern {
    /// The n-gram as text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.gram).ok()
    }
}

/// N-grams of a text ordered by descending count, then ascending n-gram.
///
/// Holds at most [`MAX_PATTERNS`] entries, with ranks `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedProfile {
    patterns: Vec<Pattern>,
}

impl RankedProfile {
    /// Number of ranked n-grams
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when the text produced no n-grams
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in rank order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Iterate patterns in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Rank of an n-gram, if it made it into the profile
    pub fn rank_of(&self, gram: &str) -> Option<usize> {
        self.patterns
            .iter()
            .find(|p| p.gram == gram.as_bytes())
            .map(|p| p.rank)
    }

    /// Whether the n-gram made it into the profile
    pub fn contains(&self, gram: &str) -> bool {
        self.rank_of(gram).is_some()
    }
}

impl<'a> IntoIterator for &'a RankedProfile {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

/// Turns text into a [`RankedProfile`]
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    non_letters: Regex,
}

impl PatternExtractor {
    /// Create a new pattern extractor
    pub fn new() -> Result<Self> {
        Ok(Self {
            non_letters: Regex::new(r"[^\p{L}]+")
                .map_err(|e| Error::internal(format!("Failed to compile letter-run regex: {}", e)))?,
        })
    }

    /// Number of letters in the text, ignoring everything else
    pub fn letter_count(&self, text: &str) -> usize {
        self.non_letters.replace_all(text, "").chars().count()
    }

    /// Maximal letter runs of `text`, in order
    pub fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.non_letters
            .split(text)
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// Extract and rank the n-grams of `text`
    pub fn extract(&self, text: &str, mode: ExtractionMode) -> RankedProfile {
        let words = self.words(text);
        let mut counts: HashMap<Vec<u8>, u32> = HashMap::new();

        match mode {
            ExtractionMode::CodePoints => {
                for word in words {
                    let lowered = word.to_lowercase();
                    let padded = pad(lowered.chars(), BOUNDARY);
                    count_ngrams(&padded, BOUNDARY, &mut counts, |gram, key| {
                        let mut buf = [0u8; 4];
                        for c in gram {
                            key.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                        }
                    });
                }
            }
            ExtractionMode::Bytes => {
                for word in words {
                    let padded = pad(word.bytes(), BOUNDARY as u8);
                    count_ngrams(&padded, BOUNDARY as u8, &mut counts, |gram, key| {
                        key.extend_from_slice(gram)
                    });
                }
            }
        }

        rank(counts)
    }
}

/// `_word____`
fn pad<T: Copy>(units: impl Iterator<Item = T>, marker: T) -> Vec<T> {
    let mut padded = vec![marker];
    padded.extend(units);
    padded.extend(std::iter::repeat(marker).take(TRAILING_PAD));
    padded
}

fn count_ngrams<T: Copy + PartialEq>(
    padded: &[T],
    marker: T,
    counts: &mut HashMap<Vec<u8>, u32>,
    encode: impl Fn(&[T], &mut Vec<u8>),
) {
    let starts = padded.len() - TRAILING_PAD;
    for start in 0..starts {
        for len in 1..=MAX_NGRAM_LEN {
            let gram = &padded[start..start + len];
            if ends_in_padding(gram, marker) {
                continue;
            }
            let mut key = Vec::with_capacity(len * 4);
            encode(gram, &mut key);
            *counts.entry(key).or_insert(0) += 1;
        }
    }
}

/// Last two units are both markers
fn ends_in_padding<T: PartialEq>(gram: &[T], marker: T) -> bool {
    gram.len() >= 2 && gram[gram.len() - 2..].iter().all(|unit| *unit == marker)
}

fn rank(counts: HashMap<Vec<u8>, u32>) -> RankedProfile {
    let mut entries: Vec<(Vec<u8>, u32)> = counts.into_iter().collect();
    entries.sort_by(|(a_gram, a_count), (b_gram, b_count)| {
        (Reverse(*a_count), a_gram).cmp(&(Reverse(*b_count), b_gram))
    });
    entries.truncate(MAX_PATTERNS);

    let patterns = entries
        .into_iter()
        .enumerate()
        .map(|(rank, (gram, count))| Pattern { gram, count, rank })
        .collect();

    RankedProfile { patterns }
}
