//! Category reference profiles

use crate::patterns::{ExtractionMode, PatternExtractor, RankedProfile};
use ngramcat_core::{Error, Result, MAX_NGRAM_BYTES, MAX_PATTERNS};
use std::collections::HashMap;

/// Separator placed between training samples so words never fuse
const SAMPLE_SEPARATOR: &str = "\n";

/// Ranked n-gram table of one category.
///
/// Maps each n-gram to its rank for constant-time lookup; an n-gram that is
/// absent counts as rank [`MAX_PATTERNS`]. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryProfile {
    ranks: HashMap<Vec<u8>, u16>,
}

impl CategoryProfile {
    /// Build a profile from an extracted ranking
    pub fn from_ranked(ranked: &RankedProfile) -> Self {
        let ranks = ranked
            .iter()
            .take(MAX_PATTERNS)
            .map(|p| (p.gram.clone(), p.rank as u16))
            .collect();
        Self { ranks }
    }

    /// Build a profile from raw `(n-gram, rank)` pairs.
    ///
    /// Rejects ranks outside `0..MAX_PATTERNS`, repeated ranks or n-grams,
    /// n-grams longer than [`MAX_NGRAM_BYTES`] and oversized tables.
    pub fn from_ranks<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vec<u8>, usize)>,
    {
        let mut ranks = HashMap::new();
        let mut seen = vec![false; MAX_PATTERNS];

        for (gram, rank) in pairs {
            if ranks.len() == MAX_PATTERNS {
                return Err(Error::corrupt(format!(
                    "profile holds more than {} n-grams",
                    MAX_PATTERNS
                )));
            }
            if rank >= MAX_PATTERNS {
                return Err(Error::corrupt(format!("rank {} out of range", rank)));
            }
            if std::mem::replace(&mut seen[rank], true) {
                return Err(Error::corrupt(format!("rank {} assigned twice", rank)));
            }
            if gram.is_empty() || gram.len() > MAX_NGRAM_BYTES {
                return Err(Error::corrupt(format!("n-gram of {} bytes", gram.len())));
            }
            if ranks.insert(gram, rank as u16).is_some() {
                return Err(Error::corrupt("n-gram listed twice"));
            }
        }

        Ok(Self { ranks })
    }

    /// Train a profile from one or more representative text samples.
    ///
    /// Always extracts code points. Returns `None` when the samples hold no
    /// letters at all.
    pub fn train<S: AsRef<str>>(extractor: &PatternExtractor, samples: &[S]) -> Option<Self> {
        let text = samples
            .iter()
            .map(|sample| sample.as_ref())
            .collect::<Vec<&str>>()
            .join(SAMPLE_SEPARATOR);

        let ranked = extractor.extract(&text, ExtractionMode::CodePoints);
        if ranked.is_empty() {
            return None;
        }
        Some(Self::from_ranked(&ranked))
    }

    /// Rank of an n-gram, `None` if absent
    pub fn rank_of(&self, gram: &str) -> Option<usize> {
        self.rank_of_bytes(gram.as_bytes())
    }

    /// Rank of an encoded n-gram, `None` if absent
    pub fn rank_of_bytes(&self, gram: &[u8]) -> Option<usize> {
        self.ranks.get(gram).map(|&rank| rank as usize)
    }

    /// Number of n-grams in the profile
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// `(n-gram, rank)` pairs ordered by rank
    pub fn iter_ranked(&self) -> Vec<(&[u8], usize)> {
        let mut entries: Vec<(&[u8], usize)> = self
            .ranks
            .iter()
            .map(|(gram, &rank)| (gram.as_slice(), rank as usize))
            .collect();
        entries.sort_by_key(|&(_, rank)| rank);
        entries
    }

    /// Out-of-place distance between a document ranking and this profile.
    ///
    /// Sums `|document rank - profile rank|` over the document's n-grams;
    /// lower is closer.
    pub fn distance(&self, document: &RankedProfile) -> u64 {
        document
            .iter()
            .map(|pattern| {
                let rank = self.rank_of_bytes(&pattern.gram).unwrap_or(MAX_PATTERNS);
                pattern.rank.abs_diff(rank) as u64
            })
            .sum()
    }
}
