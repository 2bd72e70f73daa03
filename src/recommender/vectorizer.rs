use std::collections::{HashMap, HashSet};

/// English stop words excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each",
    "else", "every", "few", "for", "from", "had", "has", "have", "he", "her", "here", "him",
    "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "might",
    "more", "most", "must", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "out", "over", "own", "same", "shall", "should",
    "so", "some", "such", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "we", "were", "what", "when", "where", "which", "while", "who", "why", "will", "with",
    "would", "you", "your",
];

/// Splits text into lowercase alphanumeric tokens of at least two
/// characters, dropping stop words. Numeric tokens are kept.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_owned)
        .collect()
}

/// Sparse term-weight vector in a fixed vocabulary.
///
/// Holds `(column, weight)` pairs sorted by column index. The zero vector
/// is represented by an empty term list.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    terms: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Dot product; both term lists are sorted by column, so this is a
    /// single merge pass.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.terms.len() && j < other.terms.len() {
            let (col_a, weight_a) = self.terms[i];
            let (col_b, weight_b) = other.terms[j];
            match col_a.cmp(&col_b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += weight_a * weight_b;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn norm(&self) -> f64 {
        self.terms
            .iter()
            .map(|(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt()
    }

    /// Scales the vector to unit length. The zero vector is left alone.
    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.terms {
                *weight /= norm;
            }
        }
    }

    fn from_weights(mut terms: Vec<(usize, f64)>) -> Self {
        terms.sort_by_key(|(column, _)| *column);
        let mut vector = Self { terms };
        vector.normalize();
        vector
    }
}

/// Fitted vocabulary and inverse-document-frequency weights.
///
/// Built once from the catalog corpus and frozen: `transform` projects
/// arbitrary text into this coordinate system but never extends it, so
/// similarity scores stay comparable across requests.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl VectorSpace {
    /// Fits the vocabulary and IDF weights over the corpus and returns the
    /// space together with one L2-normalized row per input document.
    ///
    /// Vocabulary columns are assigned in lexicographic term order, so the
    /// fit is deterministic for any input order of identical documents.
    pub fn fit(corpus: &[String]) -> (VectorSpace, Vec<SparseVector>) {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

        // Document frequency: number of documents containing each term.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<&str> = doc_freq.keys().copied().collect();
        terms.sort_unstable();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column))
            .collect();

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1.
        let n_docs = corpus.len() as f64;
        let idf: Vec<f64> = terms
            .iter()
            .map(|term| {
                let df = doc_freq[term] as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let space = VectorSpace { vocabulary, idf };
        let matrix = tokenized
            .iter()
            .map(|tokens| space.weigh(tokens))
            .collect();

        (space, matrix)
    }

    /// Projects text into the fitted coordinate system.
    ///
    /// Terms unseen at fit time are dropped; empty or all-out-of-vocabulary
    /// input yields the zero vector. Never refits.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&tokenize(text))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// TF × IDF over the known vocabulary, L2-normalized.
    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in tokens {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        if counts.is_empty() {
            return SparseVector::zero();
        }

        let weights = counts
            .into_iter()
            .map(|(column, count)| (column, count as f64 * self.idf[column]))
            .collect();

        SparseVector::from_weights(weights)
    }
}
