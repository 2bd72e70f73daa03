mod engine;
mod vectorizer;

pub use engine::{cosine_similarity, rank};
pub use vectorizer::{SparseVector, VectorSpace};

use crate::models::{CourseRecord, UserProfileData};

/// The immutable (records, vector space, course matrix) triple.
///
/// Built once at startup and shared read-only across requests; row i of
/// the matrix always corresponds to record i. If hot catalog reloads were
/// ever added, the whole index would have to be swapped as one unit to
/// keep that alignment.
pub struct CatalogIndex {
    records: Vec<CourseRecord>,
    space: VectorSpace,
    matrix: Vec<SparseVector>,
}

impl CatalogIndex {
    /// Builds the index: one text profile per course, vocabulary fit over
    /// the full profile corpus, one matrix row per record.
    pub fn build(records: Vec<CourseRecord>) -> Self {
        let profiles: Vec<String> = records.iter().map(CourseRecord::profile).collect();
        let (space, matrix) = VectorSpace::fit(&profiles);

        tracing::info!(
            courses = records.len(),
            vocabulary = space.vocabulary_size(),
            "Catalog index built"
        );

        Self {
            records,
            space,
            matrix,
        }
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ranks the catalog against one user profile and materializes the top
    /// matches in rank order.
    ///
    /// Stateless per request: the user's text is projected into the frozen
    /// vector space, never fit into it.
    pub fn recommend(&self, user: &UserProfileData, top_n: usize) -> Vec<CourseRecord> {
        let profile = user.profile_text();
        let user_vector = self.space.transform(&profile);

        let ranked = rank(&user_vector, &self.matrix, top_n);

        tracing::debug!(
            requested = top_n,
            returned = ranked.len(),
            top_score = ranked.first().map(|(_, score)| *score),
            "Catalog ranked"
        );

        ranked
            .into_iter()
            .map(|(index, _)| self.records[index].clone())
            .collect()
    }
}
