use std::collections::BTreeMap;
use std::path::Path;

use crate::error::CatalogError;
use crate::models::{columns, CourseRecord};

/// Loads the course catalog from a CSV export.
///
/// Source row order is preserved: a record's position in the returned
/// vector is its identity for the lifetime of the process. Fails if the
/// file is unreadable, a required column is absent, or no rows remain.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CourseRecord>, CatalogError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let headers = reader.headers()?.clone();

    let title_idx = column_index(&headers, columns::TITLE)?;
    let outcomes_idx = column_index(&headers, columns::LEARNING_OUTCOMES)?;
    let keywords_idx = column_index(&headers, columns::KEYWORDS)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        let mut extra = BTreeMap::new();
        for (idx, value) in row.iter().enumerate() {
            if idx == title_idx || idx == outcomes_idx || idx == keywords_idx {
                continue;
            }
            if let Some(name) = headers.get(idx) {
                extra.insert(name.to_string(), value.to_string());
            }
        }

        records.push(CourseRecord {
            title: row.get(title_idx).unwrap_or_default().to_string(),
            learning_outcomes: row.get(outcomes_idx).unwrap_or_default().to_string(),
            keywords: row.get(keywords_idx).unwrap_or_default().to_string(),
            extra,
        });
    }

    if records.is_empty() {
        return Err(CatalogError::Empty);
    }

    tracing::info!(
        courses = records.len(),
        path = %path.as_ref().display(),
        "Catalog loaded"
    );

    Ok(records)
}

fn column_index(
    headers: &csv::StringRecord,
    name: &'static str,
) -> Result<usize, CatalogError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(CatalogError::MissingColumn(name))
}
