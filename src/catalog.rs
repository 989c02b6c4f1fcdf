//! Course catalog loading.
//!
//! A catalog is a JSON array of courses:
//!
//! ```json
//! [
//!   { "courseName": "Rust Fundamentals", "duration": "6 weeks", "fees": 499.0, "availableSeats": 30 }
//! ]
//! ```

use crate::clients::CourseClient;
use crate::course_actor::CourseError;
use crate::model::{Course, CourseCreate};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to seed course: {0}")]
    Seed(#[from] CourseError),
}

/// Parses catalog JSON into course payloads, in file order.
pub fn parse_catalog(json: &str) -> Result<Vec<CourseCreate>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a catalog file.
pub async fn load_catalog(path: &Path) -> Result<Vec<CourseCreate>, CatalogError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_catalog(&json)
}

/// Adds every catalog course to the store, in order. Stops at the first rejected course.
#[instrument(skip(courses, catalog), fields(count = catalog.len()))]
pub async fn seed_courses(
    courses: &CourseClient,
    catalog: Vec<CourseCreate>,
) -> Result<Vec<Course>, CatalogError> {
    let mut seeded = Vec::with_capacity(catalog.len());
    for params in catalog {
        seeded.push(courses.add_course(params).await?);
    }
    info!(seeded = seeded.len(), "Course catalog loaded");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_keeps_file_order() {
        let json = r#"[
            { "courseName": "Operating Systems", "duration": "12 weeks", "fees": 900.0, "availableSeats": 2 },
            { "courseName": "Networks", "duration": "8 weeks", "fees": 650.5, "availableSeats": 0 }
        ]"#;

        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].course_name, "Operating Systems");
        assert_eq!(catalog[0].available_seats, 2);
        assert_eq!(catalog[1].course_name, "Networks");
        assert_eq!(catalog[1].fees, 650.5);
    }

    #[test]
    fn test_parse_catalog_rejects_negative_seats() {
        let json = r#"[{ "courseName": "X", "duration": "1 week", "fees": 1.0, "availableSeats": -1 }]"#;
        assert!(matches!(parse_catalog(json), Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_catalog_reports_missing_file() {
        let path = Path::new("does/not/exist/courses.json");
        match load_catalog(path).await {
            Err(CatalogError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
