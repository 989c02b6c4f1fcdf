use super::CourseId;
use serde::{Deserialize, Serialize};

/// A course and its remaining capacity.
///
/// `available_seats` is the only source of truth for capacity; total capacity is not
/// tracked separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub course_name: String,
    pub duration: String,
    pub fees: f64,
    pub available_seats: u32,
}

/// Payload for adding a course. Also the shape of one entry in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCreate {
    pub course_name: String,
    pub duration: String,
    pub fees: f64,
    pub available_seats: u32,
}

impl CourseCreate {
    pub fn new(course_name: impl Into<String>, available_seats: u32) -> Self {
        Self {
            course_name: course_name.into(),
            duration: String::new(),
            fees: 0.0,
            available_seats,
        }
    }
}
