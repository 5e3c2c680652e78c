/// Data layer: core types, loading, filtering and sorting.
///
/// Architecture:
/// ```text
///  courses.json / courses.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalize → CourseDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ CourseDataset │  Vec<CourseRecord>, district index
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ───▶ │   sort    │  criteria union → stable row order
///   └──────────┘      └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;

#[cfg(test)]
pub(crate) mod testdata {
    use chrono::{Days, NaiveDate};

    use super::model::{CourseDataset, CourseRecord};

    /// A course record with the searchable fields under test control and
    /// everything else fixed.
    pub fn course(district: &str, pin_code: u32, address: &str, start: &str) -> CourseRecord {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").expect("valid test date");
        CourseRecord {
            course_type: "Happiness Program".to_string(),
            register_link: "https://example.org/register".to_string(),
            start,
            end: start.checked_add_days(Days::new(6)).expect("valid end date"),
            district: district.to_string(),
            address: address.to_string(),
            pin_code,
            teachers: "Asha Rao".to_string(),
            contact: "+91 98765 43210".to_string(),
            language: "Kannada".to_string(),
        }
    }

    /// Four courses across three districts, deliberately out of order on
    /// every sortable column.
    pub fn dataset() -> CourseDataset {
        CourseDataset::from_courses(vec![
            course("Mysuru", 570001, "12 Temple Road, Mysuru", "2025-03-10"),
            course("Bengaluru", 560001, "5 MG Road, Bengaluru", "2025-01-20"),
            course("Bengaluru", 560068, "9 Hosur Road, Bommanahalli", "2025-02-05"),
            course("Tumakuru", 572101, "3 Market Street, Tumakuru", "2025-01-20"),
        ])
    }
}
