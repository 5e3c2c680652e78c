use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// CourseRecord – one row of the course feed
// ---------------------------------------------------------------------------

/// A single course offering (one row of the source feed).
///
/// Normalized at load time: `start`/`end` are calendar dates and `pin_code`
/// is an integer, regardless of how the feed encoded them, so filtering and
/// sorting never compare mismatched representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub course_type: String,
    pub register_link: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub district: String,
    pub address: String,
    /// 6-digit postal code in practice; the feed is not trusted to
    /// guarantee it.
    pub pin_code: u32,
    pub teachers: String,
    /// May contain separators (`+91 98765-43210`).
    pub contact: String,
    pub language: String,
}

impl CourseRecord {
    /// Contact number with everything but digits stripped, for building
    /// tel: and wa.me links.
    pub fn contact_digits(&self) -> String {
        self.contact
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// CourseDataset – the complete loaded collection
// ---------------------------------------------------------------------------

/// The full parsed course collection, read-only for the session.
///
/// Records carry no unique id; row index within `courses` is the identity
/// used by the filter and sort layers, which pass `Vec<usize>` around
/// instead of cloning records.
#[derive(Debug, Clone, Default)]
pub struct CourseDataset {
    /// All courses (rows), in feed order.
    pub courses: Vec<CourseRecord>,
    /// Sorted unique district names (search dropdown, chat answers).
    pub districts: Vec<String>,
}

impl CourseDataset {
    /// Build the district index from the loaded courses.
    pub fn from_courses(courses: Vec<CourseRecord>) -> Self {
        let districts: BTreeSet<String> =
            courses.iter().map(|c| c.district.clone()).collect();
        CourseDataset {
            courses,
            districts: districts.into_iter().collect(),
        }
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Sort keys – which column orders the table, and which way
// ---------------------------------------------------------------------------

/// The table columns the user can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Start,
    District,
    PinCode,
}

impl SortColumn {
    /// Compare two records under this column's semantics: start dates as
    /// calendar dates, pin codes as integers, districts as case-sensitive
    /// strings.
    pub fn compare(self, a: &CourseRecord, b: &CourseRecord) -> Ordering {
        match self {
            SortColumn::Start => a.start.cmp(&b.start),
            SortColumn::District => a.district.cmp(&b.district),
            SortColumn::PinCode => a.pin_code.cmp(&b.pin_code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort of the results table.  `None` upstream means unsorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortKey {
    /// Key resulting from a header click on `column` while `current` is
    /// active: first selection of a column sorts ascending, re-selecting it
    /// flips the direction, selecting a different column resets to
    /// ascending.
    pub fn toggled(current: Option<SortKey>, column: SortColumn) -> SortKey {
        match current {
            Some(key) if key.column == column => SortKey {
                column,
                direction: key.direction.flipped(),
            },
            _ => SortKey {
                column,
                direction: SortDirection::Ascending,
            },
        }
    }
}
