use super::model::{CourseDataset, SortDirection, SortKey};

// ---------------------------------------------------------------------------
// Sort: stable ordering of row indices under the active key
// ---------------------------------------------------------------------------

/// Stable sort of `rows` under `key`; `None` returns the input order
/// unchanged.
///
/// Pure: the input slice is never touched.  Ties keep their input-relative
/// order, so sorting twice under the same key is a no-op and descending is
/// exactly the ascending comparator reversed.
pub fn sort_rows(dataset: &CourseDataset, rows: &[usize], key: Option<SortKey>) -> Vec<usize> {
    let mut sorted = rows.to_vec();
    let Some(key) = key else {
        return sorted;
    };

    sorted.sort_by(|&a, &b| {
        let ord = key.column.compare(&dataset.courses[a], &dataset.courses[b]);
        match key.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SortColumn;
    use crate::data::testdata::dataset;

    fn key(column: SortColumn, direction: SortDirection) -> Option<SortKey> {
        Some(SortKey { column, direction })
    }

    #[test]
    fn no_key_returns_input_unchanged() {
        let ds = dataset();
        assert_eq!(sort_rows(&ds, &[3, 0, 2], None), vec![3, 0, 2]);
    }

    #[test]
    fn pin_codes_sort_as_integers() {
        let ds = dataset();
        let asc = sort_rows(&ds, &[2, 1], key(SortColumn::PinCode, SortDirection::Ascending));
        assert_eq!(asc, vec![1, 2]); // 560001 before 560068
        let desc = sort_rows(&ds, &[1, 2], key(SortColumn::PinCode, SortDirection::Descending));
        assert_eq!(desc, vec![2, 1]);
    }

    #[test]
    fn start_dates_sort_as_calendar_dates() {
        let ds = dataset();
        let rows = sort_rows(
            &ds,
            &[0, 1, 2, 3],
            key(SortColumn::Start, SortDirection::Ascending),
        );
        // 2025-01-20, 2025-01-20 (tie in input order), 2025-02-05, 2025-03-10
        assert_eq!(rows, vec![1, 3, 2, 0]);
    }

    #[test]
    fn districts_sort_lexicographically() {
        let ds = dataset();
        let rows = sort_rows(
            &ds,
            &[0, 1, 2, 3],
            key(SortColumn::District, SortDirection::Ascending),
        );
        assert_eq!(rows, vec![1, 2, 0, 3]);
    }

    #[test]
    fn equal_keys_keep_input_relative_order() {
        let ds = dataset();
        // Rows 1 and 2 share the district; their order must follow the input.
        let forward = sort_rows(
            &ds,
            &[2, 1, 0],
            key(SortColumn::District, SortDirection::Ascending),
        );
        assert_eq!(forward, vec![2, 1, 0]);
        let reversed = sort_rows(
            &ds,
            &[1, 2, 0],
            key(SortColumn::District, SortDirection::Ascending),
        );
        assert_eq!(reversed, vec![1, 2, 0]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let ds = dataset();
        let key = key(SortColumn::Start, SortDirection::Descending);
        let once = sort_rows(&ds, &[0, 1, 2, 3], key);
        let twice = sort_rows(&ds, &once, key);
        assert_eq!(once, twice);
    }

    #[test]
    fn input_slice_is_left_alone() {
        let ds = dataset();
        let rows = vec![2, 0, 1];
        let _ = sort_rows(&ds, &rows, key(SortColumn::PinCode, SortDirection::Ascending));
        assert_eq!(rows, vec![2, 0, 1]);
    }
}
