use crate::chat::ChatState;
use crate::data::filter::{Criteria, filter_courses};
use crate::data::model::{CourseDataset, SortColumn, SortDirection, SortKey};
use crate::data::sort::sort_rows;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the results area is currently showing.
///
/// In `Displaying`, `rows` is always the sort of the last search (or
/// display-all) result under `sort` — header clicks re-sort these rows and
/// never re-run the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing displayed (initial state, or after Clear).
    Empty,
    Displaying {
        /// Row indices into the dataset, in display order.
        rows: Vec<usize>,
        sort: Option<SortKey>,
    },
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded course collection; empty if the startup load failed, in which
    /// case every search correctly yields no results.
    pub dataset: CourseDataset,

    /// Search inputs as currently typed.
    pub criteria: Criteria,

    /// Current results view.
    pub view: ViewState,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Chat widget state.
    pub chat: ChatState,
}

impl AppState {
    pub fn with_dataset(dataset: CourseDataset) -> Self {
        AppState {
            dataset,
            criteria: Criteria::default(),
            view: ViewState::Empty,
            status_message: None,
            chat: ChatState::default(),
        }
    }

    /// Start the session without data after a failed load.  The message
    /// stays up until the first successful interaction; the session itself
    /// remains usable.
    pub fn load_failed(message: String) -> Self {
        let mut state = AppState::with_dataset(CourseDataset::default());
        state.status_message = Some(message);
        state
    }

    /// The sort key the table indicators should reflect.
    pub fn active_sort(&self) -> Option<SortKey> {
        match &self.view {
            ViewState::Empty => None,
            ViewState::Displaying { sort, .. } => *sort,
        }
    }

    /// Reset inputs, sort key and results.  Does not restore the full
    /// collection; the view goes back to empty.
    pub fn clear(&mut self) {
        self.criteria = Criteria::default();
        self.view = ViewState::Empty;
        self.status_message = None;
    }

    /// Show every course, district-ascending, ignoring both the filter
    /// criteria and any previously active sort key.
    pub fn display_all(&mut self) {
        self.criteria = Criteria::default();
        let key = SortKey {
            column: SortColumn::District,
            direction: SortDirection::Ascending,
        };
        let all: Vec<usize> = (0..self.dataset.len()).collect();
        self.view = ViewState::Displaying {
            rows: sort_rows(&self.dataset, &all, Some(key)),
            sort: Some(key),
        };
        self.status_message = None;
    }

    /// Run a search over the current inputs.  A validation failure surfaces
    /// the bilingual message and leaves the view untouched; a valid search
    /// always lands in `Displaying`, unsorted, even with zero matches.
    pub fn search(&mut self) {
        match self.criteria.validate() {
            Ok(valid) => {
                self.view = ViewState::Displaying {
                    rows: filter_courses(&self.dataset, &valid),
                    sort: None,
                };
                self.status_message = None;
            }
            Err(err) => {
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Column-header click: toggle / replace the sort key and re-sort the
    /// rows currently displayed.  No-op while nothing is displayed.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        let ViewState::Displaying { rows, sort } = &self.view else {
            return;
        };
        let key = SortKey::toggled(*sort, column);
        let rows = sort_rows(&self.dataset, rows, Some(key));
        self.view = ViewState::Displaying {
            rows,
            sort: Some(key),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testdata::{course, dataset};

    fn displayed_rows(state: &AppState) -> Vec<usize> {
        match &state.view {
            ViewState::Displaying { rows, .. } => rows.clone(),
            ViewState::Empty => panic!("expected Displaying, got Empty"),
        }
    }

    #[test]
    fn search_with_invalid_pin_leaves_view_untouched() {
        let mut state = AppState::with_dataset(dataset());
        state.display_all();
        let before = state.view.clone();

        state.criteria.pin_code = "56000".to_string();
        state.search();

        assert_eq!(state.view, before);
        assert!(state.status_message.as_deref().unwrap_or("").contains("6-digit"));
    }

    #[test]
    fn search_with_no_criteria_is_rejected() {
        let mut state = AppState::with_dataset(dataset());
        state.search();

        assert_eq!(state.view, ViewState::Empty);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn successful_search_displays_unsorted_matches() {
        let mut state = AppState::with_dataset(dataset());
        state.criteria.district = "Bengaluru".to_string();
        state.search();

        assert_eq!(displayed_rows(&state), vec![1, 2]);
        assert_eq!(state.active_sort(), None);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn search_resets_a_previous_sort_key() {
        let mut state = AppState::with_dataset(dataset());
        state.display_all();
        assert!(state.active_sort().is_some());

        state.criteria.address = "road".to_string();
        state.search();
        assert_eq!(state.active_sort(), None);
    }

    #[test]
    fn search_with_zero_matches_still_displays() {
        let mut state = AppState::with_dataset(dataset());
        state.criteria.district = "Hubballi".to_string();
        state.search();

        assert_eq!(displayed_rows(&state), Vec::<usize>::new());
    }

    #[test]
    fn clear_resets_inputs_sort_and_results() {
        let mut state = AppState::with_dataset(dataset());
        state.criteria.district = "Bengaluru".to_string();
        state.search();
        state.toggle_sort(SortColumn::PinCode);

        state.clear();

        assert_eq!(state.view, ViewState::Empty);
        assert_eq!(state.criteria, Criteria::default());
        assert_eq!(state.active_sort(), None);
    }

    #[test]
    fn display_all_forces_district_ascending() {
        let mut state = AppState::with_dataset(dataset());
        // Establish a conflicting prior key first.
        state.display_all();
        state.toggle_sort(SortColumn::PinCode);
        state.toggle_sort(SortColumn::PinCode);

        state.display_all();

        assert_eq!(displayed_rows(&state), vec![1, 2, 0, 3]);
        assert_eq!(
            state.active_sort(),
            Some(SortKey {
                column: SortColumn::District,
                direction: SortDirection::Ascending,
            })
        );
    }

    #[test]
    fn display_all_on_two_records_orders_by_district() {
        let mut state = AppState::with_dataset(CourseDataset::from_courses(vec![
            course("Mysuru", 560068, "a", "2025-01-01"),
            course("Bengaluru", 560001, "b", "2025-01-02"),
        ]));
        state.display_all();
        assert_eq!(displayed_rows(&state), vec![1, 0]);
    }

    #[test]
    fn toggle_sort_twice_returns_to_descending_then_back() {
        let mut state = AppState::with_dataset(CourseDataset::from_courses(vec![
            course("Mysuru", 560068, "a", "2025-01-01"),
            course("Bengaluru", 560001, "b", "2025-01-02"),
        ]));
        state.display_all();

        state.toggle_sort(SortColumn::PinCode);
        assert_eq!(displayed_rows(&state), vec![1, 0]); // 560001, 560068

        state.toggle_sort(SortColumn::PinCode);
        assert_eq!(displayed_rows(&state), vec![0, 1]); // 560068, 560001
    }

    #[test]
    fn toggle_sort_does_not_rerun_the_filter() {
        let mut state = AppState::with_dataset(dataset());
        state.criteria.district = "Bengaluru".to_string();
        state.search();
        let before: usize = displayed_rows(&state).len();

        state.toggle_sort(SortColumn::Start);

        // Same subset, reordered only.
        assert_eq!(displayed_rows(&state).len(), before);
        let mut rows = displayed_rows(&state);
        rows.sort_unstable();
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn toggle_sort_is_a_noop_while_empty() {
        let mut state = AppState::with_dataset(dataset());
        state.toggle_sort(SortColumn::District);
        assert_eq!(state.view, ViewState::Empty);
    }

    #[test]
    fn operations_against_a_failed_load_yield_empty_results() {
        let mut state = AppState::load_failed("Failed to load course data.".to_string());
        assert!(state.status_message.is_some());

        state.display_all();
        assert_eq!(displayed_rows(&state), Vec::<usize>::new());

        state.criteria.district = "Mysuru".to_string();
        state.search();
        assert_eq!(displayed_rows(&state), Vec::<usize>::new());
    }
}
