//! # Directory View
//!
//! The directory view is a pure re-derivation: given the full collection and the
//! current [`ViewState`], [`process`] produces the ordered sequence to display.
//! Nothing is cached; callers re-run it whenever the collection or a control changes.
//!
//! ## Pipeline
//!
//! 1. **Search**: a non-empty query keeps schools whose name, city, state or address
//!    contains it, case-insensitively.
//! 2. **State filter**: unless the filter is [`StateFilter::All`], keep schools whose
//!    state equals the selected value exactly.
//! 3. **Sort**: by name, city or state, ascending or descending. The sort is stable,
//!    so schools with equal keys keep their collection order in both directions.
//!
//! The input slice is never mutated; the output borrows from it.

use crate::error::{RegistryError, Result};
use crate::model::School;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Textual form of the "no filter" sentinel.
pub const ALL_STATES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    City,
    State,
}

impl SortField {
    fn key<'a>(&self, school: &'a School) -> &'a str {
        match self {
            SortField::Name => &school.name,
            SortField::City => &school.city,
            SortField::State => &school.state,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::City => "city",
            SortField::State => "state",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One of the six (field, direction) sort options, e.g. `name-asc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// All sort options in menu order.
    pub fn all() -> [SortKey; 6] {
        use SortDirection::*;
        use SortField::*;
        [
            SortKey::new(Name, Asc),
            SortKey::new(Name, Desc),
            SortKey::new(City, Asc),
            SortKey::new(City, Desc),
            SortKey::new(State, Asc),
            SortKey::new(State, Desc),
        ]
    }

    /// Human label, e.g. "Name A-Z".
    pub fn label(&self) -> String {
        let field = match self.field {
            SortField::Name => "Name",
            SortField::City => "City",
            SortField::State => "State",
        };
        let order = match self.direction {
            SortDirection::Asc => "A-Z",
            SortDirection::Desc => "Z-A",
        };
        format!("{} {}", field, order)
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::new(SortField::Name, SortDirection::Asc)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}-{}", self.field.as_str(), dir)
    }
}

impl FromStr for SortKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::all()
            .into_iter()
            .find(|key| key.to_string() == s)
            .ok_or_else(|| {
                let options: Vec<String> = SortKey::all().iter().map(|k| k.to_string()).collect();
                RegistryError::Api(format!(
                    "Unknown sort key: {} (expected one of {})",
                    s,
                    options.join(", ")
                ))
            })
    }
}

/// Equality filter on the `state` field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    All,
    State(String),
}

impl StateFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, StateFilter::All)
    }

    fn matches(&self, school: &School) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::State(state) => &school.state == state,
        }
    }
}

impl std::fmt::Display for StateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateFilter::All => f.write_str(ALL_STATES),
            StateFilter::State(state) => f.write_str(state),
        }
    }
}

impl From<&str> for StateFilter {
    fn from(value: &str) -> Self {
        if value == ALL_STATES {
            StateFilter::All
        } else {
            StateFilter::State(value.to_string())
        }
    }
}

/// Transient search/filter/sort selection. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub query: String,
    pub filter: StateFilter,
    pub sort: SortKey,
}

impl ViewState {
    pub fn new(query: impl Into<String>, filter: StateFilter, sort: SortKey) -> Self {
        Self {
            query: query.into(),
            filter,
            sort,
        }
    }

    /// Resets every control to its default.
    pub fn clear(&mut self) {
        *self = ViewState::default();
    }

    /// True when any control differs from its default.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || !self.filter.is_all() || self.sort != SortKey::default()
    }

    /// True when the view can hide schools (query or state filter set).
    pub fn narrows(&self) -> bool {
        !self.query.is_empty() || !self.filter.is_all()
    }
}

fn matches_query(school: &School, query_lower: &str) -> bool {
    [&school.name, &school.city, &school.state, &school.address]
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
}

/// Derives the ordered view of `schools` under `view`.
pub fn process<'a>(schools: &'a [School], view: &ViewState) -> Vec<&'a School> {
    let query_lower = view.query.to_lowercase();

    let mut listed: Vec<&School> = schools
        .iter()
        .filter(|s| query_lower.is_empty() || matches_query(s, &query_lower))
        .filter(|s| view.filter.matches(s))
        .collect();

    let field = view.sort.field;
    match view.sort.direction {
        SortDirection::Asc => listed.sort_by(|a, b| field.key(a).cmp(field.key(b))),
        SortDirection::Desc => listed.sort_by(|a, b| field.key(b).cmp(field.key(a))),
    }

    listed
}

/// Distinct state values across all schools, alphabetically ordered.
pub fn distinct_states(schools: &[School]) -> Vec<String> {
    schools
        .iter()
        .map(|s| s.state.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Everything the directory screen shows for one pass of the pipeline.
#[derive(Debug, Clone, Default)]
pub struct DirectoryView {
    pub schools: Vec<School>,
    pub total: usize,
    pub states: Vec<String>,
    pub view: ViewState,
}

impl DirectoryView {
    pub fn build(all: &[School], view: &ViewState) -> Self {
        Self {
            schools: process(all, view).into_iter().cloned().collect(),
            total: all.len(),
            states: distinct_states(all),
            view: view.clone(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.view.has_active_filters()
    }

    /// "Showing 2 of 5 schools (filtered)"
    pub fn summary(&self) -> String {
        let mut line = format!("Showing {} of {} schools", self.schools.len(), self.total);
        if self.is_filtered() {
            line.push_str(" (filtered)");
        }
        line
    }

    pub fn empty_message(&self) -> &'static str {
        if self.view.narrows() {
            "No schools found matching your search criteria."
        } else {
            "No schools available yet."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewSchool, SchoolId};

    fn school(id: i64, name: &str, city: &str, state: &str, address: &str) -> School {
        School::new(
            SchoolId(id),
            NewSchool {
                name: name.into(),
                address: address.into(),
                city: city.into(),
                state: state.into(),
                contact: "0123456789".into(),
                email_id: "x@y.io".into(),
            },
            None,
        )
    }

    fn names(listed: &[&School]) -> Vec<String> {
        listed.iter().map(|s| s.name.clone()).collect()
    }

    fn two_schools() -> Vec<School> {
        vec![
            school(1, "B High", "Metro", "X", "1 First Ave"),
            school(2, "A High", "Metro", "X", "2 Second Ave"),
        ]
    }

    fn view(query: &str, filter: &str, sort: &str) -> ViewState {
        ViewState::new(query, StateFilter::from(filter), sort.parse().unwrap())
    }

    #[test]
    fn sorts_by_name_ascending() {
        let schools = two_schools();
        let listed = process(&schools, &view("", "all", "name-asc"));
        assert_eq!(names(&listed), vec!["A High", "B High"]);
    }

    #[test]
    fn sorts_by_name_descending() {
        let schools = two_schools();
        let listed = process(&schools, &view("", "all", "name-desc"));
        assert_eq!(names(&listed), vec!["B High", "A High"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let schools = two_schools();
        for q in ["metro", "METRO", "MeTrO"] {
            let listed = process(&schools, &view(q, "all", "name-asc"));
            assert_eq!(names(&listed), vec!["A High", "B High"]);
        }
    }

    #[test]
    fn query_matches_any_of_four_fields() {
        let schools = vec![
            school(1, "Oak School", "Springfield", "Ohio", "5 Elm Road"),
            school(2, "Pine School", "Shelbyville", "Texas", "9 Oak Street"),
            school(3, "Birch School", "Oakland", "Iowa", "3 Hill Road"),
            school(4, "Cedar School", "Capital", "Oaklahoma", "7 Bay Road"),
            school(5, "Maple School", "Austin", "Texas", "1 Lake Road"),
        ];
        let listed = process(&schools, &view("oak", "all", "name-asc"));
        assert_eq!(
            names(&listed),
            vec!["Birch School", "Cedar School", "Oak School", "Pine School"]
        );
    }

    #[test]
    fn unmatched_query_yields_empty() {
        let schools = two_schools();
        assert!(process(&schools, &view("nowhere", "all", "name-asc")).is_empty());
    }

    #[test]
    fn state_filter_is_exact_and_case_sensitive() {
        let schools = vec![
            school(1, "A", "Metro", "Kerala", "addr1"),
            school(2, "B", "Metro", "kerala", "addr2"),
            school(3, "C", "Metro", "Goa", "addr3"),
        ];
        let listed = process(&schools, &view("", "Kerala", "name-asc"));
        assert_eq!(names(&listed), vec!["A"]);

        assert!(process(&schools, &view("", "Kera", "name-asc")).is_empty());
        assert!(process(&schools, &view("", "Punjab", "name-asc")).is_empty());
    }

    #[test]
    fn query_and_filter_combine() {
        let schools = vec![
            school(1, "North High", "Metro", "X", "addr1"),
            school(2, "North Middle", "Metro", "Y", "addr2"),
            school(3, "South High", "Metro", "X", "addr3"),
        ];
        let listed = process(&schools, &view("north", "X", "name-asc"));
        assert_eq!(names(&listed), vec!["North High"]);
    }

    #[test]
    fn sort_is_stable_on_ties_in_both_directions() {
        let schools = vec![
            school(1, "First", "Metro", "X", "addr1"),
            school(2, "Second", "Albany", "Y", "addr2"),
            school(3, "Third", "Metro", "Z", "addr3"),
        ];
        let asc = process(&schools, &view("", "all", "city-asc"));
        assert_eq!(names(&asc), vec!["Second", "First", "Third"]);

        let desc = process(&schools, &view("", "all", "city-desc"));
        assert_eq!(names(&desc), vec!["First", "Third", "Second"]);
    }

    #[test]
    fn sorts_by_state() {
        let schools = vec![
            school(1, "A", "c1", "Goa", "addr1"),
            school(2, "B", "c2", "Assam", "addr2"),
            school(3, "C", "c3", "Kerala", "addr3"),
        ];
        let asc = process(&schools, &view("", "all", "state-asc"));
        assert_eq!(names(&asc), vec!["B", "A", "C"]);
        let desc = process(&schools, &view("", "all", "state-desc"));
        assert_eq!(names(&desc), vec!["C", "A", "B"]);
    }

    #[test]
    fn comparison_is_lexicographic() {
        let schools = vec![
            school(1, "apple", "c", "s", "addr1"),
            school(2, "Banana", "c", "s", "addr2"),
        ];
        let listed = process(&schools, &view("", "all", "name-asc"));
        assert_eq!(names(&listed), vec!["Banana", "apple"]);
    }

    #[test]
    fn processing_is_idempotent_and_leaves_input_untouched() {
        let schools = two_schools();
        let before = schools.clone();
        let v = view("high", "X", "name-desc");
        let first: Vec<School> = process(&schools, &v).into_iter().cloned().collect();
        let second: Vec<School> = process(&schools, &v).into_iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(schools, before);
    }

    #[test]
    fn distinct_states_are_sorted_and_unique() {
        let schools = vec![
            school(1, "A", "c", "Kerala", "addr1"),
            school(2, "B", "c", "Assam", "addr2"),
            school(3, "C", "c", "Kerala", "addr3"),
        ];
        assert_eq!(distinct_states(&schools), vec!["Assam", "Kerala"]);
        assert!(distinct_states(&[]).is_empty());
    }

    #[test]
    fn sort_key_parsing() {
        for key in SortKey::all() {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
        assert!("name".parse::<SortKey>().is_err());
        assert!("NAME-ASC".parse::<SortKey>().is_err());
        assert_eq!(SortKey::default().to_string(), "name-asc");
        assert_eq!(
            SortKey::new(SortField::City, SortDirection::Desc).label(),
            "City Z-A"
        );
    }

    #[test]
    fn clear_resets_view_state() {
        let mut v = view("metro", "X", "state-desc");
        assert!(v.has_active_filters());
        v.clear();
        assert_eq!(v, ViewState::default());
        assert!(!v.has_active_filters());
    }

    #[test]
    fn non_default_sort_counts_as_active_but_does_not_narrow() {
        let v = view("", "all", "city-asc");
        assert!(v.has_active_filters());
        assert!(!v.narrows());
    }

    #[test]
    fn directory_view_summary_and_empty_messages() {
        let schools = two_schools();
        let dv = DirectoryView::build(&schools, &ViewState::default());
        assert_eq!(dv.summary(), "Showing 2 of 2 schools");
        assert_eq!(dv.states, vec!["X"]);

        let dv = DirectoryView::build(&schools, &view("zzz", "all", "name-asc"));
        assert_eq!(dv.summary(), "Showing 0 of 2 schools (filtered)");
        assert_eq!(
            dv.empty_message(),
            "No schools found matching your search criteria."
        );

        let dv = DirectoryView::build(&[], &ViewState::default());
        assert_eq!(dv.empty_message(), "No schools available yet.");
    }
}
