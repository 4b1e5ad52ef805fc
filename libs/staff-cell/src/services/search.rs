use shared_utils::{SearchTerm, Selection};

use crate::models::{Position, Staff};

/// Term over name, email and bio, combined with a position filter.
#[derive(Debug, Clone, Default)]
pub struct StaffFilter {
    pub term: SearchTerm,
    pub position: Selection<Position>,
}

impl StaffFilter {
    pub fn new(term: impl Into<SearchTerm>, position: Selection<Position>) -> Self {
        Self {
            term: term.into(),
            position,
        }
    }

    pub fn matches(&self, staff: &Staff) -> bool {
        let matches_search = self
            .term
            .matches_any([staff.name.as_str(), staff.email.as_str(), staff.bio.as_str()]);

        matches_search && self.position.matches(&staff.position)
    }

    pub fn apply<'a>(&self, staff: &'a [Staff]) -> Vec<&'a Staff> {
        staff.iter().filter(|member| self.matches(member)).collect()
    }
}
