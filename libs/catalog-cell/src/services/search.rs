use shared_utils::{SearchTerm, Selection};

use crate::models::{Service, ServiceCategory};

#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    pub term: SearchTerm,
    pub category: Selection<ServiceCategory>,
}

impl ServiceFilter {
    pub fn new(term: impl Into<SearchTerm>, category: Selection<ServiceCategory>) -> Self {
        Self {
            term: term.into(),
            category,
        }
    }

    pub fn matches(&self, service: &Service) -> bool {
        let matches_search = self
            .term
            .matches_any([service.name.as_str(), service.description.as_str()]);

        matches_search && self.category.matches(&service.category)
    }

    pub fn apply<'a>(&self, services: &'a [Service]) -> Vec<&'a Service> {
        services.iter().filter(|service| self.matches(service)).collect()
    }
}
