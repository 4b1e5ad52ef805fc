use shared_utils::SearchTerm;

use crate::models::Client;

/// Free-text client lookup: name or email ignoring case, or phone as typed.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub term: SearchTerm,
}

impl ClientFilter {
    pub fn new(term: impl Into<SearchTerm>) -> Self {
        Self { term: term.into() }
    }

    pub fn matches(&self, client: &Client) -> bool {
        self.term.is_empty()
            || self.term.matches(&client.name)
            || self.term.matches(&client.email)
            || self.term.matches_exact(&client.phone)
    }

    pub fn apply<'a>(&self, clients: &'a [Client]) -> Vec<&'a Client> {
        clients.iter().filter(|client| self.matches(client)).collect()
    }
}
