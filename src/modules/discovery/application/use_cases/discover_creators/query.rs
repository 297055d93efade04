use crate::modules::discovery::domain::FilterSelection;

/// Query for a one-shot discovery: fetch every creator, then filter
#[derive(Debug, Clone, Default)]
pub struct DiscoverCreatorsQuery {
    pub search_term: String,
    pub selection: FilterSelection,
}

impl DiscoverCreatorsQuery {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            selection: FilterSelection::new(),
        }
    }

    pub fn with_filters<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for option in options {
            self.selection.select(option);
        }
        self
    }
}
