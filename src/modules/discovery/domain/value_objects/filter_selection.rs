use serde::{Deserialize, Serialize};

/// Flat set of selected option labels, kept in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FilterSelection {
    options: Vec<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an option; returns whether it is selected afterwards
    pub fn toggle(&mut self, option: &str) -> bool {
        if self.deselect(option) {
            false
        } else {
            self.options.push(option.to_string());
            true
        }
    }

    /// Returns false if the option was already selected
    pub fn select(&mut self, option: impl Into<String>) -> bool {
        let option = option.into();
        if self.is_selected(&option) {
            return false;
        }
        self.options.push(option);
        true
    }

    /// Returns false if the option was not selected
    pub fn deselect(&mut self, option: &str) -> bool {
        match self.options.iter().position(|o| o == option) {
            Some(pos) => {
                self.options.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn clear(&mut self) {
        self.options.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.options.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for option in iter {
            selection.select(option);
        }
        selection
    }
}

impl From<Vec<String>> for FilterSelection {
    fn from(options: Vec<String>) -> Self {
        options.into_iter().collect()
    }
}

impl From<FilterSelection> for Vec<String> {
    fn from(selection: FilterSelection) -> Self {
        selection.options
    }
}
