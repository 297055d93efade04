use crate::modules::creator::domain::value_objects::parse_quantity;

/// Closed numeric interval parsed from a filter label
///
/// Accepted forms: `"A-B"` (inclusive), `"N+"` (open-ended) and a bare `"N"`
/// (exactly N). Bounds take `k`/`m` suffixes; `%` and `,` are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl NumericRange {
    /// `None` when the label is not a well-formed range
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();

        if let Some(lower) = label.strip_suffix('+') {
            return parse_quantity(lower).map(|min| Self { min, max: None });
        }

        if let Some((lower, upper)) = label.split_once('-') {
            let min = parse_quantity(lower)?;
            let max = parse_quantity(upper)?;
            return Some(Self {
                min,
                max: Some(max),
            });
        }

        parse_quantity(label).map(|n| Self {
            min: n,
            max: Some(n),
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}
