//! Person records and result sets.

/// Location shown when a record carries no usable location name.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// A single person profile as displayed in the results region.
///
/// Both search paths produce this type, and both build it through
/// [`Person::new`]: the parser maps the remote NDJSON stream into it and the
/// dataset loader maps file records into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Full name; the fallback filter matches against it.
    pub name: String,
    /// One-line professional headline.
    pub professional_headline: String,
    /// Location name, or [`UNKNOWN_LOCATION`].
    pub location: String,
    /// Skill names in display order.
    pub skills: Vec<String>,
}

impl Person {
    /// Create a person record.
    ///
    /// An empty or whitespace-only location is normalized to
    /// [`UNKNOWN_LOCATION`].
    pub fn new(
        name: impl Into<String>,
        professional_headline: impl Into<String>,
        location: Option<String>,
        skills: Vec<String>,
    ) -> Self {
        let location = location
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
        Self {
            name: name.into(),
            professional_headline: professional_headline.into(),
            location,
            skills,
        }
    }

    /// Case-insensitive substring match against the name.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn name_contains_lower(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// Ordered search results, replaced wholesale on every search.
pub type ResultSet = Vec<Person>;
