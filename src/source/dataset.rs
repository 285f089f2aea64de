//! Static fallback dataset.

use crate::model::{DatasetError, Person};
use serde::Deserialize;
use std::path::Path;

/// One record of a dataset file. Location is a flat string here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    name: String,
    professional_headline: String,
    location: Option<String>,
    skills: Option<Vec<String>>,
}

impl From<RawEntry> for Person {
    fn from(raw: RawEntry) -> Self {
        Person::new(
            raw.name,
            raw.professional_headline,
            raw.location,
            raw.skills.unwrap_or_default(),
        )
    }
}

/// Fixed, read-only collection of people.
///
/// Used as the fallback source when the remote search fails and as the
/// suggestion list shown next to a "no results" message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticDataset {
    people: Vec<Person>,
}

impl StaticDataset {
    /// Wrap an ordered list of people.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// The dataset compiled into the binary.
    pub fn builtin() -> Self {
        fn person(name: &str, headline: &str, location: &str, skills: &[&str]) -> Person {
            Person::new(
                name,
                headline,
                Some(location.to_string()),
                skills.iter().map(|s| s.to_string()).collect(),
            )
        }

        Self::new(vec![
            person(
                "Anna Souza",
                "Senior Backend Engineer",
                "São Paulo, Brazil",
                &["Rust", "PostgreSQL", "Kubernetes"],
            ),
            person(
                "Carlos Mendoza",
                "Product Designer",
                "Medellín, Colombia",
                &["Figma", "User Research"],
            ),
            person(
                "Priya Raman",
                "Machine Learning Engineer",
                "Bangalore, India",
                &["Python", "PyTorch", "MLOps"],
            ),
            person(
                "Jonas Becker",
                "Engineering Manager",
                "Berlin, Germany",
                &["Leadership", "Go", "Hiring"],
            ),
            person(
                "Grace Okafor",
                "Frontend Developer",
                "Lagos, Nigeria",
                &["TypeScript", "React", "Accessibility"],
            ),
        ])
    }

    /// Load a dataset from a JSON array of person objects.
    ///
    /// Objects use the wire field names (`name`, `professionalHeadline`,
    /// optional `location`, optional `skills`). A null or blank location
    /// becomes "Unknown", the same as on the remote path.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Read`] if the file cannot be read and
    /// [`DatasetError::Parse`] if it is not a valid array of people.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| DatasetError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let entries: Vec<RawEntry> =
            serde_json::from_str(&contents).map_err(|e| DatasetError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Self::new(entries.into_iter().map(Person::from).collect()))
    }

    /// People in dataset order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Number of people.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// True when the dataset holds nobody.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Default for StaticDataset {
    fn default() -> Self {
        Self::builtin()
    }
}
