use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_DECK_SRC: &str = "convertJson.json";
pub const DEFAULT_GROUP_SIZE: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroup {
    #[serde(rename = "Group")]
    pub name: String,
    #[serde(rename = "Words", deserialize_with = "skip_null_words")]
    pub words: Vec<String>,
}

impl WordGroup {
    pub fn new(name: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }
}

fn skip_null_words<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Option<String>>::deserialize(deserializer)?;
    Ok(raw.into_iter().flatten().collect())
}

/// Ordered, immutable sequence of word groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    groups: Vec<WordGroup>,
}

impl Deck {
    pub fn new(groups: Vec<WordGroup>) -> Self {
        Self { groups }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[WordGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordGroup> {
        self.groups.iter()
    }

    pub fn to_json_pretty(&self) -> Result<String, DeckError> {
        serde_json::to_string_pretty(&self.groups).map_err(|err| DeckError::Encode(err.to_string()))
    }

    /// One `Group N:` header and a comma-joined word line per group.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            out.push_str(&group.name);
            out.push_str(":\n");
            out.push_str(&group.words.join(", "));
            out.push_str("\n\n");
        }
        out
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a WordGroup;
    type IntoIter = std::slice::Iter<'a, WordGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },
    #[error("malformed JSON: {0}")]
    Json(String),
    #[error("JSON data is not an array")]
    NotAnArray,
    #[error("invalid word group at index {index}: {message}")]
    Record { index: usize, message: String },
    #[error("deck encode failed: {0}")]
    Encode(String),
}

pub fn parse_deck(text: &str) -> Result<Deck, DeckError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|err| DeckError::Json(err.to_string()))?;
    let serde_json::Value::Array(items) = value else {
        return Err(DeckError::NotAnArray);
    };
    let mut groups = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let group = WordGroup::deserialize(item).map_err(|err| DeckError::Record {
            index,
            message: err.to_string(),
        })?;
        groups.push(group);
    }
    Ok(Deck::new(groups))
}

pub fn clean_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Shuffles `words` and chunks them into groups named `Group 1`, `Group 2`, ...
/// The last group keeps whatever is left over.
pub fn build_deck<R>(mut words: Vec<String>, group_size: usize, rng: &mut R) -> Deck
where
    R: Rng + ?Sized,
{
    if group_size == 0 || words.is_empty() {
        return Deck::empty();
    }
    words.shuffle(rng);
    let groups = words
        .chunks(group_size)
        .enumerate()
        .map(|(index, chunk)| WordGroup::new(format!("Group {}", index + 1), chunk.to_vec()))
        .collect();
    Deck::new(groups)
}
