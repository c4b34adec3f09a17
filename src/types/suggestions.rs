// src/types/suggestions.rs
//! Search suggestions and their canonical, deduplicated form.

/// Sorted, duplicate-free search suggestions for one run.
///
/// Only [`normalize_suggestions`] builds this, so the invariant holds for
/// every value in the program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedSuggestions(Vec<String>);

impl NormalizedSuggestions {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a NormalizedSuggestions {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Removes exact duplicates and sorts ascending.
///
/// Case variants are distinct strings and both survive.
pub fn normalize_suggestions<I, S>(raw: I) -> NormalizedSuggestions
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut values: Vec<String> = raw.into_iter().map(Into::into).collect();
    values.sort();
    values.dedup();
    NormalizedSuggestions(values)
}
