use ahash::AHashMap;
use std::collections::BTreeSet;

/// Known values of one categorical feature.
///
/// Values are kept sorted so the one-hot layout depends only on the set of
/// values seen, not on catalog order. Values outside the vocabulary have no
/// position and encode to an all-zero block.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    values: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl Vocabulary {
    pub fn fit<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let distinct: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        let values: Vec<String> = distinct.into_iter().collect();
        let positions = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();

        Self { values, positions }
    }

    /// Width of the one-hot block
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.positions.get(value).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.positions.contains_key(value)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Write the one-hot encoding of `value` into `block`, which must be
    /// exactly `len()` wide and zeroed.
    pub fn encode_into(&self, value: &str, block: &mut [f32]) {
        debug_assert_eq!(block.len(), self.len());
        if let Some(position) = self.position(value) {
            block[position] = 1.0;
        }
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}
