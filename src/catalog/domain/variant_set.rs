use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome of resolving one component kind for a laptop.
///
/// `Unavailable` means the link set itself could not be read. `Empty` means
/// it was read and nothing resolved. `Values` is never empty and never holds
/// placeholders for rows that failed to resolve.
///
/// Serializes as `null`, `[]` and a dense array respectively.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VariantSet<T> {
    #[default]
    Unavailable,
    Empty,
    Values(Vec<T>),
}

impl<T> VariantSet<T> {
    /// Builds a set from the rows that resolved successfully
    pub fn from_resolved(values: Vec<T>) -> Self {
        if values.is_empty() {
            VariantSet::Empty
        } else {
            VariantSet::Values(values)
        }
    }

    /// Waits-for-all merge: keeps every `Some`, drops every `None`, keeps order
    pub fn gather<I>(attempts: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self::from_resolved(attempts.into_iter().flatten().collect())
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, VariantSet::Unavailable)
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            VariantSet::Values(values) => values,
            VariantSet::Unavailable | VariantSet::Empty => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// `None` for `Unavailable`, otherwise the (possibly empty) values
    pub fn into_option(self) -> Option<Vec<T>> {
        match self {
            VariantSet::Unavailable => None,
            VariantSet::Empty => Some(Vec::new()),
            VariantSet::Values(values) => Some(values),
        }
    }

    /// Reorders the values in place; `Unavailable` and `Empty` are untouched
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        if let VariantSet::Values(values) = self {
            values.sort_by(compare);
        }
    }
}

impl<T: Serialize> Serialize for VariantSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            VariantSet::Unavailable => serializer.serialize_none(),
            VariantSet::Empty => serializer.collect_seq(std::iter::empty::<&T>()),
            VariantSet::Values(values) => values.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for VariantSet<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Vec<T>>::deserialize(deserializer)? {
            None => VariantSet::Unavailable,
            Some(values) => VariantSet::from_resolved(values),
        })
    }
}
