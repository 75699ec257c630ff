use crate::Value;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use std::sync::OnceLock;

fn empty_variables() -> &'static Arc<Variables> {
    static EMPTY_VARIABLES: OnceLock<Arc<Variables>> = OnceLock::new();
    EMPTY_VARIABLES.get_or_init(|| Arc::new(Variables::new()))
}

/// Values bound to the variables of an operation, keyed by variable name
/// (without the leading `$`).
///
/// Variable names are unique. Equality ignores insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(IndexMap<String, Value>);

impl Variables {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// The process-wide empty `Variables`.
    ///
    /// Every call hands back the same allocation, so builders can default to
    /// it without allocating.
    pub fn empty() -> Arc<Variables> {
        Arc::clone(empty_variables())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Bind `value` to `name`, returning the previously bound value (if
    /// any).
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<IndexMap<String, Value>> for Variables {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Variables {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
