//! In-memory preferences store.

use serde::Serialize;

/// A single typed preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrefValue {
    Str(String),
    Int32(i32),
    Bool(bool),
}

impl PrefValue {
    /// Get the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer.
    pub fn as_int32(&self) -> Option<i32> {
        match self {
            Self::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrefValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefValue::Str(s) => write!(f, "{}", s),
            PrefValue::Int32(v) => write!(f, "{}", v),
            PrefValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// One key/value pair in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefItem {
    pub key: String,
    pub value: PrefValue,
}

/// Ordered multimap of preference keys to typed values.
///
/// Keys may repeat (`disk`, `cdrom`); lookups by index walk the items with
/// that key in insertion order. A value stored under a key with a different
/// type than requested is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrefsStore {
    items: Vec<PrefItem>,
}

impl PrefsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in store order.
    pub fn items(&self) -> &[PrefItem] {
        &self.items
    }

    /// Number of items (counting every instance of repeated keys).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if at least one item exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|item| item.key == key)
    }

    /// Number of items stored under `key`.
    pub fn count(&self, key: &str) -> usize {
        self.items.iter().filter(|item| item.key == key).count()
    }

    fn find(&self, key: &str, index: usize) -> Option<&PrefValue> {
        self.items
            .iter()
            .filter(|item| item.key == key)
            .nth(index)
            .map(|item| &item.value)
    }

    /// Find the `index`-th string stored under `key`.
    pub fn find_string(&self, key: &str, index: usize) -> Option<&str> {
        self.find(key, index).and_then(PrefValue::as_str)
    }

    /// Iterate every string stored under `key`, in store order.
    pub fn strings<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.items
            .iter()
            .filter(move |item| item.key == key)
            .filter_map(|item| item.value.as_str())
    }

    /// Find the first integer under `key`; missing or mistyped yields 0.
    pub fn find_int32(&self, key: &str) -> i32 {
        self.find(key, 0).and_then(PrefValue::as_int32).unwrap_or(0)
    }

    /// Find the first boolean under `key`; missing or mistyped yields false.
    pub fn find_bool(&self, key: &str) -> bool {
        self.find(key, 0).and_then(PrefValue::as_bool).unwrap_or(false)
    }

    /// Append a value, allowing duplicate keys.
    pub fn add(&mut self, key: &str, value: PrefValue) {
        self.items.push(PrefItem {
            key: key.to_string(),
            value,
        });
    }

    /// Append a string, allowing duplicate keys.
    pub fn add_string(&mut self, key: &str, value: &str) {
        self.add(key, PrefValue::Str(value.to_string()));
    }

    /// Append an integer, allowing duplicate keys.
    pub fn add_int32(&mut self, key: &str, value: i32) {
        self.add(key, PrefValue::Int32(value));
    }

    /// Append a boolean, allowing duplicate keys.
    pub fn add_bool(&mut self, key: &str, value: bool) {
        self.add(key, PrefValue::Bool(value));
    }

    /// Overwrite the first item under `key`, or append if there is none.
    pub fn replace(&mut self, key: &str, value: PrefValue) {
        match self.items.iter_mut().find(|item| item.key == key) {
            Some(item) => item.value = value,
            None => self.add(key, value),
        }
    }

    /// Upsert a single-valued string.
    pub fn replace_string(&mut self, key: &str, value: &str) {
        self.replace(key, PrefValue::Str(value.to_string()));
    }

    /// Upsert a single-valued integer.
    pub fn replace_int32(&mut self, key: &str, value: i32) {
        self.replace(key, PrefValue::Int32(value));
    }

    /// Upsert a single-valued boolean.
    pub fn replace_bool(&mut self, key: &str, value: bool) {
        self.replace(key, PrefValue::Bool(value));
    }

    /// Remove the first item under `key`. Returns whether one was removed.
    pub fn remove_item(&mut self, key: &str) -> bool {
        match self.items.iter().position(|item| item.key == key) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every item under `key`. Returns how many were removed.
    pub fn remove_all(&mut self, key: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.key != key);
        before - self.items.len()
    }
}
