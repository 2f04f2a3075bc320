//! The Options container.
//!
//! [`Options`] is an ordered, recursive key/value store aimed at layered
//! configuration. Keys are text or integers, values are scalars or nested
//! `Options` nodes, and insertion order is preserved throughout. The
//! container supports one-way locking, a four-way merge family with distinct
//! layering semantics, cursor-style iteration that tolerates deletion of the
//! current entry, and serialization to plain data, JSON and XML.
//!
//! # Usage
//!
//! ```
//! use optkit::Options;
//! use serde_json::json;
//!
//! let mut opts = Options::from(json!({"host": "localhost", "port": 8080}));
//! opts.set("name", "server-a").unwrap();
//!
//! let overrides = json!({"port": 9090});
//! opts.merge(overrides).unwrap();
//! assert_eq!(opts.get_as::<i64>("port"), Some(9090));
//! ```

use std::fmt;

use crate::casing;

// Submodules
pub mod errors;
pub mod key;
pub mod value;

// Convenience re-exports for core container types
pub use errors::OptionsError;
pub use key::Key;
pub use value::Value;

/// An ordered, recursive key/value options container.
///
/// # Core Operations
///
/// - **Data access**: `get()`, `get_as()`, `get_or()`, `has()`, `keys()`
/// - **Data modification**: `set()`, `push()`, `unset()`, `pull()`, `get_set()`
/// - **Layering**: `merge()`, `modify()`, `complete()`, `defaults()`
/// - **Locking**: `lock()` — one-way, transitive into child nodes
/// - **Views**: `sort()`, `unique()`, `group_by()`, `values()`
///
/// Construction never fails: invalid or non-map input normalizes to an empty
/// node. Any map-like value is wrapped into a child `Options` node at
/// construction and at every insertion, so raw nested maps never appear as
/// stored values.
///
/// # Examples
///
/// ## Basic Operations
/// ```
/// # use optkit::Options;
/// let mut opts = Options::new();
/// opts.set("name", "Alice").unwrap();
/// opts.set("age", 30).unwrap();
///
/// assert_eq!(opts.get_as::<&str>("name"), Some("Alice"));
/// assert_eq!(opts.get_as::<i64>("age"), Some(30));
/// ```
///
/// ## Layered configuration
/// ```
/// # use optkit::Options;
/// # use serde_json::json;
/// let mut args = Options::from(json!({"verbose": true}));
/// args.complete(json!({"verbose": false, "color": "auto"}), &[]).unwrap();
/// assert_eq!(args.get_as::<bool>("verbose"), Some(true)); // kept
/// assert_eq!(args.get_as::<&str>("color"), Some("auto")); // filled in
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Options {
    /// Ordered key/value entries
    entries: Vec<(Key, Value)>,
    /// One-way permission flag; when true all mutations fail
    #[serde(default)]
    locked: bool,
    /// Internal iteration cursor
    #[serde(skip)]
    cursor: usize,
    /// One-shot flag making the next `next()` a no-op after a deletion
    #[serde(skip)]
    skip_next: bool,
}

impl Options {
    /// Creates a new empty, modifiable container
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            locked: false,
            cursor: 0,
            skip_next: false,
        }
    }

    /// Creates a container from plain data with an explicit modification
    /// permission. Nested maps and sequences are wrapped into child nodes
    /// inheriting the same permission.
    ///
    /// Non-map input normalizes to an empty node; construction never fails.
    pub fn with_modifications(data: serde_json::Value, allow_modifications: bool) -> Self {
        let mut node = Self::new();
        node.locked = !allow_modifications;

        match data {
            serde_json::Value::Object(map) => {
                for (k, v) in map {
                    node.entries
                        .push((Key::Text(k), Value::from_plain(v, allow_modifications)));
                }
            }
            serde_json::Value::Array(items) => {
                for (i, v) in items.into_iter().enumerate() {
                    node.entries
                        .push((Key::from(i), Value::from_plain(v, allow_modifications)));
                }
            }
            serde_json::Value::Null => {}
            other => {
                tracing::debug!(input = %other, "non-map options input normalized to empty node");
            }
        }

        node
    }

    /// Creates a container by parsing a JSON string.
    ///
    /// Invalid JSON normalizes to an empty node, matching the lenient
    /// construction contract.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(json) {
            Ok(value) => Self::from(value),
            Err(err) => {
                tracing::debug!(%err, "invalid JSON options input normalized to empty node");
                Self::new()
            }
        }
    }

    /// Reconstructs a container directly from its ordered entries and lock
    /// flag. This is the trusted restore path for previously exported state:
    /// entries are taken as-is with no normalization or validation.
    pub fn from_parts(entries: Vec<(Key, Value)>, locked: bool) -> Self {
        Self {
            entries,
            locked,
            cursor: 0,
            skip_next: false,
        }
    }

    /// Consumes the container, returning its ordered entries and lock flag
    pub fn into_parts(self) -> (Vec<(Key, Value)>, bool) {
        (self.entries, self.locked)
    }

    /// Returns true if this container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Exact position of a key, no case fallback
    fn position(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Position of a key, retrying camelCase/PascalCase lookups against
    /// their kebab-case form on a miss
    fn resolve(&self, key: &Key) -> Option<usize> {
        if let Some(pos) = self.position(key) {
            return Some(pos);
        }
        if let Key::Text(text) = key
            && let Some(kebab) = casing::kebab_alias(text)
        {
            let pos = self.position(&Key::Text(kebab));
            if pos.is_some() {
                tracing::trace!(key = %text, "case-fallback lookup hit");
            }
            return pos;
        }
        None
    }

    /// Returns true if the container contains the given key.
    ///
    /// This is an exact match: unlike `get`, no case-fallback aliasing is
    /// applied. The asymmetry is deliberate; callers probe for the stored
    /// key, not its aliases.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.position(&key.into()).is_some()
    }

    /// Gets a value by key.
    ///
    /// When the key is not found verbatim and is syntactically camelCase or
    /// PascalCase, the lookup is retried with its kebab-case form.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        let key = key.into();
        self.resolve(&key).map(|pos| &self.entries[pos].1)
    }

    /// Gets a value by key, returning `default` when the key is absent
    pub fn get_or(&self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        self.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Gets a value by key with automatic type conversion using TryFrom.
    ///
    /// Returns Some(T) if the value exists and can be converted to type T.
    /// Returns None if the key doesn't exist or type conversion fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use optkit::Options;
    /// let mut opts = Options::new();
    /// opts.set("name", "Alice").unwrap();
    /// opts.set("age", 30).unwrap();
    ///
    /// assert_eq!(opts.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(opts.get_as::<i64>("age"), Some(30));
    ///
    /// // Returns None when key doesn't exist or type doesn't match
    /// assert_eq!(opts.get_as::<String>("missing"), None);
    /// assert_eq!(opts.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl Into<Key>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = OptionsError>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Gets a reference to a nested node by key
    pub fn get_node(&self, key: impl Into<Key>) -> Option<&Options> {
        self.get(key)?.as_node()
    }

    /// Gets a mutable reference to a nested node by key.
    ///
    /// Mutations on the child are governed by the child's own lock flag,
    /// which is set transitively when the parent is locked.
    pub fn get_node_mut(&mut self, key: impl Into<Key>) -> Option<&mut Options> {
        let key = key.into();
        let pos = self.resolve(&key)?;
        self.entries[pos].1.as_node_mut()
    }

    /// Returns the ordered top-level keys
    pub fn keys(&self) -> Vec<Key> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Returns the ordered top-level values, re-wrapped as a new node with
    /// sequential integer keys. The new node inherits the current lock state.
    pub fn values(&self) -> Options {
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (_, v))| (Key::from(i), v.clone()))
            .collect();
        Self::from_parts(entries, self.locked)
    }

    /// Returns an iterator over all key-value pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Checks if a value exists among the top-level values (not recursive).
    ///
    /// With `strict` set, values must match exactly; otherwise numeric and
    /// numeric-text values compare loosely.
    pub fn contains(&self, value: impl Into<Value>, strict: bool) -> bool {
        let value = value.into();
        self.entries.iter().any(|(_, v)| {
            if strict {
                *v == value
            } else {
                v.loose_eq(&value)
            }
        })
    }

    fn read_only_guard(&self, key: &str) -> Result<(), OptionsError> {
        if self.locked {
            Err(OptionsError::ReadOnly {
                key: key.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Sets a value for a key.
    ///
    /// Fails when the container is locked. When the key is absent, is
    /// camelCase or PascalCase, and its kebab-case form already exists, the
    /// write is redirected to the kebab key, mirroring the read-time
    /// fallback. Map-like values are wrapped into child nodes.
    pub fn set(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> Result<&mut Self, OptionsError> {
        let mut key = key.into();
        self.read_only_guard(&key.to_string())?;

        if self.position(&key).is_none()
            && let Key::Text(text) = &key
            && let Some(kebab) = casing::kebab_alias(text)
        {
            let kebab = Key::Text(kebab);
            if self.position(&kebab).is_some() {
                key = kebab;
            }
        }

        let value = value.into();
        match self.position(&key) {
            Some(pos) => self.entries[pos].1 = value,
            None => self.entries.push((key, value)),
        }
        Ok(self)
    }

    /// Appends a value under the next free integer key (list-style growth)
    pub fn push(&mut self, value: impl Into<Value>) -> Result<&mut Self, OptionsError> {
        self.read_only_guard("(push)")?;
        let key = Key::Index(self.next_index());
        self.entries.push((key, value.into()));
        Ok(self)
    }

    /// Next integer key for appends: one past the highest existing index
    fn next_index(&self) -> i64 {
        self.entries
            .iter()
            .filter_map(|(k, _)| k.as_index())
            .max()
            .map_or(0, |max| if max < 0 { 0 } else { max + 1 })
    }

    /// Assigns a new value and returns the previous one.
    ///
    /// The read applies the case-fallback lookup and the write applies the
    /// write-time aliasing, so both sides agree on the target key.
    pub fn get_set(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, OptionsError> {
        let key = key.into();
        self.read_only_guard(&key.to_string())?;
        let previous = self.get(key.clone()).cloned();
        self.set(key, value)?;
        Ok(previous)
    }

    /// Removes a key.
    ///
    /// Fails when the container is locked; succeeds as a no-op when the key
    /// is absent. Removing the entry at the cursor position arms the one-shot
    /// skip flag so the following `next()` does not jump over an element.
    pub fn unset(&mut self, key: impl Into<Key>) -> Result<&mut Self, OptionsError> {
        let key = key.into();
        self.read_only_guard(&key.to_string())?;

        if let Some(pos) = self.position(&key) {
            self.entries.remove(pos);
            if pos < self.cursor {
                self.cursor -= 1;
            }
            self.skip_next = true;
        }
        Ok(self)
    }

    /// Returns the value for a key (or `default` when absent), then removes
    /// the key
    pub fn pull(
        &mut self,
        key: impl Into<Key>,
        default: impl Into<Value>,
    ) -> Result<Value, OptionsError> {
        let key = key.into();
        self.read_only_guard(&key.to_string())?;
        let result = self.get_or(key.clone(), default);
        self.unset(key)?;
        Ok(result)
    }

    /// Prevents any further modification of this node and, transitively, of
    /// every nested child node. One-directional: there is no unlock.
    pub fn lock(&mut self) -> &mut Self {
        self.locked = true;
        for (_, value) in &mut self.entries {
            if let Value::Node(node) = value {
                node.lock();
            }
        }
        self
    }

    /// Returns whether this container is locked
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

// Cursor iteration: the classic internal-pointer protocol.
impl Options {
    /// Returns the value at the cursor position and clears the skip flag
    pub fn current(&mut self) -> Option<&Value> {
        self.skip_next = false;
        self.entries.get(self.cursor).map(|(_, v)| v)
    }

    /// Returns the key at the cursor position
    pub fn current_key(&self) -> Option<&Key> {
        self.entries.get(self.cursor).map(|(k, _)| k)
    }

    /// Advances the cursor.
    ///
    /// When the entry at the cursor was just removed the skip flag is armed
    /// and this call is a no-op once, so iteration resumes on the element
    /// that followed the deleted one.
    pub fn next(&mut self) {
        if self.skip_next {
            self.skip_next = false;
            return;
        }
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Steps the cursor back one entry. Stepping back from the first entry
    /// leaves the cursor invalid, like advancing past the last.
    pub fn prev(&mut self) {
        if self.cursor == 0 {
            self.cursor = self.entries.len();
        } else {
            self.cursor -= 1;
        }
    }

    /// Resets the cursor to the first entry and clears the skip flag
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.skip_next = false;
    }

    /// Checks whether the cursor points at an entry
    pub fn valid(&self) -> bool {
        self.current_key().is_some()
    }
}

// Merge family: four distinct layering semantics.
impl Options {
    /// Merges another container into this one.
    ///
    /// For duplicate keys:
    /// - nested nodes on both sides are recursively merged,
    /// - integer keys are appended under a fresh index,
    /// - string keys are overwritten.
    ///
    /// Missing keys are added. Non-node input is coerced into a node first.
    pub fn merge(&mut self, other: impl Into<Options>) -> Result<&mut Self, OptionsError> {
        self.read_only_guard("(merge)")?;
        let other = other.into();

        for (key, value) in other.entries {
            match self.position(&key) {
                Some(pos) => {
                    if key.is_index() {
                        let fresh = Key::Index(self.next_index());
                        self.entries.push((fresh, value));
                    } else if let (Value::Node(ours), Value::Node(theirs)) =
                        (&mut self.entries[pos].1, &value)
                    {
                        ours.merge(theirs.clone())?;
                    } else {
                        self.entries[pos].1 = value;
                    }
                }
                None => self.entries.push((key, value)),
            }
        }
        Ok(self)
    }

    /// Merges another container but only updates existing keys, ignoring
    /// unmatched ones. Nested nodes on both sides recurse.
    pub fn modify(&mut self, other: impl Into<Options>) -> Result<&mut Self, OptionsError> {
        self.read_only_guard("(modify)")?;
        let other = other.into();

        for (key, value) in other.entries {
            let Some(pos) = self.position(&key) else {
                continue;
            };
            if let (Value::Node(ours), Value::Node(theirs)) = (&mut self.entries[pos].1, &value) {
                ours.modify(theirs.clone())?;
            } else {
                self.entries[pos].1 = value;
            }
        }
        Ok(self)
    }

    /// Merges another container but only adds missing keys, leaving existing
    /// keys unmodified (nested nodes on both sides recurse to fill nested
    /// gaps). Keys listed in `exclude` are skipped entirely.
    ///
    /// Filling gaps only makes this operation idempotent.
    pub fn complete(
        &mut self,
        other: impl Into<Options>,
        exclude: &[&str],
    ) -> Result<&mut Self, OptionsError> {
        self.read_only_guard("(complete)")?;
        let other = other.into();

        for (key, value) in other.entries {
            if key.as_text().is_some_and(|k| exclude.contains(&k)) {
                continue;
            }
            match self.position(&key) {
                Some(pos) => {
                    if let (Value::Node(ours), Value::Node(theirs)) =
                        (&mut self.entries[pos].1, &value)
                    {
                        ours.complete(theirs.clone(), exclude)?;
                    }
                    // Existing leaf values stay untouched
                }
                None => self.entries.push((key, value)),
            }
        }
        Ok(self)
    }

    /// Applies cascading default models.
    ///
    /// A key is assigned only when it is absent or its current value is null
    /// or the empty string; an explicit `false` is never overwritten. Models
    /// are consumed from the last argument backwards, and a value that lands
    /// is no longer replaceable, so when several models carry the same key
    /// the last model's value wins. Nested nodes on both sides recurse.
    ///
    /// ```
    /// # use optkit::Options;
    /// # use serde_json::json;
    /// let mut opts = Options::from(json!({"flag": false, "name": ""}));
    /// opts.defaults([json!({"flag": true, "name": "fallback"})]).unwrap();
    /// assert_eq!(opts.get_as::<bool>("flag"), Some(false)); // false survives
    /// assert_eq!(opts.get_as::<&str>("name"), Some("fallback"));
    /// ```
    pub fn defaults<I>(&mut self, models: I) -> Result<&mut Self, OptionsError>
    where
        I: IntoIterator,
        I::Item: Into<Options>,
    {
        self.read_only_guard("(defaults)")?;
        let models: Vec<Options> = models.into_iter().map(Into::into).collect();

        for model in models.into_iter().rev() {
            for (key, value) in model.entries {
                let existing = self.position(&key);
                if let Some(pos) = existing
                    && let (Value::Node(ours), Value::Node(theirs)) =
                        (&mut self.entries[pos].1, &value)
                {
                    ours.defaults([theirs.clone()])?;
                    continue;
                }
                let replace = match existing {
                    None => true,
                    Some(pos) => self.entries[pos].1.is_replaceable(),
                };
                if replace {
                    self.set(key, value)?;
                }
            }
        }
        Ok(self)
    }
}

// Derived views.
impl Options {
    /// Sorts the entries by value, in place.
    ///
    /// With `preserve_keys` the entries keep their keys; otherwise they are
    /// reindexed under sequential integer keys. The sort is stable and uses
    /// a total order over value types (null < bool < numbers < text < node).
    /// The cursor rewinds.
    pub fn sort(&mut self, preserve_keys: bool) -> Result<&mut Self, OptionsError> {
        self.read_only_guard("(sort)")?;
        self.entries.sort_by(|a, b| a.1.sort_cmp(&b.1));
        if !preserve_keys {
            for (i, entry) in self.entries.iter_mut().enumerate() {
                entry.0 = Key::from(i);
            }
        }
        self.rewind();
        Ok(self)
    }

    /// Returns a sorted, modifiable copy, leaving this container untouched
    pub fn sorted(&self, preserve_keys: bool) -> Options {
        let mut copy = Self::from_parts(self.entries.clone(), false);
        // Guard cannot trip: the copy is unlocked
        let _ = copy.sort(preserve_keys);
        copy
    }

    /// Removes duplicate values in place, keeping the first occurrence.
    /// Duplicates are detected with loose equality.
    pub fn unique(&mut self) -> Result<&mut Self, OptionsError> {
        self.read_only_guard("(unique)")?;
        let mut seen: Vec<Value> = Vec::new();
        self.entries.retain(|(_, v)| {
            if seen.iter().any(|s| s.loose_eq(v)) {
                false
            } else {
                seen.push(v.clone());
                true
            }
        });
        self.rewind();
        Ok(self)
    }

    /// Returns a deduplicated, modifiable copy
    pub fn to_unique(&self) -> Options {
        let mut copy = Self::from_parts(self.entries.clone(), false);
        let _ = copy.unique();
        copy
    }

    /// Groups entries by the value of `group` within each entry.
    ///
    /// Every entry must be a node carrying the grouping key; an entry that
    /// is not, or that lacks the key, fails fast with
    /// [`OptionsError::MissingGroupKey`] rather than being silently skipped.
    ///
    /// Returns a new node keyed by the distinct group values, each holding
    /// an ordered list of the entries sharing that value.
    pub fn group_by(&self, group: &str) -> Result<Options, OptionsError> {
        let mut grouped = Options::new();

        for (key, value) in &self.entries {
            let node = value.as_node().ok_or_else(|| OptionsError::TypeMismatch {
                expected: "node".to_string(),
                actual: value.type_name().to_string(),
            })?;
            let group_value = node
                .get(group)
                .ok_or_else(|| OptionsError::MissingGroupKey {
                    group: group.to_string(),
                    key: key.to_string(),
                })?;
            let bucket_key = Key::Text(group_value.to_string());

            match grouped.position(&bucket_key) {
                Some(pos) => {
                    if let Some(bucket) = grouped.entries[pos].1.as_node_mut() {
                        bucket.push(value.clone())?;
                    }
                }
                None => {
                    let mut bucket = Options::new();
                    bucket.push(value.clone())?;
                    grouped.entries.push((bucket_key, Value::Node(bucket)));
                }
            }
        }
        Ok(grouped)
    }
}

// Serialization views.
impl Options {
    /// Deep conversion to the plain nested representation, recursively
    /// unwrapping all child nodes.
    ///
    /// A node whose keys are exactly the sequential integers `0..len` renders
    /// as a sequence; every other node renders as an ordered map.
    pub fn to_value(&self) -> serde_json::Value {
        let sequential = !self.entries.is_empty()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, (k, _))| k.as_index() == Some(i as i64));

        if sequential {
            serde_json::Value::Array(self.entries.iter().map(|(_, v)| v.to_plain()).collect())
        } else {
            let mut map = serde_json::Map::new();
            for (k, v) in &self.entries {
                map.insert(k.to_string(), v.to_plain());
            }
            serde_json::Value::Object(map)
        }
    }

    /// Serializes the plain representation to a JSON string using the given
    /// encode flags
    pub fn to_json(&self, flags: &crate::convert::EncodeFlags) -> crate::Result<String> {
        crate::convert::json::encode(&self.to_value(), flags)
    }

    /// Serializes the plain representation to an XML string
    pub fn to_xml(&self) -> crate::Result<String> {
        crate::convert::xml::to_xml(&self.to_value())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

// Equality covers the persisted state (entries and lock flag); transient
// cursor state does not participate.
impl PartialEq for Options {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.locked == other.locked
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl From<serde_json::Value> for Options {
    fn from(value: serde_json::Value) -> Self {
        Self::with_modifications(value, true)
    }
}

impl From<&Options> for Options {
    fn from(value: &Options) -> Self {
        value.clone()
    }
}

impl FromIterator<(Key, Value)> for Options {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        let mut node = Options::new();
        for (key, value) in iter {
            let _ = node.set(key, value);
        }
        node
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a Key, &'a Value);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (Key, Value)>,
        fn(&'a (Key, Value)) -> (&'a Key, &'a Value),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

// Builder pattern methods
impl Options {
    /// Builder method to set a value and return self.
    ///
    /// A no-op on a locked node; use [`Options::set`] when the failure
    /// matters.
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        let _ = self.set(key, value);
        self
    }
}
