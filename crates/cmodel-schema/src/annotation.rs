//! Ordered annotation store attached to every metadata item.
//!
//! Values are opaque to the schema and to traversal; consumers that attached
//! them recover the concrete type through [`AnnotationValue::downcast_ref`].

use derive_more::{Deref, IntoIterator};
use std::{
    any::{Any, type_name},
    fmt,
    sync::Arc,
};

///
/// AnnotationValue
///

#[derive(Clone)]
pub struct AnnotationValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl AnnotationValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnnotationValue<{}>", self.type_name)
    }
}

///
/// Annotation
///

#[derive(Clone, Debug)]
pub struct Annotation {
    key: String,
    value: AnnotationValue,
}

impl Annotation {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn value(&self) -> &AnnotationValue {
        &self.value
    }
}

///
/// Annotations
///
/// Insertion-ordered key/value mapping. Keys are unique: inserting an
/// existing key replaces its value without moving it.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator)]
pub struct Annotations {
    #[deref(forward)]
    #[into_iterator(ref)]
    entries: Vec<Annotation>,
}

impl Annotations {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace, returning the previous value for `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: AnnotationValue,
    ) -> Option<AnnotationValue> {
        let key = key.into();

        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            return Some(std::mem::replace(&mut entry.value, value));
        }

        self.entries.push(Annotation { key, value });

        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AnnotationValue> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Annotation] {
        &self.entries
    }
}
