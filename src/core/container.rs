use std::any::type_name;
use std::fmt;

/// A holder for exactly one value of a caller-chosen type.
///
/// The same definition is reused for text, numbers or anything else; the type
/// parameter is fixed per instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<T> {
    value: T,
}

impl<T> Container<T> {
    /// Wraps `value` in a new container.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the held value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the held value, dropping the previous one.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Consumes the container and hands the value back.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// The last path segment of `T`'s name, e.g. `String` rather than
    /// `alloc::string::String`.
    pub fn type_label(&self) -> &'static str {
        let full = type_name::<T>();
        // Generic arguments may themselves contain `::`, so only look at the
        // part before the first `<`.
        let head_end = full.find('<').unwrap_or(full.len());
        let start = full[..head_end].rfind("::").map(|i| i + 2).unwrap_or(0);
        &full[start..]
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container{{value={}, type={}}}", self.value, self.type_label())
    }
}
