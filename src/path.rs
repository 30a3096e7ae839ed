//! Logical object addressing.
//!
//! Callers name objects with a single `"container/key"` string; this module
//! splits it into the two segments the storage service routes on.

/// Separator between the container segment and the object key.
const SEPARATOR: char = '/';

/// A `container/key` pair borrowed from a caller-supplied path.
///
/// The first separator splits the two; everything after it, further
/// separators included, belongs to the key. A path without a separator names
/// a container with an empty key. Parsing never fails - an empty or odd
/// segment is kept verbatim, and the service is the one that rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectPath<'a> {
    pub container: &'a str,
    pub key: &'a str,
}

impl<'a> ObjectPath<'a> {
    /// Split `path` at the first separator; both halves are kept verbatim.
    pub fn parse(path: &'a str) -> Self {
        match path.split_once(SEPARATOR) {
            Some((container, key)) => Self { container, key },
            None => Self {
                container: path,
                key: "",
            },
        }
    }
}
