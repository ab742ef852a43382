//! Incremental, scope-validated construction of JSON text.
//!
//! A [`Builder`] keeps a stack of the object/array scopes currently open and
//! a sticky error: once an `add_*` or `enter_*` call fails, every call after
//! it is a no-op, so callers only need to check [`Builder::error`] once, at
//! the end, rather than threading a `Result` through every step.

mod error;
mod number;
mod text;

use number::format_number;
use text::escape_string;

pub use error::BuildError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Object,
    Array,
}

struct Scope {
    kind: ScopeKind,
    empty: bool,
}

/// A growable text buffer building up one JSON document.
///
/// The body is always a syntactically complete JSON skeleton: opening a
/// container writes its closer in the same step, and `insertion_point`
/// always sits on that closer (or on the end of the buffer, at document
/// root, before anything has been written).
pub struct Builder {
    buf: Vec<u8>,
    insertion_point: usize,
    stack: Vec<Scope>,
    started: bool,
    error: Option<BuildError>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Self { buf: Vec::new(), insertion_point: 0, stack: Vec::new(), started: false, error: None }
    }

    /// The first error the builder hit, if any. Once set it never clears.
    #[must_use]
    pub fn error(&self) -> Option<&BuildError> {
        self.error.as_ref()
    }

    fn fail(&mut self, err: BuildError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn ok(&self) -> bool {
        self.error.is_none()
    }

    /// Grows the buffer's capacity ahead of a write that needs it, following
    /// the same shape as the original allocator this was ported from: start
    /// small, double until a point, then grow by flat increments so a large
    /// document doesn't keep doubling into wasted headroom.
    fn reserve(&mut self, additional: usize) {
        while self.buf.capacity() - self.buf.len() < additional {
            let cap = self.buf.capacity();
            let target = if cap == 0 {
                32
            } else if cap < 4096 {
                cap * 2
            } else {
                cap + 4096
            };
            self.buf.reserve_exact(target - self.buf.len());
        }
    }

    /// Inserts `bytes` at the current insertion point (a gap insertion, not
    /// an append — everything from the insertion point onward, including
    /// whatever closer is already sitting there, shifts right), then
    /// advances the insertion point past what was just written.
    fn splice_bytes(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        let at = self.insertion_point;
        self.buf.splice(at..at, bytes.iter().copied());
        self.insertion_point += bytes.len();
    }

    fn splice_byte(&mut self, byte: u8) {
        self.splice_bytes(&[byte]);
    }

    /// Handles comma placement before a bare value (i.e. not a property):
    /// legal at the document root or directly inside an array scope.
    fn before_value(&mut self) -> bool {
        if !self.ok() {
            return false;
        }
        match self.stack.last_mut() {
            None => {
                if self.started {
                    self.fail(BuildError::MultipleRootValues);
                    return false;
                }
                self.started = true;
                true
            }
            Some(Scope { kind: ScopeKind::Array, empty }) => {
                if !*empty {
                    self.splice_byte(b',');
                }
                *empty = false;
                true
            }
            Some(Scope { kind: ScopeKind::Object, .. }) => {
                self.fail(BuildError::ExpectedPropertyName);
                false
            }
        }
    }

    /// Handles comma placement before a property's key: legal only directly
    /// inside an object scope.
    fn before_property(&mut self, key: &str) -> bool {
        if !self.ok() {
            return false;
        }
        match self.stack.last_mut() {
            Some(Scope { kind: ScopeKind::Object, empty }) => {
                if !*empty {
                    self.splice_byte(b',');
                }
                *empty = false;
            }
            _ => {
                self.fail(BuildError::NotInObjectScope);
                return false;
            }
        }
        let escaped = escape_string(key);
        self.splice_bytes(escaped.as_bytes());
        self.splice_byte(b':');
        true
    }

    /// Opens a container: writes opener and closer together so the body
    /// stays a valid JSON skeleton, then leaves the insertion point sitting
    /// on the closer, ready for the scope's first child.
    fn open_scope(&mut self, kind: ScopeKind) {
        let (open, close) = match kind {
            ScopeKind::Object => (b'{', b'}'),
            ScopeKind::Array => (b'[', b']'),
        };
        self.splice_bytes(&[open, close]);
        self.insertion_point -= 1;
        self.stack.push(Scope { kind, empty: true });
    }

    pub fn add_null(&mut self) {
        if self.before_value() {
            self.splice_bytes(b"null");
        }
    }

    pub fn add_bool(&mut self, value: bool) {
        if self.before_value() {
            self.splice_bytes(if value { b"true" } else { b"false" });
        }
    }

    pub fn add_number(&mut self, value: f64) {
        if !self.before_value() {
            return;
        }
        match format_number(value) {
            Ok(text) => self.splice_bytes(text.as_bytes()),
            Err(err) => self.fail(err),
        }
    }

    pub fn add_string(&mut self, value: &str) {
        if self.before_value() {
            let escaped = escape_string(value);
            self.splice_bytes(escaped.as_bytes());
        }
    }

    pub fn enter_object(&mut self) {
        if self.before_value() {
            self.open_scope(ScopeKind::Object);
        }
    }

    pub fn enter_array(&mut self) {
        if self.before_value() {
            self.open_scope(ScopeKind::Array);
        }
    }

    pub fn add_property_null(&mut self, key: &str) {
        if self.before_property(key) {
            self.splice_bytes(b"null");
        }
    }

    pub fn add_property_bool(&mut self, key: &str, value: bool) {
        if self.before_property(key) {
            self.splice_bytes(if value { b"true" } else { b"false" });
        }
    }

    pub fn add_property_number(&mut self, key: &str, value: f64) {
        if !self.before_property(key) {
            return;
        }
        match format_number(value) {
            Ok(text) => self.splice_bytes(text.as_bytes()),
            Err(err) => self.fail(err),
        }
    }

    pub fn add_property_string(&mut self, key: &str, value: &str) {
        if self.before_property(key) {
            let escaped = escape_string(value);
            self.splice_bytes(escaped.as_bytes());
        }
    }

    pub fn enter_property_object(&mut self, key: &str) {
        if self.before_property(key) {
            self.open_scope(ScopeKind::Object);
        }
    }

    pub fn enter_property_array(&mut self, key: &str) {
        if self.before_property(key) {
            self.open_scope(ScopeKind::Array);
        }
    }

    /// Closes the innermost open object or array scope: the closer was
    /// already written when the scope was opened, so this just steps the
    /// insertion point past it, back into the enclosing scope.
    pub fn exit_scope(&mut self) {
        if !self.ok() {
            return;
        }
        match self.stack.pop() {
            Some(_) => self.insertion_point += 1,
            None => self.fail(BuildError::NoOpenScope),
        }
    }

    /// Finishes the document, returning the accumulated JSON text.
    ///
    /// # Errors
    ///
    /// Returns whatever [`BuildError`] the builder first hit, or
    /// [`BuildError::UnclosedScope`]/[`BuildError::EmptyDocument`] if the
    /// document was left unfinished.
    pub fn into_string(self) -> Result<String, BuildError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(BuildError::UnclosedScope);
        }
        if !self.started {
            return Err(BuildError::EmptyDocument);
        }
        Ok(String::from_utf8(self.buf).expect("builder only ever writes valid utf-8"))
    }
}
