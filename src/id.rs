//! Widget identity.
//!
//! Widgets are re-declared every frame, so their identity is a hash of the
//! label chained onto the hash of every enclosing ID scope. Two widgets with
//! the same label in different scopes get different IDs.

/// A widget identity hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub u32);

impl Id {
    /// The seed of the outermost scope.
    pub const ROOT: Self = Self(0);

    /// Hash `label` within this scope.
    ///
    /// The whole label is hashed, `##` suffix included, so `"Save##file"`
    /// and `"Save##edit"` display the same text with different identities.
    /// A `###` marker makes everything before it display-only.
    #[must_use]
    pub fn child(self, label: &str) -> Self {
        let key = label
            .find("###")
            .map_or(label, |i| &label[i..]);
        let mut hasher = crc32fast::Hasher::new_with_initial(self.0);
        hasher.update(key.as_bytes());
        Self(hasher.finalize())
    }

    /// Hash an integer within this scope.
    #[must_use]
    pub fn child_int(self, value: i64) -> Self {
        let mut hasher = crc32fast::Hasher::new_with_initial(self.0);
        hasher.update(&value.to_le_bytes());
        Self(hasher.finalize())
    }

    /// Resolve a path of labels from the root, e.g. `["fruit", "##in"]`.
    #[must_use]
    pub fn path(labels: &[&str]) -> Self {
        labels.iter().fold(Self::ROOT, |id, label| id.child(label))
    }
}

/// The visible part of a label: everything before the first `##`.
#[must_use]
pub fn display_text(label: &str) -> &str {
    label.find("##").map_or(label, |i| &label[..i])
}

/// Stack of ID scopes.
#[derive(Clone, Debug, Default)]
pub struct IdStack {
    stack: Vec<Id>,
}

impl IdStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The innermost scope's seed.
    #[must_use]
    pub fn current(&self) -> Id {
        self.stack.last().copied().unwrap_or(Id::ROOT)
    }

    /// ID of `label` in the current scope.
    #[must_use]
    pub fn get(&self, label: &str) -> Id {
        self.current().child(label)
    }

    /// Open a scope keyed by `label` and return its seed.
    pub fn push(&mut self, label: &str) -> Id {
        let id = self.get(label);
        self.stack.push(id);
        id
    }

    /// Open a scope with an already computed seed.
    pub fn push_id(&mut self, id: Id) {
        self.stack.push(id);
    }

    /// Close the innermost scope. Returns `false` if none was open.
    pub fn pop(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
