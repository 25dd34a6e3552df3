use std::fmt;

use smallvec::SmallVec;

use crate::layout::Breakpoint;

/// An ordered list of class-name tokens.
///
/// Empty tokens are never stored, so the space-joined form produced by
/// `Display` has no leading, trailing or doubled separators.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    tokens: SmallVec<[String; 6]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !token.is_empty() {
            self.tokens.push(token);
        }
    }

    pub fn append(&mut self, other: ClassList) {
        self.tokens.extend(other.tokens);
    }

    /// Every token with a `{bp}:` variant prefix added.
    pub fn prefixed(self, bp: Breakpoint) -> ClassList {
        self.tokens
            .into_iter()
            .map(|token| format!("{bp}:{token}"))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.iter().any(|t| t == token)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl Extend<String> for ClassList {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for token in iter {
            self.push(token);
        }
    }
}

impl FromIterator<String> for ClassList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = ClassList::new();
        list.extend(iter);
        list
    }
}

impl IntoIterator for ClassList {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 6]>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_string()
    }
}
