//! Merging class strings with conflict resolution.
//!
//! Concatenating a component's generated classes with a caller's classes is
//! not enough: `relative grid` followed by a caller's `absolute` must leave
//! only `absolute`. The merger sorts utilities into groups and keeps only the
//! last token of each group per variant prefix, so `md:hidden` and `hidden`
//! never conflict but `md:hidden` and `md:block` do.
//!
//! Tokens that belong to no known group are kept, with exact duplicates
//! collapsed onto their last occurrence. Survivors keep their relative order.

use std::borrow::Cow;
use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

const DISPLAY_CLASSES: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "table",
    "inline-table",
    "grid",
    "inline-grid",
    "contents",
    "flow-root",
    "list-item",
    "hidden",
];

const POSITION_CLASSES: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

static DEFAULT_MERGER: LazyLock<ClassMerger> = LazyLock::new(ClassMerger::default);

#[derive(Clone, Debug, PartialEq, Eq)]
enum Matcher {
    Exact(Vec<Cow<'static, str>>),
    /// Matches `{prefix}{value}` for any non-empty value.
    Prefix(Cow<'static, str>),
}

/// A set of utilities that set the same property, so only one of them can
/// win.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassGroup {
    id: Cow<'static, str>,
    matcher: Matcher,
    conflicts: SmallVec<[Cow<'static, str>; 2]>,
}

impl ClassGroup {
    /// A group made of a fixed list of class names.
    pub fn exact<I, S>(id: impl Into<Cow<'static, str>>, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            id: id.into(),
            matcher: Matcher::Exact(classes.into_iter().map(Into::into).collect()),
            conflicts: SmallVec::new(),
        }
    }

    /// A group of every class starting with `prefix`, e.g. `gd-cols-`.
    pub fn prefix(id: impl Into<Cow<'static, str>>, prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: id.into(),
            matcher: Matcher::Prefix(prefix.into()),
            conflicts: SmallVec::new(),
        }
    }

    /// A later class from this group also removes earlier classes of `other`.
    pub fn overrides(mut self, other: impl Into<Cow<'static, str>>) -> Self {
        self.conflicts.push(other.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

fn default_groups() -> Vec<ClassGroup> {
    vec![
        ClassGroup::exact("display", DISPLAY_CLASSES.iter().copied()),
        ClassGroup::exact("position", POSITION_CLASSES.iter().copied()),
        ClassGroup::prefix("gd-cols", "gd-cols-"),
        ClassGroup::prefix("gd-rows", "gd-rows-"),
        ClassGroup::prefix("gd-gap", "gd-gap-")
            .overrides("gd-gap-x")
            .overrides("gd-gap-y"),
        ClassGroup::prefix("gd-gap-x", "gd-gap-x-"),
        ClassGroup::prefix("gd-gap-y", "gd-gap-y-"),
        ClassGroup::prefix("grid-divider-v", "grid-divider-v-"),
        ClassGroup::prefix("grid-divider-h", "grid-divider-h-"),
        ClassGroup::prefix("grid-divider-row-span", "grid-divider-row-span-"),
        ClassGroup::prefix("grid-divider-row-start", "grid-divider-row-start-"),
        ClassGroup::prefix("grid-divider-col-span", "grid-divider-col-span-"),
        ClassGroup::prefix("grid-divider-col-start", "grid-divider-col-start-"),
    ]
}

/// Resolves conflicting utility classes; later classes win.
#[derive(Clone, Debug)]
pub struct ClassMerger {
    groups: Vec<ClassGroup>,
    exact: FxHashMap<Cow<'static, str>, usize>,
}

impl Default for ClassMerger {
    fn default() -> Self {
        Self::from_groups(default_groups())
    }
}

impl ClassMerger {
    /// A merger that knows no groups and only collapses duplicates.
    pub fn empty() -> Self {
        Self::from_groups(Vec::new())
    }

    pub fn from_groups(groups: impl IntoIterator<Item = ClassGroup>) -> Self {
        groups.into_iter().fold(
            Self {
                groups: Vec::new(),
                exact: FxHashMap::default(),
            },
            Self::with_group,
        )
    }

    /// Registers another group. Exact class names already claimed by an
    /// earlier group move to the new one.
    pub fn with_group(mut self, group: ClassGroup) -> Self {
        let idx = self.groups.len();
        if let Matcher::Exact(classes) = &group.matcher {
            for class in classes {
                self.exact.insert(class.clone(), idx);
            }
        }
        self.groups.push(group);
        self
    }

    fn classify(&self, utility: &str) -> Option<&ClassGroup> {
        if let Some(idx) = self.exact.get(utility) {
            return self.groups.get(*idx);
        }
        self.groups
            .iter()
            .filter_map(|group| match &group.matcher {
                Matcher::Prefix(prefix)
                    if utility.len() > prefix.len() && utility.starts_with(prefix.as_ref()) =>
                {
                    Some((prefix.len(), group))
                }
                _ => None,
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, group)| group)
    }

    /// The group a token belongs to, ignoring its variant prefix.
    pub fn group_of(&self, token: &str) -> Option<&str> {
        let (_, utility) = split_variants(token);
        self.classify(utility).map(ClassGroup::id)
    }

    /// Merges whitespace-separated class strings, later ones winning.
    pub fn merge<'a>(&self, inputs: impl IntoIterator<Item = &'a str>) -> String {
        let tokens: Vec<&str> = inputs
            .into_iter()
            .flat_map(str::split_whitespace)
            .collect();

        let mut taken: FxHashSet<(String, &str)> = FxHashSet::default();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

        for &token in tokens.iter().rev() {
            if !seen.insert(token) {
                log::trace!("dropping duplicate class `{token}`");
                continue;
            }

            let (variants, utility) = split_variants(token);
            if let Some(group) = self.classify(utility) {
                let key = (variant_key(variants), group.id());
                if taken.contains(&key) {
                    log::trace!("dropping `{token}`: overridden in group `{}`", group.id());
                    continue;
                }
                for conflict in &group.conflicts {
                    taken.insert((key.0.clone(), conflict.as_ref()));
                }
                taken.insert(key);
            }

            kept.push(token);
        }

        kept.reverse();
        kept.join(" ")
    }
}

/// Splits `md:hover:!hidden` into (`md:hover:!`, `hidden`). The important
/// marker counts as part of the variants.
fn split_variants(token: &str) -> (Cow<'_, str>, &str) {
    let (variants, utility) = match token.rfind(':') {
        Some(pos) => (&token[..pos + 1], &token[pos + 1..]),
        None => ("", token),
    };
    match utility.strip_prefix('!') {
        Some(utility) => (Cow::Owned(format!("{variants}!")), utility),
        None => (Cow::Borrowed(variants), utility),
    }
}

/// Variant order doesn't matter: `md:hover:` and `hover:md:` are one key.
fn variant_key(variants: Cow<'_, str>) -> String {
    if !variants.contains(':') {
        return variants.into_owned();
    }
    let mut parts: SmallVec<[&str; 4]> = variants.split(':').filter(|p| !p.is_empty()).collect();
    parts.sort_unstable();
    parts.join(":")
}

/// Merges with the default groups: display, position and the grid utilities.
pub fn merge_classes<'a>(inputs: impl IntoIterator<Item = &'a str>) -> String {
    DEFAULT_MERGER.merge(inputs)
}
