use std::fmt;

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A named screen-width breakpoint.
///
/// Variants are declared smallest first, so the derived `Ord` is the order in
/// which responsive class names are emitted. The implicit `base` slot is not a
/// variant; it always comes before `Sm`.
#[derive(
    Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Breakpoint {
    #[strum(serialize = "sm")]
    Sm,
    #[strum(serialize = "md")]
    Md,
    #[strum(serialize = "lg")]
    Lg,
    #[strum(serialize = "xl")]
    Xl,
    #[strum(serialize = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// The variant prefix used in class names, e.g. `md` in `md:gd-cols-4`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl DoubleEndedIterator<Item = Breakpoint> {
        Breakpoint::iter()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Minimum viewport widths in pixels at which each breakpoint starts to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBreakpoints {
    sm: f64,
    md: f64,
    lg: f64,
    xl: f64,
    xxl: f64,
}

impl Default for GridBreakpoints {
    fn default() -> Self {
        Self {
            sm: 640.0,
            md: 768.0,
            lg: 1024.0,
            xl: 1280.0,
            xxl: 1536.0,
        }
    }
}

impl GridBreakpoints {
    /// Widths for `sm, md, lg, xl, 2xl`, in that order. They are expected to be
    /// increasing.
    pub fn new(widths: [f64; 5]) -> Self {
        let [sm, md, lg, xl, xxl] = widths;
        Self { sm, md, lg, xl, xxl }
    }

    pub fn min_width(&self, bp: Breakpoint) -> f64 {
        match bp {
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    /// The largest breakpoint active at `width`, or `None` below `sm`.
    pub fn get_width_bp(&self, width: f64) -> Option<Breakpoint> {
        Breakpoint::all()
            .rev()
            .find(|bp| width >= self.min_width(*bp))
    }
}

/// One optional value per breakpoint plus the unprefixed `base` value.
///
/// This is a struct of slots rather than a map so that iteration order is
/// fixed by the type and never by insertion order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: serde::Deserialize<'de>"))
)]
pub struct BreakpointMap<T> {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub base: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sm: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub md: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub lg: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub xl: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "2xl", skip_serializing_if = "Option::is_none")
    )]
    pub xxl: Option<T>,
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self {
            base: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
        }
    }
}

impl<T> BreakpointMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, value: impl Into<T>) -> Self {
        self.base = Some(value.into());
        self
    }

    pub fn with(mut self, bp: Breakpoint, value: impl Into<T>) -> Self {
        self.set(bp, value.into());
        self
    }

    pub fn with_sm(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Sm, value)
    }

    pub fn with_md(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Md, value)
    }

    pub fn with_lg(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Lg, value)
    }

    pub fn with_xl(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Xl, value)
    }

    pub fn with_xxl(self, value: impl Into<T>) -> Self {
        self.with(Breakpoint::Xxl, value)
    }

    fn slot(&self, bp: Breakpoint) -> &Option<T> {
        match bp {
            Breakpoint::Sm => &self.sm,
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Xl => &self.xl,
            Breakpoint::Xxl => &self.xxl,
        }
    }

    fn slot_mut(&mut self, bp: Breakpoint) -> &mut Option<T> {
        match bp {
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::Xxl => &mut self.xxl,
        }
    }

    pub fn get(&self, bp: Breakpoint) -> Option<&T> {
        self.slot(bp).as_ref()
    }

    pub fn set(&mut self, bp: Breakpoint, value: T) -> Option<T> {
        self.slot_mut(bp).replace(value)
    }

    /// The defined breakpoint entries, smallest first. `base` is not included.
    pub fn breakpoints(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::all().filter_map(move |bp| self.get(bp).map(|value| (bp, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.breakpoints().next().is_none()
    }
}

impl<T> FromIterator<(Breakpoint, T)> for BreakpointMap<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        let mut map = BreakpointMap::new();
        for (bp, value) in iter {
            map.set(bp, value);
        }
        map
    }
}

/// A value that is either unconditional or keyed by breakpoint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Responsive<T> {
    Value(T),
    Breakpoints(BreakpointMap<T>),
}

impl<T> Responsive<T> {
    /// The value in effect at a viewport `width`, resolved mobile first: the
    /// largest defined breakpoint not above the width, then `base`.
    pub fn resolve(&self, width: f64, bps: &GridBreakpoints) -> Option<&T> {
        let map = match self {
            Responsive::Value(value) => return Some(value),
            Responsive::Breakpoints(map) => map,
        };
        let active = bps.get_width_bp(width);
        Breakpoint::all()
            .rev()
            .filter(|bp| Some(*bp) <= active)
            .find_map(|bp| map.get(bp))
            .or(map.base.as_ref())
    }
}

impl<T> From<BreakpointMap<T>> for Responsive<T> {
    fn from(map: BreakpointMap<T>) -> Self {
        Responsive::Breakpoints(map)
    }
}
