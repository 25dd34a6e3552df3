use std::borrow::Cow;
use std::cell::OnceCell;

use super::{Decorators, ViewAttrs};
use crate::{
    element::{Element, Node},
    layout::Responsive,
    style::{GridLayout, merge_classes},
    unit::{ClassValue, GridColSize, GridRowSize},
    view::{IntoView, View},
};

/// Classes every grid container starts with.
pub const BASE_GRID_CLASSES: &str = "relative grid";

/// A CSS grid container. See [`grid`].
pub struct GridParent {
    layout: GridLayout,
    attrs: ViewAttrs,
    children: Vec<Node>,
    compiled: OnceCell<String>,
}

/// A grid container configured through responsive `cols`, `rows` and gaps.
///
/// ## Example
/// ```rust
/// use gridline::layout::BreakpointMap;
/// use gridline::unit::GridSize;
/// use gridline::views::{Decorators, grid};
/// use gridline::View;
///
/// # fn main() -> Result<(), gridline::unit::GridSizeError> {
/// let view = grid()
///     .cols(
///         BreakpointMap::<GridSize>::new()
///             .with_base(GridSize::new(2)?)
///             .with_lg(GridSize::new(4)?),
///     )
///     .gap(4)
///     .class("mt-8")
///     .child("first")
///     .child("second");
///
/// assert_eq!(
///     view.to_html(),
///     r#"<div class="relative grid gd-cols-2 lg:gd-cols-4 gd-gap-4 mt-8">firstsecond</div>"#
/// );
/// # Ok(())
/// # }
/// ```
pub fn grid() -> GridParent {
    GridParent::new(GridLayout::default())
}

impl GridParent {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            attrs: ViewAttrs::default(),
            children: Vec::new(),
            compiled: OnceCell::new(),
        }
    }

    fn update_layout(mut self, f: impl FnOnce(&mut GridLayout)) -> Self {
        f(&mut self.layout);
        self.compiled.take();
        self
    }

    pub fn cols(self, cols: impl Into<Responsive<GridColSize>>) -> Self {
        self.update_layout(|l| l.cols = Some(cols.into()))
    }

    pub fn rows(self, rows: impl Into<Responsive<GridRowSize>>) -> Self {
        self.update_layout(|l| l.rows = Some(rows.into()))
    }

    pub fn gap(self, gap: impl Into<Responsive<ClassValue>>) -> Self {
        self.update_layout(|l| l.gap = Some(gap.into()))
    }

    pub fn gap_x(self, gap: impl Into<Responsive<ClassValue>>) -> Self {
        self.update_layout(|l| l.gap_x = Some(gap.into()))
    }

    pub fn gap_y(self, gap: impl Into<Responsive<ClassValue>>) -> Self {
        self.update_layout(|l| l.gap_y = Some(gap.into()))
    }

    pub fn child(mut self, child: impl IntoView) -> Self {
        self.children.push(child.into_node());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoView,
    {
        self.children
            .extend(children.into_iter().map(IntoView::into_node));
        self
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// The compiled `gd-*` classes, computed once until the layout changes.
    pub fn grid_classes(&self) -> &str {
        self.compiled.get_or_init(|| {
            let classes = self.layout.classes().to_string();
            log::debug!("compiled grid classes `{classes}`");
            classes
        })
    }

    /// The final class attribute: base classes, grid classes, caller classes.
    pub fn class_name(&self) -> String {
        merge_classes([
            BASE_GRID_CLASSES,
            self.grid_classes(),
            self.attrs.class().unwrap_or_default(),
        ])
    }
}

impl Decorators for GridParent {
    fn view_attrs_mut(&mut self) -> &mut ViewAttrs {
        &mut self.attrs
    }
}

impl View for GridParent {
    fn debug_name(&self) -> Cow<'static, str> {
        "GridParent".into()
    }

    fn render(&self) -> Element {
        let mut element = Element::new("div");
        element.set_attr("class", self.class_name());
        self.attrs.apply(&mut element);
        for child in &self.children {
            element.push_child(child.clone());
        }
        log::debug!("rendered {} with {} children", self.debug_name(), self.children.len());
        element
    }
}
