use std::borrow::Cow;
use std::cell::OnceCell;

use super::{Decorators, ViewAttrs};
use crate::{
    element::Element,
    layout::Responsive,
    style::{DividerCompiler, GridDividerConfig, merge_classes},
    view::View,
};

pub const BASE_DIVIDER_CLASS: &str = "grid-divider";

/// A decorative line between grid tracks. See [`divider`].
///
/// The rendered element is always `aria-hidden="true"`; an `aria-hidden`
/// attribute set by the caller is overwritten.
pub struct GridDivider {
    config: Option<Responsive<GridDividerConfig>>,
    compiler: DividerCompiler,
    attrs: ViewAttrs,
    compiled: OnceCell<String>,
}

/// A divider with no configuration yet. It renders with only its base class
/// and any caller classes.
pub fn divider() -> GridDivider {
    GridDivider {
        config: None,
        compiler: DividerCompiler::default(),
        attrs: ViewAttrs::default(),
        compiled: OnceCell::new(),
    }
}

/// A divider for `config`, which is a single [`GridDividerConfig`] or a
/// breakpoint map of them.
///
/// ```rust
/// use gridline::style::VerticalDivider;
/// use gridline::views::divider_with;
/// use gridline::View;
///
/// let view = divider_with(VerticalDivider::after_col(3).row_span(2));
/// assert_eq!(
///     view.to_html(),
///     r#"<div class="grid-divider grid-divider-v-3 grid-divider-row-span-2" aria-hidden="true"></div>"#
/// );
/// ```
pub fn divider_with(config: impl Into<Responsive<GridDividerConfig>>) -> GridDivider {
    divider().config(config)
}

impl GridDivider {
    pub fn config(mut self, config: impl Into<Responsive<GridDividerConfig>>) -> Self {
        self.config = Some(config.into());
        self.compiled.take();
        self
    }

    pub fn get_config(&self) -> Option<&Responsive<GridDividerConfig>> {
        self.config.as_ref()
    }

    /// See [`DividerCompiler::with_restore_token`].
    pub fn restore_token(mut self, token: impl Into<Cow<'static, str>>) -> Self {
        self.compiler = self.compiler.with_restore_token(token);
        self.compiled.take();
        self
    }

    pub fn divider_classes(&self) -> &str {
        self.compiled.get_or_init(|| {
            let classes = self.compiler.compile(self.config.as_ref()).to_string();
            log::debug!("compiled divider classes `{classes}`");
            classes
        })
    }

    pub fn class_name(&self) -> String {
        merge_classes([
            BASE_DIVIDER_CLASS,
            self.divider_classes(),
            self.attrs.class().unwrap_or_default(),
        ])
    }
}

impl Decorators for GridDivider {
    fn view_attrs_mut(&mut self) -> &mut ViewAttrs {
        &mut self.attrs
    }
}

impl View for GridDivider {
    fn debug_name(&self) -> Cow<'static, str> {
        "GridDivider".into()
    }

    fn render(&self) -> Element {
        let mut element = Element::new("div");
        element.set_attr("class", self.class_name());
        self.attrs.apply(&mut element);
        element.set_attr("aria-hidden", "true");
        log::debug!("rendered {}", self.debug_name());
        element
    }
}
