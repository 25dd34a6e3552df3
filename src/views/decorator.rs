use std::borrow::Cow;

use smallvec::SmallVec;

use crate::element::Element;

/// Caller-supplied class names and attributes of a view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewAttrs {
    class: Option<String>,
    attrs: SmallVec<[(Cow<'static, str>, String); 2]>,
}

impl ViewAttrs {
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        match &mut self.class {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => self.class = Some(class.to_string()),
        }
    }

    fn set(&mut self, name: Cow<'static, str>, value: String) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Copies every attribute except the class onto `element`.
    pub(crate) fn apply(&self, element: &mut Element) {
        for (name, value) in &self.attrs {
            element.set_attr(name.clone(), value.clone());
        }
    }
}

/// Builder methods shared by every view.
pub trait Decorators: Sized {
    fn view_attrs_mut(&mut self) -> &mut ViewAttrs;

    /// Adds caller classes. They are merged after the generated classes, so
    /// they win over generated classes of the same utility group.
    fn class(mut self, class: impl AsRef<str>) -> Self {
        self.view_attrs_mut().add_class(class.as_ref());
        self
    }

    fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    fn style(self, css: impl Into<String>) -> Self {
        self.attr("style", css)
    }

    /// Sets an arbitrary attribute. `class` is routed to [`Decorators::class`].
    fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if name == "class" {
            self.view_attrs_mut().add_class(&value);
        } else {
            self.view_attrs_mut().set(name, value);
        }
        self
    }
}
