//! # View and IntoView traits
//!
//! A [View] is a component that renders itself into an [Element]. Anything
//! that can be placed inside a component implements [IntoView]: views,
//! prebuilt elements and plain text.
//!
//! Rendering takes `&self` and produces a fresh element every time. A view may
//! memoize derived data such as compiled class names between renders, but the
//! result never depends on how often it has been rendered.

use std::borrow::Cow;

use crate::element::{Element, Node};

pub trait View {
    /// A short name used in logs.
    fn debug_name(&self) -> Cow<'static, str>;

    fn render(&self) -> Element;

    /// The rendered element serialized as HTML.
    fn to_html(&self) -> String {
        self.render().to_string()
    }
}

pub trait IntoView {
    fn into_node(self) -> Node;
}

impl<V: View> IntoView for V {
    fn into_node(self) -> Node {
        Node::Element(self.render())
    }
}

impl IntoView for Element {
    fn into_node(self) -> Node {
        Node::Element(self)
    }
}

impl IntoView for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl IntoView for &str {
    fn into_node(self) -> Node {
        Node::Text(self.to_string())
    }
}

impl IntoView for String {
    fn into_node(self) -> Node {
        Node::Text(self)
    }
}
