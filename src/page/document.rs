//! Contract for the visual tree the controller mutates.
//!
//! Node handles are plain indices into the owning document; a handle is only
//! meaningful for the document that created it.

use super::{error::PageError, selector::Selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

pub trait PageDocument {
    /// Root element every attached node descends from.
    fn body(&self) -> NodeId;

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Appends `child` as the last child of `parent`, detaching it from its
    /// previous parent first.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), PageError>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn children(&self, node: NodeId) -> Vec<NodeId>;

    fn tag(&self, node: NodeId) -> Option<&str>;

    /// First attached element matching `selector`, in document order.
    fn query(&self, selector: &Selector) -> Option<NodeId>;

    /// Every attached element matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<NodeId>;

    fn set_id(&mut self, node: NodeId, id: &str) -> Result<(), PageError>;

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), PageError>;

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), PageError>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), PageError>;

    fn style(&self, node: NodeId, property: &str) -> Option<&str>;

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), PageError>;

    fn text(&self, node: NodeId) -> Option<&str>;

    /// Current value of a form control.
    fn value(&self, node: NodeId) -> Option<&str>;

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<(), PageError>;

    /// Adds or removes `class` so that its presence matches `present`.
    fn set_class(&mut self, node: NodeId, class: &str, present: bool) -> Result<(), PageError> {
        if present {
            self.add_class(node, class)
        } else {
            self.remove_class(node, class)
        }
    }

    /// `node` followed by its ancestors up to the root.
    fn path_to_root(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Every descendant of `node` in document order, excluding `node`.
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            found.push(next);
            stack.extend(self.children(next).into_iter().rev());
        }
        found
    }

    /// Clears every `input` inside `form`.
    fn reset_form(&mut self, form: NodeId) -> Result<(), PageError> {
        let inputs: Vec<NodeId> = self
            .descendants(form)
            .into_iter()
            .filter(|node| self.tag(*node) == Some("input"))
            .collect();

        for input in inputs {
            self.set_value(input, "")?;
        }

        Ok(())
    }

    /// Concatenated text of `node` and its descendants, space separated.
    #[cfg(test)]
    fn text_content(&self, node: NodeId) -> String {
        std::iter::once(node)
            .chain(self.descendants(node))
            .filter_map(|node| self.text(node))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
