use super::{
    document::{NodeId, PageDocument},
    error::PageError,
    selector::Selector,
};

const BODY: NodeId = NodeId(0);

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    text: String,
    value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed visual tree. Node 0 is the body.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Element>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self {
            nodes: vec![Element {
                tag: "body".to_owned(),
                ..Element::default()
            }],
        }
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut Element, PageError> {
        self.nodes.get_mut(node.0).ok_or(PageError::UnknownNode(node))
    }

    fn matches(element: &Element, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => element.classes.iter().any(|item| item == class),
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        self.path_to_root(node).contains(&candidate)
    }
}

impl PageDocument for MemoryDocument {
    fn body(&self) -> NodeId {
        BODY
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element {
            tag: tag.to_owned(),
            ..Element::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), PageError> {
        self.element(parent).ok_or(PageError::UnknownNode(parent))?;
        let previous_parent = self
            .element(child)
            .ok_or(PageError::UnknownNode(child))?
            .parent;

        if self.is_ancestor_or_self(child, parent) {
            return Err(PageError::CyclicAppend { parent, child });
        }

        if let Some(previous) = previous_parent {
            self.element_mut(previous)?
                .children
                .retain(|item| *item != child);
        }

        self.element_mut(parent)?.children.push(child);
        self.element_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(|element| element.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.element(node)
            .map(|element| element.children.clone())
            .unwrap_or_default()
    }

    fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|element| element.tag.as_str())
    }

    fn query(&self, selector: &Selector) -> Option<NodeId> {
        std::iter::once(BODY)
            .chain(self.descendants(BODY))
            .find(|node| {
                self.element(*node)
                    .is_some_and(|element| Self::matches(element, selector))
            })
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        std::iter::once(BODY)
            .chain(self.descendants(BODY))
            .filter(|node| {
                self.element(*node)
                    .is_some_and(|element| Self::matches(element, selector))
            })
            .collect()
    }

    fn set_id(&mut self, node: NodeId, id: &str) -> Result<(), PageError> {
        self.element_mut(node)?.id = Some(id.to_owned());
        Ok(())
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), PageError> {
        let element = self.element_mut(node)?;
        if !element.classes.iter().any(|item| item == class) {
            element.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), PageError> {
        self.element_mut(node)?.classes.retain(|item| item != class);
        Ok(())
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|element| element.classes.iter().any(|item| item == class))
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), PageError> {
        let element = self.element_mut(node)?;
        match element.styles.iter_mut().find(|(name, _)| name == property) {
            Some((_, current)) => *current = value.to_owned(),
            None => element
                .styles
                .push((property.to_owned(), value.to_owned())),
        }
        Ok(())
    }

    fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)?
            .styles
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), PageError> {
        self.element_mut(node)?.text = text.to_owned();
        Ok(())
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|element| element.text.as_str())
    }

    fn value(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|element| element.value.as_str())
    }

    fn set_value(&mut self, node: NodeId, value: &str) -> Result<(), PageError> {
        self.element_mut(node)?.value = value.to_owned();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_with_id(document: &mut MemoryDocument, tag: &str, id: &str) -> NodeId {
        let node = document.create_element(tag);
        document.set_id(node, id).expect("node should exist");
        node
    }

    #[test]
    fn detached_elements_are_not_queryable() {
        let mut document = MemoryDocument::new();
        let node = element_with_id(&mut document, "div", "loose");

        assert_eq!(document.query(&Selector::id("loose")), None);

        let body = document.body();
        document.append_child(body, node).expect("append should work");
        assert_eq!(document.query(&Selector::id("loose")), Some(node));
    }

    #[test]
    fn query_all_returns_document_order() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        let outer = document.create_element("div");
        let inner = document.create_element("div");
        let sibling = document.create_element("div");
        for node in [outer, inner, sibling] {
            document.add_class(node, "card").expect("node should exist");
        }
        document.append_child(body, outer).expect("append outer");
        document.append_child(outer, inner).expect("append inner");
        document.append_child(body, sibling).expect("append sibling");

        assert_eq!(
            document.query_all(&Selector::class("card")),
            vec![outer, inner, sibling]
        );
    }

    #[test]
    fn append_moves_child_between_parents() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        let first = document.create_element("div");
        let second = document.create_element("div");
        let child = document.create_element("span");
        document.append_child(body, first).expect("append first");
        document.append_child(body, second).expect("append second");
        document.append_child(first, child).expect("append child");

        document.append_child(second, child).expect("move child");

        assert!(document.children(first).is_empty());
        assert_eq!(document.children(second), vec![child]);
        assert_eq!(document.parent(child), Some(second));
    }

    #[test]
    fn append_rejects_cycles() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        let outer = document.create_element("div");
        let inner = document.create_element("div");
        document.append_child(body, outer).expect("append outer");
        document.append_child(outer, inner).expect("append inner");

        assert_eq!(
            document.append_child(inner, outer),
            Err(PageError::CyclicAppend {
                parent: inner,
                child: outer
            })
        );
    }

    #[test]
    fn classes_are_a_set() {
        let mut document = MemoryDocument::new();
        let node = document.create_element("div");

        document.add_class(node, "show").expect("add");
        document.add_class(node, "show").expect("add again");
        assert!(document.has_class(node, "show"));

        document.remove_class(node, "show").expect("remove");
        assert!(!document.has_class(node, "show"));
    }

    #[test]
    fn styles_overwrite_by_property() {
        let mut document = MemoryDocument::new();
        let node = document.create_element("div");

        document.set_style(node, "opacity", "0").expect("set");
        document.set_style(node, "opacity", "1").expect("overwrite");

        assert_eq!(document.style(node, "opacity"), Some("1"));
        assert_eq!(document.style(node, "color"), None);
    }

    #[test]
    fn reset_form_clears_nested_inputs_only() {
        let mut document = MemoryDocument::new();
        let form = document.create_element("form");
        let wrapper = document.create_element("div");
        let input = document.create_element("input");
        let label = document.create_element("label");
        document.append_child(form, wrapper).expect("append wrapper");
        document.append_child(wrapper, input).expect("append input");
        document.append_child(form, label).expect("append label");
        document.set_value(input, "ABC").expect("set input");
        document.set_text(label, "Class code").expect("set label");

        document.reset_form(form).expect("reset");

        assert_eq!(document.value(input), Some(""));
        assert_eq!(document.text(label), Some("Class code"));
    }

    #[test]
    fn unknown_nodes_are_reported() {
        let mut document = MemoryDocument::new();
        let missing = NodeId(99);

        assert_eq!(
            document.add_class(missing, "x"),
            Err(PageError::UnknownNode(missing))
        );
        assert!(!document.has_class(missing, "x"));
        assert_eq!(document.text(missing), None);
    }
}
