//! Small helpers on top of the `kuchiki` tree.

use kuchiki::{traits::*, NodeRef};

/// Creates a detached HTML element with the given attributes.
pub fn element(tag: &str, attributes: &[(&str, &str)]) -> NodeRef {
    let document = kuchiki::parse_html().one(format!("<{tag}></{tag}>"));
    let node = document
        .select_first(&format!("body > {tag}"))
        .expect("element parsed in body")
        .as_node()
        .clone();
    node.detach();

    for &(name, value) in attributes {
        set_attribute(&node, name, value);
    }

    node
}

/// Creates a detached element holding some text.
pub fn element_with_text(
    tag: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> NodeRef {
    let node = element(tag, attributes);
    node.append(NodeRef::new_text(text));
    node
}

/// Returns the value of an attribute.
pub fn attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.as_element()
        .and_then(|element| element.attributes.borrow().get(name).map(str::to_owned))
}

/// Sets (or replaces) an attribute.
pub fn set_attribute(node: &NodeRef, name: &str, value: &str) {
    if let Some(element) = node.as_element() {
        element
            .attributes
            .borrow_mut()
            .insert(name, value.to_owned());
    }
}

/// Tests if an element has the given class.
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    attribute(node, "class")
        .map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
}

/// Adds a class to an element, if not already there.
pub fn add_class(node: &NodeRef, class: &str) {
    if has_class(node, class) {
        return;
    }

    let classes = attribute(node, "class").unwrap_or_default();
    let classes = if classes.trim().is_empty() {
        class.to_owned()
    } else {
        format!("{} {class}", classes.trim())
    };
    set_attribute(node, "class", &classes);
}

/// Removes a class from an element.
pub fn remove_class(node: &NodeRef, class: &str) {
    if let Some(classes) = attribute(node, "class") {
        let classes = classes
            .split_whitespace()
            .filter(|&c| c != class)
            .collect::<Vec<_>>()
            .join(" ");
        set_attribute(node, "class", &classes);
    }
}

/// Detaches every child of `node`.
pub fn clear(node: &NodeRef) {
    for child in node.children().collect::<Vec<_>>() {
        child.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_element() {
        let node = element_with_text("p", &[("class", "note")], "a < b");

        assert_eq!(node.to_string(), r#"<p class="note">a &lt; b</p>"#);
        assert!(node.parent().is_none());
    }

    #[test]
    fn void_element() {
        let node = element("img", &[("src", "a.png"), ("alt", "A")]);

        assert_eq!(attribute(&node, "src").as_deref(), Some("a.png"));
        assert_eq!(attribute(&node, "alt").as_deref(), Some("A"));
    }

    #[test]
    fn classes() {
        let node = element("div", &[("class", "modal")]);

        add_class(&node, "show");
        add_class(&node, "show");
        assert_eq!(attribute(&node, "class").as_deref(), Some("modal show"));
        assert!(has_class(&node, "show"));

        remove_class(&node, "show");
        assert_eq!(attribute(&node, "class").as_deref(), Some("modal"));
        assert!(!has_class(&node, "show"));

        remove_class(&node, "show");
        assert_eq!(attribute(&node, "class").as_deref(), Some("modal"));
    }

    #[test]
    fn clear_children() {
        let node = element("div", &[]);
        node.append(element("p", &[]));
        node.append(element("p", &[]));

        clear(&node);

        assert_eq!(node.children().count(), 0);
    }
}
