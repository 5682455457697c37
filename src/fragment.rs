use serde::{Deserialize, Serialize};

/// A single text-bearing element from a rendered candidate item region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Original surface text, trimmed
    pub text: String,

    /// Value of the element's class attribute (possibly empty)
    pub class_name: String,

    /// Lower-cased element tag name
    pub tag_name: String,
}

impl Node {
    /// Create a new node from raw element attributes
    pub fn new(text: &str, class_name: &str, tag_name: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            class_name: class_name.to_string(),
            tag_name: tag_name.to_lowercase(),
        }
    }

    /// Normalized comparison form of the surface text (lower-cased, trimmed).
    ///
    /// Always derived from `text`, never stored separately, so the two can't
    /// drift apart.
    pub fn normalized_text(&self) -> String {
        self.text.trim().to_lowercase()
    }

    /// Lower-cased class attribute for keyword matching
    pub fn normalized_class(&self) -> String {
        self.class_name.to_lowercase()
    }

    /// Anchor-tagged text is excluded from classification to avoid ad text
    pub fn is_anchor(&self) -> bool {
        self.tag_name == "a"
    }

    /// Level-2/level-3 headings are strong name candidates
    pub fn is_heading(&self) -> bool {
        self.tag_name == "h2" || self.tag_name == "h3"
    }
}

/// One candidate item region of a rendered listing page.
///
/// Built by the fetch collaborator; read-only to the classification core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFragment {
    raw_markup: String,
    nodes: Vec<Node>,
}

impl PageFragment {
    /// Create a fragment from its serialized markup and ordered text nodes
    pub fn new(raw_markup: String, nodes: Vec<Node>) -> Self {
        Self { raw_markup, nodes }
    }

    /// Ordered sequence of text-bearing descendant nodes
    pub fn descendant_text_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Raw serialized markup of the whole fragment (used for the
    /// sponsorship check only)
    pub fn raw_markup(&self) -> &str {
        &self.raw_markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_text_derived_from_surface_text() {
        let node = Node::new("  Wireless Mouse  ", "a-title", "H2");
        assert_eq!(node.text, "Wireless Mouse");
        assert_eq!(node.normalized_text(), "wireless mouse");
        assert_eq!(node.tag_name, "h2");
    }

    #[test]
    fn test_tag_predicates() {
        assert!(Node::new("link", "", "a").is_anchor());
        assert!(!Node::new("text", "", "span").is_anchor());
        assert!(Node::new("heading", "", "h2").is_heading());
        assert!(Node::new("heading", "", "h3").is_heading());
        assert!(!Node::new("heading", "", "h1").is_heading());
    }
}
