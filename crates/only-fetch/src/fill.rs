//! Markup helpers for host nodes

use only_router::HtmlNode;

/// Remove all content from `node`
pub fn empty_node(node: &dyn HtmlNode) {
    node.clear();
}

/// Append `html` after the existing content of `node`
pub fn inject_html(node: &dyn HtmlNode, html: &str) {
    node.append_html(html);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct TestNode(Mutex<String>);

    impl HtmlNode for TestNode {
        fn inner_html(&self) -> String {
            self.0.lock().unwrap().clone()
        }

        fn set_inner_html(&self, html: &str) {
            *self.0.lock().unwrap() = html.to_string();
        }
    }

    #[test]
    fn test_inject_and_empty() {
        let node = TestNode::default();
        inject_html(&node, "<p>one</p>");
        inject_html(&node, "<p>two</p>");
        assert_eq!(node.inner_html(), "<p>one</p><p>two</p>");

        empty_node(&node);
        assert!(node.inner_html().is_empty());
    }
}
