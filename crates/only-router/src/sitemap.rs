//! Sitemap route tree
//!
//! A node holds named children plus optional directive slots. Trees are built
//! with the [`SitemapNode`] builder and validated once by [`Sitemap::new`].
//!
//! ```ignore
//! let sitemap = Sitemap::new(
//!     SitemapNode::new()
//!         .target(Handler::sync(render_home))
//!         .child("docs", SitemapNode::new().wildcard(docs_frame).target(docs_index))
//!         .child("old", SitemapNode::new().redirect("docs")),
//! )?;
//! ```

use indexmap::IndexMap;
use std::sync::Arc;

use crate::directive::Directive;
use crate::error::SitemapError;
use crate::handler::{FallbackHandler, Handler};
use crate::path::{RoutePath, SEPARATOR};
use crate::Result;

/// Value of a node's `..` directive
#[derive(Debug, Clone)]
pub enum RouteTarget {
    Handler(Handler),
    Redirect(RoutePath),
}

impl From<Handler> for RouteTarget {
    fn from(handler: Handler) -> Self {
        RouteTarget::Handler(handler)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SitemapNode {
    children: IndexMap<String, SitemapNode>,
    wildcard: Option<Handler>,
    target: Option<RouteTarget>,
    intermediate: Option<Handler>,
    terminal: Option<Handler>,
    not_found: Option<FallbackHandler>,
    order: Option<Vec<Directive>>,
}

impl SitemapNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// `.*`
    pub fn wildcard(mut self, handler: Handler) -> Self {
        self.wildcard = Some(handler);
        self
    }

    /// `..` with a handler
    pub fn target(mut self, handler: Handler) -> Self {
        self.target = Some(RouteTarget::Handler(handler));
        self
    }

    /// `..` with a redirect path
    pub fn redirect(mut self, path: impl Into<RoutePath>) -> Self {
        self.target = Some(RouteTarget::Redirect(path.into()));
        self
    }

    /// `./`
    pub fn intermediate(mut self, handler: Handler) -> Self {
        self.intermediate = Some(handler);
        self
    }

    /// `.!`
    pub fn terminal(mut self, handler: Handler) -> Self {
        self.terminal = Some(handler);
        self
    }

    /// `.404`
    pub fn not_found(mut self, handler: FallbackHandler) -> Self {
        self.not_found = Some(handler);
        self
    }

    /// `.`
    pub fn order(mut self, order: impl IntoIterator<Item = Directive>) -> Self {
        self.order = Some(order.into_iter().collect());
        self
    }

    pub fn child(mut self, name: impl Into<String>, node: SitemapNode) -> Self {
        self.children.insert(name.into(), node);
        self
    }

    pub fn get_child(&self, name: &str) -> Option<&SitemapNode> {
        self.children.get(name)
    }

    /// Children in insertion order
    pub fn children(&self) -> impl Iterator<Item = (&str, &SitemapNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn wildcard_handler(&self) -> Option<&Handler> {
        self.wildcard.as_ref()
    }

    pub fn route_target(&self) -> Option<&RouteTarget> {
        self.target.as_ref()
    }

    pub fn intermediate_handler(&self) -> Option<&Handler> {
        self.intermediate.as_ref()
    }

    pub fn terminal_handler(&self) -> Option<&Handler> {
        self.terminal.as_ref()
    }

    pub fn not_found_handler(&self) -> Option<&FallbackHandler> {
        self.not_found.as_ref()
    }

    /// Whether the node can serve as the end of a path
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Order in which this node's directives are evaluated
    pub fn directive_order(&self) -> Vec<Directive> {
        match &self.order {
            Some(custom) => Directive::complete_order(custom),
            None => Directive::DEFAULT_ORDER.to_vec(),
        }
    }

    fn validate(&self, at: &RoutePath) -> Result<()> {
        if let Some(order) = &self.order {
            for (i, directive) in order.iter().enumerate() {
                if order[..i].contains(directive) {
                    return Err(SitemapError::DuplicateDirective {
                        node: at.join(),
                        directive: *directive,
                    });
                }
            }
        }

        for (name, child) in &self.children {
            if !is_valid_segment(name) {
                return Err(SitemapError::InvalidSegment {
                    parent: at.join(),
                    name: name.clone(),
                });
            }
            let mut segments = at.segments().to_vec();
            segments.push(name.clone());
            child.validate(&RoutePath::from_segments(segments))?;
        }

        Ok(())
    }
}

fn is_valid_segment(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(SEPARATOR)
}

/// Validated, immutable route tree
#[derive(Debug, Clone)]
pub struct Sitemap {
    root: Arc<SitemapNode>,
}

impl Sitemap {
    pub fn new(root: SitemapNode) -> Result<Self> {
        root.validate(&RoutePath::root())?;
        Ok(Self {
            root: Arc::new(root),
        })
    }

    pub fn root(&self) -> &SitemapNode {
        &self.root
    }

    /// Node reached by following `path` from the root, if any
    pub fn node(&self, path: &RoutePath) -> Option<&SitemapNode> {
        path.segments()
            .iter()
            .try_fold(self.root(), |node, segment| node.get_child(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Handler {
        Handler::sync(|_| Ok(()))
    }

    #[test]
    fn test_build_and_lookup() {
        let sitemap = Sitemap::new(
            SitemapNode::new()
                .target(noop())
                .child("a", SitemapNode::new().child("b", SitemapNode::new().target(noop()))),
        )
        .unwrap();

        assert!(sitemap.root().has_target());
        assert!(sitemap.node(&RoutePath::parse("a")).is_some());
        assert!(sitemap.node(&RoutePath::parse("a/b")).unwrap().has_target());
        assert!(sitemap.node(&RoutePath::parse("a/c")).is_none());
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let node = SitemapNode::new()
            .child("zeta", SitemapNode::new())
            .child("alpha", SitemapNode::new())
            .child("mid", SitemapNode::new());
        let names: Vec<&str> = node.children().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_rejects_directive_like_segment() {
        let result = Sitemap::new(
            SitemapNode::new().child("a", SitemapNode::new().child(".hidden", SitemapNode::new())),
        );
        assert_eq!(
            result.unwrap_err(),
            SitemapError::InvalidSegment {
                parent: "a".to_string(),
                name: ".hidden".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_separator_and_empty_segments() {
        assert!(Sitemap::new(SitemapNode::new().child("a/b", SitemapNode::new())).is_err());
        assert!(Sitemap::new(SitemapNode::new().child("", SitemapNode::new())).is_err());
    }

    #[test]
    fn test_rejects_duplicate_order() {
        let result = Sitemap::new(
            SitemapNode::new().order([Directive::Target, Directive::Wildcard, Directive::Target]),
        );
        assert!(matches!(
            result,
            Err(SitemapError::DuplicateDirective {
                directive: Directive::Target,
                ..
            })
        ));
    }

    #[test]
    fn test_directive_order_override() {
        let node = SitemapNode::new().order([Directive::Target]);
        assert_eq!(
            node.directive_order(),
            vec![
                Directive::Target,
                Directive::Wildcard,
                Directive::Terminal,
                Directive::Intermediate,
            ]
        );
        assert_eq!(SitemapNode::new().directive_order(), Directive::DEFAULT_ORDER.to_vec());
    }

    #[test]
    fn test_redirect_target_is_normalized() {
        let node = SitemapNode::new().redirect("/b//c/");
        match node.route_target() {
            Some(RouteTarget::Redirect(path)) => assert_eq!(path, &RoutePath::parse("b/c")),
            other => panic!("expected redirect, got {:?}", other),
        }
    }
}
