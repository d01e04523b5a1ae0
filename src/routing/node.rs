//! Segment trie used by the router.
//!
//! Every node is one path segment level. Literal children are keyed by their
//! exact text; a node holds at most one `:param` child and at most one
//! `*catch_all` child. Handlers live on the node where a route terminates.

use std::collections::HashMap;

use crate::routing::method::Method;
use crate::routing::router::Handler;

#[derive(Default)]
pub(crate) struct Node {
    /// Segment text as registered (`""` for the root, `users`, `:id`, `*rest`).
    pub(crate) segment: String,
    pub(crate) children: HashMap<String, Node>,
    pub(crate) param_child: Option<Box<Node>>,
    pub(crate) catch_all_child: Option<Box<Node>>,
    pub(crate) handlers: HashMap<Method, Handler>,
}

impl Node {
    pub(crate) fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            ..Self::default()
        }
    }

    /// Placeholder name for `:name` and `*name` nodes.
    pub(crate) fn param_name(&self) -> &str {
        self.segment
            .strip_prefix(':')
            .or_else(|| self.segment.strip_prefix('*'))
            .unwrap_or(&self.segment)
    }

    pub(crate) fn literal_child_or_insert(&mut self, segment: &str) -> &mut Node {
        self.children
            .entry(segment.to_string())
            .or_insert_with(|| Node::new(segment))
    }

    /// Returns the existing parameter child or creates one.
    ///
    /// The first registered name is kept for the position; a later route
    /// that spells the placeholder differently shares the same node.
    pub(crate) fn param_child_or_insert(&mut self, segment: &str) -> &mut Node {
        self.param_child
            .get_or_insert_with(|| Box::new(Node::new(segment)))
    }

    pub(crate) fn catch_all_child_or_insert(&mut self, segment: &str) -> &mut Node {
        self.catch_all_child
            .get_or_insert_with(|| Box::new(Node::new(segment)))
    }

    /// Registered methods at this node, in a stable order.
    pub(crate) fn allowed_methods(&self) -> Vec<Method> {
        let mut methods: Vec<Method> = self.handlers.keys().copied().collect();
        methods.sort();
        methods
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("segment", &self.segment)
            .field("children", &self.children)
            .field("param_child", &self.param_child)
            .field("catch_all_child", &self.catch_all_child)
            .field("methods", &self.allowed_methods())
            .finish()
    }
}
