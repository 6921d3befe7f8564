//! In-memory document host
//!
//! An arena of positioned nodes that implements every host capability.
//! The terminal demo renders it; tests use its effect log to observe what
//! the navigator did.

use std::collections::BTreeSet;

use crate::geometry::{Rect, ScrollOffset, Size};
use crate::host::{CandidateQuery, Geometry, InputEvents, ListenerId, Viewport, VisualEffects};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Side effect recorded by the document
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Highlight(NodeId, String),
    Unhighlight(NodeId, String),
    Focus(NodeId),
    Blur(NodeId),
    ScrollContainer(NodeId, ScrollOffset),
    ScrollWindow(ScrollOffset),
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
    classes: BTreeSet<String>,
    text_input: bool,
    scroll: ScrollOffset,
    client: Option<Size>,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>, rect: Rect) -> Self {
        Self {
            tag: tag.to_string(),
            label: String::new(),
            parent,
            children: Vec::new(),
            rect,
            classes: BTreeSet::new(),
            text_input: tag == "input",
            scroll: ScrollOffset::default(),
            client: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SelectorPart {
    Any,
    Class(String),
    Tag(String),
}

/// Comma-separated `.class`, `*` or tag names
fn parse_selector(selector: &str) -> Vec<SelectorPart> {
    selector
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part {
            "*" => SelectorPart::Any,
            _ => match part.strip_prefix('.') {
                Some(class) => SelectorPart::Class(class.to_string()),
                None => SelectorPart::Tag(part.to_ascii_lowercase()),
            },
        })
        .collect()
}

fn node_matches(node: &Node, parts: &[SelectorPart]) -> bool {
    parts.iter().any(|part| match part {
        SelectorPart::Any => true,
        SelectorPart::Class(class) => node.classes.contains(class),
        SelectorPart::Tag(tag) => node.tag == *tag,
    })
}

pub struct Document {
    nodes: Vec<Node>,
    window_size: Size,
    window_scroll: ScrollOffset,
    focused: Option<NodeId>,
    listeners: Vec<ListenerId>,
    next_listener: u64,
    effects: Vec<Effect>,
}

impl Document {
    /// Create a document whose root spans the given window size
    pub fn new(window_size: Size) -> Self {
        let root = Node::new(
            "body",
            None,
            Rect::new(0.0, 0.0, window_size.width, window_size.height),
        );
        Self {
            nodes: vec![root],
            window_size,
            window_scroll: ScrollOffset::default(),
            focused: None,
            listeners: Vec::new(),
            next_listener: 1,
            effects: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child positioned at `rect` relative to `parent`
    pub fn append(&mut self, parent: NodeId, tag: &str, rect: Rect) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag, Some(parent), rect));
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(id);
        }
        id
    }

    /// Unlink a node from its parent; it no longer appears in queries
    pub fn detach(&mut self, id: NodeId) {
        let parent = self.nodes.get(id.0).and_then(|node| node.parent);
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p.0)) {
            parent.children.retain(|child| *child != id);
        }
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.parent = None;
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.classes.insert(class.to_string());
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes
            .get(id.0)
            .is_some_and(|node| node.classes.contains(class))
    }

    /// Nodes currently carrying `class`, in arena order
    pub fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    pub fn set_label(&mut self, id: NodeId, label: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.label = label.to_string();
        }
    }

    pub fn label(&self, id: NodeId) -> &str {
        self.nodes.get(id.0).map(|node| node.label.as_str()).unwrap_or("")
    }

    pub fn tag(&self, id: NodeId) -> &str {
        self.nodes.get(id.0).map(|node| node.tag.as_str()).unwrap_or("")
    }

    pub fn set_text_input(&mut self, id: NodeId, text_input: bool) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.text_input = text_input;
        }
    }

    pub fn rect(&self, id: NodeId) -> Rect {
        self.nodes.get(id.0).map(|node| node.rect).unwrap_or_default()
    }

    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.rect = rect;
        }
    }

    /// Override the visible content box; defaults to the node's own size
    pub fn set_client_size(&mut self, id: NodeId, size: Size) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.client = Some(size);
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
        if let Some(root) = self.nodes.first_mut() {
            root.rect = Rect::new(0.0, 0.0, size.width, size.height);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    fn collect_matching(&self, id: NodeId, parts: &[SelectorPart], out: &mut Vec<NodeId>) {
        for child in self.children(id) {
            if let Some(node) = self.nodes.get(child.0) {
                if node_matches(node, parts) {
                    out.push(*child);
                }
            }
            self.collect_matching(*child, parts, out);
        }
    }
}

impl Geometry for Document {
    type Element = NodeId;

    fn offset_rect(&self, el: &NodeId) -> Rect {
        self.rect(*el)
    }

    fn offset_parent(&self, el: &NodeId) -> Option<NodeId> {
        self.nodes.get(el.0).and_then(|node| node.parent)
    }

    fn scroll_offset(&self, el: &NodeId) -> ScrollOffset {
        self.nodes.get(el.0).map(|node| node.scroll).unwrap_or_default()
    }

    fn set_scroll_offset(&mut self, el: &NodeId, offset: ScrollOffset) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.scroll = offset;
            self.effects.push(Effect::ScrollContainer(*el, offset));
        }
    }

    fn client_size(&self, el: &NodeId) -> Size {
        self.nodes
            .get(el.0)
            .map(|node| {
                node.client
                    .unwrap_or_else(|| Size::new(node.rect.width, node.rect.height))
            })
            .unwrap_or_default()
    }
}

impl CandidateQuery for Document {
    fn query_all(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        let parts = parse_selector(selector);
        let mut out = Vec::new();
        if !parts.is_empty() {
            self.collect_matching(*root, &parts, &mut out);
        }
        out
    }

    fn is_text_input(&self, el: &NodeId) -> bool {
        self.nodes.get(el.0).is_some_and(|node| node.text_input)
    }
}

impl VisualEffects for Document {
    fn highlight(&mut self, el: &NodeId, marker: &str) {
        self.add_class(*el, marker);
        self.effects.push(Effect::Highlight(*el, marker.to_string()));
    }

    fn unhighlight(&mut self, el: &NodeId, marker: &str) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.classes.remove(marker);
        }
        self.effects.push(Effect::Unhighlight(*el, marker.to_string()));
    }

    fn focus(&mut self, el: &NodeId) {
        self.focused = Some(*el);
        self.effects.push(Effect::Focus(*el));
    }

    fn blur(&mut self, el: &NodeId) {
        if self.focused == Some(*el) {
            self.focused = None;
        }
        self.effects.push(Effect::Blur(*el));
    }
}

impl Viewport for Document {
    fn window_size(&self) -> Size {
        self.window_size
    }

    fn window_scroll(&self) -> ScrollOffset {
        self.window_scroll
    }

    fn set_window_scroll(&mut self, offset: ScrollOffset) {
        self.window_scroll = offset;
        self.effects.push(Effect::ScrollWindow(offset));
    }
}

impl InputEvents for Document {
    fn add_key_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(id);
        id
    }

    fn remove_key_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|listener| *listener != id);
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
