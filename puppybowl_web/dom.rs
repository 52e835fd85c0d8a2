//! Headless stand-in for the page the roster is rendered into.
//!
//! The page owns two containers, the player list and the creation form, plus
//! an overlay region sitting next to the list. Nodes carry rendered markup and
//! the listeners wired to their controls; replacing a container's contents
//! drops those listeners with the nodes.

use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use puppybowl_types::player::{PlayerDraft, PlayerId};

pub type SharedDocument = Arc<Mutex<Document>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerId {
    Players,
    NewPlayerForm,
}

impl ContainerId {
    /// Element id of the container on the page.
    pub fn element_id(&self) -> &'static str {
        match self {
            ContainerId::Players => "all-players-container",
            ContainerId::NewPlayerForm => "new-player-form",
        }
    }
}

/// Interactive part of a node a listener can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Details,
    Delete,
    Close,
    Submit,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Control::Details => "details",
            Control::Delete => "delete",
            Control::Close => "close",
            Control::Submit => "submit",
        };
        f.write_str(name)
    }
}

impl FromStr for Control {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "details" => Ok(Control::Details),
            "delete" => Ok(Control::Delete),
            "close" => Ok(Control::Close),
            "submit" => Ok(Control::Submit),
            other => Err(format!("unknown control '{other}'")),
        }
    }
}

/// What a listener does when its control fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowDetails(PlayerId),
    DeletePlayer(PlayerId),
    CloseOverlay(NodeId),
    SubmitNewPlayer,
}

/// A user interaction aimed at one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub target: NodeId,
    pub control: Control,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub class: &'static str,
    pub markup: String,
    listeners: Vec<(Control, Action)>,
}

impl Node {
    pub fn new(id: NodeId, class: &'static str, markup: String) -> Self {
        Self {
            id,
            class,
            markup,
            listeners: vec![],
        }
    }

    pub fn on(mut self, control: Control, action: Action) -> Self {
        self.listeners.push((control, action));
        self
    }

    pub fn listener(&self, control: Control) -> Option<&Action> {
        self.listeners
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, action)| action)
    }
}

#[derive(Debug, Clone)]
pub struct Container {
    children: Vec<Node>,
}

impl Container {
    fn new() -> Self {
        Self { children: vec![] }
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn find(&self, id: NodeId) -> Option<&Node> {
        self.children.iter().find(|n| n.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    next_node: u64,
    overlays: Vec<Node>,
    players: Container,
    form: Container,
    inputs: HashMap<String, String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            next_node: 1,
            overlays: vec![],
            players: Container::new(),
            form: Container::new(),
            inputs: HashMap::new(),
        }
    }

    pub fn shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    /// Reserves an id for a node about to be rendered.
    pub fn allocate_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        id
    }

    pub fn container(&self, id: ContainerId) -> &Container {
        match id {
            ContainerId::Players => &self.players,
            ContainerId::NewPlayerForm => &self.form,
        }
    }

    pub fn container_mut(&mut self, id: ContainerId) -> &mut Container {
        match id {
            ContainerId::Players => &mut self.players,
            ContainerId::NewPlayerForm => &mut self.form,
        }
    }

    pub fn prepend_overlay(&mut self, node: Node) {
        self.overlays.insert(0, node);
    }

    /// Removes one overlay, returning whether it was still on the page.
    pub fn remove_overlay(&mut self, id: NodeId) -> bool {
        let before = self.overlays.len();
        self.overlays.retain(|n| n.id != id);
        before != self.overlays.len()
    }

    pub fn overlays(&self) -> &[Node] {
        &self.overlays
    }

    pub fn set_input(&mut self, name: &str, value: &str) {
        self.inputs.insert(name.to_string(), value.to_string());
    }

    /// Current value of a form input; untouched inputs read as empty.
    pub fn input(&self, name: &str) -> &str {
        self.inputs.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Current values of the creation form, untrimmed.
    pub fn draft(&self) -> PlayerDraft {
        PlayerDraft {
            name: self.input("name").to_string(),
            breed: self.input("breed").to_string(),
            status: self.input("status").to_string(),
        }
    }

    pub fn fill_form(&mut self, draft: &PlayerDraft) {
        self.set_input("name", &draft.name);
        self.set_input("breed", &draft.breed);
        self.set_input("status", &draft.status);
    }

    pub fn clear_inputs(&mut self) {
        self.inputs.clear();
    }

    /// The node currently accepting new player submissions.
    pub fn form_node(&self) -> Option<NodeId> {
        self.form
            .children()
            .iter()
            .find(|n| n.listener(Control::Submit).is_some())
            .map(|n| n.id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.overlays
            .iter()
            .find(|n| n.id == id)
            .or_else(|| self.players.find(id))
            .or_else(|| self.form.find(id))
    }

    /// Action bound to `control` on a node that is still attached.
    pub fn listener(&self, id: NodeId, control: Control) -> Option<Action> {
        self.node(id)?.listener(control).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listeners_are_dropped_with_their_nodes() {
        let mut document = Document::new();
        let id = document.allocate_node();
        let node = Node::new(id, "player", "<div></div>".to_string())
            .on(Control::Delete, Action::DeletePlayer(PlayerId(3)));
        document.container_mut(ContainerId::Players).append(node);

        assert_eq!(
            document.listener(id, Control::Delete),
            Some(Action::DeletePlayer(PlayerId(3)))
        );
        assert_eq!(document.listener(id, Control::Details), None);

        document.container_mut(ContainerId::Players).clear();
        assert_eq!(document.listener(id, Control::Delete), None);
    }

    #[test]
    fn test_overlays_are_prepended_and_removed_individually() {
        let mut document = Document::new();
        let first = document.allocate_node();
        let second = document.allocate_node();
        document.prepend_overlay(Node::new(first, "player-details", String::new()));
        document.prepend_overlay(Node::new(second, "player-details", String::new()));

        let order: Vec<NodeId> = document.overlays().iter().map(|n| n.id).collect();
        assert_eq!(order, vec![second, first]);

        assert!(document.remove_overlay(second));
        assert!(!document.remove_overlay(second));
        assert_eq!(document.overlays().len(), 1);
        assert_eq!(document.overlays()[0].id, first);
    }

    #[test]
    fn test_control_parsing() {
        assert_eq!("details".parse::<Control>(), Ok(Control::Details));
        assert_eq!("close".parse::<Control>(), Ok(Control::Close));
        assert!("explode".parse::<Control>().is_err());
    }

    #[test]
    fn test_untouched_input_reads_empty() {
        let mut document = Document::new();
        assert_eq!(document.input("name"), "");
        document.set_input("name", " Rex ");
        assert_eq!(document.input("name"), " Rex ");
    }
}
