use askama::Template;

use puppybowl_types::player::Player;

use crate::dom::{ContainerId, Document, Node, NodeId};

/// One roster card with its Details and Delete controls.
#[derive(Debug, Template)]
#[template(path = "player_card.html")]
pub struct PlayerCardTemplate<'a> {
    pub node_id: NodeId,
    pub player: &'a Player,
}

/// Detail overlay for a single player.
#[derive(Debug, Template)]
#[template(path = "player_details.html")]
pub struct PlayerDetailsTemplate<'a> {
    pub node_id: NodeId,
    pub player: &'a Player,
}

#[derive(Debug, Template)]
#[template(path = "new_player_form.html")]
pub struct NewPlayerFormTemplate {
    pub node_id: NodeId,
}

/// The whole page, wrapping the already rendered nodes.
#[derive(Debug, Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub overlays: &'a [Node],
    pub players: &'a [Node],
    pub form: &'a [Node],
    pub players_container: &'static str,
    pub form_container: &'static str,
}

impl<'a> PageTemplate<'a> {
    pub fn new(document: &'a Document) -> Self {
        let players = document.container(ContainerId::Players);
        let form = document.container(ContainerId::NewPlayerForm);
        Self {
            overlays: document.overlays(),
            players: players.children(),
            form: form.children(),
            players_container: ContainerId::Players.element_id(),
            form_container: ContainerId::NewPlayerForm.element_id(),
        }
    }
}
