//! Turns roster data into document nodes.
//!
//! Every function here replaces or inserts whole nodes: a roster render wipes
//! the list container before appending fresh cards.

use askama::Template;

use puppybowl_types::{
    Result,
    envelope::RosterEnvelope,
    errors::{ApplicationError, RenderError},
    player::Player,
};

use crate::{
    dom::{Action, ContainerId, Control, Document, Node, NodeId},
    templates::{NewPlayerFormTemplate, PageTemplate, PlayerCardTemplate, PlayerDetailsTemplate},
};

/// Replaces the list container with one card per player.
///
/// The container is cleared even when the envelope carries no roster, so a
/// failed fetch leaves it empty. Returns the number of cards rendered.
pub fn render_roster(document: &mut Document, roster: Option<&RosterEnvelope>) -> Result<usize> {
    document.container_mut(ContainerId::Players).clear();

    let players = roster
        .and_then(|envelope| envelope.data.as_ref())
        .map(|data| &data.players)
        .ok_or(RenderError::MissingRoster)?;

    for player in players {
        let node = player_card(document.allocate_node(), player)?;
        document.container_mut(ContainerId::Players).append(node);
    }

    Ok(players.len())
}

fn player_card(id: NodeId, player: &Player) -> Result<Node> {
    let markup = PlayerCardTemplate {
        node_id: id,
        player,
    }
    .render()
    .map_err(template_error)?;

    Ok(Node::new(id, "player", markup)
        .on(Control::Details, Action::ShowDetails(player.id))
        .on(Control::Delete, Action::DeletePlayer(player.id)))
}

/// Puts a detail overlay for `player` in front of any existing ones.
pub fn prepend_player_details(document: &mut Document, player: &Player) -> Result<NodeId> {
    let id = document.allocate_node();
    let markup = PlayerDetailsTemplate {
        node_id: id,
        player,
    }
    .render()
    .map_err(template_error)?;

    document.prepend_overlay(
        Node::new(id, "player-details", markup).on(Control::Close, Action::CloseOverlay(id)),
    );
    Ok(id)
}

/// Replaces the form container with an empty creation form.
pub fn render_creation_form(document: &mut Document) -> Result<NodeId> {
    document.container_mut(ContainerId::NewPlayerForm).clear();
    document.clear_inputs();

    let id = document.allocate_node();
    let markup = NewPlayerFormTemplate { node_id: id }
        .render()
        .map_err(template_error)?;

    document.container_mut(ContainerId::NewPlayerForm).append(
        Node::new(id, "new-player-form", markup).on(Control::Submit, Action::SubmitNewPlayer),
    );
    Ok(id)
}

pub fn render_page(document: &Document) -> Result<String> {
    PageTemplate::new(document).render().map_err(template_error)
}

fn template_error(e: askama::Error) -> ApplicationError {
    RenderError::Template(e.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use puppybowl_app::test_utils::tests::{PlayerFactoryOptions, player_factory};
    use puppybowl_types::envelope::{ApiResponse, RosterData};

    fn roster(players: Vec<Player>) -> RosterEnvelope {
        ApiResponse::ok(RosterData { players })
    }

    #[test]
    fn test_render_empty_roster() {
        let mut document = Document::new();
        let rendered = render_roster(&mut document, Some(&roster(vec![]))).unwrap();

        assert_eq!(rendered, 0);
        assert!(document.container(ContainerId::Players).is_empty());
    }

    #[test]
    fn test_render_roster_builds_one_card_per_player() {
        let mut document = Document::new();
        let players = vec![
            player_factory(PlayerFactoryOptions::default()),
            player_factory(PlayerFactoryOptions {
                id: 2,
                name: "Fido",
                breed: "Pug",
                status: "field",
                team_id: Some(7),
            }),
            player_factory(PlayerFactoryOptions {
                id: 3,
                name: "Luna",
                ..Default::default()
            }),
        ];

        render_roster(&mut document, Some(&roster(players.clone()))).unwrap();

        let cards = document.container(ContainerId::Players).children();
        assert_eq!(cards.len(), 3);
        for (card, player) in cards.iter().zip(&players) {
            assert_eq!(card.class, "player");
            assert!(card.markup.contains(&format!("<h2>{}</h2>", player.name)));
            assert!(card.markup.contains(&format!("<p>{}</p>", player.breed)));
            assert!(card.markup.contains(&format!("<p>{}</p>", player.status)));
            assert!(card.markup.contains(&format!("<p>{}</p>", player.team_label())));
            assert!(card.markup.contains(&format!("images.example/{}.jpg", player.id)));
            assert_eq!(
                card.listener(Control::Details),
                Some(&Action::ShowDetails(player.id))
            );
            assert_eq!(
                card.listener(Control::Delete),
                Some(&Action::DeletePlayer(player.id))
            );
        }
        assert!(cards[0].markup.contains("<p>null</p>"));
        assert!(cards[1].markup.contains("<p>7</p>"));
    }

    #[test]
    fn test_render_roster_replaces_previous_cards() {
        let mut document = Document::new();
        let first = roster(vec![
            player_factory(PlayerFactoryOptions::default()),
            player_factory(PlayerFactoryOptions {
                id: 2,
                ..Default::default()
            }),
        ]);
        render_roster(&mut document, Some(&first)).unwrap();
        let stale = document.container(ContainerId::Players).children()[0].id;

        render_roster(&mut document, Some(&roster(vec![]))).unwrap();

        assert!(document.container(ContainerId::Players).is_empty());
        assert_eq!(document.listener(stale, Control::Delete), None);
    }

    #[test]
    fn test_missing_roster_clears_container() {
        let mut document = Document::new();
        let first = roster(vec![player_factory(PlayerFactoryOptions::default())]);
        render_roster(&mut document, Some(&first)).unwrap();

        let result = render_roster(&mut document, None);
        assert!(matches!(
            result,
            Err(ApplicationError::Render(RenderError::MissingRoster))
        ));
        assert!(document.container(ContainerId::Players).is_empty());

        let error_shape: RosterEnvelope = ApiResponse::failed("NotFoundError", "gone");
        assert!(render_roster(&mut document, Some(&error_shape)).is_err());
    }

    #[test]
    fn test_player_fields_are_escaped() {
        let mut document = Document::new();
        let sneaky = player_factory(PlayerFactoryOptions {
            name: "<script>alert(1)</script>",
            ..Default::default()
        });
        render_roster(&mut document, Some(&roster(vec![sneaky]))).unwrap();

        let card = &document.container(ContainerId::Players).children()[0];
        assert!(!card.markup.contains("<script>"));
    }

    #[test]
    fn test_creation_form_resets_inputs() {
        let mut document = Document::new();
        document.set_input("name", "leftover");

        let id = render_creation_form(&mut document).unwrap();

        assert_eq!(document.input("name"), "");
        assert_eq!(document.form_node(), Some(id));
        let form = &document.container(ContainerId::NewPlayerForm).children()[0];
        assert!(form.markup.contains("Add New Player"));
        assert!(form.markup.contains(r#"name="breed""#));
        assert_eq!(document.container(ContainerId::NewPlayerForm).len(), 1);
    }

    #[test]
    fn test_render_page_contains_both_containers() {
        let mut document = Document::new();
        render_roster(
            &mut document,
            Some(&roster(vec![player_factory(PlayerFactoryOptions::default())])),
        )
        .unwrap();
        render_creation_form(&mut document).unwrap();

        let html = render_page(&document).unwrap();
        assert!(html.contains(r#"id="all-players-container""#));
        assert!(html.contains(r#"id="new-player-form""#));
        assert!(html.contains("<h2>Rex</h2>"));
        assert!(html.contains(r#"action="/forms/new-player""#));
    }
}
