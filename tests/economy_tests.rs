//! Mana economy, draw-pile cycling, and token conservation tests.

use dice_combat::{
    ActionKind, ActionSlot, CombatConfig, CombatEvent, DieSides, EnemyDefinition, InstanceId,
    PlacementError, PlayerConfig, TargetKind, TokenDefinition, TokenId, TurnController,
};
use dice_combat::session::EventLog;

fn strike(id: u32, cost: u32) -> TokenDefinition {
    TokenDefinition::new(
        TokenId::new(id),
        format!("Strike {id}"),
        DieSides::D6,
        ActionKind::Attack,
        TargetKind::SingleEnemy,
    )
    .with_cost(cost)
}

fn config(deck_size: usize, cost: u32) -> CombatConfig {
    CombatConfig {
        player: PlayerConfig::default(),
        tokens: vec![strike(1, cost)],
        deck: vec![TokenId::new(1); deck_size],
        enemies: vec![EnemyDefinition::new("Goblin", 500, 2, 2)],
        action_slots: 5,
    }
}

fn hand_instances(controller: &TurnController) -> Vec<InstanceId> {
    controller.hand().iter().map(|(_, id)| id).collect()
}

#[test]
fn test_place_and_reclaim_round_trip_mana() {
    let mut controller = TurnController::new(config(10, 2), 7).unwrap();
    let token = hand_instances(&controller)[0];

    assert_eq!(controller.mana().current(), 3);
    controller.request_place(token, ActionSlot::new(1)).unwrap();
    assert_eq!(controller.mana().current(), 1);
    controller.request_reclaim(token).unwrap();
    assert_eq!(controller.mana().current(), 3);
}

#[test]
fn test_failed_placement_does_not_touch_mana() {
    let mut controller = TurnController::new(config(10, 2), 7).unwrap();
    let ids = hand_instances(&controller);

    controller.request_place(ids[0], ActionSlot::new(0)).unwrap();
    assert_eq!(controller.mana().current(), 1);

    // Cost 2 against 1 remaining mana.
    assert_eq!(
        controller.request_place(ids[1], ActionSlot::new(1)),
        Err(PlacementError::InsufficientMana {
            cost: 2,
            available: 1
        })
    );
    assert_eq!(controller.mana().current(), 1);
    assert!(controller.token(ids[1]).unwrap().in_hand());

    // Occupied slot, with mana to spare.
    assert_eq!(
        controller.request_place(ids[1], ActionSlot::new(0)),
        Err(PlacementError::SlotOccupied(ActionSlot::new(0)))
    );
    assert_eq!(controller.mana().current(), 1);
}

#[test]
fn test_reclaim_refund_clamps_at_max() {
    // Free tokens refund nothing; the pool never exceeds its maximum.
    let mut controller = TurnController::new(config(10, 0), 7).unwrap();
    let token = hand_instances(&controller)[0];

    controller.request_place(token, ActionSlot::new(0)).unwrap();
    assert_eq!(controller.mana().current(), 3);
    controller.request_reclaim(token).unwrap();
    assert_eq!(controller.mana().current(), 3);
}

#[test]
fn test_mana_refills_each_turn() {
    let mut controller = TurnController::new(config(10, 1), 7).unwrap();
    let ids = hand_instances(&controller);

    controller.request_place(ids[0], ActionSlot::new(0)).unwrap();
    controller.request_place(ids[1], ActionSlot::new(1)).unwrap();
    assert_eq!(controller.mana().current(), 1);

    controller.submit_turn().unwrap();
    assert_eq!(controller.mana().current(), 3);
}

#[test]
fn test_short_draw_on_small_deck() {
    // Three cards cannot fill a five-slot hand; not an error.
    let controller = TurnController::new(config(3, 1), 7).unwrap();

    assert_eq!(controller.hand().occupied_count(), 3);
    assert_eq!(controller.deck().draw_count(), 0);
}

#[test]
fn test_reshuffle_refills_hand_across_turns() {
    // Six cards, hand of five: the second draw must reshuffle the
    // discard pile to come back up to a full hand.
    let mut controller = TurnController::new(config(6, 1), 7).unwrap();
    assert_eq!(controller.hand().occupied_count(), 5);
    assert_eq!(controller.deck().draw_count(), 1);

    controller.submit_turn().unwrap();

    assert_eq!(controller.hand().occupied_count(), 5);
    let (draw, discard, live) = controller.token_census();
    assert_eq!(draw + discard + live, 6);
    assert_eq!(live, 5);
}

#[test]
fn test_resolution_follows_slot_order_not_placement_order() {
    let log = EventLog::new();
    let mut controller = TurnController::with_observers(
        config(10, 1),
        7,
        vec![Box::new(log.clone())],
    )
    .unwrap();
    let ids = hand_instances(&controller);

    // Place high slot first; resolution must still go low to high.
    controller.request_place(ids[0], ActionSlot::new(3)).unwrap();
    controller.request_place(ids[1], ActionSlot::new(0)).unwrap();
    controller.submit_turn().unwrap();

    let resolved_slots: Vec<ActionSlot> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            CombatEvent::DieResolved { slot, .. } => Some(*slot),
            _ => None,
        })
        .collect();
    assert_eq!(resolved_slots, vec![ActionSlot::new(0), ActionSlot::new(3)]);
}

#[test]
fn test_token_census_constant_over_long_run() {
    let mut controller = TurnController::new(config(8, 1), 7).unwrap();

    for turn in 0..20 {
        let (draw, discard, live) = controller.token_census();
        assert_eq!(draw + discard + live, 8, "pool leaked on turn {turn}");

        if let Some(&token) = hand_instances(&controller).first() {
            controller.request_place(token, ActionSlot::new(0)).unwrap();
        }
        controller.submit_turn().unwrap();
        if controller.phase().is_terminal() {
            break;
        }
    }
}

#[test]
fn test_spent_tokens_return_to_discard() {
    let mut controller = TurnController::new(config(12, 1), 7).unwrap();
    let ids = hand_instances(&controller);

    controller.request_place(ids[0], ActionSlot::new(0)).unwrap();
    controller.request_place(ids[1], ActionSlot::new(1)).unwrap();
    controller.submit_turn().unwrap();

    // 12 total: 5 redrawn into hand, the rest split across the piles with
    // both spent tokens and the cycled hand in the discard.
    let (draw, discard, live) = controller.token_census();
    assert_eq!(live, 5);
    assert_eq!(draw + discard, 7);
    assert_eq!(discard, 5);
}
