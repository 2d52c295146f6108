//! The turn controller: one combat run from setup to a terminal phase.
//!
//! ## Turn cycle
//!
//! Construction validates the config, builds every zone, spawns the first
//! enemy, and immediately starts the first player turn. During a player
//! turn the caller issues placement and reclaim requests, then calls
//! `submit_turn`, which resolves the board slot-by-slot, runs the enemy's
//! telegraphed intent, and either ends combat or starts the next player
//! turn. Everything happens synchronously inside `submit_turn`; the
//! controller is back in a resting phase when it returns.
//!
//! ## Phases
//!
//! `Phase` names the resting states only. The transient work inside a
//! submission (action resolution, the enemy turn) is visible through the
//! emitted `CombatEvent` stream rather than through phase polling.
//!
//! ## Termination
//!
//! After the enemy turn the controller checks, in priority order: player
//! defeated, current enemy defeated, otherwise continue. A player who
//! reaches zero health loses even if the same turn also killed the last
//! enemy.

use crate::combat::{resolve_token, Combatant, Enemy, EnemyDefinition, IntentEffect, ManaPool, ResolveOutcome};
use crate::core::{
    ActionSlot, CombatConfig, CombatRng, InstanceId, PlacementError, SetupError, SubmitError,
};
use crate::tokens::{Placement, TokenArena, TokenInstance, TokenRegistry};
use crate::zones::{ActionBoard, Deck, Hand};

use super::events::{CombatEvent, CombatObserver, EventBus, ObserverId, Side};

/// Resting state of the combat state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Waiting for placement requests and a submission.
    PlayerTurn,
    /// A submission is resolving placed tokens. Never observed between
    /// calls; exposed for event consumers that poll mid-callback.
    ActionResolution,
    /// The enemy is executing its intent. Also never observed between
    /// calls.
    EnemyTurn,
    /// The player reached zero health. Terminal.
    PlayerDefeated,
    /// Every enemy in the roster is defeated. Terminal.
    Victory,
}

impl Phase {
    /// Check if combat is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::PlayerDefeated | Phase::Victory)
    }
}

/// Owns all combat state and drives the turn cycle.
pub struct TurnController {
    registry: TokenRegistry,
    deck: Deck,
    hand: Hand,
    board: ActionBoard,
    arena: TokenArena,

    player: Combatant,
    mana: ManaPool,
    hand_size: usize,

    roster: Vec<EnemyDefinition>,
    enemy_index: usize,
    enemy: Option<Enemy>,

    rng: CombatRng,
    bus: EventBus,

    phase: Phase,
    turn_number: u32,
    resolving: bool,
}

impl TurnController {
    /// Set up combat and start the first player turn.
    ///
    /// The same config and seed always produce the same shuffle, rolls,
    /// and intents.
    pub fn new(config: CombatConfig, seed: u64) -> Result<Self, SetupError> {
        Self::with_observers(config, seed, Vec::new())
    }

    /// Like `new`, but with observers subscribed before setup so they see
    /// the setup and first-turn events.
    pub fn with_observers(
        config: CombatConfig,
        seed: u64,
        observers: Vec<Box<dyn CombatObserver>>,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        let mut bus = EventBus::new();
        for observer in observers {
            bus.register(observer);
        }

        let mut rng = CombatRng::new(seed);
        let registry = config.build_registry();
        let deck = Deck::new(config.deck, &mut rng);
        let hand = Hand::new(config.player.hand_size);
        let board = ActionBoard::new(config.action_slots);

        let first = Enemy::spawn(config.enemies[0].clone());
        log::info!(
            "combat setup: seed {seed}, {} cards, {} enemies, first enemy `{}`",
            deck.total(),
            config.enemies.len(),
            first.definition().name
        );

        let mut controller = Self {
            registry,
            deck,
            hand,
            board,
            arena: TokenArena::new(),
            player: Combatant::new("Player", config.player.max_health),
            mana: ManaPool::new(config.player.max_mana),
            hand_size: config.player.hand_size,
            roster: config.enemies,
            enemy_index: 0,
            enemy: Some(first),
            rng,
            bus,
            phase: Phase::PlayerTurn,
            turn_number: 0,
            resolving: false,
        };

        controller.bus.emit(&CombatEvent::SetupComplete);
        controller.begin_player_turn();
        Ok(controller)
    }

    /// Set up with a seed drawn from OS entropy.
    pub fn from_entropy(config: CombatConfig) -> Result<Self, SetupError> {
        let rng = CombatRng::from_entropy();
        Self::new(config, rng.seed())
    }

    // --- observers ---

    /// Subscribe an observer to the event stream.
    pub fn register_observer(&mut self, observer: Box<dyn CombatObserver>) -> ObserverId {
        self.bus.register(observer)
    }

    /// Unsubscribe an observer. Returns false if the handle was unknown.
    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        self.bus.unregister(id)
    }

    // --- input requests ---

    /// Move a token onto a board slot.
    ///
    /// From the hand the move pays the token's mana cost; the spend and
    /// the placement succeed or fail together. From another board slot
    /// the move is free. Rejections leave every zone and the mana pool
    /// untouched.
    pub fn request_place(
        &mut self,
        instance: InstanceId,
        slot: ActionSlot,
    ) -> Result<(), PlacementError> {
        if self.phase != Phase::PlayerTurn || self.resolving {
            return Err(PlacementError::NotPlayerTurn);
        }
        if !self.board.has_slot(slot) {
            return Err(PlacementError::NoSuchSlot(slot));
        }
        if self.board.is_occupied(slot) {
            return Err(PlacementError::SlotOccupied(slot));
        }
        let Some(inst) = self.arena.get(instance) else {
            return Err(PlacementError::UnknownInstance(instance));
        };

        match inst.placement {
            Placement::Hand(_) => {
                let cost = self
                    .registry
                    .get(inst.token)
                    .map_or(0, crate::tokens::TokenDefinition::cost);
                if !self.mana.spend(cost) {
                    return Err(PlacementError::InsufficientMana {
                        cost,
                        available: self.mana.current(),
                    });
                }
                self.hand.remove(instance);
                self.board.place(slot, instance);
                if let Some(inst) = self.arena.get_mut(instance) {
                    inst.placement = Placement::Board(slot);
                }
                self.bus.emit(&CombatEvent::ManaChanged {
                    mana: self.mana.current(),
                    max_mana: self.mana.max(),
                });
                Ok(())
            }
            Placement::Board(_) => {
                self.board.remove(instance);
                self.board.place(slot, instance);
                if let Some(inst) = self.arena.get_mut(instance) {
                    inst.placement = Placement::Board(slot);
                }
                Ok(())
            }
            Placement::Loose => Err(PlacementError::UnknownInstance(instance)),
        }
    }

    /// Return a board token to the hand, refunding its mana cost.
    ///
    /// Fails with `HandFull` when no hand slot is free; the token stays
    /// on the board and no mana moves.
    pub fn request_reclaim(&mut self, instance: InstanceId) -> Result<(), PlacementError> {
        if self.phase != Phase::PlayerTurn || self.resolving {
            return Err(PlacementError::NotPlayerTurn);
        }
        let Some(inst) = self.arena.get(instance) else {
            return Err(PlacementError::UnknownInstance(instance));
        };
        if !inst.on_board() {
            return Err(PlacementError::NotOnBoard(instance));
        }
        let Some(slot) = self.hand.first_free_slot() else {
            return Err(PlacementError::HandFull);
        };

        let cost = self
            .registry
            .get(inst.token)
            .map_or(0, crate::tokens::TokenDefinition::cost);

        self.board.remove(instance);
        self.hand.place(slot, instance);
        if let Some(inst) = self.arena.get_mut(instance) {
            inst.placement = Placement::Hand(slot);
        }
        self.mana.gain(cost);
        self.bus.emit(&CombatEvent::ManaChanged {
            mana: self.mana.current(),
            max_mana: self.mana.max(),
        });
        Ok(())
    }

    /// End the player's turn: resolve the board, run the enemy, and move
    /// to the next resting phase.
    ///
    /// Placed tokens resolve in ascending slot order and are discarded
    /// afterwards whether they resolved or were skipped. Tokens still in
    /// the hand are untouched here; they cycle at the next turn start.
    pub fn submit_turn(&mut self) -> Result<(), SubmitError> {
        if self.resolving {
            log::warn!("submit_turn called while a turn is already resolving");
            return Err(SubmitError::AlreadyResolving);
        }
        if self.phase != Phase::PlayerTurn {
            log::warn!("submit_turn rejected in phase {:?}", self.phase);
            return Err(SubmitError::NotPlayerTurn);
        }

        self.resolving = true;
        self.phase = Phase::ActionResolution;
        self.bus.emit(&CombatEvent::ActionPhaseStart);

        self.resolve_board();
        self.bus.emit(&CombatEvent::ActionPhaseEnd);

        self.phase = Phase::EnemyTurn;
        self.bus.emit(&CombatEvent::EnemyTurnStart);
        self.run_enemy_turn();
        self.bus.emit(&CombatEvent::EnemyTurnEnd);

        self.finish_turn();
        self.resolving = false;
        Ok(())
    }

    // --- turn internals ---

    fn begin_player_turn(&mut self) {
        self.turn_number += 1;

        self.player.clear_block();
        self.bus.emit(&CombatEvent::BlockChanged {
            side: Side::Player,
            block: 0,
        });

        self.mana.refill();
        self.bus.emit(&CombatEvent::ManaChanged {
            mana: self.mana.current(),
            max_mana: self.mana.max(),
        });

        if let Some(enemy) = self.enemy.as_mut() {
            let intent = enemy.prepare_intent(&mut self.rng);
            self.bus.emit(&CombatEvent::IntentChanged { intent });
        }

        self.hand.draw_new_hand(
            self.hand_size,
            &mut self.deck,
            &mut self.arena,
            &self.registry,
            &mut self.rng,
        );

        self.phase = Phase::PlayerTurn;
        self.bus.emit(&CombatEvent::PlayerTurnStart {
            turn: self.turn_number,
        });
        log::debug!("player turn {} started", self.turn_number);
    }

    /// Resolve every placed token in slot order, then discard them all.
    fn resolve_board(&mut self) {
        let placed = self.board.occupied_in_order();

        for &(slot, instance) in &placed {
            let Some(inst) = self.arena.get(instance) else {
                log::warn!("board slot {slot} held unknown instance {instance}");
                continue;
            };
            let (token, roll) = (inst.token, inst.roll);
            let Some(def) = self.registry.get(token) else {
                log::warn!("no definition for placed token {token}");
                continue;
            };
            let Some(enemy) = self.enemy.as_mut() else {
                break;
            };

            let outcome = resolve_token(def, roll, &mut self.player, enemy.combatant_mut());
            let enemy_health = enemy.combatant().health();
            let enemy_max = enemy.combatant().max_health();
            let enemy_block = enemy.combatant().block();

            match outcome {
                ResolveOutcome::Attack(damage) => {
                    self.bus.emit(&CombatEvent::DieResolved {
                        token,
                        action: def.action,
                        roll,
                        slot,
                    });
                    if damage.absorbed > 0 {
                        self.bus.emit(&CombatEvent::BlockChanged {
                            side: Side::Enemy,
                            block: enemy_block,
                        });
                    }
                    self.bus.emit(&CombatEvent::HealthChanged {
                        side: Side::Enemy,
                        health: enemy_health,
                        max_health: enemy_max,
                    });
                }
                ResolveOutcome::Block { total, .. } => {
                    self.bus.emit(&CombatEvent::DieResolved {
                        token,
                        action: def.action,
                        roll,
                        slot,
                    });
                    self.bus.emit(&CombatEvent::BlockChanged {
                        side: Side::Player,
                        block: total,
                    });
                }
                ResolveOutcome::Heal { health, .. } => {
                    self.bus.emit(&CombatEvent::DieResolved {
                        token,
                        action: def.action,
                        roll,
                        slot,
                    });
                    self.bus.emit(&CombatEvent::HealthChanged {
                        side: Side::Player,
                        health,
                        max_health: self.player.max_health(),
                    });
                }
                ResolveOutcome::Skipped { action, target } => {
                    log::warn!("token {token} skipped: unhandled {action:?}/{target:?}");
                    self.bus.emit(&CombatEvent::DieSkipped { token, slot });
                }
            }
        }

        // All placed tokens are spent this turn, resolved or not.
        for &(_, instance) in &placed {
            self.board.remove(instance);
            if let Some(inst) = self.arena.remove(instance) {
                self.deck.discard(inst.token);
            }
        }
    }

    /// Execute the telegraphed intent, if the enemy is still standing.
    fn run_enemy_turn(&mut self) {
        let Some(enemy) = self.enemy.as_mut() else {
            return;
        };
        if enemy.combatant().is_defeated() {
            log::debug!("enemy `{}` is down, intent dropped", enemy.definition().name);
            return;
        }

        enemy.combatant_mut().clear_block();
        self.bus.emit(&CombatEvent::BlockChanged {
            side: Side::Enemy,
            block: 0,
        });

        let Some(executed) = enemy.execute_intent(&mut self.player) else {
            return;
        };
        let enemy_block = enemy.combatant().block();

        self.bus.emit(&CombatEvent::EnemyActionResolved {
            intent: executed.intent,
        });
        match executed.effect {
            IntentEffect::Damage(damage) => {
                if damage.absorbed > 0 {
                    self.bus.emit(&CombatEvent::BlockChanged {
                        side: Side::Player,
                        block: self.player.block(),
                    });
                }
                self.bus.emit(&CombatEvent::HealthChanged {
                    side: Side::Player,
                    health: self.player.health(),
                    max_health: self.player.max_health(),
                });
            }
            IntentEffect::Block { .. } => {
                self.bus.emit(&CombatEvent::BlockChanged {
                    side: Side::Enemy,
                    block: enemy_block,
                });
            }
        }
    }

    /// Pick the next resting phase: defeat, victory, enemy handoff, or
    /// the next player turn. Player defeat wins every tie.
    fn finish_turn(&mut self) {
        if self.player.is_defeated() {
            log::info!("player defeated on turn {}", self.turn_number);
            self.phase = Phase::PlayerDefeated;
            self.bus.emit(&CombatEvent::PlayerDefeated);
            return;
        }

        let enemy_down = self
            .enemy
            .as_ref()
            .is_some_and(|e| e.combatant().is_defeated());
        if enemy_down {
            self.bus.emit(&CombatEvent::EnemyDefeated {
                index: self.enemy_index,
            });
            self.enemy_index += 1;

            if let Some(definition) = self.roster.get(self.enemy_index).cloned() {
                log::info!("next enemy: `{}`", definition.name);
                let next = Enemy::spawn(definition);
                self.bus.emit(&CombatEvent::HealthChanged {
                    side: Side::Enemy,
                    health: next.combatant().health(),
                    max_health: next.combatant().max_health(),
                });
                self.enemy = Some(next);
            } else {
                log::info!("all enemies defeated on turn {}", self.turn_number);
                self.enemy = None;
                self.phase = Phase::Victory;
                self.bus.emit(&CombatEvent::AllEnemiesDefeated);
                return;
            }
        }

        self.begin_player_turn();
    }

    // --- accessors ---

    /// Current resting phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player turns started so far, 1-based.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Player health and block.
    #[must_use]
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    /// Player mana.
    #[must_use]
    pub fn mana(&self) -> &ManaPool {
        &self.mana
    }

    /// The enemy being fought, if combat is still running.
    #[must_use]
    pub fn current_enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    /// Enemies not yet defeated, counting the current one.
    #[must_use]
    pub fn enemies_remaining(&self) -> usize {
        self.roster.len() - self.enemy_index
    }

    /// The hand zone.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The placement board.
    #[must_use]
    pub fn board(&self) -> &ActionBoard {
        &self.board
    }

    /// The deck (draw and discard piles).
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// A live token by instance id.
    #[must_use]
    pub fn token(&self, instance: InstanceId) -> Option<&TokenInstance> {
        self.arena.get(instance)
    }

    /// The definition registry.
    #[must_use]
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    /// Token counts as `(draw pile, discard pile, live instances)`.
    ///
    /// The sum is constant for the whole run; nothing enters or leaves
    /// the card pool after setup.
    #[must_use]
    pub fn token_census(&self) -> (usize, usize, usize) {
        (self.deck.draw_count(), self.deck.discard_count(), self.arena.len())
    }
}

impl std::fmt::Debug for TurnController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("phase", &self.phase)
            .field("turn_number", &self.turn_number)
            .field("player", &self.player)
            .field("enemy_index", &self.enemy_index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerConfig, TokenId};
    use crate::tokens::{ActionKind, DieSides, TargetKind, TokenDefinition};

    fn attack_token(id: u32, cost: u32) -> TokenDefinition {
        TokenDefinition::new(
            TokenId::new(id),
            format!("Strike {id}"),
            DieSides::D6,
            ActionKind::Attack,
            TargetKind::SingleEnemy,
        )
        .with_cost(cost)
    }

    fn config() -> CombatConfig {
        CombatConfig {
            player: PlayerConfig::default(),
            tokens: vec![attack_token(1, 1)],
            deck: vec![TokenId::new(1); 10],
            enemies: vec![crate::combat::EnemyDefinition::new("Goblin", 30, 4, 4)],
            action_slots: 5,
        }
    }

    fn hand_instances(controller: &TurnController) -> Vec<InstanceId> {
        controller.hand().iter().map(|(_, id)| id).collect()
    }

    #[test]
    fn test_setup_starts_first_turn() {
        let controller = TurnController::new(config(), 7).unwrap();

        assert_eq!(controller.phase(), Phase::PlayerTurn);
        assert_eq!(controller.turn_number(), 1);
        assert_eq!(controller.hand().occupied_count(), 5);
        assert_eq!(controller.mana().current(), 3);
        assert!(controller.current_enemy().unwrap().intent().is_some());
    }

    #[test]
    fn test_invalid_config_refused() {
        let mut bad = config();
        bad.enemies.clear();
        assert_eq!(
            TurnController::new(bad, 7).unwrap_err(),
            SetupError::EmptyEnemyRoster
        );
    }

    #[test]
    fn test_same_seed_same_hand() {
        let a = TurnController::new(config(), 99).unwrap();
        let b = TurnController::new(config(), 99).unwrap();

        let rolls_a: Vec<i32> = a.hand().iter().map(|(_, id)| a.token(id).unwrap().roll).collect();
        let rolls_b: Vec<i32> = b.hand().iter().map(|(_, id)| b.token(id).unwrap().roll).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_place_pays_mana_and_moves_token() {
        let mut controller = TurnController::new(config(), 7).unwrap();
        let instance = hand_instances(&controller)[0];

        controller.request_place(instance, ActionSlot::new(2)).unwrap();

        assert_eq!(controller.mana().current(), 2);
        assert_eq!(controller.board().get(ActionSlot::new(2)), Some(instance));
        assert!(controller.hand().slot_of(instance).is_none());
        assert!(controller.token(instance).unwrap().on_board());
    }

    #[test]
    fn test_place_rejections_leave_state_untouched() {
        let mut controller = TurnController::new(config(), 7).unwrap();
        let ids = hand_instances(&controller);

        // Occupied slot
        controller.request_place(ids[0], ActionSlot::new(0)).unwrap();
        assert_eq!(
            controller.request_place(ids[1], ActionSlot::new(0)),
            Err(PlacementError::SlotOccupied(ActionSlot::new(0)))
        );
        assert_eq!(controller.mana().current(), 2);
        assert!(controller.token(ids[1]).unwrap().in_hand());

        // Nonexistent slot
        assert_eq!(
            controller.request_place(ids[1], ActionSlot::new(9)),
            Err(PlacementError::NoSuchSlot(ActionSlot::new(9)))
        );

        // Unknown instance
        assert_eq!(
            controller.request_place(InstanceId::new(999), ActionSlot::new(1)),
            Err(PlacementError::UnknownInstance(InstanceId::new(999)))
        );
    }

    #[test]
    fn test_insufficient_mana_rejected_atomically() {
        let mut controller = TurnController::new(config(), 7).unwrap();
        let ids = hand_instances(&controller);

        controller.request_place(ids[0], ActionSlot::new(0)).unwrap();
        controller.request_place(ids[1], ActionSlot::new(1)).unwrap();
        controller.request_place(ids[2], ActionSlot::new(2)).unwrap();
        assert_eq!(controller.mana().current(), 0);

        assert_eq!(
            controller.request_place(ids[3], ActionSlot::new(3)),
            Err(PlacementError::InsufficientMana { cost: 1, available: 0 })
        );
        assert!(controller.token(ids[3]).unwrap().in_hand());
        assert_eq!(controller.board().occupied_count(), 3);
    }

    #[test]
    fn test_board_to_board_move_is_free() {
        let mut controller = TurnController::new(config(), 7).unwrap();
        let instance = hand_instances(&controller)[0];

        controller.request_place(instance, ActionSlot::new(0)).unwrap();
        controller.request_place(instance, ActionSlot::new(4)).unwrap();

        assert_eq!(controller.mana().current(), 2);
        assert!(!controller.board().is_occupied(ActionSlot::new(0)));
        assert_eq!(controller.board().get(ActionSlot::new(4)), Some(instance));
    }

    #[test]
    fn test_reclaim_refunds_mana() {
        let mut controller = TurnController::new(config(), 7).unwrap();
        let instance = hand_instances(&controller)[0];

        controller.request_place(instance, ActionSlot::new(0)).unwrap();
        assert_eq!(controller.mana().current(), 2);

        controller.request_reclaim(instance).unwrap();
        assert_eq!(controller.mana().current(), 3);
        assert!(controller.token(instance).unwrap().in_hand());
        assert_eq!(controller.board().occupied_count(), 0);
    }

    #[test]
    fn test_reclaim_requires_board() {
        let mut controller = TurnController::new(config(), 7).unwrap();
        let instance = hand_instances(&controller)[0];

        assert_eq!(
            controller.request_reclaim(instance),
            Err(PlacementError::NotOnBoard(instance))
        );
    }

    #[test]
    fn test_submit_resolves_and_discards_board() {
        let mut controller = TurnController::new(config(), 7).unwrap();
        let instance = hand_instances(&controller)[0];
        let roll = controller.token(instance).unwrap().roll;

        controller.request_place(instance, ActionSlot::new(0)).unwrap();
        controller.submit_turn().unwrap();

        assert_eq!(controller.phase(), Phase::PlayerTurn);
        assert_eq!(controller.turn_number(), 2);
        assert_eq!(
            controller.current_enemy().unwrap().combatant().health(),
            30 - roll
        );
        // Spent token left the arena; the fresh hand is full again.
        assert!(controller.token(instance).is_none());
        assert_eq!(controller.board().occupied_count(), 0);
        assert_eq!(controller.hand().occupied_count(), 5);
    }

    #[test]
    fn test_enemy_attack_lands_each_turn() {
        let mut controller = TurnController::new(config(), 7).unwrap();

        controller.submit_turn().unwrap();

        // Fixed 4..=4 attack range, no block in play.
        assert_eq!(controller.player().health(), 96);
    }

    #[test]
    fn test_submit_rejected_when_not_player_turn() {
        let mut controller = TurnController::new(config(), 7).unwrap();
        controller.phase = Phase::Victory;

        assert_eq!(controller.submit_turn(), Err(SubmitError::NotPlayerTurn));
    }

    #[test]
    fn test_token_census_constant() {
        let mut controller = TurnController::new(config(), 7).unwrap();
        let total = |t: (usize, usize, usize)| t.0 + t.1 + t.2;
        assert_eq!(total(controller.token_census()), 10);

        let instance = hand_instances(&controller)[0];
        controller.request_place(instance, ActionSlot::new(0)).unwrap();
        for _ in 0..4 {
            controller.submit_turn().unwrap();
            assert_eq!(total(controller.token_census()), 10);
        }
    }
}
