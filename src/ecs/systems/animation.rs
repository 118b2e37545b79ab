use hecs::Entity;

use crate::defs::{StateId, FF_FRAMEMASK, FF_FULLBRIGHT};
use crate::ecs::components::{Animation, Presentation, Sprite};
use crate::ecs::systems::behavior;
use crate::sim::Sim;

/// Enter `state` now and run through any zero-duration states after it.
///
/// Each visited state's action runs once, in order, before its link is
/// followed. An action may itself change state; that nested transition
/// wins and this call stops. Reaching `Null` removes the entity.
/// Returns whether the entity is still live afterwards.
pub fn set_state(sim: &mut Sim, entity: Entity, state: StateId) -> bool {
    let Some(previous) = sim.state(entity) else {
        return false;
    };
    if !sim.is_live(entity) {
        return false;
    }

    let mut next = state;
    let mut resolved = false;
    for _ in 0..sim.defs.states.max_hops() {
        if next == StateId::Null {
            sim.write(entity, |a: &mut Animation| {
                a.state = StateId::Null;
                a.tics = -1;
            });
            sim.transitions += 1;
            sim.destroy(entity);
            return false;
        }
        let Some(row) = sim.defs.state(next).copied() else {
            log::warn!("{:?} entered missing state {:?}", entity, next);
            sim.destroy(entity);
            return false;
        };
        sim.write(entity, |a: &mut Animation| {
            a.state = row.id;
            a.tics = row.tics;
        });
        sim.transitions += 1;
        let stamp = sim.transitions;

        behavior::invoke(sim, entity, row.action);
        if !sim.is_live(entity) {
            return false;
        }
        if sim.transitions != stamp {
            // the action transitioned on its own; that call already resolved
            resolved = true;
            break;
        }
        if row.tics != 0 {
            resolved = true;
            break;
        }
        next = row.next;
    }
    if !resolved {
        log::warn!("{:?} exceeded the zero-duration hop limit at {:?}", entity, next);
    }

    if sim.state(entity) != Some(previous) {
        publish_sprite(sim, entity);
    }
    true
}

/// Count down the current state; on expiry follow its link. Frozen
/// (negative) counters and removed entities are left alone.
pub fn tick(sim: &mut Sim, entity: Entity) {
    if !sim.is_live(entity) {
        return;
    }
    let Some(anim) = sim.read::<Animation>(entity) else {
        return;
    };
    if anim.tics < 0 {
        return;
    }
    let tics = anim.tics - 1;
    sim.write(entity, |a: &mut Animation| a.tics = tics);
    if tics <= 0 {
        let next = sim.defs.state(anim.state).map_or(StateId::Null, |s| s.next);
        set_state(sim, entity, next);
    }
}

/// Shorten the first state by a random amount so spawned groups drift apart.
pub fn randomize_tics(sim: &mut Sim, entity: Entity) {
    let Some(anim) = sim.read::<Animation>(entity) else {
        return;
    };
    if anim.tics > 0 {
        let tics = sim.rng.i32(1..=anim.tics);
        sim.write(entity, |a: &mut Animation| a.tics = tics);
    }
}

/// Push the current state's sprite to the presentation cell.
pub fn publish_sprite(sim: &mut Sim, entity: Entity) {
    let Some(state) = sim.state(entity) else {
        return;
    };
    let sprite = match state {
        StateId::Null => None,
        id => sim.defs.state(id).map(|row| Sprite {
            name: row.sprite.name(),
            frame: row.frame & FF_FRAMEMASK,
            fullbright: row.frame & FF_FULLBRIGHT != 0,
        }),
    };
    sim.write(entity, |p: &mut Presentation| {
        p.sprite.set(sprite);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{Action, Defs, MobjKind, SpriteName, State, StateTable};
    use crate::fixtures;

    #[test]
    fn terminal_state_removes_and_later_ticks_are_noops() {
        let mut sim = fixtures::room_sim();
        let puff = sim.spawn_on_floor(MobjKind::Puff, 200.0, 200.0);
        assert!(!set_state(&mut sim, puff, StateId::Null));
        assert!(!sim.is_live(puff));
        for _ in 0..10 {
            tick(&mut sim, puff);
        }
        assert_eq!(sim.state(puff), Some(StateId::Null));
    }

    #[test]
    fn puff_runs_out_and_is_removed() {
        let mut sim = fixtures::room_sim();
        let puff = sim.spawn_on_floor(MobjKind::Puff, 200.0, 200.0);
        for _ in 0..16 {
            assert!(sim.is_live(puff));
            tick(&mut sim, puff);
        }
        assert!(!sim.is_live(puff));
    }

    #[test]
    fn zero_duration_states_resolve_in_one_call() {
        let mut sim = fixtures::room_sim();
        let skel = sim.spawn_on_floor(MobjKind::Undead, 200.0, 200.0);
        // SkelFist1 lasts zero tics and falls through to SkelFist2
        assert!(set_state(&mut sim, skel, StateId::SkelFist1));
        assert_eq!(sim.state(skel), Some(StateId::SkelFist2));
        assert_eq!(sim.read::<Animation>(skel).map(|a| a.tics), Some(6));
    }

    #[test]
    fn frozen_states_never_count_down() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 200.0, 200.0);
        set_state(&mut sim, imp, StateId::TrooDie5);
        for _ in 0..100 {
            tick(&mut sim, imp);
        }
        assert_eq!(sim.state(imp), Some(StateId::TrooDie5));
        assert!(sim.is_live(imp));
    }

    #[test]
    fn sprite_publishes_only_on_state_change() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 200.0, 200.0);
        let version = |sim: &Sim| {
            sim.world
                .get::<&Presentation>(imp)
                .map(|p| p.sprite.version())
                .unwrap_or_default()
        };
        let start = version(&sim);
        set_state(&mut sim, imp, StateId::TrooDie5);
        assert_eq!(version(&sim), start + 1);
        set_state(&mut sim, imp, StateId::TrooDie5);
        assert_eq!(version(&sim), start + 1);

        let p = sim.world.get::<&Presentation>(imp).unwrap();
        let sprite = p.sprite.get().clone().unwrap();
        assert_eq!(sprite.name, "TROO");
        assert_eq!(sprite.frame, 12);
        assert!(!sprite.fullbright);
    }

    #[test]
    fn fullbright_bit_is_split_from_frame() {
        let mut sim = fixtures::room_sim();
        let ball = sim.spawn_on_floor(MobjKind::TroopShot, 200.0, 200.0);
        let p = sim.world.get::<&Presentation>(ball).unwrap();
        let sprite = p.sprite.get().clone().unwrap();
        assert_eq!(sprite.frame, 0);
        assert!(sprite.fullbright);
    }

    #[test]
    fn randomized_tics_stay_in_range() {
        let mut sim = fixtures::room_sim();
        for _ in 0..50 {
            let imp = sim.spawn_on_floor(MobjKind::Troop, 200.0, 200.0);
            randomize_tics(&mut sim, imp);
            let tics = sim.read::<Animation>(imp).map(|a| a.tics).unwrap();
            assert!((1..=10).contains(&tics));
        }
    }

    #[test]
    fn re_entrant_transition_wins() {
        // a zero-duration Look state: Look spots the player and jumps to the
        // see state, so the link to the death pose is never followed
        let mut rows: Vec<State> = crate::defs::states::STATES.to_vec();
        rows[StateId::TrooStnd as usize] = State {
            id: StateId::TrooStnd,
            sprite: SpriteName::Troo,
            frame: 0,
            tics: 0,
            action: Action::Look,
            next: StateId::TrooDie5,
        };
        let defs = Defs::new(
            StateTable::new(rows).unwrap(),
            crate::defs::info::MOBJ_INFO.to_vec(),
        )
        .unwrap();
        let mut sim = fixtures::room_sim_with(defs);
        let _player = sim.spawn_on_floor(MobjKind::Player, 500.0, 200.0);
        let imp = sim.spawn_on_floor(MobjKind::Troop, 200.0, 200.0);
        assert!(set_state(&mut sim, imp, StateId::TrooStnd));
        assert_eq!(sim.state(imp), Some(StateId::TrooRun1));
    }
}
