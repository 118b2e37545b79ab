pub mod animation;
pub mod behavior;
pub mod combat;
pub mod movement;

use hecs::Entity;

use crate::defs::MobjKind;
use crate::ecs::components::{Facing, Position, Presentation, Removed};
use crate::sim::Sim;

/// One entity's share of a tick: state countdown and any action it fires,
/// then momentum. The player's momentum comes from input evaluation.
pub fn tick_entity(sim: &mut Sim, entity: Entity) {
    if !sim.is_live(entity) {
        return;
    }
    animation::tick(sim, entity);
    if !sim.is_live(entity) || sim.kind(entity) == Some(MobjKind::Player) {
        return;
    }
    movement::xy_movement(sim, entity);
    if sim.is_live(entity) {
        movement::z_movement(sim, entity);
    }
}

/// Tick every entity alive at the start of the tick, in id order.
/// Entities spawned during the pass first act next tick.
pub fn tick_all(sim: &mut Sim) {
    let mut live: Vec<Entity> = sim
        .world
        .query::<()>()
        .without::<&Removed>()
        .iter()
        .map(|(e, _)| e)
        .collect();
    live.sort_by_key(|e| e.id());
    for entity in live {
        tick_entity(sim, entity);
    }
}

/// Copy the tick's results into the cells the presentation side reads.
pub fn publish(world: &mut hecs::World) {
    for (_, (pos, facing, out)) in world
        .query_mut::<(&Position, &Facing, &mut Presentation)>()
        .without::<&Removed>()
    {
        out.position.set(pos.0);
        out.facing.set(facing.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    use crate::ecs::components::Velocity;
    use crate::fixtures;

    #[test]
    fn player_momentum_is_left_to_input() {
        let mut sim = fixtures::room_sim();
        let player = sim.spawn_on_floor(MobjKind::Player, 300.0, 300.0);
        let imp = sim.spawn_on_floor(MobjKind::Troop, 600.0, 600.0);
        for e in [player, imp] {
            sim.write(e, |v: &mut Velocity| v.0 = Vec3::new(4.0, 0.0, 0.0));
        }
        tick_all(&mut sim);
        assert_eq!(sim.pos(player).map(|p| p.x), Some(300.0));
        assert_eq!(sim.pos(imp).map(|p| p.x), Some(604.0));
    }

    #[test]
    fn removed_entities_are_skipped() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 600.0, 600.0);
        sim.write(imp, |v: &mut Velocity| v.0 = Vec3::new(4.0, 0.0, 0.0));
        sim.destroy(imp);
        tick_all(&mut sim);
        assert_eq!(sim.pos(imp).map(|p| p.x), Some(600.0));
    }

    #[test]
    fn publish_only_bumps_on_change() {
        let mut sim = fixtures::room_sim();
        let imp = sim.spawn_on_floor(MobjKind::Troop, 600.0, 600.0);
        publish(&mut sim.world);
        let version = |sim: &Sim| {
            sim.world
                .get::<&Presentation>(imp)
                .map(|p| p.position.version())
                .unwrap_or_default()
        };
        assert_eq!(version(&sim), 0);
        sim.set_position(imp, Vec3::new(610.0, 600.0, 0.0));
        publish(&mut sim.world);
        publish(&mut sim.world);
        assert_eq!(version(&sim), 1);
    }
}
