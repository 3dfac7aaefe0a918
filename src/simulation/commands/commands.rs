use crate::systems::body::Body;

use super::WorldCore;

pub(super) fn add_body(world: &mut WorldCore, mut body: Body) -> u32 {
    let id = world.next_id;
    world.next_id = world.next_id.saturating_add(1);
    body.id = id;
    world.bodies.push(body);
    id
}

pub(super) fn remove_body(world: &mut WorldCore, id: u32) -> bool {
    if let Some(idx) = world.bodies.iter().position(|b| b.id == id) {
        // Keep list order: solver outcomes depend on it, and swap_remove
        // would silently reorder the tail.
        world.bodies.remove(idx);
        return true;
    }
    false
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.next_id = 1;
}

pub(super) fn set_body_position(world: &mut WorldCore, id: u32, x: f32, y: f32) -> bool {
    match world.body_mut(id) {
        Some(body) => {
            body.set_position(x, y);
            true
        }
        None => false,
    }
}

pub(super) fn set_body_angle(world: &mut WorldCore, id: u32, angle: f32) -> bool {
    match world.body_mut(id) {
        Some(body) => {
            body.set_angle(angle);
            true
        }
        None => false,
    }
}

pub(super) fn set_body_velocity(world: &mut WorldCore, id: u32, vx: f32, vy: f32) -> bool {
    match world.body_mut(id) {
        Some(body) => {
            body.velocity.x = vx;
            body.velocity.y = vy;
            true
        }
        None => false,
    }
}

pub(super) fn set_body_angular_velocity(world: &mut WorldCore, id: u32, va: f32) -> bool {
    match world.body_mut(id) {
        Some(body) => {
            body.angular_vel = va;
            true
        }
        None => false,
    }
}

pub(super) fn set_body_static(world: &mut WorldCore, id: u32, is_static: bool) -> bool {
    match world.body_mut(id) {
        Some(body) => {
            body.is_static = is_static;
            true
        }
        None => false,
    }
}
