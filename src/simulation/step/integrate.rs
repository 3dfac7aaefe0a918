use super::WorldCore;

/// Semi-implicit Euler update for every non-static body.
///
/// Damping is a flat per-tick multiplicative decay, deliberately NOT scaled
/// by `dt`: the constants were tuned against the fixed 1/60 s quantum, and
/// time-scaling them would change observable gameplay feel.
pub(super) fn integrate_bodies(world: &mut WorldCore, dt: f32) {
    let gravity = world.gravity;
    let linear_damping = world.linear_damping;
    let angular_damping = world.angular_damping;

    for body in world.bodies.iter_mut() {
        if body.is_static {
            continue;
        }

        body.velocity.y += gravity * dt;
        body.velocity.x *= linear_damping;
        body.velocity.y *= linear_damping;
        body.angular_vel *= angular_damping;

        body.pos = body.pos + body.velocity * dt;
        body.angle += body.angular_vel * dt;

        body.refresh_world_vertices();
    }
}
