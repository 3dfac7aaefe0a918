use crate::systems::collision::{resolve, sat};

use super::{integrate, PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore, dt: f32) -> Result<(), String> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(format!("dt must be finite and positive, got {dt}"));
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
        world.perf_stats.iterations = world.iterations;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === INTEGRATION ===
    // Bodies integrate in list order; the list cannot change mid-step
    // (add/remove is only reachable between steps), so indices stay stable
    // for the whole tick.
    if perf_on {
        let t0 = PerfTimer::start();
        integrate::integrate_bodies(world, dt);
        world.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrate::integrate_bodies(world, dt);
    }

    // === COLLISION PASSES ===
    if perf_on {
        let t0 = PerfTimer::start();
        let (pair_tests, contacts) = solve(world);
        world.perf_stats.solve_ms = t0.elapsed_ms();
        world.perf_stats.pair_tests = pair_tests;
        world.perf_stats.contacts = contacts;
    } else {
        solve(world);
    }

    if let Some(start) = step_start {
        world.perf_stats.step_ms = start.elapsed_ms();
    }

    world.frame += 1;
    Ok(())
}

/// Iterative relaxation solver: a fixed number of full passes over all
/// unordered pairs in list order. Resolving one pair partially corrects
/// poses that later pair tests in the same pass (and the next pass)
/// re-evaluate, so chained stacks converge across iterations rather than
/// in one shot. Not commutative across more than two bodies: outcomes are
/// deterministic for a fixed list order but not invariant under reordering.
fn solve(world: &mut WorldCore) -> (u32, u32) {
    let n = world.bodies.len();
    let mut pair_tests = 0u32;
    let mut contacts = 0u32;

    for _ in 0..world.iterations {
        for j in 0..n {
            for k in (j + 1)..n {
                if world.bodies[j].is_static && world.bodies[k].is_static {
                    continue;
                }
                pair_tests = pair_tests.saturating_add(1);

                if let Some(manifold) = sat::test(&world.bodies[j], &world.bodies[k]) {
                    contacts = contacts.saturating_add(1);
                    resolve::resolve_pair(&mut world.bodies, j, k, &manifold);
                }
            }
        }
    }

    (pair_tests, contacts)
}
