use crate::math::Vec2;
use crate::systems::collision::sat::Projection;

/// Minimum edge length accepted at construction. Anything shorter would
/// produce an unnormalizable separating axis during SAT.
const MIN_EDGE_LENGTH: f32 = 1e-4;

/// Rigid Body - a convex polygon that moves as a single unit
pub struct Body {
    // === Physics State ===
    // Pose fields stay crate-internal: external writes must go through
    // set_position/set_angle so the world-vertex cache can never go stale.
    /// World position (polygon center)
    pub(crate) pos: Vec2,
    /// Velocity vector (units per second)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub(crate) angle: f32,
    /// Angular velocity (radians per second)
    pub angular_vel: f32,
    /// Static bodies are never integrated or displaced
    pub is_static: bool,
    /// Unique ID for this body (assigned by the world)
    pub id: u32,

    // === Shape Definition ===
    /// Vertices relative to center (0,0), ordered, convex
    local_vertices: Vec<Vec2>,
    /// Cached world-space vertices for the current (pos, angle)
    world_vertices: Vec<Vec2>,
}

impl Body {
    /// Create a body from explicit local-space vertices.
    ///
    /// Fails fast on degenerate input instead of letting NaNs leak out of
    /// the solver: fewer than 3 vertices, non-finite coordinates, and
    /// near-zero-length edges are all rejected. Convexity is assumed, not
    /// validated.
    pub fn from_vertices(
        x: f32,
        y: f32,
        vertices: Vec<Vec2>,
        is_static: bool,
    ) -> Result<Self, String> {
        if vertices.len() < 3 {
            return Err(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            ));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err("body position must be finite".to_string());
        }
        for (i, v) in vertices.iter().enumerate() {
            if !v.is_finite() {
                return Err(format!("vertex {i} is not finite"));
            }
            let next = vertices[(i + 1) % vertices.len()];
            if (*v - next).length() < MIN_EDGE_LENGTH {
                return Err(format!("edge {i} is degenerate (near-zero length)"));
            }
        }

        let world_vertices = vec![Vec2::zero(); vertices.len()];
        let mut body = Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            is_static,
            id: 0,
            local_vertices: vertices,
            world_vertices,
        };
        body.refresh_world_vertices();
        Ok(body)
    }

    /// Create an axis-aligned box body centered at (x, y)
    pub fn new_box(x: f32, y: f32, w: f32, h: f32) -> Result<Self, String> {
        let hw = w / 2.0;
        let hh = h / 2.0;
        Self::from_vertices(
            x,
            y,
            vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ],
            false,
        )
    }

    /// Create a static box body (ground, walls)
    pub fn new_static_box(x: f32, y: f32, w: f32, h: f32) -> Result<Self, String> {
        let mut body = Self::new_box(x, y, w, h)?;
        body.is_static = true;
        Ok(body)
    }

    /// Recompute cached world-space vertices from (pos, angle).
    ///
    /// Must run after any pose write and before any geometric query;
    /// callers that skip this read stale geometry.
    pub fn refresh_world_vertices(&mut self) {
        let (sin, cos) = self.angle.sin_cos();
        for (out, v) in self.world_vertices.iter_mut().zip(&self.local_vertices) {
            out.x = self.pos.x + (v.x * cos - v.y * sin);
            out.y = self.pos.y + (v.x * sin + v.y * cos);
        }
    }

    /// World position (polygon center)
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Rotation angle (radians)
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current world-space vertices (consistent with the current pose)
    pub fn world_vertices(&self) -> &[Vec2] {
        &self.world_vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.local_vertices.len()
    }

    /// Candidate separating axes: one unit normal per edge
    pub fn axes(&self) -> Vec<Vec2> {
        let n = self.world_vertices.len();
        let mut axes = Vec::with_capacity(n);
        for i in 0..n {
            let edge = self.world_vertices[i] - self.world_vertices[(i + 1) % n];
            axes.push(edge.perp().normalize());
        }
        axes
    }

    /// Project all world vertices onto `axis`
    pub fn project(&self, axis: Vec2) -> Projection {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for v in &self.world_vertices {
            let dot = v.dot(axis);
            if dot < min {
                min = dot;
            }
            if dot > max {
                max = dot;
            }
        }
        Projection { min, max }
    }

    /// Move the body center and refresh cached geometry
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.refresh_world_vertices();
    }

    /// Rotate the body and refresh cached geometry
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.refresh_world_vertices();
    }
}
