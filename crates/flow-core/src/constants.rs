// Tuning constants shared by the simulation core and the web frontend.

// Vector field
pub const FIELD_FREQUENCY: f32 = 0.005; // spatial frequency; lower values give larger flow cells
pub const FIELD_STRENGTH: f32 = 0.2; // force accumulated into velocity each tick

// Particle motion
pub const DAMPING: f32 = 0.95; // velocity retained per tick; the only bound on speed growth
pub const LIFESPAN_MIN: f32 = 100.0; // ticks
pub const LIFESPAN_MAX: f32 = 300.0; // exclusive upper bound

// Pointer interaction
pub const INTERACTION_RADIUS: f32 = 150.0; // logical px
pub const REPULSION_STRENGTH: f32 = 0.05;
pub const POINTER_SENTINEL: [f32; 2] = [-1000.0, -1000.0]; // far enough that repulsion never fires

// Rendering
pub const PARTICLE_SIZE: f32 = 2.0; // logical px; squares rasterize cheaper than arcs at this count
