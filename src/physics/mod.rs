//! Single-axis rigid-body dynamics for the heaving sphere.
//!
//! Provides the body state, the force-element seam used by the PTO and the
//! hydrodynamic model, and the fixed-step system advance.

mod body;
mod system;

pub use body::HeaveBody;
pub use system::{ForceElement, Gravity, HeaveSystem};
