//! # Arbor
//!
//! An interactive particle scene that morphs between two shapes: a
//! scattered cloud and a conical tree built from thousands of glowing
//! particles, instanced ornaments, and a star topper.
//!
//! ## Quick Start
//!
//! ```ignore
//! use arbor::prelude::*;
//! use winit::event_loop::{ControlFlow, EventLoop};
//!
//! fn main() -> Result<(), arbor::error::AppError> {
//!     let event_loop = EventLoop::new()?;
//!     event_loop.set_control_flow(ControlFlow::Poll);
//!     event_loop.run_app(&mut App::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Modes
//!
//! The scene has exactly two target configurations, [`Mode::Assembled`]
//! (the tree) and [`Mode::Dispersed`] (the cloud). A toggle flips the
//! target; everything in between is continuous interpolation, never a
//! discrete state.
//!
//! ### Records and endpoints
//!
//! Every particle, ornament, and the topper stores two immutable
//! endpoints sampled at build time: one inside the scatter sphere, one
//! inside (or just outside) the tree cone. Only the interpolated rendered
//! value ever changes.
//!
//! ### Animation regimes
//!
//! - The foliage field keeps a single damped progress scalar; the vertex
//!   shader recomputes every particle position from it each frame.
//! - Ornaments keep per-instance rendered state pulled toward the active
//!   endpoint by a fixed fraction per frame.
//! - The topper snaps to its target with a faster delta-scaled lerp and
//!   branches its rotation on the mode.
//!
//! The hosting layer owns the [`Mode`] and the frame clock; the core is a
//! function of `(records, mode, time, delta)`.

pub mod easing;
pub mod error;
pub mod foliage;
pub mod mesh;
pub mod ornaments;
pub mod palette;
pub mod scene;
pub mod shader;
pub mod spawn;
pub mod star;
pub mod time;
pub mod window;

pub use bytemuck;
pub use foliage::{FoliageField, FoliageParticle};
pub use glam::{Vec2, Vec3, Vec4};
pub use ornaments::{Ornament, OrnamentKind, OrnamentSet};
pub use palette::OrnamentColor;
pub use scene::{Mode, Scene, SceneConfig};
pub use spawn::SpawnContext;
pub use star::Topper;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::easing::{damp, lerp, smoothstep};
    pub use crate::foliage::{FoliageField, FoliageParticle};
    pub use crate::ornaments::{Ornament, OrnamentKind, OrnamentSet};
    pub use crate::palette::{OrnamentColor, SPARKLE_THRESHOLD};
    pub use crate::scene::{Mode, Scene, SceneConfig};
    pub use crate::spawn::SpawnContext;
    pub use crate::star::Topper;
    pub use crate::time::Time;
    pub use crate::window::App;
    pub use crate::{Vec2, Vec3, Vec4};
}
