//! Scene module
//!
//! Object keys and descriptors, the collaborator traits the culler calls
//! into, an in-memory `Scene` (scene + physics) and `RenderState` (sink).

mod scene_object;
mod collaborators;
mod scene;
mod render_state;

pub use scene_object::{SceneObject, SceneObjectDesc, SceneObjectKey};
pub use collaborators::{SceneQuery, PhysicsQuery, RenderSink};
pub use scene::Scene;
pub use render_state::{RenderState, ObjectFlags};
