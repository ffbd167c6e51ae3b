/*!
# Visibility Engine

Per-frame occlusion culling for static scenes.

A bounding volume hierarchy is built once over the static occluder set.
Every frame, the hierarchy is walked against the camera frustum and the
surviving objects are confirmed visible by casting rays against the
physical scene. The result drives a render-enable toggle per object.

## Architecture

- **BoundingVolumeHierarchy**: immutable median-split BVH over the occluders
- **OcclusionCuller**: frustum pruning + multi-point ray visibility test
- **SceneQuery / PhysicsQuery / RenderSink**: collaborator traits the host implements
- **Scene**: in-memory scene and physics queries
- **RenderState**: in-memory render sink (per-object render flags)

The host owns the scene, the physics backend and the camera. The engine
only reads them.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod geometry;
pub mod camera;
pub mod scene;
pub mod bvh;
pub mod culling;

// Main visibility namespace module
pub mod visibility {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Hierarchy sub-module
    pub mod bvh {
        pub use crate::bvh::*;
    }

    // Culling sub-module
    pub mod culling {
        pub use crate::culling::*;
    }
}

// Re-export math library at crate root
pub use glam;
