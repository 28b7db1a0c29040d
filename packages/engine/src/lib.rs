//! AABB Sandbox Engine - frame-driven box physics in WASM
//!
//! Boxes are spawned where the host clicks, fall under gravity and are pushed
//! out of each other one axis at a time with a damped penetration estimate.
//!
//! Architecture:
//! - core/        - Logging and shared utilities
//! - domain/      - Simulation configuration
//! - systems/     - Bodies, registry, integration and collision resolution
//! - simulation/  - World orchestration, render extraction, JS facade

#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports
pub use domain::config;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("AABB sandbox engine v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use config::{SimConfig, SpawnSettings};
pub use rigid_body::{Body, BodyKind, Collider, Rect, RigidBody, Vec2};
pub use simulation::{World, WorldCore};

/// Body kind code for static colliders (see `World::spawn_body`)
#[wasm_bindgen]
pub fn kind_static() -> u8 { BodyKind::Static.as_u8() }
/// Body kind code for dynamic rigid bodies
#[wasm_bindgen]
pub fn kind_dynamic() -> u8 { BodyKind::Dynamic.as_u8() }
