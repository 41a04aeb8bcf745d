mod animation_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod frame_builder;
mod json_contract;
mod label_format;
mod layout_controller;
mod progress_frame;

pub use engine::SunMoonEngine;
pub use engine_config::{DEFAULT_TOTAL_ANIMATION_MS, SunMoonConfig, SunMoonStyle};
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use label_format::TimeLabelFormat;
pub use progress_frame::{ElapsedWedge, ProgressFrame};
