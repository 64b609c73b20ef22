pub mod angle;
pub mod dock;
pub mod identity;
pub mod position;
pub mod presets;
