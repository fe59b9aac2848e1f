mod component;
mod config;
mod node;
mod pulse;
mod render;
mod state;
mod surface;

pub use component::CircuitCanvas;
