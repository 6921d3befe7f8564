mod events;
mod keys;
mod layout;
mod render;
mod state;

// Re-export public types
pub use state::App;
