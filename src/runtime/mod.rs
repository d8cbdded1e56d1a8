//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, one frameless window per panel
//! - `renderer` - softbuffer surface that paints panel chrome

pub mod app;
pub mod renderer;

pub use app::App;
