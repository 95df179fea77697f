//! UI layer: app shell, section renderers, reveal animation clock, and theme.

pub mod app;
pub mod reveal;
pub mod sections;
pub mod theme;

pub use app::{PortfolioApp, StartupConfig};
