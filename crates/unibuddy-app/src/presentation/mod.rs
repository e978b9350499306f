pub mod bootstrap;
pub mod state;
