//! Use-Cases der Application-Layer-Orchestrierung.

pub mod coordinates;
pub mod drawing;
pub mod session;
pub mod shape_sync;
pub mod viewport;
