// Application layer: CLI commands driving the catalog page over in-memory surfaces.

pub mod commands;
