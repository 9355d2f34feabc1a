//! Command implementations for the roam CLI

pub mod dispatch;
pub mod distances;
pub mod format;
pub mod gen;
pub mod score;
pub mod show;
pub mod tour;
pub mod traverse;
