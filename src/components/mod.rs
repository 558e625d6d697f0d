//! Installer components that contribute charts.
//!
//! Each component exposes a `COMPONENT` name and a `helm()` constructor
//! returning its composite chart-import function. Components are wired into
//! a `ComponentRegistry` by `ComponentRegistry::with_defaults`.

pub mod agent_smith;
