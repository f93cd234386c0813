//! Scripted doubles for the two opaque collaborators.

pub mod reference;
