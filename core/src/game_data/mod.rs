mod specs;

pub use specs::{Class, Role, SPECS, SpecInfo, lookup_spec, spec_color};
