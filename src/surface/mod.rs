mod bezier_patch;

pub use bezier_patch::*;
