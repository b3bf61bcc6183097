mod bezier_patch;
pub mod patch_tessellation;
pub mod patch_tessellation_option;

pub use patch_tessellation::*;
pub use patch_tessellation_option::*;

/// A trait for tessellating a shape
pub trait Tessellation<Opt> {
    type Output;
    fn tessellate(&self, options: Opt) -> Self::Output;
}
