mod basis;
mod misc;
mod surface;
mod tessellation;

pub mod prelude {
    pub use crate::basis::*;
    pub use crate::misc::*;
    pub use crate::surface::*;
    pub use crate::tessellation::*;
}
