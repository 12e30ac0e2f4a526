//! Common structs and algorithms shared between Umbra's shaders and the
//! rendering host.

#![cfg_attr(target_arch = "spirv", no_std)]

mod atlas;
mod cube_face;
mod light;
mod utils;

pub use self::atlas::*;
pub use self::cube_face::*;
pub use self::light::*;
pub use self::utils::*;

pub mod prelude {
    pub use spirv_std::glam::*;
    #[cfg(target_arch = "spirv")]
    pub use spirv_std::num_traits::Float;
    pub use spirv_std::{spirv, Image, Sampler};

    pub use crate::*;
}
