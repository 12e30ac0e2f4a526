#![cfg_attr(target_arch = "spirv", no_std)]

pub mod atlas_preview;
pub mod shading;
