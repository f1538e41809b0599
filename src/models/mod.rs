pub mod common;
pub mod describe;
pub mod faceswap;
pub mod imagine;
pub mod seed;
pub mod upscale;

pub use common::*;
pub use describe::*;
pub use faceswap::*;
pub use imagine::*;
pub use seed::*;
pub use upscale::*;
