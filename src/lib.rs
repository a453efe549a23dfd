#![forbid(unsafe_code)]

mod borders;
pub mod catalog;
pub mod codec;
pub mod composite;
pub mod error;
pub mod pipeline;
pub mod region;
pub mod scale;

pub use catalog::{BorderTemplate, Catalog};
pub use composite::compose_icon;
pub use error::{BordureError, BordureResult};
pub use pipeline::{RunOptions, make_icons};
pub use region::{InteriorMask, Point, compute_interior_mask, flood_interior, has_transparency};
pub use scale::scale_to_fill;
