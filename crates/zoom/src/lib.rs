//! Zoom levels and scale denominators.
//!
//! A [`ZoomContext`] maps an abstract integer zoom level onto the physical
//! scale denominator of a map. Three strategies are provided:
//!
//! - [`ListZoomContext`]: an explicit list of denominators.
//! - [`RatioZoomContext`]: a geometric progression from an initial level.
//! - [`MedialZoomContext`]: a wrapper adding fractional-level queries to
//!   any base context, so ranges can be cut halfway between levels.
//!
//! Smaller zoom levels correspond to larger scale denominators.

mod context;
mod error;
mod list;
mod medial;
mod range;
mod ratio;
mod well_known;

pub use context::{ZoomContext, ZoomContextFinder, resolve};
pub use error::ZoomError;
pub use list::ListZoomContext;
pub use medial::MedialZoomContext;
pub use range::ScaleRange;
pub use ratio::RatioZoomContext;
pub use well_known::{AMBIGUOUS_NAMES, WellKnownZoomContextFinder};
