//! Domain types for Academy CMS.
//!
//! This module contains the content entities and the administrative principal.

mod course;
mod gallery;
mod post;
mod principal;
mod result;
mod settings;
mod slider;
mod testimonial;

pub use course::*;
pub use gallery::*;
pub use post::*;
pub use principal::*;
pub use result::*;
pub use settings::*;
pub use slider::*;
pub use testimonial::*;
