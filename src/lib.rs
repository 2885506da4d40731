extern crate nalgebra as na;

pub mod boundary;
pub mod error;
pub mod kkt;
pub mod model;
pub mod pdip;
pub mod quartic;
pub mod settings;
pub mod trajectory;

pub use error::{Error, Result};
pub use model::{Direction, EqualityConstraint, Iterate, Objective};
pub use pdip::PrimalDual;
pub use settings::Settings;
pub use trajectory::{StepSizes, Trajectory};
