//! Power take-off (PTO) model: the tunable coefficient store and the
//! spring-damper force element that consumes it.

mod spring;
mod store;

pub use spring::SpringDamper;
pub use store::{PtoCoefficient, PtoParameterStore};
