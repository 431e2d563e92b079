//! Configuration module for loading simulation parameters.

mod parameters;

pub use parameters::{
    BodyParameters, PtoParameters, SimParameters, SolverParameters, WaveParameters,
};
