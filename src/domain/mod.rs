pub mod builder;
pub mod extract;
pub mod index;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod solver;
pub mod solvers;
pub mod validate;
