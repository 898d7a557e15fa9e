mod adagrad;
mod builder;
mod gradient_descent;
mod optimizer;

pub use adagrad::AdaGrad;
pub use builder::OptimizerBuilder;
pub use gradient_descent::GradientDescent;
pub use optimizer::{Gradient, Optimizer, gradient};
