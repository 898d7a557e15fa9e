mod activation;
mod init;
mod model;

pub use activation::sigmoid;
pub use init::ParamInit;
pub use model::Model;
