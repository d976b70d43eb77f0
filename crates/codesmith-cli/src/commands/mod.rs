//! Command implementations.

mod doctor;
mod explain;
mod generate;
mod models;
mod new_spec;
mod optimize;
mod topics;
mod validate;

pub use doctor::DoctorCommand;
pub use explain::ExplainCommand;
pub use generate::{GenerateAllCommand, GenerateCommand};
pub use models::ModelsCommand;
pub use new_spec::NewSpecCommand;
pub use optimize::OptimizeCommand;
pub use topics::TopicsCommand;
pub use validate::ValidateCommand;
