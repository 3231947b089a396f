pub mod defaults;
pub mod loading;
pub mod types;

pub use loading::load;
pub use types::UnusedCodeConfig;
