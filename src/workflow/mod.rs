mod client;
mod types;

pub use client::{CssWorkflow, InferenceWorkflow};
pub use types::InferenceParams;
