mod commission_engine;
mod errors;
mod pipeline;

pub use commission_engine::CommissionEngine;
pub use errors::CommissionError;
pub use pipeline::Pipeline;
