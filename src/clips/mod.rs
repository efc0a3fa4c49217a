pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod rules;
