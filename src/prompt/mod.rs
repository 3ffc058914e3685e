pub mod enrich;

pub use enrich::brand_prompt;
