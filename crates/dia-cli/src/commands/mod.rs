pub mod completions;
pub mod mask;
pub mod rules;
pub mod summarize;
