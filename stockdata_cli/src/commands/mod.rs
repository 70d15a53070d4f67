//! CLI subcommand implementations.

pub mod company;
pub mod daily;
pub mod movers;
pub mod multi;
pub mod quote;
pub mod raw;
pub mod search;
