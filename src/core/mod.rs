pub mod calendar;
pub mod engine;
pub mod ledger;
pub mod normalize;
pub mod parser;
pub mod registry;
