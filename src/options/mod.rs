//! Option catalog and argument matcher shared by the driver and frontend.

mod catalog;
mod matcher;

pub use catalog::{OptionFlags, OptionId, OptionInfo, OptionKind, OptionTable, option_name};
pub use matcher::{MatchedArg, MatchedArgs, MissingArgs};
