pub mod calculator;
pub mod clock;
pub mod ledger;
pub mod range;
