pub mod accounts;
pub mod charges;
pub mod common;
pub mod customers;
pub mod funding_events;
pub mod paykeys;
pub mod payouts;
pub mod reports;
pub mod reviews;

pub use accounts::*;
pub use charges::*;
pub use common::*;
pub use customers::*;
pub use funding_events::*;
pub use paykeys::*;
pub use payouts::*;
pub use reports::*;
pub use reviews::*;
