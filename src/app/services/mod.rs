//! One borrowed view per API resource. Each method maps to a single HTTP
//! operation and returns the decoded response envelope.

mod accounts;
mod bridge;
mod capability_requests;
mod charges;
mod customers;
mod funding_events;
mod organizations;
mod paykeys;
mod payouts;
mod reports;

pub use accounts::AccountsService;
pub use bridge::BridgeService;
pub use capability_requests::CapabilityRequestsService;
pub use charges::ChargesService;
pub use customers::CustomersService;
pub use funding_events::FundingEventsService;
pub use organizations::OrganizationsService;
pub use paykeys::PaykeysService;
pub use payouts::PayoutsService;
pub use reports::ReportsService;
