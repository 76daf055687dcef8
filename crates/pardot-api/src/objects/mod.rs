//! Typed bindings for the Pardot objects this client supports.
//!
//! Each wrapper is a thin layer over [`Resource`](crate::resource::Resource):
//! it fixes the object name, shapes arguments into parameters and paths,
//! and unwraps the `result` envelope where Pardot uses one.

pub mod accounts;
pub mod campaigns;
pub mod emails;
pub mod lists;
pub mod opportunities;
pub mod prospects;
pub mod users;
pub mod visitor_activities;
pub mod visitors;
pub mod visits;

pub use accounts::Accounts;
pub use campaigns::Campaigns;
pub use emails::Emails;
pub use lists::Lists;
pub use opportunities::Opportunities;
pub use prospects::Prospects;
pub use users::Users;
pub use visitor_activities::VisitorActivities;
pub use visitors::Visitors;
pub use visits::Visits;

use crate::errors::Result;
use pardot_utils::parse_id_list;

/// Object names as Pardot spells them in URLs
pub mod names {
    pub const ACCOUNT: &str = "prospectAccount";
    pub const CAMPAIGN: &str = "campaign";
    pub const EMAIL: &str = "email";
    pub const LIST: &str = "list";
    pub const OPPORTUNITY: &str = "opportunity";
    pub const PROSPECT: &str = "prospect";
    pub const USER: &str = "user";
    pub const VISIT: &str = "visit";
    pub const VISITOR: &str = "visitor";
    pub const VISITOR_ACTIVITY: &str = "visitorActivity";
}

/// Validate a comma separated id list and return it without whitespace.
pub(crate) fn id_list(ids: &str) -> Result<String> {
    let ids = parse_id_list(ids)?;
    Ok(pardot_utils::join_ids(ids))
}
