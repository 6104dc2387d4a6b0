//! Tour record model.
//!
//! The endpoint returns a bare JSON array of these objects. All five fields
//! are required strings; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A single displayable tour.
///
/// `price` is kept exactly as the endpoint formats it (e.g. `"1,995"`);
/// it is never parsed into a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub name: String,
    pub info: String,
    pub image: String,
    pub price: String,
}
