//! Tag keys.
//!
//! Source keys come from the county address export; output keys follow the
//! OSM `addr:*` scheme.

/// House number (required).
pub const HOUSE_NUMBER: &str = "HOUSE_NUMB";

/// Street base name without direction or type (required).
pub const STREET: &str = "STREET";

/// Full address label, used in diagnostics only (required).
pub const ADDRESS_LABEL: &str = "ADDRESS_LA";

/// Street direction prefix, e.g. `N` (optional).
pub const DIRECTION: &str = "DIR";

/// Street type suffix, e.g. `RD` (optional).
pub const STREET_TYPE: &str = "TYPE";

/// Address status (optional).
pub const STATUS: &str = "STATUS";

/// Status value marking an address as no longer in use.
pub const RETIRED_STATUS: &str = "RETIRED";

pub const OSM_HOUSE_NUMBER: &str = "addr:housenumber";
pub const OSM_STREET: &str = "addr:street";
