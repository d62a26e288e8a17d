//! Application-wide constants

/// State recorded on an address when the caller supplies none.
pub const DEFAULT_ADDRESS_STATE: &str = "Kaduna";

/// Status a building starts in.
pub const DEFAULT_BUILDING_STATUS: &str = "working";

/// Building statuses the original deployment uses. Informational only;
/// the field is free-form text and other values are accepted.
pub const KNOWN_BUILDING_STATUSES: [&str; 4] = [
    "working",
    "requires maintenance",
    "undergoing maintenance",
    "delapidated",
];
