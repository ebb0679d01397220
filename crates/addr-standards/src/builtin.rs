//! Built-in expansion tables.

/// Street direction prefixes.
pub const DIRECTIONS: &[(&str, &str)] = &[
    ("N", "North"),
    ("S", "South"),
    ("E", "East"),
    ("W", "West"),
    ("NE", "Northeast"),
    ("NW", "Northwest"),
    ("SE", "Southeast"),
    ("SW", "Southwest"),
];

/// Street type suffixes (USPS abbreviations).
pub const ROAD_TYPES: &[(&str, &str)] = &[
    ("ALY", "Alley"),
    ("AVE", "Avenue"),
    ("BLVD", "Boulevard"),
    ("BND", "Bend"),
    ("CIR", "Circle"),
    ("CRES", "Crescent"),
    ("CT", "Court"),
    ("CV", "Cove"),
    ("DR", "Drive"),
    ("EXPY", "Expressway"),
    ("HWY", "Highway"),
    ("LN", "Lane"),
    ("LOOP", "Loop"),
    ("PASS", "Pass"),
    ("PATH", "Path"),
    ("PIKE", "Pike"),
    ("PKWY", "Parkway"),
    ("PL", "Place"),
    ("PLZ", "Plaza"),
    ("PT", "Point"),
    ("RD", "Road"),
    ("ROW", "Row"),
    ("RUN", "Run"),
    ("SQ", "Square"),
    ("ST", "Street"),
    ("TER", "Terrace"),
    ("TRCE", "Trace"),
    ("TRL", "Trail"),
    ("WAY", "Way"),
    ("XING", "Crossing"),
];
