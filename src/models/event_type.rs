use serde::Serialize;

/// One clock action: IN or OUT.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    In,
    Out,
}

impl EventType {
    /// Parse a user-supplied token ("in", "OUT", "In", ...).
    /// Anything that does not normalize to IN/OUT is rejected by the caller.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "IN" => Some(Self::In),
            "OUT" => Some(Self::Out),
            _ => None,
        }
    }

    /// Convert enum → DB string (matches the CHECK constraint).
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventType::In => "IN",
            EventType::Out => "OUT",
        }
    }

    /// Convert DB string → enum.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "IN" => Some(EventType::In),
            "OUT" => Some(EventType::Out),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventType::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventType::Out)
    }
}
