use super::leave::ReviewStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftRequestType {
    Trade,
    PickUp,
    Drop,
}

impl ShiftRequestType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TRADE" => Some(Self::Trade),
            "PICK_UP" | "PICKUP" => Some(Self::PickUp),
            "DROP" => Some(Self::Drop),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Self::Trade => "TRADE",
            Self::PickUp => "PICK_UP",
            Self::Drop => "DROP",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::parse(s)
    }
}

/// Whether the request targets a shift the employee already holds or an
/// open one from the available pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOrigin {
    Assigned,
    Available,
}

impl ShiftOrigin {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ASSIGNED" => Some(Self::Assigned),
            "AVAILABLE" => Some(Self::Available),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Self::Assigned => "ASSIGNED",
            Self::Available => "AVAILABLE",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone)]
pub struct ShiftRequest {
    pub id: i64,
    pub user_id: i64,
    pub shift_id: i64,
    pub request_type: ShiftRequestType,
    pub note: Option<String>,
    pub status: ReviewStatus,
    pub origin: ShiftOrigin,
    pub created_at: String,
    pub updated_at: String,
    pub approved_by: Option<i64>,
    pub approved_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ShiftRequestWithNames {
    pub request: ShiftRequest,
    pub employee: String,
    pub approver: Option<String>,
}
