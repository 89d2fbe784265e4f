#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftStatus {
    Available,
    Assigned,
    Completed,
    Cancelled,
}

impl ShiftStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "AVAILABLE" => Some(Self::Available),
            "ASSIGNED" => Some(Self::Assigned),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Assigned => "ASSIGNED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone)]
pub struct Shift {
    pub id: i64,
    pub description: String,
    pub assigned_to: Option<i64>,
    pub status: ShiftStatus,
    pub created_by: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}
