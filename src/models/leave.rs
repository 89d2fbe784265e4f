use chrono::NaiveDate;

/// Review lifecycle shared by leave requests and shift requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::parse(s)
    }

    /// APPROVED / REJECTED record who decided; PENDING clears it.
    pub fn needs_approver(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

#[derive(Debug, Clone)]
pub struct LeaveRequest {
    pub id: i64,
    pub user_id: i64,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: ReviewStatus,
    pub submitted_at: String,
    pub approved_by: Option<i64>,
    pub approved_at: Option<String>,
    pub updated_at: String,
}

/// Leave request joined with employee and approver names (HR listing).
#[derive(Debug, Clone)]
pub struct LeaveWithNames {
    pub request: LeaveRequest,
    pub employee: String,
    pub approver: Option<String>,
}
