use serde::Serialize;

pub const ROLE_STAFF: i64 = 1;
pub const ROLE_HR: i64 = 2;

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub staff_id: String, // login code, unique
    pub first_name: String,
    pub last_name: String,
    pub password: String, // plaintext, matched verbatim by the login stub
    pub role_id: i64,
    pub department_id: Option<i64>,
}

/// Payload returned by the login stub. Never includes the password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: i64,
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub department_id: Option<i64>,
}

impl User {
    pub fn payload(&self) -> UserPayload {
        UserPayload {
            id: self.id,
            staff_id: self.staff_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role_id: self.role_id,
            department_id: self.department_id,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
