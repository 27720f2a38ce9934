use serde::{Deserialize, Serialize};

use crate::domain::types::{EmailAddress, PersonName, UserId, UserRole};

/// Console user kept in the session after login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: PersonName,
    pub email: EmailAddress,
    pub role: UserRole,
}
