use planner_domain::{User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub name: String,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}
