use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
    }

    impl APIResponse {
        pub fn healthy() -> Self {
            Self {
                message: "Planner is up and running".into(),
            }
        }
    }
}
