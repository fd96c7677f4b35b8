use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct LoginDto {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthDto {
    pub token: String,
    pub user_id: i32,
    pub username: String,
}
