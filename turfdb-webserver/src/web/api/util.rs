use super::*;

#[get("/test")]
pub fn get_test() -> Json<json::Message> {
    Json(json::Message::new("API is working"))
}

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}
