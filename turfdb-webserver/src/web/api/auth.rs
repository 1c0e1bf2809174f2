use super::*;

#[post("/admin/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::LoginResponse> {
    let login = login?.into_inner();
    let admin = {
        let email = login
            .email
            .parse::<EmailAddress>()
            .map_err(|_| ParameterError::Credentials)?;
        let credentials = usecases::Credentials {
            email: &email,
            password: &login.password,
        };
        usecases::login_admin(&db.shared()?, &credentials).map_err(|err| {
            debug!("Login with email '{}' failed: {}", login.email, err);
            err
        })?
    };
    let token = jwt_state.generate_token(admin.id.as_str(), jwt::ADMIN_ROLE)?;
    Ok(Json(json::LoginResponse {
        message: "Login successful".into(),
        token,
    }))
}

#[post("/admin/logout")]
pub fn post_logout(admin: Admin, jwt_state: &State<jwt::JwtState>) -> Json<json::Message> {
    debug!("Logout of admin {}", admin.id());
    jwt_state.blacklist_token(admin.token().to_owned());
    Json(json::Message::new("Logout successful"))
}
