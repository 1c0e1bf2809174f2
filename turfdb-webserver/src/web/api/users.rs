use super::*;

#[get("/admin/users")]
pub fn get_users(db: sqlite::Connections, _admin: Admin) -> Result<json::UserList> {
    let users = usecases::list_users(&db.shared()?)?;
    Ok(Json(json::UserList {
        users: users.into_iter().map(Into::into).collect(),
    }))
}
