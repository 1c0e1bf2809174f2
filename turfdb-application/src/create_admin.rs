use super::*;

pub fn create_admin(connections: &sqlite::Connections, new_admin: usecases::NewAdmin) -> Result<Admin> {
    let mut db = connections.exclusive()?;
    let admin = db.transaction(|conn| usecases::create_admin(conn, new_admin))?;
    info!("Created admin account {}", admin.email);
    Ok(admin)
}
