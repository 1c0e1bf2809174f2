use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_admin<R>(repo: &R, login: &Credentials) -> Result<Admin>
where
    R: AdminRepo,
{
    // Unknown accounts and wrong passwords are indistinguishable
    match repo.try_get_admin_by_email(login.email)? {
        Some(admin) if admin.password.verify(login.password) => Ok(admin),
        _ => Err(Error::Credentials),
    }
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: String,
    pub password: String,
}

pub fn create_admin<R>(repo: &R, new_admin: NewAdmin) -> Result<Admin>
where
    R: AdminRepo,
{
    let email = new_admin.email.parse::<EmailAddress>()?;
    let password = new_admin.password.parse::<Password>()?;
    if repo.try_get_admin_by_email(&email)?.is_some() {
        return Err(Error::AdminExists);
    }
    let admin = Admin {
        id: Id::new(),
        email,
        password,
    };
    log::debug!("Creating new admin: email = {}", admin.email);
    repo.create_admin(&admin)?;
    Ok(admin)
}
