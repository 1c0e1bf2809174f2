use super::*;

impl_for_connections!(AdminRepo {
    fn create_admin(&self, admin: &Admin) -> Result<()> {
        create_admin(&mut *self.writable_conn()?, admin)
    }
    fn try_get_admin_by_email(&self, email: &EmailAddress) -> Result<Option<Admin>> {
        try_get_admin_by_email(&mut self.sqlite_conn(), email)
    }
});

fn create_admin(conn: &mut SqliteConnection, admin: &Admin) -> Result<()> {
    diesel::insert_into(schema::admins::table)
        .values(&models::NewAdmin::from(admin))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_admin_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<Admin>> {
    use schema::admins::dsl;
    Ok(dsl::admins
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::AdminEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
