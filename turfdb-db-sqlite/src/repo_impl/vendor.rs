use super::*;

impl_for_connections!(VendorRepo {
    fn create_vendor(&self, vendor: &Vendor) -> Result<()> {
        create_vendor(&mut *self.writable_conn()?, vendor)
    }
    fn get_vendor(&self, id: &str) -> Result<Vendor> {
        get_vendor(&mut self.sqlite_conn(), id)
    }
    fn try_get_vendor_by_email(&self, email: &EmailAddress) -> Result<Option<Vendor>> {
        try_get_vendor_by_email(&mut self.sqlite_conn(), email)
    }
    fn all_vendors(&self) -> Result<Vec<Vendor>> {
        all_vendors(&mut self.sqlite_conn())
    }
    fn update_vendor(&self, vendor: &Vendor) -> Result<()> {
        update_vendor(&mut *self.writable_conn()?, vendor)
    }
    fn delete_vendor(&self, id: &str) -> Result<()> {
        delete_vendor(&mut *self.writable_conn()?, id)
    }
});

fn create_vendor(conn: &mut SqliteConnection, vendor: &Vendor) -> Result<()> {
    diesel::insert_into(schema::vendors::table)
        .values(&models::NewVendor::from(vendor))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_vendor(conn: &mut SqliteConnection, id: &str) -> Result<Vendor> {
    use schema::vendors::dsl;
    let entity = dsl::vendors
        .filter(dsl::id.eq(id))
        .first::<models::VendorEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(entity.try_into()?)
}

fn try_get_vendor_by_email(conn: &mut SqliteConnection, email: &EmailAddress) -> Result<Option<Vendor>> {
    use schema::vendors::dsl;
    dsl::vendors
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::VendorEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|entity| Vendor::try_from(entity).map_err(repo::Error::from))
        .transpose()
}

fn all_vendors(conn: &mut SqliteConnection) -> Result<Vec<Vendor>> {
    use schema::vendors::dsl;
    dsl::vendors
        .order_by(dsl::created_at.desc())
        .load::<models::VendorEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| Vendor::try_from(entity).map_err(repo::Error::from))
        .collect()
}

fn update_vendor(conn: &mut SqliteConnection, vendor: &Vendor) -> Result<()> {
    use schema::vendors::dsl;
    let count = diesel::update(dsl::vendors.filter(dsl::id.eq(vendor.id.as_str())))
        .set(&models::NewVendor::from(vendor))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_vendor(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::vendors::dsl;
    let count = diesel::delete(dsl::vendors.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}
