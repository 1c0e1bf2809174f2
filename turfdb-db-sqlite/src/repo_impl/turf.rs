use super::*;

impl_for_connections!(TurfRepo {
    fn create_turf(&self, turf: &Turf) -> Result<()> {
        create_turf(&mut *self.writable_conn()?, turf)
    }
    fn get_turf(&self, vendor_id: &str, turf_id: &str) -> Result<Turf> {
        get_turf(&mut self.sqlite_conn(), vendor_id, turf_id)
    }
    fn turfs_of_vendor(&self, vendor_id: &str) -> Result<Vec<Turf>> {
        turfs_of_vendor(&mut self.sqlite_conn(), vendor_id)
    }
    fn all_turfs(&self) -> Result<Vec<Turf>> {
        all_turfs(&mut self.sqlite_conn())
    }
    fn update_turf(&self, turf: &Turf) -> Result<()> {
        update_turf(&mut *self.writable_conn()?, turf)
    }
    fn delete_turfs_of_vendor(&self, vendor_id: &str) -> Result<usize> {
        delete_turfs_of_vendor(&mut *self.writable_conn()?, vendor_id)
    }
});

fn load_turfs(entities: Vec<models::TurfEntity>) -> Result<Vec<Turf>> {
    entities
        .into_iter()
        .map(|entity| Turf::try_from(entity).map_err(repo::Error::from))
        .collect()
}

fn create_turf(conn: &mut SqliteConnection, turf: &Turf) -> Result<()> {
    let new_turf = models::NewTurf::try_from(turf)?;
    diesel::insert_into(schema::turfs::table)
        .values(&new_turf)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_turf(conn: &mut SqliteConnection, vendor_id: &str, turf_id: &str) -> Result<Turf> {
    use schema::turfs::dsl;
    let entity = dsl::turfs
        .filter(dsl::id.eq(turf_id))
        .filter(dsl::vendor_id.eq(vendor_id))
        .filter(dsl::deleted.eq(false))
        .first::<models::TurfEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(entity.try_into()?)
}

fn turfs_of_vendor(conn: &mut SqliteConnection, vendor_id: &str) -> Result<Vec<Turf>> {
    use schema::turfs::dsl;
    let entities = dsl::turfs
        .filter(dsl::vendor_id.eq(vendor_id))
        .filter(dsl::deleted.eq(false))
        .order_by(dsl::created_at.desc())
        .load::<models::TurfEntity>(conn)
        .map_err(from_diesel_err)?;
    load_turfs(entities)
}

fn all_turfs(conn: &mut SqliteConnection) -> Result<Vec<Turf>> {
    use schema::turfs::dsl;
    let entities = dsl::turfs
        .filter(dsl::deleted.eq(false))
        .order_by(dsl::created_at.desc())
        .load::<models::TurfEntity>(conn)
        .map_err(from_diesel_err)?;
    load_turfs(entities)
}

fn update_turf(conn: &mut SqliteConnection, turf: &Turf) -> Result<()> {
    use schema::turfs::dsl;
    let changes = models::NewTurf::try_from(turf)?;
    let count = diesel::update(
        dsl::turfs
            .filter(dsl::id.eq(turf.id.as_str()))
            .filter(dsl::vendor_id.eq(turf.vendor_id.as_str())),
    )
    .set(&changes)
    .execute(conn)
    .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_turfs_of_vendor(conn: &mut SqliteConnection, vendor_id: &str) -> Result<usize> {
    use schema::turfs::dsl;
    diesel::delete(dsl::turfs.filter(dsl::vendor_id.eq(vendor_id)))
        .execute(conn)
        .map_err(from_diesel_err)
}
