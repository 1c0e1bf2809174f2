use super::*;

impl_for_connections!(BookingRepo {
    fn create_booking(&self, booking: &Booking) -> Result<()> {
        create_booking(&mut *self.writable_conn()?, booking)
    }
    fn get_booking(&self, id: &str) -> Result<Booking> {
        get_booking(&mut self.sqlite_conn(), id)
    }
    fn all_bookings(&self) -> Result<Vec<Booking>> {
        all_bookings(&mut self.sqlite_conn())
    }
});

impl_for_connections!(UserRepo {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut *self.writable_conn()?, user)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.sqlite_conn())
    }
});

fn create_booking(conn: &mut SqliteConnection, booking: &Booking) -> Result<()> {
    let entity = models::BookingEntity::try_from(booking)?;
    diesel::insert_into(schema::bookings::table)
        .values(&entity)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_booking(conn: &mut SqliteConnection, id: &str) -> Result<Booking> {
    use schema::bookings::dsl;
    let entity = dsl::bookings
        .filter(dsl::id.eq(id))
        .first::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(entity.try_into()?)
}

fn all_bookings(conn: &mut SqliteConnection) -> Result<Vec<Booking>> {
    use schema::bookings::dsl;
    dsl::bookings
        .order_by(dsl::created_at.desc())
        .load::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| Booking::try_from(entity).map_err(repo::Error::from))
        .collect()
}

fn create_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    diesel::insert_into(schema::users::table)
        .values(&models::UserEntity::from(user))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .order_by(dsl::created_at.desc())
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
