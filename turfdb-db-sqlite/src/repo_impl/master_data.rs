use super::*;

impl_for_connections!(AmenityRepo {
    fn create_amenity(&self, amenity: &Amenity) -> Result<()> {
        create_amenity(&mut *self.writable_conn()?, amenity)
    }
    fn get_amenity(&self, id: &str) -> Result<Amenity> {
        get_amenity(&mut self.sqlite_conn(), id)
    }
    fn all_amenities(&self) -> Result<Vec<Amenity>> {
        all_amenities(&mut self.sqlite_conn())
    }
    fn update_amenity(&self, amenity: &Amenity) -> Result<()> {
        update_amenity(&mut *self.writable_conn()?, amenity)
    }
    fn delete_amenity(&self, id: &str) -> Result<()> {
        delete_amenity(&mut *self.writable_conn()?, id)
    }
});

impl_for_connections!(RuleRepo {
    fn create_rule(&self, rule: &Rule) -> Result<()> {
        create_rule(&mut *self.writable_conn()?, rule)
    }
    fn get_rule(&self, id: &str) -> Result<Rule> {
        get_rule(&mut self.sqlite_conn(), id)
    }
    fn all_rules(&self) -> Result<Vec<Rule>> {
        all_rules(&mut self.sqlite_conn())
    }
    fn update_rule(&self, rule: &Rule) -> Result<()> {
        update_rule(&mut *self.writable_conn()?, rule)
    }
    fn delete_rule(&self, id: &str) -> Result<()> {
        delete_rule(&mut *self.writable_conn()?, id)
    }
});

fn create_amenity(conn: &mut SqliteConnection, amenity: &Amenity) -> Result<()> {
    diesel::insert_into(schema::amenities::table)
        .values(&models::AmenityEntity::from(amenity))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_amenity(conn: &mut SqliteConnection, id: &str) -> Result<Amenity> {
    use schema::amenities::dsl;
    Ok(dsl::amenities
        .filter(dsl::id.eq(id))
        .first::<models::AmenityEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_amenities(conn: &mut SqliteConnection) -> Result<Vec<Amenity>> {
    use schema::amenities::dsl;
    Ok(dsl::amenities
        .order_by(dsl::name)
        .load::<models::AmenityEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn update_amenity(conn: &mut SqliteConnection, amenity: &Amenity) -> Result<()> {
    use schema::amenities::dsl;
    let count = diesel::update(dsl::amenities.filter(dsl::id.eq(amenity.id.as_str())))
        .set(&models::AmenityEntity::from(amenity))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_amenity(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::amenities::dsl;
    let count = diesel::delete(dsl::amenities.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn create_rule(conn: &mut SqliteConnection, rule: &Rule) -> Result<()> {
    diesel::insert_into(schema::rules::table)
        .values(&models::RuleEntity::from(rule))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_rule(conn: &mut SqliteConnection, id: &str) -> Result<Rule> {
    use schema::rules::dsl;
    Ok(dsl::rules
        .filter(dsl::id.eq(id))
        .first::<models::RuleEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_rules(conn: &mut SqliteConnection) -> Result<Vec<Rule>> {
    use schema::rules::dsl;
    Ok(dsl::rules
        .order_by(dsl::name)
        .load::<models::RuleEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn update_rule(conn: &mut SqliteConnection, rule: &Rule) -> Result<()> {
    use schema::rules::dsl;
    let count = diesel::update(dsl::rules.filter(dsl::id.eq(rule.id.as_str())))
        .set(&models::RuleEntity::from(rule))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_rule(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::rules::dsl;
    let count = diesel::delete(dsl::rules.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}
