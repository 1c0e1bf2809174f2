use super::*;

impl_for_connections!(TaxRepo {
    fn set_tax_rate(&self, rate: &TaxRate) -> Result<()> {
        set_tax_rate(&mut *self.writable_conn()?, rate)
    }
    fn get_tax_rate(&self) -> Result<Option<TaxRate>> {
        get_tax_rate(&mut self.sqlite_conn())
    }
});

// The table holds at most a single row that is replaced.
fn set_tax_rate(conn: &mut SqliteConnection, rate: &TaxRate) -> Result<()> {
    diesel::replace_into(schema::tax_rate::table)
        .values(&models::TaxRateEntity::from(rate))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_tax_rate(conn: &mut SqliteConnection) -> Result<Option<TaxRate>> {
    use schema::tax_rate::dsl;
    Ok(dsl::tax_rate
        .filter(dsl::id.eq(models::TAX_RATE_ROW_ID))
        .first::<models::TaxRateEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
