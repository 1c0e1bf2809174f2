use super::prelude::*;

pub fn set_tax_rate<R>(repo: &R, percentage: f64) -> Result<TaxRate>
where
    R: TaxRepo,
{
    if !TaxRate::is_valid_percentage(percentage) {
        return Err(Error::TaxPercentage);
    }
    let rate = TaxRate {
        percentage,
        updated_at: Timestamp::now(),
    };
    repo.set_tax_rate(&rate)?;
    log::info!("Tax rate set to {percentage}%");
    Ok(rate)
}

pub fn get_tax_rate<R>(repo: &R) -> Result<TaxRate>
where
    R: TaxRepo,
{
    repo.get_tax_rate()?.ok_or(Error::TaxRateNotSet)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn set_and_replace_tax_rate() {
        let db = MockDb::default();
        assert!(matches!(get_tax_rate(&db), Err(Error::TaxRateNotSet)));
        set_tax_rate(&db, 18.0).unwrap();
        assert_eq!(get_tax_rate(&db).unwrap().percentage, 18.0);
        set_tax_rate(&db, 0.0).unwrap();
        assert_eq!(get_tax_rate(&db).unwrap().percentage, 0.0);
    }

    #[test]
    fn reject_invalid_percentage() {
        let db = MockDb::default();
        assert!(matches!(set_tax_rate(&db, -0.5), Err(Error::TaxPercentage)));
        assert!(matches!(
            set_tax_rate(&db, f64::INFINITY),
            Err(Error::TaxPercentage)
        ));
        assert!(db.tax.borrow().is_none());
    }
}
