use std::collections::HashMap;

use super::{error::NotFoundExt, get_vendor, prelude::*};
use crate::util::validate::{is_blank, Validate};

#[derive(Debug, Clone, Default)]
pub struct NewTiming {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewSport {
    pub name: String,
    pub slot_price: f64,
    pub discounted_price: Option<f64>,
    pub weekend_price: Option<f64>,
    pub timings: Vec<NewTiming>,
    pub courts: Vec<String>,
}

impl NewSport {
    fn parse(self) -> Result<Sport> {
        let timings = self
            .timings
            .into_iter()
            .map(|t| -> Result<Timing> {
                Ok(Timing {
                    start: t.start.parse()?,
                    end: t.end.parse()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let sport = Sport {
            name: self.name.trim().to_owned(),
            slot_price: self.slot_price,
            discounted_price: self.discounted_price.unwrap_or_default(),
            weekend_price: self.weekend_price.unwrap_or_default(),
            timings,
            courts: self.courts,
        };
        sport.validate()?;
        Ok(sport)
    }
}

fn parse_sports(sports: Vec<NewSport>) -> Result<Vec<Sport>> {
    sports.into_iter().map(NewSport::parse).collect()
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewTurf {
    pub title              : String,
    pub address            : String,
    pub description        : String,
    pub sports             : Option<Vec<NewSport>>,
    /// Ids of master data amenities
    pub amenities          : Option<Vec<String>>,
    /// Ids of master data rules
    pub rules              : Option<Vec<String>>,
    pub images             : Option<Vec<String>>,
    pub cancellation_hours : u32,
    pub featured           : bool,
}

/// Load the amenities with the given ids, ignoring unknown ones.
fn resolve_amenities<R>(repo: &R, ids: &[String]) -> Result<Vec<Amenity>>
where
    R: AmenityRepo,
{
    let mut amenities = Vec::with_capacity(ids.len());
    for id in ids {
        match repo.get_amenity(id) {
            Ok(amenity) => amenities.push(amenity),
            Err(RepoError::NotFound) => log::debug!("Ignoring unknown amenity {id}"),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(amenities)
}

/// Load the rules with the given ids, ignoring unknown ones.
fn resolve_rules<R>(repo: &R, ids: &[String]) -> Result<Vec<Rule>>
where
    R: RuleRepo,
{
    let mut rules = Vec::with_capacity(ids.len());
    for id in ids {
        match repo.get_rule(id) {
            Ok(rule) => rules.push(rule),
            Err(RepoError::NotFound) => log::debug!("Ignoring unknown rule {id}"),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(rules)
}

pub fn create_new_turf<R>(repo: &R, vendor_id: &str, new_turf: NewTurf) -> Result<Turf>
where
    R: VendorRepo + TurfRepo + AmenityRepo + RuleRepo,
{
    let NewTurf {
        title,
        address,
        description,
        sports,
        amenities,
        rules,
        images,
        cancellation_hours,
        featured,
    } = new_turf;
    if [&title, &address, &description]
        .into_iter()
        .any(|s| is_blank(s))
    {
        return Err(Error::MissingTurfFields);
    }
    let (Some(sports), Some(amenities), Some(rules), Some(images)) =
        (sports, amenities, rules, images)
    else {
        return Err(Error::MissingTurfFields);
    };
    let vendor = get_vendor(repo, vendor_id)?;
    let turf = Turf {
        id: Id::new(),
        vendor_id: vendor.id,
        title,
        address,
        description,
        sports: parse_sports(sports)?,
        amenities: resolve_amenities(repo, &amenities)?,
        rules: resolve_rules(repo, &rules)?,
        images,
        vendor_location: vendor.location,
        vendor_gps_url: vendor.gps_url,
        vendor_coordinates: Some(vendor.coordinates),
        cancellation_hours,
        featured,
        suspended: false,
        deleted: false,
        created_at: Timestamp::now(),
    };
    turf.validate()?;
    log::debug!("Creating new turf {} of vendor {}", turf.id, turf.vendor_id);
    repo.create_turf(&turf)?;
    Ok(turf)
}

pub fn get_turf<R>(repo: &R, vendor_id: &str, turf_id: &str) -> Result<Turf>
where
    R: TurfRepo,
{
    repo.get_turf(vendor_id, turf_id)
        .or_not_found(Error::TurfNotFound)
}

/// Earliest start and latest end of all sport timings.
pub fn opening_hours(turf: &Turf) -> Option<(SlotTime, SlotTime)> {
    let open = turf.timings().map(|t| t.start).min()?;
    let close = turf.timings().map(|t| t.end).max()?;
    Some((open, close))
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct TurfSummary {
    pub turf_id            : Id,
    pub vendor_id          : Id,
    pub title              : String,
    pub description        : String,
    pub vendor_name        : String,
    pub phone              : String,
    pub location           : String,
    pub courts_count       : usize,
    pub open_time          : Option<SlotTime>,
    pub close_time         : Option<SlotTime>,
    pub created_at         : Timestamp,
    pub thumbnail          : Option<String>,
    pub cancellation_hours : u32,
    pub featured           : bool,
    pub suspended          : bool,
}

pub fn summarize_turf(vendor: &Vendor, turf: &Turf) -> TurfSummary {
    let hours = opening_hours(turf);
    TurfSummary {
        turf_id: turf.id.clone(),
        vendor_id: turf.vendor_id.clone(),
        title: turf.title.clone(),
        description: turf.description.clone(),
        vendor_name: vendor.name.clone(),
        phone: vendor.phone.clone(),
        location: vendor.location.clone(),
        courts_count: turf.courts_count(),
        open_time: hours.map(|(open, _)| open),
        close_time: hours.map(|(_, close)| close),
        created_at: turf.created_at,
        thumbnail: turf.thumbnail().map(ToOwned::to_owned),
        cancellation_hours: turf.cancellation_hours,
        featured: turf.featured,
        suspended: turf.suspended,
    }
}

pub fn list_turfs_of_vendor<R>(repo: &R, vendor_id: &str) -> Result<Vec<TurfSummary>>
where
    R: VendorRepo + TurfRepo,
{
    let vendor = get_vendor(repo, vendor_id)?;
    let turfs = repo.turfs_of_vendor(vendor.id.as_str())?;
    Ok(turfs.iter().map(|t| summarize_turf(&vendor, t)).collect())
}

pub fn list_all_turfs<R>(repo: &R) -> Result<Vec<TurfSummary>>
where
    R: VendorRepo + TurfRepo,
{
    let vendors: HashMap<_, _> = repo
        .all_vendors()?
        .into_iter()
        .map(|v| (v.id.clone(), v))
        .collect();
    let summaries = repo
        .all_turfs()?
        .iter()
        .filter_map(|turf| {
            let vendor = vendors.get(&turf.vendor_id);
            if vendor.is_none() {
                log::warn!("Turf {} without vendor {}", turf.id, turf.vendor_id);
            }
            vendor.map(|v| summarize_turf(v, turf))
        })
        .collect();
    Ok(summaries)
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct TurfUpdate {
    pub title              : Option<String>,
    pub address            : Option<String>,
    pub description        : Option<String>,
    pub sports             : Option<Vec<NewSport>>,
    pub amenities          : Option<Vec<String>>,
    pub rules              : Option<Vec<String>>,
    pub images             : Option<Vec<String>>,
    pub cancellation_hours : Option<u32>,
    pub featured           : Option<bool>,
}

impl TurfUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.address.is_none()
            && self.description.is_none()
            && self.sports.is_none()
            && self.amenities.is_none()
            && self.rules.is_none()
            && self.images.is_none()
            && self.cancellation_hours.is_none()
            && self.featured.is_none()
    }
}

pub fn update_turf<R>(repo: &R, vendor_id: &str, turf_id: &str, update: TurfUpdate) -> Result<Turf>
where
    R: TurfRepo + AmenityRepo + RuleRepo,
{
    let mut turf = get_turf(repo, vendor_id, turf_id)?;
    if update.is_empty() {
        return Err(Error::NothingToUpdate);
    }
    let TurfUpdate {
        title,
        address,
        description,
        sports,
        amenities,
        rules,
        images,
        cancellation_hours,
        featured,
    } = update;
    if let Some(title) = title {
        turf.title = title;
    }
    if let Some(address) = address {
        turf.address = address;
    }
    if let Some(description) = description {
        turf.description = description;
    }
    if let Some(sports) = sports {
        turf.sports = parse_sports(sports)?;
    }
    if let Some(ids) = amenities {
        turf.amenities = resolve_amenities(repo, &ids)?;
    }
    if let Some(ids) = rules {
        turf.rules = resolve_rules(repo, &ids)?;
    }
    if let Some(images) = images {
        turf.images = images;
    }
    if let Some(hours) = cancellation_hours {
        turf.cancellation_hours = hours;
    }
    if let Some(featured) = featured {
        turf.featured = featured;
    }
    turf.validate()?;
    repo.update_turf(&turf)?;
    Ok(turf)
}

pub fn set_turf_suspended<R>(
    repo: &R,
    vendor_id: &str,
    turf_id: &str,
    suspended: bool,
) -> Result<Turf>
where
    R: TurfRepo,
{
    let mut turf = get_turf(repo, vendor_id, turf_id)?;
    turf.suspended = suspended;
    repo.update_turf(&turf)?;
    log::info!(
        "Turf {} has been {}",
        turf.id,
        if suspended { "suspended" } else { "unsuspended" }
    );
    Ok(turf)
}

/// Flag a turf as deleted.
pub fn delete_turf<R>(repo: &R, vendor_id: &str, turf_id: &str) -> Result<()>
where
    R: TurfRepo,
{
    let mut turf = get_turf(repo, vendor_id, turf_id)?;
    turf.deleted = true;
    repo.update_turf(&turf)?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurfRules {
    pub turf_id: Id,
    pub title: String,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurfAmenities {
    pub turf_id: Id,
    pub title: String,
    pub amenities: Vec<Amenity>,
}

pub fn rules_of_all_turfs<R>(repo: &R) -> Result<Vec<TurfRules>>
where
    R: TurfRepo,
{
    Ok(repo
        .all_turfs()?
        .into_iter()
        .map(|t| TurfRules {
            turf_id: t.id,
            title: t.title,
            rules: t.rules,
        })
        .collect())
}

pub fn amenities_of_all_turfs<R>(repo: &R) -> Result<Vec<TurfAmenities>>
where
    R: TurfRepo,
{
    Ok(repo
        .all_turfs()?
        .into_iter()
        .map(|t| TurfAmenities {
            turf_id: t.id,
            title: t.title,
            amenities: t.amenities,
        })
        .collect())
}

/// Remove rules from a turf and return the remaining ones.
pub fn remove_turf_rules<R>(
    repo: &R,
    vendor_id: &str,
    turf_id: &str,
    rule_ids: &[String],
) -> Result<Vec<Rule>>
where
    R: TurfRepo,
{
    let mut turf = get_turf(repo, vendor_id, turf_id)?;
    turf.rules.retain(|r| !rule_ids.iter().any(|id| r.id.as_str() == id));
    repo.update_turf(&turf)?;
    Ok(turf.rules)
}

/// Remove amenities from a turf and return the remaining ones.
pub fn remove_turf_amenities<R>(
    repo: &R,
    vendor_id: &str,
    turf_id: &str,
    amenity_ids: &[String],
) -> Result<Vec<Amenity>>
where
    R: TurfRepo,
{
    let mut turf = get_turf(repo, vendor_id, turf_id)?;
    turf.amenities
        .retain(|a| !amenity_ids.iter().any(|id| a.id.as_str() == id));
    repo.update_turf(&turf)?;
    Ok(turf.amenities)
}

#[cfg(test)]
mod tests {
    use turfdb_entities::builders::*;

    use super::{super::tests::MockDb, *};

    fn slot(s: &str) -> SlotTime {
        s.parse().unwrap()
    }

    fn football() -> NewSport {
        NewSport {
            name: "Football".into(),
            slot_price: 500.0,
            discounted_price: Some(400.0),
            weekend_price: None,
            timings: vec![
                NewTiming {
                    start: "06:00".into(),
                    end: "10:00".into(),
                },
                NewTiming {
                    start: "16:00".into(),
                    end: "22:00".into(),
                },
            ],
            courts: vec!["Court A".into(), "Court B".into()],
        }
    }

    fn new_turf() -> NewTurf {
        NewTurf {
            title: "Green Arena".into(),
            address: "Sector V, Salt Lake".into(),
            description: "Floodlit 5-a-side ground".into(),
            sports: Some(vec![football()]),
            amenities: Some(vec!["a1".into(), "unknown".into()]),
            rules: Some(vec!["r1".into()]),
            images: Some(vec![
                "https://img.example/1.jpg".into(),
                "https://img.example/2.jpg".into(),
            ]),
            cancellation_hours: 4,
            featured: true,
        }
    }

    fn setup() -> MockDb {
        let db = MockDb::default();
        db.create_vendor(
            &Vendor::build()
                .id("v1")
                .name("Green Field Sports")
                .phone("9876543210")
                .location("Kolkata")
                .gps_url("https://maps.app.goo.gl/AbC")
                .coordinates(22.5726, 88.3639)
                .finish(),
        )
        .unwrap();
        db.create_amenity(&Amenity {
            id: "a1".into(),
            name: "Parking".into(),
            description: "".into(),
            icon: "car".into(),
        })
        .unwrap();
        db.create_rule(&Rule {
            id: "r1".into(),
            name: "No smoking".into(),
            description: "".into(),
        })
        .unwrap();
        db
    }

    #[test]
    fn create_turf_with_vendor_location() {
        let db = setup();
        let turf = create_new_turf(&db, "v1", new_turf()).unwrap();
        assert_eq!(turf.vendor_id.as_str(), "v1");
        assert_eq!(turf.vendor_location, "Kolkata");
        assert_eq!(turf.vendor_gps_url, "https://maps.app.goo.gl/AbC");
        assert_eq!(
            turf.vendor_coordinates.map(Coordinate::to_lat_lng_deg),
            Some((22.5726, 88.3639))
        );
        assert_eq!(turf.amenities.len(), 1);
        assert_eq!(turf.amenities[0].name, "Parking");
        assert_eq!(turf.rules[0].name, "No smoking");
        assert_eq!(turf.sports[0].discounted_price, 400.0);
        assert_eq!(turf.sports[0].weekend_price, 0.0);
        assert!(!turf.suspended);
        assert_eq!(db.get_turf("v1", turf.id.as_str()).unwrap(), turf);
    }

    #[test]
    fn reject_invalid_new_turfs() {
        let db = setup();
        let missing_title = NewTurf {
            title: "".into(),
            ..new_turf()
        };
        assert!(matches!(
            create_new_turf(&db, "v1", missing_title),
            Err(Error::MissingTurfFields)
        ));
        for missing_list in [
            NewTurf { sports: None, ..new_turf() },
            NewTurf { amenities: None, ..new_turf() },
            NewTurf { rules: None, ..new_turf() },
            NewTurf { images: None, ..new_turf() },
        ] {
            assert!(matches!(
                create_new_turf(&db, "v1", missing_list),
                Err(Error::MissingTurfFields)
            ));
        }
        assert!(matches!(
            create_new_turf(&db, "unknown", new_turf()),
            Err(Error::VendorNotFound)
        ));
        let mut invalid_timing = new_turf();
        invalid_timing.sports.as_mut().unwrap()[0].timings[0].end = "25:00".into();
        assert!(matches!(
            create_new_turf(&db, "v1", invalid_timing),
            Err(Error::Timing)
        ));
        let mut invalid_price = new_turf();
        invalid_price.sports.as_mut().unwrap()[0].slot_price = -1.0;
        assert!(matches!(
            create_new_turf(&db, "v1", invalid_price),
            Err(Error::Price)
        ));
        assert!(db.turfs.borrow().is_empty());
    }

    #[test]
    fn accept_empty_lists_of_new_turf() {
        let db = setup();
        let turf = create_new_turf(
            &db,
            "v1",
            NewTurf {
                sports: Some(vec![]),
                amenities: Some(vec![]),
                rules: Some(vec![]),
                images: Some(vec![]),
                ..new_turf()
            },
        )
        .unwrap();
        assert!(turf.sports.is_empty());
        assert!(turf.images.is_empty());
    }

    #[test]
    fn summarize_turfs() {
        let db = setup();
        let mut turf = new_turf();
        turf.sports.as_mut().unwrap().push(NewSport {
            name: "Cricket".into(),
            timings: vec![NewTiming {
                start: "05:30".into(),
                end: "09:00".into(),
            }],
            courts: vec!["Pitch 1".into()],
            ..Default::default()
        });
        let turf = create_new_turf(&db, "v1", turf).unwrap();
        let hidden = create_new_turf(&db, "v1", new_turf()).unwrap();
        delete_turf(&db, "v1", hidden.id.as_str()).unwrap();

        let summaries = list_turfs_of_vendor(&db, "v1").unwrap();
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.turf_id, turf.id);
        assert_eq!(summary.vendor_name, "Green Field Sports");
        assert_eq!(summary.phone, "9876543210");
        assert_eq!(summary.courts_count, 3);
        assert_eq!(summary.open_time, Some(slot("05:30")));
        assert_eq!(summary.close_time, Some(slot("22:00")));
        assert_eq!(summary.thumbnail.as_deref(), Some("https://img.example/1.jpg"));
        assert_eq!(summary.cancellation_hours, 4);
        assert!(summary.featured);

        assert_eq!(list_all_turfs(&db).unwrap(), summaries);
        assert!(matches!(
            list_turfs_of_vendor(&db, "unknown"),
            Err(Error::VendorNotFound)
        ));
    }

    #[test]
    fn no_opening_hours_without_timings() {
        let turf = Turf::build().finish();
        assert_eq!(opening_hours(&turf), None);
        let turf = Turf::build()
            .sport("Tennis", &[("08:00", "12:00"), ("07:00", "09:00")], &[])
            .finish();
        assert_eq!(opening_hours(&turf), Some((slot("07:00"), slot("12:00"))));
    }

    #[test]
    fn update_turf_partially() {
        let db = setup();
        let turf = create_new_turf(&db, "v1", new_turf()).unwrap();
        let update = TurfUpdate {
            title: Some("Blue Arena".into()),
            rules: Some(vec![]),
            featured: Some(false),
            ..Default::default()
        };
        let updated = update_turf(&db, "v1", turf.id.as_str(), update).unwrap();
        assert_eq!(updated.title, "Blue Arena");
        assert!(updated.rules.is_empty());
        assert!(!updated.featured);
        assert_eq!(updated.address, turf.address);
        assert!(matches!(
            update_turf(&db, "v1", turf.id.as_str(), TurfUpdate::default()),
            Err(Error::NothingToUpdate)
        ));
        assert!(matches!(
            update_turf(&db, "v2", turf.id.as_str(), TurfUpdate::default()),
            Err(Error::TurfNotFound)
        ));
    }

    #[test]
    fn suspend_and_delete_turf() {
        let db = setup();
        let turf = create_new_turf(&db, "v1", new_turf()).unwrap();
        let id = turf.id.as_str();
        assert!(set_turf_suspended(&db, "v1", id, true).unwrap().suspended);
        assert!(db.get_turf("v1", id).unwrap().suspended);
        assert!(!set_turf_suspended(&db, "v1", id, false).unwrap().suspended);

        delete_turf(&db, "v1", id).unwrap();
        assert!(matches!(get_turf(&db, "v1", id), Err(Error::TurfNotFound)));
        assert!(matches!(delete_turf(&db, "v1", id), Err(Error::TurfNotFound)));
        // soft delete
        assert_eq!(db.turfs.borrow().len(), 1);
    }

    #[test]
    fn remove_rules_and_amenities_by_id() {
        let db = setup();
        db.create_amenity(&Amenity {
            id: "a2".into(),
            name: "Showers".into(),
            description: "".into(),
            icon: "".into(),
        })
        .unwrap();
        let turf = create_new_turf(
            &db,
            "v1",
            NewTurf {
                amenities: Some(vec!["a1".into(), "a2".into()]),
                ..new_turf()
            },
        )
        .unwrap();
        let id = turf.id.as_str();

        let remaining = remove_turf_amenities(&db, "v1", id, &["a1".to_string()]).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Showers");
        let remaining = remove_turf_rules(&db, "v1", id, &["r1".to_string(), "rX".to_string()]).unwrap();
        assert!(remaining.is_empty());

        let rules = rules_of_all_turfs(&db).unwrap();
        assert_eq!(rules.len(), 1);
        assert!(rules[0].rules.is_empty());
        let amenities = amenities_of_all_turfs(&db).unwrap();
        assert_eq!(amenities[0].amenities.len(), 1);
    }
}
