use passwords::PasswordGenerator;
use rand::Rng;

use super::{error::NotFoundExt, prelude::*};
use crate::util::validate::{self, is_blank};

const VENDOR_EMAIL_DOMAIN: &str = "venuemgmt.com";
const MAX_VENDOR_EMAIL_ATTEMPTS: usize = 100;

const PW_GEN: PasswordGenerator = PasswordGenerator {
    length: 8,
    numbers: true,
    lowercase_letters: true,
    uppercase_letters: false,
    symbols: false,
    strict: true,
    exclude_similar_characters: true,
    spaces: false,
};

#[derive(Debug, Clone, Default)]
pub struct NewVendor {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub gps_url: String,
}

/// Check the input before the GPS link is resolved.
pub fn check_new_vendor(new_vendor: &NewVendor) -> Result<()> {
    let NewVendor {
        name,
        phone,
        location,
        gps_url,
    } = new_vendor;
    if [name, phone, location, gps_url].into_iter().any(|s| is_blank(s)) {
        return Err(Error::MissingFields);
    }
    Ok(())
}

/// The generated login of a new vendor.
///
/// This is the only place where the plain password is available.
#[derive(Debug, Clone)]
pub struct VendorLogin {
    pub email: EmailAddress,
    pub password: String,
}

pub fn create_new_vendor<R>(
    repo: &R,
    new_vendor: NewVendor,
    coordinates: Coordinate,
) -> Result<(Vendor, VendorLogin)>
where
    R: VendorRepo,
{
    check_new_vendor(&new_vendor)?;
    let NewVendor {
        name,
        phone,
        location,
        gps_url,
    } = new_vendor;
    let email = generate_vendor_email(repo)?;
    let plain_password = PW_GEN.generate_one().map_err(|err| {
        log::error!("Failed to generate a vendor password: {err}");
        Error::VendorLogin
    })?;
    let vendor = Vendor {
        id: Id::new(),
        name,
        email: email.clone(),
        phone,
        password: plain_password.parse()?,
        location,
        gps_url,
        coordinates,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new vendor: id = {}, email = {}", vendor.id, vendor.email);
    repo.create_vendor(&vendor)?;
    let login = VendorLogin {
        email,
        password: plain_password,
    };
    Ok((vendor, login))
}

fn generate_vendor_email<R>(repo: &R) -> Result<EmailAddress>
where
    R: VendorRepo,
{
    let mut rng = rand::thread_rng();
    for _ in 0..MAX_VENDOR_EMAIL_ATTEMPTS {
        let nr: u16 = rng.gen_range(1000..10_000);
        let email = EmailAddress::new_unchecked(format!("vendor_{nr}@{VENDOR_EMAIL_DOMAIN}"));
        if repo.try_get_vendor_by_email(&email)?.is_none() {
            return Ok(email);
        }
    }
    log::warn!("No unused vendor email found after {MAX_VENDOR_EMAIL_ATTEMPTS} attempts");
    Err(Error::VendorLogin)
}

pub fn list_vendors<R>(repo: &R) -> Result<Vec<Vendor>>
where
    R: VendorRepo,
{
    let vendors = repo.all_vendors()?;
    if vendors.is_empty() {
        return Err(Error::NoVendors);
    }
    Ok(vendors)
}

pub fn get_vendor<R>(repo: &R, vendor_id: &str) -> Result<Vendor>
where
    R: VendorRepo,
{
    repo.get_vendor(vendor_id).or_not_found(Error::VendorNotFound)
}

/// Partial update of a vendor; blank values are ignored.
#[derive(Debug, Clone, Default)]
pub struct VendorUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub gps_url: Option<String>,
}

impl VendorUpdate {
    fn without_blanks(self) -> Self {
        let keep = |s: Option<String>| s.filter(|s| !is_blank(s));
        Self {
            name: keep(self.name),
            phone: keep(self.phone),
            location: keep(self.location),
            email: keep(self.email),
            password: keep(self.password),
            gps_url: keep(self.gps_url),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.gps_url.is_none()
    }
}

/// Check the input before a new GPS link is resolved.
pub fn check_vendor_update(update: VendorUpdate) -> Result<VendorUpdate> {
    let update = update.without_blanks();
    if let Some(email) = &update.email {
        if !validate::is_valid_email(email.trim()) {
            return Err(Error::EmailAddress);
        }
    }
    if let Some(password) = &update.password {
        if password.chars().count() < Password::min_len() {
            return Err(Error::Password);
        }
    }
    if update.is_empty() {
        return Err(Error::NothingToUpdate);
    }
    Ok(update)
}

/// The values that have actually been changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatedVendorFields {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub email: Option<EmailAddress>,
    pub password_changed: bool,
    pub gps_url: Option<String>,
    pub coordinates: Option<Coordinate>,
}

pub fn update_vendor<R>(
    repo: &R,
    vendor_id: &str,
    update: VendorUpdate,
    coordinates: Option<Coordinate>,
) -> Result<UpdatedVendorFields>
where
    R: VendorRepo,
{
    let mut vendor = get_vendor(repo, vendor_id)?;
    let VendorUpdate {
        name,
        phone,
        location,
        email,
        password,
        gps_url,
    } = check_vendor_update(update)?;
    let email = email.map(|e| e.parse::<EmailAddress>()).transpose()?;
    if let Some(email) = &email {
        if let Some(other) = repo.try_get_vendor_by_email(email)? {
            if other.id != vendor.id {
                return Err(Error::EmailExists);
            }
        }
    }
    if gps_url.is_some() && coordinates.is_none() {
        return Err(Error::CoordinatesNotFound);
    }
    let mut updated = UpdatedVendorFields::default();
    if let Some(name) = name {
        vendor.name = name.clone();
        updated.name = Some(name);
    }
    if let Some(phone) = phone {
        vendor.phone = phone.clone();
        updated.phone = Some(phone);
    }
    if let Some(location) = location {
        vendor.location = location.clone();
        updated.location = Some(location);
    }
    if let Some(email) = email {
        vendor.email = email.clone();
        updated.email = Some(email);
    }
    if let Some(password) = password {
        vendor.password = password.parse()?;
        updated.password_changed = true;
    }
    if let (Some(gps_url), Some(coordinates)) = (gps_url, coordinates) {
        vendor.gps_url = gps_url.clone();
        vendor.coordinates = coordinates;
        updated.gps_url = Some(gps_url);
        updated.coordinates = Some(coordinates);
    }
    log::debug!("Updating vendor {}: {updated:?}", vendor.id);
    repo.update_vendor(&vendor)?;
    Ok(updated)
}

/// Delete a vendor together with all its turfs.
pub fn delete_vendor<R>(repo: &R, vendor_id: &str) -> Result<usize>
where
    R: VendorRepo + TurfRepo,
{
    let vendor = get_vendor(repo, vendor_id)?;
    let deleted_turfs = repo.delete_turfs_of_vendor(vendor.id.as_str())?;
    repo.delete_vendor(vendor.id.as_str())?;
    log::info!(
        "Deleted vendor {} and {deleted_turfs} turf(s)",
        vendor.id
    );
    Ok(deleted_turfs)
}
