use std::{cell::RefCell, sync::Mutex};

use async_trait::async_trait;

use super::prelude::*;
use crate::gateways::short_link::{ResolutionFailed, ShortLinkGateway};

type RepoResult<T> = std::result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

macro_rules! impl_key {
    ($($t:ty),*) => {
        $(impl Key for $t {
            fn key(&self) -> &str {
                self.id.as_str()
            }
        })*
    };
}

impl_key!(Admin, Vendor, Turf, Amenity, Rule, Booking, User);

#[derive(Default)]
pub struct MockDb {
    pub admins: RefCell<Vec<Admin>>,
    pub vendors: RefCell<Vec<Vendor>>,
    pub turfs: RefCell<Vec<Turf>>,
    pub amenities: RefCell<Vec<Amenity>>,
    pub rules: RefCell<Vec<Rule>>,
    pub bookings: RefCell<Vec<Booking>>,
    pub users: RefCell<Vec<User>>,
    pub tax: RefCell<Option<TaxRate>>,
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    match objects.iter().position(|x| x.key() == e.key()) {
        Some(pos) => {
            objects[pos] = e.clone();
            Ok(())
        }
        None => Err(RepoError::NotFound),
    }
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    match objects.iter().position(|x| x.key() == id) {
        Some(pos) => {
            objects.remove(pos);
            Ok(())
        }
        None => Err(RepoError::NotFound),
    }
}

impl AdminRepo for MockDb {
    fn create_admin(&self, admin: &Admin) -> RepoResult<()> {
        create(&mut self.admins.borrow_mut(), admin.clone())
    }
    fn try_get_admin_by_email(&self, email: &EmailAddress) -> RepoResult<Option<Admin>> {
        Ok(self
            .admins
            .borrow()
            .iter()
            .find(|a| &a.email == email)
            .cloned())
    }
}

impl VendorRepo for MockDb {
    fn create_vendor(&self, vendor: &Vendor) -> RepoResult<()> {
        create(&mut self.vendors.borrow_mut(), vendor.clone())
    }
    fn get_vendor(&self, id: &str) -> RepoResult<Vendor> {
        get(&self.vendors.borrow(), id)
    }
    fn try_get_vendor_by_email(&self, email: &EmailAddress) -> RepoResult<Option<Vendor>> {
        Ok(self
            .vendors
            .borrow()
            .iter()
            .find(|v| &v.email == email)
            .cloned())
    }
    fn all_vendors(&self) -> RepoResult<Vec<Vendor>> {
        Ok(self.vendors.borrow().clone())
    }
    fn update_vendor(&self, vendor: &Vendor) -> RepoResult<()> {
        update(&mut self.vendors.borrow_mut(), vendor)
    }
    fn delete_vendor(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.vendors.borrow_mut(), id)
    }
}

impl TurfRepo for MockDb {
    fn create_turf(&self, turf: &Turf) -> RepoResult<()> {
        create(&mut self.turfs.borrow_mut(), turf.clone())
    }
    fn get_turf(&self, vendor_id: &str, turf_id: &str) -> RepoResult<Turf> {
        get(&self.turfs.borrow(), turf_id)
            .and_then(|t| {
                if t.vendor_id.as_str() == vendor_id && !t.deleted {
                    Ok(t)
                } else {
                    Err(RepoError::NotFound)
                }
            })
    }
    fn turfs_of_vendor(&self, vendor_id: &str) -> RepoResult<Vec<Turf>> {
        Ok(self
            .turfs
            .borrow()
            .iter()
            .filter(|t| t.vendor_id.as_str() == vendor_id && !t.deleted)
            .cloned()
            .collect())
    }
    fn all_turfs(&self) -> RepoResult<Vec<Turf>> {
        Ok(self
            .turfs
            .borrow()
            .iter()
            .filter(|t| !t.deleted)
            .cloned()
            .collect())
    }
    fn update_turf(&self, turf: &Turf) -> RepoResult<()> {
        update(&mut self.turfs.borrow_mut(), turf)
    }
    fn delete_turfs_of_vendor(&self, vendor_id: &str) -> RepoResult<usize> {
        let mut turfs = self.turfs.borrow_mut();
        let count = turfs.len();
        turfs.retain(|t| t.vendor_id.as_str() != vendor_id);
        Ok(count - turfs.len())
    }
}

impl AmenityRepo for MockDb {
    fn create_amenity(&self, amenity: &Amenity) -> RepoResult<()> {
        create(&mut self.amenities.borrow_mut(), amenity.clone())
    }
    fn get_amenity(&self, id: &str) -> RepoResult<Amenity> {
        get(&self.amenities.borrow(), id)
    }
    fn all_amenities(&self) -> RepoResult<Vec<Amenity>> {
        Ok(self.amenities.borrow().clone())
    }
    fn update_amenity(&self, amenity: &Amenity) -> RepoResult<()> {
        update(&mut self.amenities.borrow_mut(), amenity)
    }
    fn delete_amenity(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.amenities.borrow_mut(), id)
    }
}

impl RuleRepo for MockDb {
    fn create_rule(&self, rule: &Rule) -> RepoResult<()> {
        create(&mut self.rules.borrow_mut(), rule.clone())
    }
    fn get_rule(&self, id: &str) -> RepoResult<Rule> {
        get(&self.rules.borrow(), id)
    }
    fn all_rules(&self) -> RepoResult<Vec<Rule>> {
        Ok(self.rules.borrow().clone())
    }
    fn update_rule(&self, rule: &Rule) -> RepoResult<()> {
        update(&mut self.rules.borrow_mut(), rule)
    }
    fn delete_rule(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.rules.borrow_mut(), id)
    }
}

impl BookingRepo for MockDb {
    fn create_booking(&self, booking: &Booking) -> RepoResult<()> {
        create(&mut self.bookings.borrow_mut(), booking.clone())
    }
    fn get_booking(&self, id: &str) -> RepoResult<Booking> {
        get(&self.bookings.borrow(), id)
    }
    fn all_bookings(&self) -> RepoResult<Vec<Booking>> {
        Ok(self.bookings.borrow().clone())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
}

impl TaxRepo for MockDb {
    fn set_tax_rate(&self, rate: &TaxRate) -> RepoResult<()> {
        *self.tax.borrow_mut() = Some(*rate);
        Ok(())
    }
    fn get_tax_rate(&self) -> RepoResult<Option<TaxRate>> {
        Ok(*self.tax.borrow())
    }
}

/// Resolves every link to a fixed target or fails.
pub struct DummyShortLinkGateway {
    target: Option<String>,
    requested: Mutex<Vec<String>>,
}

impl DummyShortLinkGateway {
    pub fn redirect(target: &str) -> Self {
        Self {
            target: Some(target.to_owned()),
            requested: Default::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            target: None,
            requested: Default::default(),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortLinkGateway for DummyShortLinkGateway {
    async fn resolve_short_url(&self, url: &str) -> std::result::Result<String, ResolutionFailed> {
        self.requested.lock().unwrap().push(url.to_owned());
        self.target
            .clone()
            .ok_or_else(|| ResolutionFailed::new(url, "network unreachable"))
    }
}
