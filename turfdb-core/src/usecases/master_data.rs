use super::{error::NotFoundExt, prelude::*};
use crate::util::validate::is_blank;

#[derive(Debug, Clone, Default)]
pub struct NewAmenity {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

pub fn create_amenity<R>(repo: &R, new_amenity: NewAmenity) -> Result<Amenity>
where
    R: AmenityRepo,
{
    if is_blank(&new_amenity.name) {
        return Err(Error::AmenityName);
    }
    let amenity = Amenity {
        id: Id::new(),
        name: new_amenity.name,
        description: new_amenity.description.unwrap_or_default(),
        icon: new_amenity.icon.unwrap_or_default(),
    };
    repo.create_amenity(&amenity)?;
    Ok(amenity)
}

#[derive(Debug, Clone, Default)]
pub struct AmenityUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

pub fn update_amenity<R>(repo: &R, id: &str, update: AmenityUpdate) -> Result<Amenity>
where
    R: AmenityRepo,
{
    let mut amenity = repo.get_amenity(id).or_not_found(Error::AmenityNotFound)?;
    if let Some(name) = update.name {
        if is_blank(&name) {
            return Err(Error::AmenityName);
        }
        amenity.name = name;
    }
    if let Some(description) = update.description {
        amenity.description = description;
    }
    if let Some(icon) = update.icon {
        amenity.icon = icon;
    }
    repo.update_amenity(&amenity)?;
    Ok(amenity)
}

pub fn delete_amenity<R>(repo: &R, id: &str) -> Result<()>
where
    R: AmenityRepo,
{
    repo.delete_amenity(id).or_not_found(Error::AmenityNotFound)
}

#[derive(Debug, Clone, Default)]
pub struct NewRule {
    pub name: String,
    pub description: Option<String>,
}

fn check_rule_name(name: &str) -> Result<()> {
    if is_blank(name) {
        return Err(Error::RuleName);
    }
    Ok(())
}

pub fn create_rule<R>(repo: &R, new_rule: NewRule) -> Result<Rule>
where
    R: RuleRepo,
{
    check_rule_name(&new_rule.name)?;
    let rule = Rule {
        id: Id::new(),
        name: new_rule.name,
        description: new_rule.description.unwrap_or_default(),
    };
    repo.create_rule(&rule)?;
    Ok(rule)
}

/// Replace name and description of a rule.
pub fn update_rule<R>(repo: &R, id: &str, rule: NewRule) -> Result<Rule>
where
    R: RuleRepo,
{
    check_rule_name(&rule.name)?;
    let mut existing = repo.get_rule(id).or_not_found(Error::RuleNotFound)?;
    existing.name = rule.name;
    existing.description = rule.description.unwrap_or_default();
    repo.update_rule(&existing)?;
    Ok(existing)
}

pub fn delete_rule<R>(repo: &R, id: &str) -> Result<()>
where
    R: RuleRepo,
{
    repo.delete_rule(id).or_not_found(Error::RuleNotFound)
}
