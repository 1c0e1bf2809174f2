use crate::id::Id;

/// A house rule of a turf, e.g. "No smoking".
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id          : Id,
    pub name        : String,
    pub description : String,
}
