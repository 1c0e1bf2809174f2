use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amenity {
    pub id          : Id,
    pub name        : String,
    pub description : String,
    pub icon        : String,
}
