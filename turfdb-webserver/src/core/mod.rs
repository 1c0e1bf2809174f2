pub use turfdb_core::repositories;

pub mod entities {
    pub use turfdb_core::entities::*;
    #[cfg(test)]
    pub use turfdb_entities::builders::*;
}

pub mod usecases {
    pub use turfdb_core::usecases::*;
}

pub mod prelude {
    pub use super::{entities::*, repositories::*};
}
