///////////////////////////////////////////////////////////////////////
// Admins
///////////////////////////////////////////////////////////////////////

table! {
    admins (id) {
        id -> Text,
        email -> Text,
        password -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Vendors & turfs
///////////////////////////////////////////////////////////////////////

table! {
    vendors (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        phone -> Text,
        password -> Text,
        location -> Text,
        gps_url -> Text,
        lat -> Double,
        lng -> Double,
        created_at -> BigInt,
    }
}

table! {
    turfs (id) {
        id -> Text,
        vendor_id -> Text,
        title -> Text,
        address -> Text,
        description -> Text,
        sports -> Text,
        amenities -> Text,
        rules -> Text,
        images -> Text,
        vendor_location -> Text,
        vendor_gps_url -> Text,
        vendor_lat -> Nullable<Double>,
        vendor_lng -> Nullable<Double>,
        cancellation_hours -> Integer,
        featured -> Bool,
        suspended -> Bool,
        deleted -> Bool,
        created_at -> BigInt,
    }
}

joinable!(turfs -> vendors (vendor_id));

///////////////////////////////////////////////////////////////////////
// Master data
///////////////////////////////////////////////////////////////////////

table! {
    amenities (id) {
        id -> Text,
        name -> Text,
        description -> Text,
        icon -> Text,
    }
}

table! {
    rules (id) {
        id -> Text,
        name -> Text,
        description -> Text,
    }
}

table! {
    tax_rate (id) {
        id -> Integer,
        percentage -> Double,
        updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Customers & bookings
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        name -> Text,
        email -> Nullable<Text>,
        phone -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    bookings (id) {
        id -> Text,
        user_id -> Text,
        vendor_id -> Text,
        turf_id -> Text,
        sport -> Text,
        court -> Nullable<Text>,
        date -> Text,
        slots -> Text,
        amount -> Double,
        status -> Text,
        created_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(admins, vendors, turfs, amenities, rules, tax_rate, users, bookings);
