//! Flattened export rows.

use crate::models::PropertyRecord;

/// Column headers, in export order.
pub const COLUMNS: [&str; 12] = [
    "name",
    "description",
    "address",
    "price",
    "property_type",
    "area",
    "energy_rating",
    "transaction_type",
    "latitude",
    "longitude",
    "characteristics",
    "source_url",
];

/// One record as cells matching [`COLUMNS`].
pub fn record_to_row(record: &PropertyRecord) -> [String; 12] {
    [
        record.name.clone(),
        record.description.clone(),
        record.address.clone(),
        record.price.clone(),
        record.property_type.clone(),
        record.area.clone(),
        record.energy_rating.clone(),
        record.transaction_type.clone(),
        record.latitude.clone(),
        record.longitude.clone(),
        record.characteristics.to_delimited(),
        record.source_url.clone(),
    ]
}
