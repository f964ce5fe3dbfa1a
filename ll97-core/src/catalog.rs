//! Fixed option lists and field descriptors the form presents verbatim.
//!
//! These are part of the external contract: the dropdown values are stored
//! and submitted exactly as listed here, and the descriptor names double as
//! the wire names of [`crate::FormRecord`]'s utility fields.

/// One entry in the account dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Accounts the service recognizes, in display order.
pub const ACCOUNTS: &[AccountOption] = &[
    AccountOption {
        id: "12345",
        label: "Account 12345",
    },
    AccountOption {
        id: "67890",
        label: "Account 67890",
    },
    AccountOption {
        id: "11223",
        label: "Account 11223",
    },
];

/// Building-use categories, in display order.
pub const BUILDING_TYPES: &[&str] = &[
    "Adult Education",
    "Ambulatory Surgical Center",
    "Automobile Dealership",
    "Bank Branch",
    "Bowling Alley",
    "College/University",
    "Convenience Store without Gas Station",
    "Courthouse",
    "Data Center",
    "Distribution Center",
    "Enclosed Mall",
    "Financial Office",
    "Fitness Center/Health Club/Gym",
    "Food Sales",
    "Food Service",
    "Hospital (General Medical & Surgical)",
    "Hotel",
    "K-12 School",
    "Laboratory",
    "Library",
    "Lifestyle Center",
    "Mailing Center/Post Office",
    "Manufacturing/Industrial Plant",
    "Medical Office",
    "Movie Theater",
    "Multifamily Housing",
    "Museum",
    "Non-Refrigerated Warehouse",
    "Office",
    "Other - Education",
    "Other - Entertainment/Public Assembly",
    "Other - Lodging/Residential",
    "Other - Mall",
    "Other - Public Services",
    "Other - Recreation",
    "Other - Restaurant/Bar",
    "Other - Services",
    "Other - Specialty Hospital",
    "Other - Technology/Science",
    "Outpatient Rehabilitation/Physical Therapy",
    "Parking",
];

/// What a numeric utility control collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A consumed quantity (kWh, therms, gallons, ...).
    Usage,
    /// The per-unit cost paired with the preceding usage field.
    Rate,
}

/// A `(wire name, label, kind)` descriptor for one numeric utility input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// The utility inputs, in display order: each usage quantity immediately
/// followed by its per-unit cost.
pub const UTILITY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "electricity",
        label: "Electricity (kWh)",
        kind: FieldKind::Usage,
    },
    FieldDescriptor {
        name: "electricityRate",
        label: "$/kWh",
        kind: FieldKind::Rate,
    },
    FieldDescriptor {
        name: "naturalGas",
        label: "Natural Gas (therms)",
        kind: FieldKind::Usage,
    },
    FieldDescriptor {
        name: "naturalGasRate",
        label: "$/therm",
        kind: FieldKind::Rate,
    },
    FieldDescriptor {
        name: "steam",
        label: "Steam (mLbs)",
        kind: FieldKind::Usage,
    },
    FieldDescriptor {
        name: "steamRate",
        label: "$/mLb",
        kind: FieldKind::Rate,
    },
    FieldDescriptor {
        name: "fuelOil2",
        label: "Fuel/Oil #2 (gal)",
        kind: FieldKind::Usage,
    },
    FieldDescriptor {
        name: "fuelOil2Rate",
        label: "$/gal",
        kind: FieldKind::Rate,
    },
    FieldDescriptor {
        name: "fuelOil4",
        label: "Fuel/Oil #4 (gal)",
        kind: FieldKind::Usage,
    },
    FieldDescriptor {
        name: "fuelOil4Rate",
        label: "$/gal",
        kind: FieldKind::Rate,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accounts_are_labeled_by_id() {
        assert_eq!(ACCOUNTS.len(), 3);
        for account in ACCOUNTS {
            assert_eq!(account.label, format!("Account {}", account.id));
        }
    }

    #[test]
    fn building_types_keep_listed_order() {
        assert_eq!(BUILDING_TYPES.len(), 41);
        assert_eq!(BUILDING_TYPES.first(), Some(&"Adult Education"));
        assert_eq!(BUILDING_TYPES.last(), Some(&"Parking"));
        assert!(BUILDING_TYPES.contains(&"Office"));
    }

    #[test]
    fn building_types_have_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for building_type in BUILDING_TYPES {
            assert!(seen.insert(building_type), "duplicate entry: {building_type}");
        }
    }

    #[test]
    fn utility_fields_pair_usage_with_rate() {
        assert_eq!(UTILITY_FIELDS.len(), 10);
        for pair in UTILITY_FIELDS.chunks(2) {
            assert_eq!(pair[0].kind, FieldKind::Usage);
            assert_eq!(pair[1].kind, FieldKind::Rate);
            assert_eq!(pair[1].name, format!("{}Rate", pair[0].name));
        }
    }
}
