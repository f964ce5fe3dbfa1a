use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One submission of the calculator form.
///
/// Field names serialize to the wire names the endpoint expects. Every
/// field is present in every serialization: numeric fields the user left
/// blank are `0`, never null or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub account_number: String,
    pub building_type: String,
    pub area: Decimal,
    pub electricity: Decimal,
    pub electricity_rate: Decimal,
    pub natural_gas: Decimal,
    pub natural_gas_rate: Decimal,
    pub steam: Decimal,
    pub steam_rate: Decimal,
    pub fuel_oil2: Decimal,
    pub fuel_oil2_rate: Decimal,
    pub fuel_oil4: Decimal,
    pub fuel_oil4_rate: Decimal,
    // The service spells this one with a trailing capital V.
    #[serde(rename = "solarPV")]
    pub solar_pv: Decimal,
}

/// A required selection that was left empty at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{label} is required")]
pub struct MissingField {
    /// Wire name of the field, e.g. `accountNumber`.
    pub name: &'static str,
    /// Human label shown next to the control.
    pub label: &'static str,
}

/// Error returned by [`FormRecord::set_utility`] for a name that is not in
/// [`crate::catalog::UTILITY_FIELDS`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown utility field '{0}'")]
pub struct UnknownField(pub String);

impl FormRecord {
    /// Checks that both required selections were made.
    ///
    /// Only `accountNumber` and `buildingType` are required; every numeric
    /// field is allowed to stay at its default of zero.
    pub fn validate_for_submit(&self) -> Result<(), Vec<MissingField>> {
        let mut errors = Vec::new();

        if self.account_number.trim().is_empty() {
            errors.push(MissingField {
                name: "accountNumber",
                label: "Account Number",
            });
        }
        if self.building_type.trim().is_empty() {
            errors.push(MissingField {
                name: "buildingType",
                label: "Building Type",
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Assigns one of the ten utility fields by its wire name.
    ///
    /// The names accepted here are exactly the descriptor names in
    /// [`crate::catalog::UTILITY_FIELDS`], so a form built from that list
    /// can write its values back without repeating the mapping.
    pub fn set_utility(
        &mut self,
        name: &str,
        value: Decimal,
    ) -> Result<(), UnknownField> {
        match name {
            "electricity" => self.electricity = value,
            "electricityRate" => self.electricity_rate = value,
            "naturalGas" => self.natural_gas = value,
            "naturalGasRate" => self.natural_gas_rate = value,
            "steam" => self.steam = value,
            "steamRate" => self.steam_rate = value,
            "fuelOil2" => self.fuel_oil2 = value,
            "fuelOil2Rate" => self.fuel_oil2_rate = value,
            "fuelOil4" => self.fuel_oil4 = value,
            "fuelOil4Rate" => self.fuel_oil4_rate = value,
            other => return Err(UnknownField(other.to_string())),
        }
        Ok(())
    }
}

impl fmt::Display for FormRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Account number: {}", self.account_number)?;
        writeln!(f, "Building type:  {}", self.building_type)?;
        writeln!(f, "Area:           {} SF", self.area)?;
        writeln!(
            f,
            "Electricity:    {} kWh @ ${}/kWh",
            self.electricity, self.electricity_rate
        )?;
        writeln!(
            f,
            "Natural gas:    {} therms @ ${}/therm",
            self.natural_gas, self.natural_gas_rate
        )?;
        writeln!(
            f,
            "Steam:          {} mLbs @ ${}/mLb",
            self.steam, self.steam_rate
        )?;
        writeln!(
            f,
            "Fuel oil #2:    {} gal @ ${}/gal",
            self.fuel_oil2, self.fuel_oil2_rate
        )?;
        writeln!(
            f,
            "Fuel oil #4:    {} gal @ ${}/gal",
            self.fuel_oil4, self.fuel_oil4_rate
        )?;
        write!(f, "Solar PV:       {} kWh", self.solar_pv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UTILITY_FIELDS;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const WIRE_NAMES: [&str; 14] = [
        "accountNumber",
        "buildingType",
        "area",
        "electricity",
        "electricityRate",
        "naturalGas",
        "naturalGasRate",
        "steam",
        "steamRate",
        "fuelOil2",
        "fuelOil2Rate",
        "fuelOil4",
        "fuelOil4Rate",
        "solarPV",
    ];

    #[test]
    fn default_record_serializes_all_fields() {
        let value = serde_json::to_value(FormRecord::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), WIRE_NAMES.len());
        for name in WIRE_NAMES {
            assert!(object.contains_key(name), "missing wire name: {name}");
            assert!(!object[name].is_null(), "{name} must never be null");
        }
        assert_eq!(value["accountNumber"], "");
        assert_eq!(value["buildingType"], "");
        assert_eq!(value["area"].as_f64(), Some(0.0));
        assert_eq!(value["solarPV"].as_f64(), Some(0.0));
    }

    #[test]
    fn serialized_record_round_trips() {
        let record = FormRecord {
            account_number: "11223".to_string(),
            building_type: "Data Center".to_string(),
            area: dec!(2500),
            electricity: dec!(120000),
            electricity_rate: dec!(0.21),
            steam: dec!(14.5),
            steam_rate: dec!(35),
            ..FormRecord::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: FormRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn submit_body_matches_endpoint_contract() {
        let record = FormRecord {
            account_number: "67890".to_string(),
            building_type: "Office".to_string(),
            area: dec!(10000),
            electricity: dec!(5000),
            electricity_rate: dec!(0.15),
            ..FormRecord::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["accountNumber"], "67890");
        assert_eq!(value["buildingType"], "Office");
        assert_eq!(value["area"].as_f64(), Some(10000.0));
        assert_eq!(value["electricity"].as_f64(), Some(5000.0));
        assert_eq!(value["electricityRate"].as_f64(), Some(0.15));
        for name in [
            "naturalGas",
            "naturalGasRate",
            "steam",
            "steamRate",
            "fuelOil2",
            "fuelOil2Rate",
            "fuelOil4",
            "fuelOil4Rate",
            "solarPV",
        ] {
            assert_eq!(value[name].as_f64(), Some(0.0), "{name} should default to 0");
        }
    }

    #[test]
    fn validate_reports_each_missing_selection() {
        let errors = FormRecord::default().validate_for_submit().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].name, "accountNumber");
        assert_eq!(errors[0].to_string(), "Account Number is required");
        assert_eq!(errors[1].name, "buildingType");
        assert_eq!(errors[1].to_string(), "Building Type is required");
    }

    #[test]
    fn validate_requires_building_type() {
        let record = FormRecord {
            account_number: "12345".to_string(),
            ..FormRecord::default()
        };

        let errors = record.validate_for_submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].name, "buildingType");
    }

    #[test]
    fn validate_passes_with_both_selections() {
        let record = FormRecord {
            account_number: "67890".to_string(),
            building_type: "Hotel".to_string(),
            ..FormRecord::default()
        };

        assert!(record.validate_for_submit().is_ok());
    }

    #[test]
    fn every_descriptor_name_is_settable() {
        let mut record = FormRecord::default();
        for field in UTILITY_FIELDS {
            record.set_utility(field.name, dec!(1)).unwrap();
        }
        assert_eq!(record.electricity, dec!(1));
        assert_eq!(record.fuel_oil4_rate, dec!(1));
    }

    #[test]
    fn set_utility_rejects_unknown_names() {
        let mut record = FormRecord::default();
        let error = record.set_utility("fuelOil6", dec!(1)).unwrap_err();
        assert_eq!(error.to_string(), "unknown utility field 'fuelOil6'");
    }
}
