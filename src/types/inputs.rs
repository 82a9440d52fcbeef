//! Raw form submission

use crate::types::feature::{Feature, Month, Season};
use serde::{Deserialize, Serialize};

/// One submission as collected by the form, before validation.
///
/// Field names follow the training column names so a submission can be
/// deserialized from a `{feature name: value}` mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInputs {
    #[serde(rename = "Seasons")]
    pub seasons: Season,
    #[serde(rename = "Month")]
    pub month: Month,
    #[serde(rename = "Day")]
    pub day: f64,
    #[serde(rename = "Hour")]
    pub hour: f64,
    #[serde(rename = "Holiday")]
    pub holiday: f64,
    #[serde(rename = "Functioning Day", alias = "FunctioningDay")]
    pub functioning_day: f64,
    #[serde(rename = "Temperature(°C)", alias = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Wind speed (m/s)", alias = "WindSpeed")]
    pub wind_speed: f64,
    #[serde(rename = "Visibility (10m)", alias = "Visibility")]
    pub visibility: f64,
    #[serde(rename = "Solar Radiation (MJ/m2)", alias = "SolarRadiation")]
    pub solar_radiation: f64,
    #[serde(rename = "Rainfall(mm)", alias = "Rainfall")]
    pub rainfall: f64,
    #[serde(rename = "Snowfall (cm)", alias = "Snowfall")]
    pub snowfall: f64,
}

impl FormInputs {
    /// Raw value of a continuous feature; `None` for the categorical ones
    pub fn continuous(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Seasons | Feature::Month => None,
            Feature::Day => Some(self.day),
            Feature::Hour => Some(self.hour),
            Feature::Holiday => Some(self.holiday),
            Feature::FunctioningDay => Some(self.functioning_day),
            Feature::Temperature => Some(self.temperature),
            Feature::WindSpeed => Some(self.wind_speed),
            Feature::Visibility => Some(self.visibility),
            Feature::SolarRadiation => Some(self.solar_radiation),
            Feature::Rainfall => Some(self.rainfall),
            Feature::Snowfall => Some(self.snowfall),
        }
    }

    /// Set a continuous feature. Categorical features are ignored.
    pub fn set_continuous(&mut self, feature: Feature, value: f64) {
        let slot = match feature {
            Feature::Seasons | Feature::Month => return,
            Feature::Day => &mut self.day,
            Feature::Hour => &mut self.hour,
            Feature::Holiday => &mut self.holiday,
            Feature::FunctioningDay => &mut self.functioning_day,
            Feature::Temperature => &mut self.temperature,
            Feature::WindSpeed => &mut self.wind_speed,
            Feature::Visibility => &mut self.visibility,
            Feature::SolarRadiation => &mut self.solar_radiation,
            Feature::Rainfall => &mut self.rainfall,
            Feature::Snowfall => &mut self.snowfall,
        };
        *slot = value;
    }
}

impl Default for FormInputs {
    /// Initial form state: first label of each list, every number at its minimum
    fn default() -> Self {
        let mut inputs = Self {
            seasons: Season::default(),
            month: Month::default(),
            day: 0.0,
            hour: 0.0,
            holiday: 0.0,
            functioning_day: 0.0,
            temperature: 0.0,
            wind_speed: 0.0,
            visibility: 0.0,
            solar_radiation: 0.0,
            rainfall: 0.0,
            snowfall: 0.0,
        };
        for feature in Feature::continuous() {
            inputs.set_continuous(feature, feature.spec().min);
        }
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_feature_name_mapping() {
        let inputs: FormInputs = serde_json::from_value(json!({
            "Seasons": "Summer",
            "Month": "July",
            "Day": 4,
            "Hour": 18,
            "Holiday": 1,
            "Functioning Day": 1,
            "Temperature(°C)": 28.5,
            "Wind speed (m/s)": 0.9,
            "Visibility (10m)": 30.0,
            "Solar Radiation (MJ/m2)": 0.7,
            "Rainfall(mm)": 0.0,
            "Snowfall (cm)": 0.0
        }))
        .unwrap();

        assert_eq!(inputs.seasons, Season::Summer);
        assert_eq!(inputs.month, Month::July);
        assert_eq!(inputs.day, 4.0);
        assert_eq!(inputs.temperature, 28.5);
    }

    #[test]
    fn test_unknown_label_rejected() {
        let mut value = serde_json::to_value(FormInputs::default()).unwrap();
        value["Seasons"] = json!("Monsoon");
        assert!(serde_json::from_value::<FormInputs>(value).is_err());
    }

    #[test]
    fn test_default_uses_minimums() {
        let inputs = FormInputs::default();
        assert_eq!(inputs.seasons, Season::Spring);
        assert_eq!(inputs.month, Month::January);
        for feature in Feature::continuous() {
            assert_eq!(inputs.continuous(feature), Some(feature.spec().min));
        }
    }

    #[test]
    fn test_set_continuous() {
        let mut inputs = FormInputs::default();
        inputs.set_continuous(Feature::Rainfall, 2.5);
        inputs.set_continuous(Feature::Seasons, 3.0);
        assert_eq!(inputs.rainfall, 2.5);
        assert_eq!(inputs.seasons, Season::Spring);
        assert_eq!(inputs.continuous(Feature::Month), None);
    }
}
