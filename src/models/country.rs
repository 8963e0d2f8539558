//! Country models.

use serde::{Deserialize, Serialize};

use super::enums::TaxClassification;

/// A country known to lexoffice, from `GET /countries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO 3166 alpha-2 code
    pub country_code: String,
    /// German name
    #[serde(rename = "countryNameDE")]
    pub country_name_de: String,
    /// English name
    #[serde(rename = "countryNameEN")]
    pub country_name_en: String,
    /// Tax classification relative to Germany
    pub tax_classification: TaxClassification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_wire_names() {
        let json = r#"{"countryCode":"AT","countryNameDE":"Österreich","countryNameEN":"Austria","taxClassification":"intraCommunity"}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.country_name_en, "Austria");
        assert_eq!(country.tax_classification, TaxClassification::IntraCommunity);
        assert_eq!(serde_json::to_string(&country).unwrap(), json);
    }
}
