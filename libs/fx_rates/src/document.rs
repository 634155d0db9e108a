//! Shape of the `FxRates` XML returned by the rate service.
//!
//! A successful reply looks like
//!
//! ```xml
//! <FxRates xmlns="http://www.lb.lt/WebServices/FxRates">
//!   <FxRate>
//!     <Tp>LT</Tp>
//!     <Dt>2023-10-09</Dt>
//!     <CcyAmt><Ccy>EUR</Ccy><Amt>1</Amt></CcyAmt>
//!     <CcyAmt><Ccy>USD</Ccy><Amt>1.0578</Amt></CcyAmt>
//!   </FxRate>
//! </FxRates>
//! ```
//!
//! while a rejected request carries an `OprlErr` node with a `Desc` text.

use serde::{Deserialize, Serialize};

use crate::FxRatesError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FxRatesDocument {
    #[serde(rename = "OprlErr")]
    pub operational_error: Option<OperationalError>,
    #[serde(rename = "FxRate")]
    pub fx_rate: Option<FxRate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationalError {
    #[serde(rename = "Desc")]
    pub description: Option<String>,
}

/// One day's rate record. Serialized with the service's own element names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxRate {
    #[serde(rename = "Tp")]
    pub rate_type: String,
    #[serde(rename = "Dt")]
    pub date: String,
    #[serde(rename = "CcyAmt", default)]
    pub amounts: Vec<CurrencyAmount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    #[serde(rename = "Ccy")]
    pub currency: String,
    #[serde(rename = "Amt")]
    pub amount: f64,
}

impl FxRatesDocument {
    pub fn parse(xml: &str) -> Result<Self, FxRatesError> {
        Ok(quick_xml::de::from_str(xml)?)
    }

    /// The rate record, or the service's operational error.
    pub fn into_rate(self) -> Result<FxRate, FxRatesError> {
        if let Some(error) = self.operational_error {
            return Err(FxRatesError::Operational(error.description.unwrap_or_else(|| {
                "Rate service reported an operational error".to_string()
            })));
        }
        self.fx_rate.ok_or(FxRatesError::MissingRecord)
    }
}

impl FxRate {
    /// The quoted currency sits in the second `CcyAmt`; the first is the base.
    pub fn quoted(&self) -> Option<&CurrencyAmount> {
        self.amounts.get(1)
    }
}
