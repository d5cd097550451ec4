//! Request parameters for the convert endpoints.
//!
//! A pair is a `FROM_TO` string such as `USD_MYR`. Several pairs can be
//! requested at once; they are sent comma-joined in the `q` parameter.

use chrono::NaiveDate;

use crate::error::RequestError;

/// Format used for every date sent to the service.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parameters for the latest-rate convert endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertRequest {
    /// Conversion pairs in `FROM_TO` format.
    pub pairs: Vec<String>,
}

impl ConvertRequest {
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.pairs.is_empty() {
            return Err(RequestError::EmptyPairs);
        }
        Ok(())
    }

    /// Value of the `q` query parameter.
    pub fn query(&self) -> String {
        self.pairs.join(",")
    }
}

/// Parameters for the historical convert endpoints.
///
/// `date` alone asks for a single day; adding `end_date` asks for every day
/// in the range `date..=end_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertHistoricalRequest {
    pub pairs: Vec<String>,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ConvertHistoricalRequest {
    pub fn new<I, S>(pairs: I, date: NaiveDate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(Into::into).collect(),
            date: Some(date),
            end_date: None,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Checks required fields and returns the start date.
    ///
    /// Pairs are checked before the date.
    pub fn validate(&self) -> Result<NaiveDate, RequestError> {
        if self.pairs.is_empty() {
            return Err(RequestError::EmptyPairs);
        }
        self.date.ok_or(RequestError::MissingDate)
    }

    pub fn query(&self) -> String {
        self.pairs.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_convert_request_joins_pairs() {
        let req = ConvertRequest::new(["USD_MYR", "MYR_USD"]);
        assert_eq!(req.query(), "USD_MYR,MYR_USD");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_convert_request_requires_pairs() {
        let req = ConvertRequest::default();
        assert_eq!(req.validate(), Err(RequestError::EmptyPairs));
    }

    #[test]
    fn test_historical_request_requires_date() {
        let req = ConvertHistoricalRequest {
            pairs: vec!["USD_MYR".to_string()],
            ..Default::default()
        };
        assert_eq!(req.validate(), Err(RequestError::MissingDate));
    }

    #[test]
    fn test_historical_request_checks_pairs_first() {
        let req = ConvertHistoricalRequest::default();
        assert_eq!(req.validate(), Err(RequestError::EmptyPairs));
    }

    #[test]
    fn test_historical_request_builder() {
        let req = ConvertHistoricalRequest::new(["USD_MYR"], date(2023, 2, 14))
            .with_end_date(date(2023, 2, 16));
        assert_eq!(req.validate(), Ok(date(2023, 2, 14)));
        assert_eq!(req.end_date, Some(date(2023, 2, 16)));
        assert_eq!(
            req.end_date.unwrap().format(DATE_FORMAT).to_string(),
            "2023-02-16"
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            RequestError::EmptyPairs.to_string(),
            "`pairs` requires at least one currency conversion"
        );
        assert_eq!(RequestError::MissingDate.to_string(), "`date` is required");
    }
}
