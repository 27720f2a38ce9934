use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::bid::NewBid;
use crate::domain::types::{BidAmount, BidderName, CompanyName, TypeConstraintError};
use crate::forms::{first_message, trim};

const BID_FIELDS: &[&str] = &["bidder", "company", "amount"];

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitBidForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter the bidder name"))]
    pub bidder: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter the company name"))]
    pub company: String,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "Please enter a valid bid amount"))]
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitBidFormPayload {
    pub bidder: BidderName,
    pub company: CompanyName,
    pub amount: BidAmount,
}

impl SubmitBidFormPayload {
    pub fn into_new_bid(self) -> NewBid {
        NewBid {
            bidder: self.bidder,
            company: self.company,
            amount: self.amount,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitBidFormError {
    #[error("{0}")]
    Validation(String),
    #[error("Submit bid form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SubmitBidFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(first_message(&value, BID_FIELDS))
    }
}

impl From<TypeConstraintError> for SubmitBidFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SubmitBidForm> for SubmitBidFormPayload {
    type Error = SubmitBidFormError;

    fn try_from(value: SubmitBidForm) -> Result<Self, Self::Error> {
        let value = SubmitBidForm {
            bidder: trim(value.bidder),
            company: trim(value.company),
            amount: value.amount,
        };
        value.validate()?;
        Ok(Self {
            bidder: BidderName::new(value.bidder)?,
            company: CompanyName::new(value.company)?,
            amount: BidAmount::new(value.amount)?,
        })
    }
}
