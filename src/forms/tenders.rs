use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::tender::{NewTender, TenderContact, TenderDocument, TenderPatch};
use crate::domain::types::{
    DocumentId, DocumentName, DocumentSize, EmailAddress, PersonName, PhoneNumber, Requirement,
    TenderCategory, TenderDescription, TenderStatus, TenderTitle, TenderValue,
    TypeConstraintError,
};
use crate::forms::{first_message, trim};

#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please fill in all contact information fields"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please enter a valid contact email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please fill in all contact information fields"))]
    pub phone: String,
    #[serde(default)]
    pub department: String,
}

impl TryFrom<ContactForm> for TenderContact {
    type Error = TypeConstraintError;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: PersonName::new(value.name)?,
            email: EmailAddress::new(value.email)?,
            phone: PhoneNumber::new(value.phone)?,
            department: value.department.trim().to_string(),
        })
    }
}

/// Document metadata sent along with a tender. The file itself is never
/// transferred.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DocumentForm {
    pub id: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter a name for every document"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter a size for every document"))]
    pub size: String,
    pub uploaded_at: Option<NaiveDate>,
}

impl ContactForm {
    fn trimmed(self) -> Self {
        Self {
            name: trim(self.name),
            email: trim(self.email),
            phone: trim(self.phone),
            department: trim(self.department),
        }
    }
}

impl DocumentForm {
    fn trimmed(self) -> Self {
        Self {
            id: self.id,
            name: trim(self.name),
            size: trim(self.size),
            uploaded_at: self.uploaded_at,
        }
    }

    fn into_document(self, today: NaiveDate) -> Result<TenderDocument, TypeConstraintError> {
        let id = match self.id {
            Some(id) => DocumentId::new(id)?,
            None => DocumentId::new(format!("doc-{}", Uuid::new_v4().simple()))?,
        };
        Ok(TenderDocument {
            id,
            name: DocumentName::new(self.name)?,
            size: DocumentSize::new(self.size)?,
            uploaded_at: self.uploaded_at.unwrap_or(today),
        })
    }
}

fn parse_requirements(values: Vec<String>) -> Result<Vec<Requirement>, TypeConstraintError> {
    values.into_iter().map(Requirement::new).collect()
}

fn has_blank(values: &[String]) -> bool {
    values.iter().any(|v| v.is_empty())
}

/// Validated fields in the order their messages are reported.
const TENDER_FIELDS: &[&str] = &[
    "title",
    "description",
    "category",
    "value",
    "requirements",
    "name",
    "size",
    "email",
    "phone",
];

fn validate_documents(documents: &[DocumentForm]) -> Result<(), ValidationErrors> {
    documents.iter().try_for_each(|d| d.validate())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenderForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter a tender title"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please enter a tender description"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please select a category"))]
    pub category: String,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "Please enter a valid tender value"))]
    pub value: f64,
    pub status: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please add at least one requirement"))]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub documents: Vec<DocumentForm>,
    pub contact: ContactForm,
}

impl CreateTenderForm {
    fn trimmed(self) -> Self {
        Self {
            title: trim(self.title),
            description: trim(self.description),
            category: trim(self.category),
            requirements: self.requirements.into_iter().map(trim).collect(),
            documents: self.documents.into_iter().map(DocumentForm::trimmed).collect(),
            contact: self.contact.trimmed(),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTenderFormPayload {
    pub title: TenderTitle,
    pub description: TenderDescription,
    pub status: TenderStatus,
    pub category: TenderCategory,
    pub value: TenderValue,
    pub publish_date: NaiveDate,
    pub deadline: NaiveDate,
    pub requirements: Vec<Requirement>,
    pub documents: Vec<TenderDocument>,
    pub contact: TenderContact,
}

impl CreateTenderFormPayload {
    pub fn into_new_tender(self) -> NewTender {
        NewTender {
            title: self.title,
            description: self.description,
            status: self.status,
            category: self.category,
            value: self.value,
            publish_date: self.publish_date,
            deadline: self.deadline,
            requirements: self.requirements,
            documents: self.documents,
            contact: self.contact,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateTenderFormError {
    #[error("{0}")]
    Validation(String),
    #[error("Create tender form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Please select a publish date")]
    MissingPublishDate,
    #[error("Please select a deadline")]
    MissingDeadline,
    #[error("Deadline must be after the publish date")]
    DeadlineNotAfterPublishDate,
    #[error("Please fill in all requirements or remove empty ones")]
    BlankRequirement,
}

impl From<ValidationErrors> for CreateTenderFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(first_message(&value, TENDER_FIELDS))
    }
}

impl From<TypeConstraintError> for CreateTenderFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateTenderForm> for CreateTenderFormPayload {
    type Error = CreateTenderFormError;

    fn try_from(value: CreateTenderForm) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;

        let publish_date = value
            .publish_date
            .ok_or(CreateTenderFormError::MissingPublishDate)?;
        let deadline = value
            .deadline
            .ok_or(CreateTenderFormError::MissingDeadline)?;
        if deadline <= publish_date {
            return Err(CreateTenderFormError::DeadlineNotAfterPublishDate);
        }
        if has_blank(&value.requirements) {
            return Err(CreateTenderFormError::BlankRequirement);
        }
        validate_documents(&value.documents)?;
        value.contact.validate()?;

        let status = match value.status.as_deref() {
            Some(status) if !status.trim().is_empty() => TenderStatus::try_from(status)?,
            _ => TenderStatus::default(),
        };

        let today = Utc::now().date_naive();
        let documents = value
            .documents
            .into_iter()
            .map(|d| d.into_document(today))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: TenderTitle::new(value.title)?,
            description: TenderDescription::new(value.description)?,
            status,
            category: TenderCategory::try_from(value.category.as_str())?,
            value: TenderValue::new(value.value)?,
            publish_date,
            deadline,
            requirements: parse_requirements(value.requirements)?,
            documents,
            contact: value.contact.try_into()?,
        })
    }
}

/// Partial tender update. Omitted fields keep their current value.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenderForm {
    #[validate(length(min = 1, message = "Please enter a tender title"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Please enter a tender description"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Please select a category"))]
    pub category: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Please enter a valid tender value"))]
    pub value: Option<f64>,
    pub status: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Please add at least one requirement"))]
    pub requirements: Option<Vec<String>>,
    pub documents: Option<Vec<DocumentForm>>,
    pub contact: Option<ContactForm>,
}

impl UpdateTenderForm {
    fn trimmed(self) -> Self {
        Self {
            title: self.title.map(trim),
            description: self.description.map(trim),
            category: self.category.map(trim),
            requirements: self
                .requirements
                .map(|items| items.into_iter().map(trim).collect()),
            documents: self
                .documents
                .map(|items| items.into_iter().map(DocumentForm::trimmed).collect()),
            contact: self.contact.map(ContactForm::trimmed),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTenderFormPayload {
    pub patch: TenderPatch,
}

#[derive(Debug, Error)]
pub enum UpdateTenderFormError {
    #[error("{0}")]
    Validation(String),
    #[error("Update tender form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Deadline must be after the publish date")]
    DeadlineNotAfterPublishDate,
    #[error("Please fill in all requirements or remove empty ones")]
    BlankRequirement,
}

impl From<ValidationErrors> for UpdateTenderFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(first_message(&value, TENDER_FIELDS))
    }
}

impl From<TypeConstraintError> for UpdateTenderFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateTenderForm> for UpdateTenderFormPayload {
    type Error = UpdateTenderFormError;

    fn try_from(value: UpdateTenderForm) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;
        if let (Some(publish_date), Some(deadline)) = (value.publish_date, value.deadline) {
            if deadline <= publish_date {
                return Err(UpdateTenderFormError::DeadlineNotAfterPublishDate);
            }
        }
        if value.requirements.as_deref().is_some_and(has_blank) {
            return Err(UpdateTenderFormError::BlankRequirement);
        }
        if let Some(documents) = &value.documents {
            validate_documents(documents)?;
        }
        if let Some(contact) = &value.contact {
            contact.validate()?;
        }

        let today = Utc::now().date_naive();
        let patch = TenderPatch {
            title: value.title.map(TenderTitle::new).transpose()?,
            description: value.description.map(TenderDescription::new).transpose()?,
            status: value
                .status
                .as_deref()
                .map(TenderStatus::try_from)
                .transpose()?,
            category: value
                .category
                .as_deref()
                .map(TenderCategory::try_from)
                .transpose()?,
            value: value.value.map(TenderValue::new).transpose()?,
            publish_date: value.publish_date,
            deadline: value.deadline,
            requirements: value.requirements.map(parse_requirements).transpose()?,
            documents: value
                .documents
                .map(|documents| {
                    documents
                        .into_iter()
                        .map(|d| d.into_document(today))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?,
            contact: value.contact.map(TenderContact::try_from).transpose()?,
        };

        Ok(Self { patch })
    }
}
