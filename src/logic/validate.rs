use chrono::NaiveDate;
use thiserror::Error;

use crate::api::forms::{CategoryForm, InstanceForm, ItemForm, OrderForm};
use crate::model::{CategoryInput, Id, InstanceInput, InstanceStatus, ItemInput};

/// A single form-field failure, rendered inline on the originating form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Price needs to be a valid currency")]
    InvalidPrice,
    #[error("Invalid date")]
    InvalidDate,
    #[error("Unknown status")]
    UnknownStatus,
}

const NAME_MAX: usize = 100;
const DETAILS_MAX: usize = 200;

pub fn validate_category(form: &CategoryForm) -> Result<CategoryInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::Required("Name"));
    } else if name.chars().count() > NAME_MAX {
        errors.push(ValidationError::TooLong {
            field: "Name",
            max: NAME_MAX,
        });
    }

    let description = form.description.trim();
    if description.is_empty() {
        errors.push(ValidationError::Required("Description"));
    }

    if errors.is_empty() {
        Ok(CategoryInput {
            name: name.to_string(),
            description: description.to_string(),
        })
    } else {
        Err(errors)
    }
}

pub fn validate_item(form: &ItemForm) -> Result<ItemInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::Required("Name"));
    } else if name.chars().count() > NAME_MAX {
        errors.push(ValidationError::TooLong {
            field: "Name",
            max: NAME_MAX,
        });
    }

    let description = form.description.trim();
    if description.is_empty() {
        errors.push(ValidationError::Required("Description"));
    }

    if form.categories.is_empty() {
        errors.push(ValidationError::Required("Category"));
    }

    let price_raw = form.price.trim();
    let mut price = 0.0;
    if price_raw.is_empty() {
        errors.push(ValidationError::Required("Price"));
    } else {
        match parse_price(price_raw) {
            Some(value) => price = value,
            None => errors.push(ValidationError::InvalidPrice),
        }
    }

    let image = form.image.trim();

    if errors.is_empty() {
        Ok(ItemInput {
            name: name.to_string(),
            description: description.to_string(),
            categories: form.categories.clone(),
            price,
            image: if image.is_empty() {
                None
            } else {
                Some(image.to_string())
            },
        })
    } else {
        Err(errors)
    }
}

pub fn validate_instance(form: &InstanceForm) -> Result<InstanceInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if form.item.trim().is_empty() {
        errors.push(ValidationError::Required("Item"));
    }

    let mut status = InstanceStatus::Available;
    let status_raw = form.status.trim();
    if status_raw.is_empty() {
        errors.push(ValidationError::Required("Status"));
    } else {
        match InstanceStatus::parse(status_raw) {
            Some(parsed) => status = parsed,
            None => errors.push(ValidationError::UnknownStatus),
        }
    }

    let mut import_date = NaiveDate::default();
    let import_raw = form.import_date.trim();
    if import_raw.is_empty() {
        errors.push(ValidationError::Required("Import date"));
    } else {
        match parse_iso_date(import_raw) {
            Some(date) => import_date = date,
            None => errors.push(ValidationError::InvalidDate),
        }
    }

    let mut export_date = None;
    let export_raw = form.export_date.trim();
    if !export_raw.is_empty() {
        match parse_iso_date(export_raw) {
            Some(date) => export_date = Some(date),
            None => errors.push(ValidationError::InvalidDate),
        }
    }

    let details = form.details.trim();
    if details.chars().count() > DETAILS_MAX {
        errors.push(ValidationError::TooLong {
            field: "Details",
            max: DETAILS_MAX,
        });
    }

    if errors.is_empty() {
        Ok(InstanceInput {
            item: form.item.trim().to_string(),
            status,
            import_date,
            export_date,
            details: if details.is_empty() {
                None
            } else {
                Some(details.to_string())
            },
        })
    } else {
        Err(errors)
    }
}

pub fn validate_order(form: &OrderForm) -> Result<Vec<Id>, Vec<ValidationError>> {
    let instances: Vec<Id> = form
        .instances
        .iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();

    if instances.is_empty() {
        return Err(vec![ValidationError::Required("Item Instances")]);
    }
    Ok(instances)
}

/// Accepts a plain decimal amount with at most two fraction digits, with an
/// optional leading currency symbol. Negative amounts are rejected.
fn parse_price(raw: &str) -> Option<f64> {
    let normalized = raw.strip_prefix('$').unwrap_or(raw);
    let (whole, fraction) = match normalized.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (normalized, None),
    };

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty()
            || fraction.len() > 2
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
    }

    normalized.parse::<f64>().ok()
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
