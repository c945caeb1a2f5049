use crate::model::{format_date, format_date_iso, generate_id, Id};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceStatus {
    Available,
    Pending,
    Shipped,
}

impl InstanceStatus {
    pub const ALL: [InstanceStatus; 3] = [
        InstanceStatus::Available,
        InstanceStatus::Pending,
        InstanceStatus::Shipped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "Available",
            InstanceStatus::Pending => "Pending",
            InstanceStatus::Shipped => "Shipped",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Available" => Some(InstanceStatus::Available),
            "Pending" => Some(InstanceStatus::Pending),
            "Shipped" => Some(InstanceStatus::Shipped),
            _ => None,
        }
    }
}

/// One physical stock unit of an item, carrying its own status and dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub id: Id,
    pub item: Id,
    pub status: InstanceStatus,
    pub import_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ItemInstance {
    pub fn new(
        item: Id,
        status: InstanceStatus,
        import_date: NaiveDate,
        export_date: Option<NaiveDate>,
        details: Option<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            item,
            status,
            import_date,
            export_date,
            details,
        }
    }

    pub fn new_with_id(
        id: Id,
        item: Id,
        status: InstanceStatus,
        import_date: NaiveDate,
        export_date: Option<NaiveDate>,
        details: Option<String>,
    ) -> Self {
        Self {
            id,
            item,
            status,
            import_date,
            export_date,
            details,
        }
    }

    pub fn url(&self) -> String {
        format!("/inventory/iteminstance/{}", self.id)
    }

    pub fn import_date_formatted(&self) -> String {
        format_date(self.import_date)
    }

    pub fn export_date_formatted(&self) -> String {
        self.export_date.map(format_date).unwrap_or_default()
    }

    /// ISO form of the import date, for form `value` attributes.
    pub fn import_date_value(&self) -> String {
        format_date_iso(self.import_date)
    }

    pub fn export_date_value(&self) -> String {
        self.export_date.map(format_date_iso).unwrap_or_default()
    }
}

/// Validated input for creating or replacing an item instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceInput {
    pub item: Id,
    pub status: InstanceStatus,
    pub import_date: NaiveDate,
    pub export_date: Option<NaiveDate>,
    pub details: Option<String>,
}

impl InstanceInput {
    pub fn into_instance(self) -> ItemInstance {
        ItemInstance::new(
            self.item,
            self.status,
            self.import_date,
            self.export_date,
            self.details,
        )
    }

    pub fn into_instance_with_id(self, id: Id) -> ItemInstance {
        ItemInstance::new_with_id(
            id,
            self.item,
            self.status,
            self.import_date,
            self.export_date,
            self.details,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_form_values() {
        for status in InstanceStatus::ALL {
            assert_eq!(InstanceStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(InstanceStatus::parse("Backordered"), None);
    }

    #[test]
    fn date_helpers_render_both_forms() {
        let instance = ItemInstance::new_with_id(
            "inst-1".to_string(),
            "item-1".to_string(),
            InstanceStatus::Available,
            NaiveDate::from_ymd_opt(2023, 10, 3).unwrap(),
            None,
            None,
        );
        assert_eq!(instance.import_date_formatted(), "Oct 3, 2023");
        assert_eq!(instance.import_date_value(), "2023-10-03");
        assert_eq!(instance.export_date_formatted(), "");
        assert_eq!(instance.export_date_value(), "");
    }
}
