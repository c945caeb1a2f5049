use crate::model::{format_datetime, generate_id, Id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipping,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Shipping,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(OrderStatus::Pending),
            "Shipping" => Some(OrderStatus::Shipping),
            "Delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

/// A grouping of item instances with a computed total and lifecycle status.
///
/// The total is derived from the member instances' item prices at create or
/// update time and stored denormalized; it is never recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Id,
    /// Ids of the item instances making up this order (at least one).
    pub instances: Vec<Id>,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub total: f64,
}

impl Order {
    /// New order as the create flow builds it: dated now, status Pending.
    pub fn new(instances: Vec<Id>, total: f64) -> Self {
        Self {
            id: generate_id(),
            instances,
            order_date: Utc::now(),
            status: OrderStatus::Pending,
            total,
        }
    }

    /// Replacement order for the update flow: same id, fresh date and total,
    /// status reset to Pending.
    pub fn new_with_id(id: Id, instances: Vec<Id>, total: f64) -> Self {
        Self {
            id,
            instances,
            order_date: Utc::now(),
            status: OrderStatus::Pending,
            total,
        }
    }

    pub fn url(&self) -> String {
        format!("/inventory/order/{}", self.id)
    }

    pub fn order_date_formatted(&self) -> String {
        format_datetime(self.order_date)
    }

    pub fn contains(&self, instance_id: &Id) -> bool {
        self.instances.iter().any(|id| id == instance_id)
    }
}
