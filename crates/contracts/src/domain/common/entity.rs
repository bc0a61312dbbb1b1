use serde::{Deserialize, Serialize};

use crate::domain::a001_lead::Lead;
use crate::domain::a002_assigned_lead::AssignedLead;
use crate::domain::a003_catalog::{Company, Product, PurchaseOrder, Store};
use crate::system::users::User;

/// Any CRM entity, tagged with its kind on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CrmEntity {
    Lead(Lead),
    AssignedLead(AssignedLead),
    Company(Company),
    Product(Product),
    Store(Store),
    PurchaseOrder(PurchaseOrder),
    User(User),
}

impl CrmEntity {
    pub fn kind(&self) -> &'static str {
        match self {
            CrmEntity::Lead(_) => "lead",
            CrmEntity::AssignedLead(_) => "assigned_lead",
            CrmEntity::Company(_) => "company",
            CrmEntity::Product(_) => "product",
            CrmEntity::Store(_) => "store",
            CrmEntity::PurchaseOrder(_) => "purchase_order",
            CrmEntity::User(_) => "user",
        }
    }
}
