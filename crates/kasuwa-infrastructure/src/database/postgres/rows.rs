//! Row types and SELECT fragments shared by the PostgreSQL repositories.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use kasuwa_core::domain::{
    Address, Building, Market, RentPayment, Shop, Stall, Tenant, UnitStatus,
};

// --- Markets (joined with their owned address) ---

pub(crate) const MARKET_SELECT: &str = r#"
    SELECT
        m.id, m.name, m.created_at, m.modified_at,
        a.id AS address_id, a.street_address, a.town, a.lga, a.state
    FROM markets m
    JOIN addresses a ON a.id = m.address_id
"#;

#[derive(Debug, FromRow)]
pub(crate) struct MarketRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub address_id: Uuid,
    pub street_address: String,
    pub town: String,
    pub lga: String,
    pub state: String,
}

impl From<MarketRow> for Market {
    fn from(row: MarketRow) -> Self {
        Market {
            id: row.id,
            name: row.name,
            address: Address {
                id: row.address_id,
                street_address: row.street_address,
                town: row.town,
                lga: row.lga,
                state: row.state,
            },
            buildings: Vec::new(),
            stalls: Vec::new(),
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

// --- Buildings ---

pub(crate) const BUILDING_SELECT: &str = r#"
    SELECT id, market_id, name, description, summary, status, created_at, modified_at
    FROM buildings
"#;

#[derive(Debug, FromRow)]
pub(crate) struct BuildingRow {
    pub id: Uuid,
    pub market_id: Uuid,
    pub name: String,
    pub description: String,
    pub summary: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<BuildingRow> for Building {
    fn from(row: BuildingRow) -> Self {
        Building {
            id: row.id,
            market_id: row.market_id,
            name: row.name,
            description: row.description,
            summary: row.summary,
            status: row.status,
            shops: Vec::new(),
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

// --- Shops (joined with their tenant, when assigned) ---

pub(crate) const SHOP_SELECT: &str = r#"
    SELECT
        s.id, s.building_id, s.name, s.annual_rent_rate, s.size, s.status,
        s.created_at, s.modified_at,
        t.id AS tenant_id,
        t.first_name AS tenant_first_name,
        t.middle_name AS tenant_middle_name,
        t.last_name AS tenant_last_name,
        t.email AS tenant_email,
        t.contact_number AS tenant_contact_number,
        t.created_at AS tenant_created_at,
        t.modified_at AS tenant_modified_at
    FROM shops s
    LEFT JOIN tenants t ON t.id = s.tenant_id
"#;

#[derive(Debug, FromRow)]
pub(crate) struct ShopRow {
    pub id: Uuid,
    pub building_id: Uuid,
    pub name: String,
    pub annual_rent_rate: f64,
    pub size: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub tenant_id: Option<Uuid>,
    pub tenant_first_name: Option<String>,
    pub tenant_middle_name: Option<String>,
    pub tenant_last_name: Option<String>,
    pub tenant_email: Option<String>,
    pub tenant_contact_number: Option<String>,
    pub tenant_created_at: Option<DateTime<Utc>>,
    pub tenant_modified_at: Option<DateTime<Utc>>,
}

impl From<ShopRow> for Shop {
    fn from(row: ShopRow) -> Self {
        let tenant = row.tenant_id.map(|id| Tenant {
            id,
            first_name: row.tenant_first_name.unwrap_or_default(),
            middle_name: row.tenant_middle_name,
            last_name: row.tenant_last_name.unwrap_or_default(),
            email: row.tenant_email.unwrap_or_default(),
            contact_number: row.tenant_contact_number.unwrap_or_default(),
            created_at: row.tenant_created_at.unwrap_or(row.created_at),
            modified_at: row.tenant_modified_at,
        });

        Shop {
            id: row.id,
            building_id: row.building_id,
            name: row.name,
            annual_rent_rate: row.annual_rent_rate,
            size: row.size,
            status: UnitStatus::from_str(&row.status).unwrap_or_default(),
            tenant,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

// --- Stalls (joined with their tenant, when assigned) ---

pub(crate) const STALL_SELECT: &str = r#"
    SELECT
        s.id, s.market_id, s.name, s.annual_rent_rate, s.status,
        s.created_at, s.modified_at,
        t.id AS tenant_id,
        t.first_name AS tenant_first_name,
        t.middle_name AS tenant_middle_name,
        t.last_name AS tenant_last_name,
        t.email AS tenant_email,
        t.contact_number AS tenant_contact_number,
        t.created_at AS tenant_created_at,
        t.modified_at AS tenant_modified_at
    FROM stalls s
    LEFT JOIN tenants t ON t.id = s.tenant_id
"#;

#[derive(Debug, FromRow)]
pub(crate) struct StallRow {
    pub id: Uuid,
    pub market_id: Uuid,
    pub name: String,
    pub annual_rent_rate: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub tenant_id: Option<Uuid>,
    pub tenant_first_name: Option<String>,
    pub tenant_middle_name: Option<String>,
    pub tenant_last_name: Option<String>,
    pub tenant_email: Option<String>,
    pub tenant_contact_number: Option<String>,
    pub tenant_created_at: Option<DateTime<Utc>>,
    pub tenant_modified_at: Option<DateTime<Utc>>,
}

impl From<StallRow> for Stall {
    fn from(row: StallRow) -> Self {
        let tenant = row.tenant_id.map(|id| Tenant {
            id,
            first_name: row.tenant_first_name.unwrap_or_default(),
            middle_name: row.tenant_middle_name,
            last_name: row.tenant_last_name.unwrap_or_default(),
            email: row.tenant_email.unwrap_or_default(),
            contact_number: row.tenant_contact_number.unwrap_or_default(),
            created_at: row.tenant_created_at.unwrap_or(row.created_at),
            modified_at: row.tenant_modified_at,
        });

        Stall {
            id: row.id,
            market_id: row.market_id,
            name: row.name,
            annual_rent_rate: row.annual_rent_rate,
            status: UnitStatus::from_str(&row.status).unwrap_or_default(),
            tenant,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

// --- Tenants ---

pub(crate) const TENANT_SELECT: &str = r#"
    SELECT id, first_name, middle_name, last_name, email, contact_number,
           created_at, modified_at
    FROM tenants
"#;

#[derive(Debug, FromRow)]
pub(crate) struct TenantRow {
    pub id: Uuid,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            first_name: row.first_name,
            middle_name: row.middle_name,
            last_name: row.last_name,
            email: row.email,
            contact_number: row.contact_number,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

// --- Rent payments ---

pub(crate) const RENT_PAYMENT_SELECT: &str = r#"
    SELECT id, shop_id, tenant_id, amount, year, created_at, modified_at
    FROM rent_payments
"#;

#[derive(Debug, FromRow)]
pub(crate) struct RentPaymentRow {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub tenant_id: Uuid,
    pub amount: f64,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<RentPaymentRow> for RentPayment {
    fn from(row: RentPaymentRow) -> Self {
        RentPayment {
            id: row.id,
            shop_id: row.shop_id,
            tenant_id: row.tenant_id,
            amount: row.amount,
            year: row.year,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}
