//! Rent ledger service
//!
//! Append-only ledger of rent obligations. A payment may legitimately
//! reference a tenant who no longer occupies the shop; no occupancy
//! check is made when recording one.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{NewRentPayment, RentPayment, RentPaymentPatch};
use crate::error::{DomainError, EntityKind};
use crate::repositories::RentPaymentRepository;
use crate::services::ReferenceResolver;

pub struct RentLedgerService {
    payments: Arc<dyn RentPaymentRepository>,
    resolver: ReferenceResolver,
}

impl RentLedgerService {
    pub fn new(payments: Arc<dyn RentPaymentRepository>, resolver: ReferenceResolver) -> Self {
        Self { payments, resolver }
    }

    pub async fn create_payment(&self, new: NewRentPayment) -> Result<RentPayment, DomainError> {
        new.validate()?;
        let shop = self.resolver.shop(&new.shop_id).await?;
        let tenant = self.resolver.tenant(&new.tenant_id).await?;

        info!(
            "Recording rent payment of {} for shop {} by tenant {}",
            new.amount, shop.id, tenant.id
        );

        let payment = RentPayment::new(&new)?;
        self.payments.create(&payment).await
    }

    pub async fn find_one_payment(&self, id: &Uuid) -> Result<RentPayment, DomainError> {
        self.payments
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                kind: EntityKind::RentPayment,
                id: *id,
            })
    }

    pub async fn find_all_for_shop(&self, shop_id: &Uuid) -> Result<Vec<RentPayment>, DomainError> {
        self.payments.find_all_for_shop(shop_id).await
    }

    /// Partial merge of amount and year. The shop and tenant links are
    /// immutable after creation.
    pub async fn update_payment(
        &self,
        id: &Uuid,
        patch: RentPaymentPatch,
    ) -> Result<RentPayment, DomainError> {
        let mut payment = self.find_one_payment(id).await?;
        payment.apply(patch)?;
        self.payments.update(&payment).await
    }
}
