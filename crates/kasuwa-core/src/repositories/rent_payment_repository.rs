//! Rent payment repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::RentPayment;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentPaymentRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<RentPayment>, DomainError>;

    async fn find_all_for_shop(&self, shop_id: &Uuid) -> Result<Vec<RentPayment>, DomainError>;

    async fn create(&self, payment: &RentPayment) -> Result<RentPayment, DomainError>;

    async fn update(&self, payment: &RentPayment) -> Result<RentPayment, DomainError>;
}
