//! Customers sub-client — register, fetch, delete billing customers.

use crate::client::IamportClient;
use crate::domain::customer::wire::{CustomerRequest, PageQuery, ScheduleQuery};
use crate::envelope::Envelope;
use crate::error::SdkError;

/// Sub-client for billing customers.
pub struct Customers<'a> {
    pub(crate) client: &'a IamportClient,
}

impl<'a> Customers<'a> {
    /// Register (or replace) the card stored under `customer_uid`.
    pub async fn create(
        &self,
        customer_uid: &str,
        request: &CustomerRequest,
    ) -> Result<Envelope, SdkError> {
        self.client
            .http
            .post(&customer_path(customer_uid), Some(request))
            .await
    }

    pub async fn get(&self, customer_uid: &str) -> Result<Envelope, SdkError> {
        self.client
            .http
            .get(&customer_path(customer_uid), None::<&()>)
            .await
    }

    pub async fn delete(&self, customer_uid: &str) -> Result<Envelope, SdkError> {
        self.client
            .http
            .delete(&customer_path(customer_uid), None::<&()>)
            .await
    }

    /// Payment history of a billing customer.
    pub async fn payments(
        &self,
        customer_uid: &str,
        page: Option<u32>,
    ) -> Result<Envelope, SdkError> {
        let path = format!("{}/payments", customer_path(customer_uid));
        let query = page.map(|page| PageQuery { page });
        self.client.http.get(&path, query.as_ref()).await
    }

    /// Scheduled charges of a billing customer within a time range.
    pub async fn schedules(
        &self,
        customer_uid: &str,
        query: &ScheduleQuery,
    ) -> Result<Envelope, SdkError> {
        let path = format!("{}/schedules", customer_path(customer_uid));
        self.client.http.get(&path, Some(query)).await
    }
}

fn customer_path(customer_uid: &str) -> String {
    format!("subscribe/customers/{}", urlencoding::encode(customer_uid))
}
