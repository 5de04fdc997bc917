use crate::{
    client::Client,
    pagination::Page,
    query::{PixChargeFilter, QueryString, ReceivedPixFilter, TimeRange},
    transport::Transport,
    types::{
        Devolution, NewDevolution, NewPixCharge, PixCharge, PixChargePage, PixChargeRevision,
        ReceivedPix, ReceivedPixPage,
    },
    webhooks::{WebhookManager, WebhookRoute},
    Error, Scope,
};

const BASE: &str = "/pix/v2";

/// Immediate PIX charges and received PIX.
pub struct PixApi<'c, T> {
    client: &'c Client<T>,
}

impl<'c, T: Transport> PixApi<'c, T> {
    pub(crate) fn new(client: &'c Client<T>) -> Self {
        Self { client }
    }

    /// Creates an immediate charge.
    ///
    /// With a `txid` the charge is created under that id with a
    /// PUT; without one the API assigns the id.
    pub async fn create_charge(
        &self,
        txid: Option<&str>,
        charge: &NewPixCharge,
    ) -> Result<PixCharge, Error> {
        match txid {
            Some(txid) => {
                self.client
                    .put(&format!("{}/cob/{}", BASE, txid), Scope::PixChargeWrite, charge)
                    .await
            }
            None => {
                self.client
                    .post(&format!("{}/cob", BASE), Scope::PixChargeWrite, charge)
                    .await
            }
        }
    }

    /// Revises the charge `txid`, bumping its revision number.
    pub async fn revise_charge(
        &self,
        txid: &str,
        revision: &PixChargeRevision,
    ) -> Result<PixCharge, Error> {
        self.client
            .patch(&format!("{}/cob/{}", BASE, txid), Scope::PixChargeWrite, revision)
            .await
    }

    pub async fn retrieve_charge(&self, txid: &str) -> Result<PixCharge, Error> {
        self.client
            .get(
                &format!("{}/cob/{}", BASE, txid),
                &QueryString::new(),
                Scope::PixChargeRead,
            )
            .await
    }

    pub async fn list_charges_page(
        &self,
        range: &TimeRange,
        filter: Option<&PixChargeFilter>,
        page: u32,
        page_size: u32,
    ) -> Result<Page<PixCharge>, Error> {
        self.client
            .fetch_page::<PixChargePage>(
                &format!("{}/cob", BASE),
                &range_query(range).filter(filter),
                page,
                page_size,
                Scope::PixChargeRead,
            )
            .await
    }

    pub async fn list_charges(
        &self,
        range: &TimeRange,
        filter: Option<&PixChargeFilter>,
    ) -> Result<Vec<PixCharge>, Error> {
        self.client
            .fetch_all::<PixChargePage>(
                &format!("{}/cob", BASE),
                &range_query(range).filter(filter),
                Scope::PixChargeRead,
            )
            .await
    }

    pub async fn list_received_page(
        &self,
        range: &TimeRange,
        filter: Option<&ReceivedPixFilter>,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ReceivedPix>, Error> {
        self.client
            .fetch_page::<ReceivedPixPage>(
                &format!("{}/pix", BASE),
                &range_query(range).filter(filter),
                page,
                page_size,
                Scope::PixRead,
            )
            .await
    }

    pub async fn list_received(
        &self,
        range: &TimeRange,
        filter: Option<&ReceivedPixFilter>,
    ) -> Result<Vec<ReceivedPix>, Error> {
        self.client
            .fetch_all::<ReceivedPixPage>(
                &format!("{}/pix", BASE),
                &range_query(range).filter(filter),
                Scope::PixRead,
            )
            .await
    }

    /// Returns (part of) a received PIX to the payer.
    pub async fn request_devolution(
        &self,
        end_to_end_id: &str,
        devolution_id: &str,
        devolution: &NewDevolution,
    ) -> Result<Devolution, Error> {
        tracing::debug!("Requesting devolution {} of {}", devolution_id, end_to_end_id);
        self.client
            .put(
                &format!("{}/pix/{}/devolucao/{}", BASE, end_to_end_id, devolution_id),
                Scope::PixWrite,
                devolution,
            )
            .await
    }

    /// Webhooks keyed by PIX key.
    pub fn webhooks(&self) -> WebhookManager<'c, T> {
        WebhookManager::new(self.client, WebhookRoute::Pix)
    }
}

fn range_query(range: &TimeRange) -> QueryString {
    QueryString::new()
        .pair("inicio", range.start_str())
        .pair("fim", range.end_str())
}
