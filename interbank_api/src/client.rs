//! HTTP client for the banking API.

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::{BankingApi, BillingApi, PixApi},
    codec::{self, EncodeOptions},
    pagination::{self, Page, Paginated, DEFAULT_PAGE_SIZE},
    query::QueryString,
    transport::{HttpTransport, Transport},
    Config, Error, Scope,
};

/// Entry point of the SDK.
///
/// Holds the transport and the base URL and nothing else; every call is a
/// function of its arguments. Resource families are reached through
/// [`banking`](Client::banking), [`billing`](Client::billing) and
/// [`pix`](Client::pix).
pub struct Client<T = HttpTransport> {
    transport: T,
    /// Base URL for the API, without a trailing slash.
    base_url: String,
}

impl Client<HttpTransport> {
    /// Creates a client talking to the API selected by `config`.
    pub fn new(config: Config) -> Result<Self, Error> {
        let base_url = config.base_url().to_string();
        let transport = HttpTransport::new(config)?;
        Ok(Self {
            transport,
            base_url,
        })
    }
}

enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of a custom transport.
    pub fn with_transport(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn banking(&self) -> BankingApi<'_, T> {
        BankingApi::new(self)
    }

    pub fn billing(&self) -> BillingApi<'_, T> {
        BillingApi::new(self)
    }

    pub fn pix(&self) -> PixApi<'_, T> {
        PixApi::new(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn url(&self, path: &str, query: &QueryString) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query.as_str())
        }
    }

    async fn dispatch(
        &self,
        verb: Verb,
        url: &str,
        scope: Scope,
        body: Option<String>,
    ) -> Result<String, Error> {
        let body = body.unwrap_or_default();
        let response = match verb {
            Verb::Get => self.transport.get(url, scope).await,
            Verb::Post => self.transport.post(url, scope, body).await,
            Verb::Put => self.transport.put(url, scope, body).await,
            Verb::Patch => self.transport.patch(url, scope, body).await,
            Verb::Delete => self.transport.delete(url, scope).await,
        };
        Ok(response?)
    }

    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryString,
        scope: Scope,
    ) -> Result<R, Error> {
        let url = self.url(path, query);
        let body = self.dispatch(Verb::Get, &url, scope, None).await?;
        codec::decode(&body)
    }

    pub(crate) async fn post<B, R>(&self, path: &str, scope: Scope, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path, &QueryString::new());
        let body = codec::encode(body, EncodeOptions::REQUEST)?;
        let response = self.dispatch(Verb::Post, &url, scope, Some(body)).await?;
        codec::decode(&response)
    }

    pub(crate) async fn put<B, R>(&self, path: &str, scope: Scope, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path, &QueryString::new());
        let body = codec::encode(body, EncodeOptions::REQUEST)?;
        let response = self.dispatch(Verb::Put, &url, scope, Some(body)).await?;
        codec::decode(&response)
    }

    pub(crate) async fn patch<B, R>(&self, path: &str, scope: Scope, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path, &QueryString::new());
        let body = codec::encode(body, EncodeOptions::REQUEST)?;
        let response = self.dispatch(Verb::Patch, &url, scope, Some(body)).await?;
        codec::decode(&response)
    }

    /// PUTs a body and ignores whatever comes back.
    pub(crate) async fn put_discarding<B>(&self, path: &str, scope: Scope, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.send_discarding(Verb::Put, path, scope, body).await
    }

    /// POSTs a body and ignores whatever comes back.
    pub(crate) async fn post_discarding<B>(&self, path: &str, scope: Scope, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.send_discarding(Verb::Post, path, scope, body).await
    }

    async fn send_discarding<B>(&self, verb: Verb, path: &str, scope: Scope, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, &QueryString::new());
        let body = codec::encode(body, EncodeOptions::REQUEST)?;
        self.dispatch(verb, &url, scope, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str, scope: Scope) -> Result<(), Error> {
        let url = self.url(path, &QueryString::new());
        self.dispatch(Verb::Delete, &url, scope, None).await?;
        Ok(())
    }

    /// Fetches a single page of a listing.
    pub(crate) async fn fetch_page<P: Paginated>(
        &self,
        path: &str,
        query: &QueryString,
        page: u32,
        page_size: u32,
        scope: Scope,
    ) -> Result<Page<P::Item>, Error> {
        let query = query
            .clone()
            .pair(P::PAGE_PARAM, page)
            .pair(P::PAGE_SIZE_PARAM, page_size);
        let response: P = self.get(path, &query, scope).await?;
        Ok(response.into_page(page))
    }

    /// Fetches every page of a listing and flattens the items.
    pub(crate) async fn fetch_all<P: Paginated>(
        &self,
        path: &str,
        query: &QueryString,
        scope: Scope,
    ) -> Result<Vec<P::Item>, Error> {
        let client = self;
        pagination::fetch_all(move |page| {
            client.fetch_page::<P>(path, query, page, DEFAULT_PAGE_SIZE, scope)
        })
        .await
    }
}
