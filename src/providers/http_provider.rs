use super::util::{build_client, join_url};
use crate::core::config::SourceConfig;
use crate::core::error::FetchError;
use crate::core::source::TransactionSource;
use crate::core::transaction::{Transaction, parse_transactions};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, error, warn};

/// Fetches transactions from a json-server style endpoint.
///
/// Filtering is done by the server through the `q` query parameter.
pub struct HttpTransactionSource {
    client: reqwest::Client,
    endpoint: String,
    sort: Option<(String, String)>,
}

impl HttpTransactionSource {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let sort = config.sort_by.as_ref().map(|field| {
            let order = config.order.map_or("asc", |o| o.as_str());
            (field.clone(), order.to_string())
        });

        Ok(Self {
            client: build_client(config.timeout_secs)?,
            endpoint: join_url(&config.base_url, &config.path),
            sort,
        })
    }

    fn request_url(&self, query: Option<&str>) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| FetchError::Transport(format!("invalid url {}: {e}", self.endpoint)))?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some((field, order)) = &self.sort {
                pairs.append_pair("_sort", field);
                pairs.append_pair("_order", order);
            }
            if let Some(q) = query {
                pairs.append_pair("q", q);
            }
        }
        // query_pairs_mut leaves a dangling '?' when nothing was appended
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }
}

#[async_trait]
impl TransactionSource for HttpTransactionSource {
    async fn fetch_transactions(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<Transaction>, FetchError> {
        let url = self.request_url(query)?;
        debug!("Requesting transactions from {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Data source rejected request");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let response_text = response.text().await?;

        match parse_transactions(&response_text) {
            Ok(transactions) => {
                debug!("Fetched {} transactions", transactions.len());
                Ok(transactions)
            }
            Err(e) => {
                error!(
                    error = %e,
                    response = %response_text,
                    "Failed to parse transactions response"
                );
                Err(e)
            }
        }
    }
}
