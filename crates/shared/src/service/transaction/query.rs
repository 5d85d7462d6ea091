use crate::{
    abstract_trait::transaction::{
        repository::query::DynTransactionQueryRepository,
        service::query::TransactionQueryServiceTrait,
    },
    config::StatsConfig,
    domain::requests::FindTransactionsPage,
    errors::{RepositoryError, ServiceError},
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

/// Drains the paginated Nearpay listing into one in-memory collection.
///
/// Pages are requested sequentially starting at 1; each page's completion
/// triggers the next request. The walk stops once the upstream reports the
/// last page or sends an empty page. Two guards bound the walk against a
/// misbehaving upstream: a hard `max_pages` ceiling, and stall detection
/// that aborts as soon as `pages.current` fails to advance.
pub struct TransactionQueryService {
    repository: DynTransactionQueryRepository,
    page_size: u32,
    max_pages: u32,
}

impl TransactionQueryService {
    pub fn new(repository: DynTransactionQueryRepository, config: &StatsConfig) -> Self {
        Self {
            repository,
            page_size: config.page_size,
            max_pages: config.max_pages,
        }
    }
}

#[async_trait]
impl TransactionQueryServiceTrait for TransactionQueryService {
    async fn find_all(&self) -> Result<Vec<TransactionModel>, ServiceError> {
        let mut all_transactions: Vec<TransactionModel> = Vec::new();
        let mut page: u32 = 1;
        let mut last_seen_current: Option<u32> = None;

        loop {
            let fetched = self
                .repository
                .find_page(FindTransactionsPage {
                    page,
                    limit: self.page_size,
                })
                .await?;

            // An empty page ends the walk even if the upstream claims more
            // pages exist; it also covers the totalPages == 0 case.
            if fetched.transactions.is_empty() {
                break;
            }

            all_transactions.extend(fetched.transactions);

            let current = fetched.pages.current;
            let total = fetched.pages.total;

            if total == 0 || current >= total {
                break;
            }

            if last_seen_current.is_some_and(|prev| current <= prev) {
                warn!("⚠️ Upstream page cursor stuck at {current} after {page} request(s)");
                return Err(ServiceError::Repo(RepositoryError::PaginationStalled {
                    pages: page,
                }));
            }
            last_seen_current = Some(current);

            if page >= self.max_pages {
                warn!("⚠️ Pagination ceiling of {} page(s) reached", self.max_pages);
                return Err(ServiceError::Repo(RepositoryError::PaginationStalled {
                    pages: page,
                }));
            }

            page += 1;
        }

        info!(
            "✅ Drained {} transaction(s) across {page} page(s)",
            all_transactions.len()
        );

        Ok(all_transactions)
    }
}
