//! `UserSource`: the accessor seam page controllers depend on.

use async_trait::async_trait;

use crate::domain::user::User;
use crate::error::DomainFailure;

/// Something that can answer the two user queries.
///
/// `BoardClient` is the production implementation; controllers only see this
/// trait so they can be driven by any backend.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn user(&self) -> Result<User, DomainFailure>;

    async fn everybody(&self) -> Result<Vec<User>, DomainFailure>;
}
