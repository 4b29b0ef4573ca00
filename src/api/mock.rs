//! Mock lister implementations for isolating the controller in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{ListPage, RemoteLister};
use crate::domain::entity::Entity;
use crate::domain::organization::Organization;

mock! {
    pub OrganizationLister {}

    #[async_trait]
    impl RemoteLister<Organization> for OrganizationLister {
        async fn list(&self, page: usize, page_size: usize) -> ApiResult<ListPage<Organization>>;
    }
}

mock! {
    pub EntityLister {}

    #[async_trait]
    impl RemoteLister<Entity> for EntityLister {
        async fn list(&self, page: usize, page_size: usize) -> ApiResult<ListPage<Entity>>;
    }
}
