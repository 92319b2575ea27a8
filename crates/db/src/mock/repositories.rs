use agence_core::models::contact::NewContact;
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::repositories::submission::ContactRepository;

// Mock repository for handler tests
mock! {
    pub ContactRepo {}

    #[async_trait]
    impl ContactRepository for ContactRepo {
        async fn save_submission(
            &self,
            contact: &NewContact,
            disponibilites: &[String],
        ) -> eyre::Result<Uuid>;

        async fn ping(&self) -> eyre::Result<()>;
    }
}
