use std::sync::Arc;

use siege_stats::{
    InMemoryStatsProvider, PlatformType, PlayerIdentity, RawStatsDocument, StatsService,
};

pub fn player(name: &str) -> PlayerIdentity {
    PlayerIdentity::new(name, PlatformType::Uplay)
}

pub struct TestSetup {
    pub provider: Arc<InMemoryStatsProvider>,
    pub service: StatsService,
}

impl TestSetup {
    pub async fn with_documents(documents: Vec<(&str, RawStatsDocument)>) -> Self {
        let provider = Arc::new(InMemoryStatsProvider::new());
        for (name, document) in documents {
            provider.insert_document(name, document).await;
        }
        let service = StatsService::builder(provider.clone()).build();

        Self { provider, service }
    }

    pub async fn fail_fetch(&self, name: &str, message: &str) {
        self.provider.insert_failure(name, message).await;
    }
}
