use crate::domain::{
    analytics::entities::PractitionerAnalytics, authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsService: Send + Sync {
    fn get_analytics(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<PractitionerAnalytics, CoreError>> + Send;
}
