use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::AahaaraPolicy},
    food::ports::FoodPolicy,
};

pub const CATALOG_ADMIN_ROLE: &str = "admin";

impl FoodPolicy for AahaaraPolicy {
    async fn can_manage_foods(&self, identity: Identity) -> Result<bool, CoreError> {
        Ok(identity.has_role(CATALOG_ADMIN_ROLE))
    }
}
