use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

pub trait Policy: Send + Sync {
    fn is_owner(&self, identity: &Identity, owner_id: Uuid) -> bool;
}

/// Tenant rules: every patient, chart and swap log belongs to the
/// practitioner who created it.
#[derive(Clone, Debug, Default)]
pub struct AahaaraPolicy;

impl AahaaraPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for AahaaraPolicy {
    fn is_owner(&self, identity: &Identity, owner_id: Uuid) -> bool {
        identity.id() == owner_id
    }
}

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}
