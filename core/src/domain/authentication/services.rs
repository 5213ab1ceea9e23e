use tracing::warn;

use crate::domain::{
    authentication::{
        entities::{AuthorizeRequestInput, AuthorizeRequestOutput},
        ports::{AuthService, TokenVerifier},
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, services::Service},
    diet_chart::ports::DietChartRepository,
    food::ports::FoodRepository,
    health::ports::HealthCheckRepository,
    patient::ports::PatientRepository,
    recipe::ports::{LLMClient, RecipeRepository},
    specialist::ports::SwapLogRepository,
};

impl<F, P, D, SL, RC, HC, LLM, TV> AuthService for Service<F, P, D, SL, RC, HC, LLM, TV>
where
    F: FoodRepository,
    P: PatientRepository,
    D: DietChartRepository,
    SL: SwapLogRepository,
    RC: RecipeRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
    TV: TokenVerifier,
{
    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let verified = self.token_verifier.verify(&input.token)?;

        // The unverified payload is what the caller routed on; it must agree
        // with what the signature covers.
        if verified.sub != input.claims.sub {
            warn!("token subject mismatch for {}", input.claims.sub);
            return Err(CoreError::InvalidToken);
        }

        Ok(AuthorizeRequestOutput {
            identity: Identity::new(verified.sub, verified.preferred_username, verified.roles),
        })
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{authentication::entities::JwtClaim, common::test_utils::test_service};

    fn claims(sub: Uuid) -> JwtClaim {
        JwtClaim {
            sub,
            preferred_username: "vaidya".to_string(),
            exp: i64::MAX,
            roles: vec![],
            iat: None,
            iss: None,
        }
    }

    #[tokio::test]
    async fn authorize_request_returns_identity_for_valid_token() {
        let practitioner = Uuid::new_v4();
        let service = test_service().with_token(claims(practitioner));

        let output = service
            .authorize_request(AuthorizeRequestInput {
                claims: claims(practitioner),
                token: "signed".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.identity.id(), practitioner);
        assert_eq!(output.identity.username, "vaidya");
    }

    #[tokio::test]
    async fn authorize_request_rejects_subject_mismatch() {
        let service = test_service().with_token(claims(Uuid::new_v4()));

        let result = service
            .authorize_request(AuthorizeRequestInput {
                claims: claims(Uuid::new_v4()),
                token: "signed".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::InvalidToken);
    }
}
