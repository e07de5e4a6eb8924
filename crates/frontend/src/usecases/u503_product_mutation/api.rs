use crate::shared::api_utils::{api_url, get_json, post_json, ApiError};
use crate::shared::endpoints;
use contracts::usecases::u503_product_mutation::{MutationRequest, MutationResult, MutationTemplate};

pub async fn fetch_templates() -> Result<Vec<MutationTemplate>, ApiError> {
    get_json(&api_url(endpoints::MUTATION_TEMPLATES)).await
}

/// Backend проксирует запрос в GraphQL API платформы выбранного магазина
pub async fn execute_mutation(request: &MutationRequest) -> Result<MutationResult, ApiError> {
    post_json(&api_url(endpoints::MUTATION_EXECUTE), request).await
}
