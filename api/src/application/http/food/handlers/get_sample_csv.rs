use aahaara_core::domain::food::import::SAMPLE_FOOD_CSV;
use axum::{
    http::header,
    response::{IntoResponse, Response},
};

#[utoipa::path(
    get,
    path = "/import/sample",
    tag = "food",
    summary = "Download sample food CSV",
    description = "A template with every import column and a few foods.",
    responses(
        (status = 200, content_type = "text/csv", body = String)
    )
)]
pub async fn get_sample_csv() -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sample_foods.csv\"",
            ),
        ],
        SAMPLE_FOOD_CSV,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sample_is_served_as_a_csv_attachment() {
        let response = get_sample_csv().await;

        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert!(
            response.headers()[header::CONTENT_DISPOSITION]
                .to_str()
                .unwrap()
                .contains("sample_foods.csv")
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"name,category,"));
    }
}
