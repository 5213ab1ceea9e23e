use utoipa::OpenApi;

use crate::application::http::{
    analytics::router::AnalyticsApiDoc, diet_chart::router::DietChartApiDoc,
    food::router::FoodApiDoc, health::router::HealthApiDoc, patient::router::PatientApiDoc,
    recipe::router::RecipeApiDoc, specialist::router::SpecialistApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aahaara API",
        description = "Ayurvedic diet planning: food catalog, patients, diet charts, food swaps, recipes and practice analytics."
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/foods", api = FoodApiDoc),
        (path = "/patients", api = PatientApiDoc),
        (path = (""), api = DietChartApiDoc),
        (path = (""), api = SpecialistApiDoc),
        (path = (""), api = RecipeApiDoc),
        (path = "/analytics", api = AnalyticsApiDoc),
    )
)]
pub struct ApiDoc;
