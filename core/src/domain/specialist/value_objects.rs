use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FindSimilarFoodsInput {
    pub patient_id: Uuid,
    pub food_id: Uuid,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct SimilarFoodsForItemInput {
    pub item_id: Uuid,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct SwapFoodInput {
    pub item_id: Uuid,
    pub new_food_id: Uuid,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GetSwapLogsFilter {
    pub meal_item_id: Option<Uuid>,
    pub original_food_id: Option<Uuid>,
    pub new_food_id: Option<Uuid>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
