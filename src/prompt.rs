/// Instruction sent alongside every dish photo. The wording steers the model
/// toward the exact JSON shape the client parses, so it lives here as one
/// atomic constant and is never assembled at runtime.
pub const DISH_ANALYSIS_PROMPT: &str = r#"Проанализируй это блюдо и верни JSON с такой структурой:
{
  "dishName": "Название блюда на русском",
  "calories": число калорий,
  "protein": граммы белка,
  "fats": граммы жиров,
  "carbs": граммы углеводов,
  "ingredients": [
    {"name": "Ингредиент", "amount": "150г", "category": "Белок|Овощи|Молочное|Соусы|Углеводы|Другое"}
  ],
  "recommendations": [
    "Рекомендация 1",
    "Рекомендация 2",
    "Рекомендация 3"
  ]
}

Будь точным в оценке КБЖУ. Давай практичные рекомендации по питанию."#;
