//! Request and response body types.

use serde::{Deserialize, Serialize};

/// Reply for POST /recipes and PUT /recipes/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeSavedResponse {
    pub id: String,
    pub title: String,
}

/// Reply for DELETE /recipes/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Body for POST /recipes/find-by-ingredients.
///
/// The field keeps the `myIngredients` wire name the frontends send;
/// an absent field behaves like an empty list.
#[derive(Debug, Serialize, Deserialize)]
pub struct FindByIngredientsRequest {
    #[serde(rename = "myIngredients", default)]
    pub my_ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_request_uses_wire_field_name() {
        let req: FindByIngredientsRequest =
            serde_json::from_str(r#"{"myIngredients":["egg","flour"]}"#).unwrap();
        assert_eq!(req.my_ingredients, vec!["egg", "flour"]);
    }

    #[test]
    fn find_request_missing_field_is_empty() {
        let req: FindByIngredientsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.my_ingredients.is_empty());
    }
}
