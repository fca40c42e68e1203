use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::{MenuBanner, MenuCategory, MenuEntry, MenuIngredient, MenuResponse, MenuRestaurant};
use crate::domain::services::promotions;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::{DateTime, Utc};

/// The public menu for one restaurant: active banners, active categories in
/// display order, each with its available items priced through whatever
/// discounts run at the evaluation instant.
///
/// `?at=<RFC 3339>` pins that instant, e.g. to preview Friday's happy hour
/// on a Tuesday. Without it the menu reflects "now"; clients re-fetch to
/// pick up schedule flips.
pub async fn get_public_menu(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = state.restaurant_repo.find_by_slug(&slug).await?
        .ok_or_else(|| AppError::NotFound(format!("Restaurant '{}' not found", slug)))?;

    let at = match params.get("at") {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| AppError::Validation("Invalid 'at' timestamp (RFC 3339 expected)".into()))?,
        None => Utc::now(),
    };

    let banners = state.banner_repo.list(&restaurant.id).await?;
    let categories = state.category_repo.list(&restaurant.id).await?;
    let items = state.item_repo.list(&restaurant.id).await?;
    let ingredients = state.ingredient_repo.list(&restaurant.id).await?;
    let discounts = state.discount_repo.list(&restaurant.id).await?;

    let available: Vec<_> = items.into_iter().filter(|i| i.is_available).collect();
    let priced = promotions::apply_to_items(&available, &discounts, &restaurant.timezone, at);

    let ingredient_index: HashMap<&str, &crate::domain::models::ingredient::Ingredient> =
        ingredients.iter().map(|i| (i.id.as_str(), i)).collect();

    let mut by_category: HashMap<String, Vec<MenuEntry>> = HashMap::new();
    for entry in priced {
        let resolved = entry.item.ingredient_ids.0.iter()
            .filter_map(|id| ingredient_index.get(id.as_str()))
            .map(|i| MenuIngredient {
                name: i.name.clone(),
                is_allergen: i.is_allergen,
            })
            .collect();

        by_category
            .entry(entry.item.category_id.clone())
            .or_default()
            .push(MenuEntry { priced: entry, ingredients: resolved });
    }

    let menu_categories: Vec<MenuCategory> = categories
        .into_iter()
        .filter(|c| c.is_active)
        .map(|c| MenuCategory {
            items: by_category.remove(&c.id).unwrap_or_default(),
            id: c.id,
            name: c.name,
            description: c.description,
        })
        .collect();

    let theme = serde_json::from_str(&restaurant.theme_json)
        .unwrap_or_else(|_| serde_json::json!({}));

    Ok(Json(MenuResponse {
        restaurant: MenuRestaurant {
            name: restaurant.name,
            slug: restaurant.slug,
            currency: restaurant.currency,
            logo_url: restaurant.logo_url,
            theme,
        },
        banners: banners.into_iter()
            .filter(|b| b.is_active)
            .map(|b| MenuBanner {
                title: b.title,
                message: b.message,
                image_url: b.image_url,
            })
            .collect(),
        categories: menu_categories,
    }))
}
