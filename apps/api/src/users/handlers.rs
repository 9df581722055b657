use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{NewUser, User};
use crate::state::AppState;
use crate::tiers::Tier;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    /// Defaults to Free when omitted.
    pub tier: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTierRequest {
    pub tier: String,
}

pub(crate) fn validate_new_user(req: CreateUserRequest) -> Result<NewUser, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }

    let email = req.email.trim();
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !well_formed {
        return Err(AppError::Validation(format!("'{email}' is not a valid email")));
    }

    let tier = match req.tier.as_deref() {
        Some(raw) => raw.parse::<Tier>()?,
        None => Tier::default(),
    };

    Ok(NewUser {
        name: name.to_string(),
        email: email.to_string(),
        tier,
    })
}

/// GET /api/users
pub async fn handle_list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state
        .store
        .list_users()
        .await?
        .into_iter()
        .map(User::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::data_integrity)?;
    Ok(Json(users))
}

/// POST /api/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let new_user = validate_new_user(req)?;
    let row = state.store.insert_user(&new_user).await?;
    let user = User::try_from(row).map_err(AppError::data_integrity)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let row = state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(User::try_from(row).map_err(AppError::data_integrity)?))
}

/// PUT /api/users/:id/tier
pub async fn handle_update_tier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTierRequest>,
) -> Result<Json<User>, AppError> {
    let tier: Tier = req.tier.parse()?;
    let row = state
        .store
        .update_user_tier(id, tier)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(User::try_from(row).map_err(AppError::data_integrity)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, tier: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            tier: tier.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_to_free() {
        let user = validate_new_user(request("Ada", "ada@example.com", None)).unwrap();
        assert_eq!(user.tier, Tier::Free);
    }

    #[test]
    fn test_trims_fields() {
        let user =
            validate_new_user(request("  Ada  ", " ada@example.com ", Some("Gold"))).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.tier, Tier::Gold);
    }

    #[test]
    fn test_rejects_blank_name() {
        let err = validate_new_user(request("   ", "ada@example.com", None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_bad_email() {
        for email in ["", "ada", "@example.com", "ada@"] {
            let err = validate_new_user(request("Ada", email, None)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "accepted {email:?}");
        }
    }

    #[test]
    fn test_rejects_unknown_tier() {
        let err = validate_new_user(request("Ada", "ada@example.com", Some("Bronze"))).unwrap_err();
        assert!(matches!(err, AppError::InvalidTier(_)));
    }
}
