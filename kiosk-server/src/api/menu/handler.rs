//! Menu API Handlers

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::ApiResponse;
use shared::intent::MenuRequest;
use shared::models::{Menu, Settings};

use crate::auth::Identity;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
struct MenuBody {
    menu: Menu,
}

#[derive(Debug, Serialize)]
struct SettingsBody {
    settings: Settings,
}

#[derive(Debug, Serialize)]
struct AddedBody {
    message: String,
    id: String,
}

/// POST /api/menu
pub async fn dispatch(
    State(state): State<ServerState>,
    identity: Identity,
    Json(request): Json<MenuRequest>,
) -> AppResult<Response> {
    let menu = state.menu_service();

    match request {
        MenuRequest::Get => Ok(Json(MenuBody {
            menu: menu.menu().await?,
        })
        .into_response()),
        MenuRequest::Add { object } => {
            identity.require_admin()?;
            let added = menu.add(object).await?;
            Ok(Json(AddedBody {
                message: format!("Added {} to {} Collection", added.name, added.object_type),
                id: added.id,
            })
            .into_response())
        }
        MenuRequest::Remove { object_type, id } => {
            identity.require_admin()?;
            menu.remove(object_type, &id).await?;
            Ok(ApiResponse::message(format!("Removed 1 from {object_type}")).into_response())
        }
        MenuRequest::Modify { id, modified_object } => {
            identity.require_admin()?;
            let modified = menu.modify(&id, modified_object).await?;
            let message = format!("Modified 1 from {}", modified.object_type);
            Ok(ApiResponse::message(message).into_response())
        }
        MenuRequest::GetSettings => Ok(Json(SettingsBody {
            settings: menu.settings().await?,
        })
        .into_response()),
        MenuRequest::ModifySettings { settings } => {
            identity.require_admin()?;
            let settings = menu.modify_settings(settings).await?;
            Ok(Json(SettingsBody { settings }).into_response())
        }
    }
}
