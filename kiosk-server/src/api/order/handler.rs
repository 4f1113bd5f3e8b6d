//! Order API Handlers

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::intent::OrderRequest;
use shared::models::{DeviceType, Order};
use shared::util::now_millis;
use shared::{ApiResponse, ErrorCode};

use crate::auth::Identity;
use crate::core::ServerState;
use crate::utils::validation::validate_order;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct OrdersBody {
    orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
struct AddedBody {
    message: String,
    id: String,
}

fn order_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::OrderNotFound).with_detail("id", id)
}

/// POST /api/order
pub async fn dispatch(
    State(state): State<ServerState>,
    identity: Identity,
    Json(request): Json<OrderRequest>,
) -> AppResult<Response> {
    let orders = state.orders();

    match request {
        OrderRequest::Get => {
            identity.require_device(&[DeviceType::Orders, DeviceType::Manage])?;
            let orders = orders.find_unfinished().await?;
            Ok(Json(OrdersBody { orders }).into_response())
        }
        OrderRequest::GetAll => {
            identity.require_admin()?;
            let orders = orders.find_all_sorted().await?;
            Ok(Json(OrdersBody { orders }).into_response())
        }
        OrderRequest::Add { mut order } => {
            identity.require_device(&[DeviceType::Kiosk, DeviceType::Manage])?;
            validate_order(&order)?;

            order.timestamp = now_millis();
            order.finished = false;
            let created = orders.create(order).await?;

            tracing::info!(order_id = %created.id, parts = created.parts.len(), "Order submitted");
            Ok(Json(AddedBody {
                message: format!("Added {} to orders", created.id),
                id: created.id,
            })
            .into_response())
        }
        OrderRequest::Remove { id } => {
            identity.require_device(&[DeviceType::Manage])?;
            orders.delete(&id).await?.ok_or_else(|| order_not_found(&id))?;
            tracing::info!(order_id = %id, "Order removed");
            Ok(ApiResponse::message("Removed 1 order(s)").into_response())
        }
        OrderRequest::Closeout { id } => {
            identity.require_device(&[DeviceType::Orders, DeviceType::Manage])?;
            orders.close_out(&id).await?.ok_or_else(|| order_not_found(&id))?;
            tracing::info!(order_id = %id, "Order closed out");
            Ok(ApiResponse::message(format!("Closed out order {id}")).into_response())
        }
    }
}
