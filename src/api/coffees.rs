//! Coffee catalog CRUD handlers for the resource API host.

use actix_web::{HttpResponse, delete, get, post, put, web};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::coffee::{
    CoffeeListResponse, CoffeeResponse, CreateCoffeeRequest, UpdateCoffeeRequest,
};

/// Configure coffee catalog routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_coffees)
        .service(get_coffee)
        .service(create_coffee)
        .service(update_coffee)
        .service(delete_coffee);
}

/// List all coffees.
#[utoipa::path(
    get,
    path = "/api/v1/coffees",
    tag = "Coffees",
    responses(
        (status = 200, description = "List of coffees", body = CoffeeListResponse)
    )
)]
#[get("/coffees")]
pub async fn list_coffees(db: web::Data<DatabaseConnection>) -> AppResult<HttpResponse> {
    let coffees = db::coffees::list(db.get_ref()).await?;
    let items: Vec<CoffeeResponse> = coffees.into_iter().map(CoffeeResponse::from).collect();

    Ok(HttpResponse::Ok().json(CoffeeListResponse { coffees: items }))
}

/// Get a single coffee by ID.
#[utoipa::path(
    get,
    path = "/api/v1/coffees/{id}",
    tag = "Coffees",
    params(
        ("id" = String, Path, description = "Coffee UUID")
    ),
    responses(
        (status = 200, description = "Coffee details", body = CoffeeResponse),
        (status = 404, description = "Coffee not found")
    )
)]
#[get("/coffees/{id}")]
pub async fn get_coffee(
    path: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let coffee = db::coffees::find_by_id(db.get_ref(), &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Coffee {}", id)))?;

    Ok(HttpResponse::Ok().json(CoffeeResponse::from(coffee)))
}

/// Create a new coffee.
#[utoipa::path(
    post,
    path = "/api/v1/coffees",
    tag = "Coffees",
    request_body = CreateCoffeeRequest,
    responses(
        (status = 201, description = "Coffee created", body = CoffeeResponse),
        (status = 400, description = "Invalid input")
    )
)]
#[post("/coffees")]
pub async fn create_coffee(
    body: web::Json<CreateCoffeeRequest>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    if body.name.trim().is_empty() {
        return Err(AppError::InvalidInput("Name is required".to_string()));
    }
    if body.price_cents < 0 {
        return Err(AppError::InvalidInput(
            "Price must not be negative".to_string(),
        ));
    }

    let coffee = db::coffees::insert(
        db.get_ref(),
        body.name.trim(),
        body.description.as_deref(),
        body.roast.as_str(),
        body.price_cents,
    )
    .await?;

    info!(id = %coffee.id, name = %coffee.name, "created coffee");
    Ok(HttpResponse::Created().json(CoffeeResponse::from(coffee)))
}

/// Update an existing coffee.
#[utoipa::path(
    put,
    path = "/api/v1/coffees/{id}",
    tag = "Coffees",
    params(
        ("id" = String, Path, description = "Coffee UUID")
    ),
    request_body = UpdateCoffeeRequest,
    responses(
        (status = 200, description = "Coffee updated", body = CoffeeResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Coffee not found")
    )
)]
#[put("/coffees/{id}")]
pub async fn update_coffee(
    path: web::Path<String>,
    body: web::Json<UpdateCoffeeRequest>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if let Some(name) = &body.name
        && name.trim().is_empty()
    {
        return Err(AppError::InvalidInput("Name must not be empty".to_string()));
    }
    if let Some(price) = body.price_cents
        && price < 0
    {
        return Err(AppError::InvalidInput(
            "Price must not be negative".to_string(),
        ));
    }

    let coffee = db::coffees::update(
        db.get_ref(),
        &id,
        body.name.as_deref().map(str::trim),
        body.description.as_deref(),
        body.roast.map(|r| r.as_str()),
        body.price_cents,
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Coffee {}", id)))?;

    Ok(HttpResponse::Ok().json(CoffeeResponse::from(coffee)))
}

/// Delete a coffee.
#[utoipa::path(
    delete,
    path = "/api/v1/coffees/{id}",
    tag = "Coffees",
    params(
        ("id" = String, Path, description = "Coffee UUID")
    ),
    responses(
        (status = 204, description = "Coffee deleted"),
        (status = 404, description = "Coffee not found")
    )
)]
#[delete("/coffees/{id}")]
pub async fn delete_coffee(
    path: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let removed = db::coffees::delete(db.get_ref(), &id).await?;

    if !removed {
        return Err(AppError::NotFound(format!("Coffee {}", id)));
    }

    info!(id = %id, "deleted coffee");
    Ok(HttpResponse::NoContent().finish())
}
