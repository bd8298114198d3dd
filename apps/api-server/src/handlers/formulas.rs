//! Formula CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;
use validator::Validate;

use formula_core::DomainError;
use formula_core::domain::{Formula, FormulaChanges, NewFormula};
use formula_shared::dto::{
    CreateFormulaRequest, DeleteResponse, FormulaResponse, UpdateFormulaRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

const FORMULA: &str = "Formula";

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: FORMULA,
        id,
    }
}

fn to_response(formula: Formula) -> FormulaResponse {
    FormulaResponse {
        id: formula.id,
        title: formula.title,
        description: formula.description,
        content: formula.content,
        created_at: formula.created_at,
        updated_at: formula.updated_at,
    }
}

fn to_changes(req: UpdateFormulaRequest) -> FormulaChanges {
    FormulaChanges {
        title: req.title.into_value(),
        description: req.description.into_change(),
        content: req.content.into_value(),
    }
}

/// POST /api/formulas
pub async fn create_formula(
    state: web::Data<AppState>,
    body: web::Json<CreateFormulaRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let formula = state
        .formulas
        .create(NewFormula {
            title: req.title,
            description: req.description,
            content: req.content,
        })
        .await?;

    tracing::info!(formula_id = %formula.id, "Formula created");
    Ok(HttpResponse::Ok().json(to_response(formula)))
}

/// GET /api/formulas/{id}
pub async fn get_formula(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let formula = state
        .formulas
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(formula)))
}

/// PATCH /api/formulas/{id}
pub async fn update_formula(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateFormulaRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let formula = state
        .formulas
        .update(id, to_changes(req))
        .await
        .map_err(|e| e.for_entity(FORMULA, id))?;

    tracing::info!(formula_id = %id, "Formula updated");
    Ok(HttpResponse::Ok().json(to_response(formula)))
}

/// DELETE /api/formulas/{id}
pub async fn delete_formula(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .formulas
        .delete(id)
        .await
        .map_err(|e| e.for_entity(FORMULA, id))?;

    tracing::info!(formula_id = %id, "Formula deleted");
    Ok(HttpResponse::Ok().json(DeleteResponse { ok: true }))
}

/// GET /api/formulas
///
/// Every stored formula, in no particular order.
pub async fn list_formulas(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let formulas: Vec<FormulaResponse> = state
        .formulas
        .find_all()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(formulas))
}
