use actix_web::{web, HttpResponse};
use log::debug;
use crate::db::Storage;
use crate::errors::AppError;
use crate::models::employee::{EmployeeSearch, EmployeeUpdate, NewEmployee};
use crate::utils::validation::validate_payload;

fn not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

// A numeric id outside the `i32` range can never be assigned, so it comes
// back as `None` and resolves to "not found" rather than a bad request.
fn parse_id(raw: &str) -> Result<Option<i32>, AppError> {
    let digits = raw
        .strip_prefix('-')
        .or_else(|| raw.strip_prefix('+'))
        .unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest("Invalid employee ID".to_string()));
    }
    Ok(raw.parse::<i32>().ok())
}

/// Registers the `/api/employees` routes backed by storage `S`.
pub fn configure<S: Storage + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .service(
                web::resource("/employees")
                    .route(web::get().to(get_employees::<S>))
                    .route(web::post().to(create_employee::<S>)),
            )
            // Must stay ahead of `/employees/{id}`.
            .service(
                web::resource("/employees/search")
                    .route(web::get().to(search_employees::<S>)),
            )
            .service(
                web::resource("/employees/{id}")
                    .route(web::get().to(get_employee::<S>))
                    .route(web::put().to(update_employee::<S>))
                    .route(web::delete().to(delete_employee::<S>)),
            ),
    );
}

pub async fn get_employees<S: Storage + 'static>(
    store: web::Data<S>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = store.list()?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee<S: Storage + 'static>(
    store: web::Data<S>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = match parse_id(&id)? {
        Some(id) => store.get(id)?,
        None => None,
    }
    .ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee<S: Storage + 'static>(
    store: web::Data<S>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    validate_payload(&*new_employee)?;

    let employee = store.create(new_employee.into_inner())?;
    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee<S: Storage + 'static>(
    store: web::Data<S>,
    id: web::Path<String>,
    updates: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    let id = parse_id(&id)?;
    validate_payload(&*updates)?;

    let employee = match id {
        Some(id) => store.update(id, updates.into_inner())?,
        None => None,
    }
    .ok_or_else(not_found)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee<S: Storage + 'static>(
    store: web::Data<S>,
    id: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let deleted = match parse_id(&id)? {
        Some(id) => store.delete(id)?,
        None => false,
    };
    if !deleted {
        return Err(not_found().into());
    }
    Ok(HttpResponse::NoContent().finish())
}

pub async fn search_employees<S: Storage + 'static>(
    store: web::Data<S>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, actix_web::Error> {
    let criteria: EmployeeSearch = query.into_inner().into_iter().collect();
    debug!("Searching employees with {:?}", criteria);
    let employees = store.search(&criteria)?;
    Ok(HttpResponse::Ok().json(employees))
}
