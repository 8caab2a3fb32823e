use actix_web::{get, post, put, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    db::{self, BlueprintStore},
    models::{ApiResponse, Blueprint, NewBlueprint, Point},
    routes::util::created,
};

pub fn config(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        web::scope("/blueprints")
            .service(list_blueprints)
            .service(create_blueprint)
            .service(list_author_blueprints)
            .service(get_blueprint)
            .service(add_point),
    );
}

#[get("")]
pub async fn list_blueprints(store: web::Data<dyn BlueprintStore>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(store.get_all()))
}

#[get("/{author}")]
pub async fn list_author_blueprints(
    store: web::Data<dyn BlueprintStore>,
    author: web::Path<String>,
) -> db::Result<HttpResponse> {
    let blueprints = store.get_by_author(&author)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(blueprints)))
}

#[get("/{author}/{bpname}")]
pub async fn get_blueprint(
    store: web::Data<dyn BlueprintStore>,
    path: web::Path<(String, String)>,
) -> db::Result<HttpResponse> {
    let (author, name) = path.into_inner();
    let blueprint = store.get(&author, &name)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(blueprint)))
}

#[post("")]
pub async fn create_blueprint(
    req: HttpRequest,
    store: web::Data<dyn BlueprintStore>,
    body: web::Json<NewBlueprint>,
) -> db::Result<HttpResponse> {
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    let blueprint: Blueprint = body.into();
    store.add(blueprint.clone())?;

    Ok(created(
        &req,
        &[blueprint.author.as_str(), blueprint.name.as_str()],
        ApiResponse::created(&blueprint),
    ))
}

#[put("/{author}/{bpname}/points")]
pub async fn add_point(
    store: web::Data<dyn BlueprintStore>,
    path: web::Path<(String, String)>,
    point: web::Json<Point>,
) -> db::Result<HttpResponse> {
    let (author, name) = path.into_inner();
    store.add_point(&author, &name, point.into_inner())?;
    Ok(HttpResponse::Accepted().json(ApiResponse::accepted()))
}
