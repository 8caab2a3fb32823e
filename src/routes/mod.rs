pub mod util;
pub mod v1;

pub fn config(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(actix_web::web::scope("/api").configure(v1::config));
}
