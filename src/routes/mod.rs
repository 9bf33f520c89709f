pub mod auth;
pub mod health;
pub mod projects;
pub mod tasks;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").service(auth::login))
        .service(
            web::scope("/projects")
                .service(projects::list_projects)
                .service(projects::create_project)
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                .service(tasks::update_task)
                .service(tasks::toggle_task)
                .service(tasks::delete_task)
                .service(projects::get_project)
                .service(projects::update_project)
                .service(projects::delete_project),
        );
}
