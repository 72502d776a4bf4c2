use actix_web::{get, web, Responder};
use log::debug;
use crate::server::controller::error::CustomError;
use crate::server::model::order::GetOrdersResponse;
use crate::server::state::AppState;

#[get("/orders")]
/// one placeholder order per user known to the user directory
pub(crate) async fn get_orders(data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let users = data.get_user_directory().fetch_users().await?;
    debug!("building orders for {} users", users.len());
    Ok(web::Json(users.into_iter().collect::<GetOrdersResponse>()))
}
