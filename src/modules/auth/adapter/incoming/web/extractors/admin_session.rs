use crate::auth::application::domain::entities::AuthUser;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

/// Present on handlers that require the admin dashboard to be unlocked.
///
/// Only checks the process-wide session flag kept by `AuthGate`; it does not
/// identify the caller. One login unlocks every client and one logout locks
/// them all, so the admin routes must never be reachable from outside a
/// trusted network.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user: Option<AuthUser>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let session = state.auth_gate.session().await;
            if !session.is_authenticated {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "ADMIN_SESSION_REQUIRED",
                    "Admin login required",
                )));
            }

            Ok(AdminSession { user: session.user })
        })
    }
}
