use std::{ops::Deref, sync::Arc};

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};
use turfdb_core::gateways::short_link::ShortLinkGateway;

use crate::web::jwt;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

fn bearer_tokens_from_header<'r>(request: &'r Request<'_>) -> impl Iterator<Item = &'r str> {
    request
        .headers()
        .get("Authorization")
        .filter_map(get_bearer_token)
}

/// An authenticated administrator.
#[derive(Debug)]
pub struct Admin {
    id: String,
    token: String,
}

impl Admin {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The access token that has been presented.
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Admin {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let jwt_state = try_outcome!(request.guard::<&State<jwt::JwtState>>().await);
        let admin = bearer_tokens_from_header(request).find_map(|token| {
            let claims = jwt_state
                .validate_token(token)
                .map_err(|err| debug!("Rejected access token: {err}"))
                .ok()?;
            (claims.role == jwt::ADMIN_ROLE).then(|| Admin {
                id: claims.sub,
                token: token.to_owned(),
            })
        });
        match admin {
            Some(admin) => Outcome::Success(admin),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct ShortLinks(pub Arc<dyn ShortLinkGateway>);

impl Deref for ShortLinks {
    type Target = dyn ShortLinkGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Version(pub &'static str);
