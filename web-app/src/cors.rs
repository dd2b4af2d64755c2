use rocket::{
    fairing::{self, Fairing, Info, Kind},
    http::{Header, Method, Status},
    request::{FromRequest, Outcome},
    Build, Request, Response, Rocket,
};

use crate::{config::Config, error::Error};

/// Preview deployments live at `https://<prefix>-<anything>.vercel.app`.
const PREVIEW_DOMAIN: &str = ".vercel.app";
const ALLOWED_METHODS: &str = "GET, OPTIONS";
const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type";
const MAX_AGE_SECS: &str = "86400";

#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origins: Vec<String>,
    preview_prefix: String,
}

impl CorsPolicy {
    pub fn new(origins: Vec<String>, preview_prefix: impl Into<String>) -> Self {
        Self {
            origins,
            preview_prefix: preview_prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cors_origins.clone(), config.preview_prefix.clone())
    }

    pub fn allows(&self, origin: &str) -> bool {
        let origin = origin.trim_end_matches('/');
        self.origins
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(origin))
            || self.is_preview(origin)
    }

    fn is_preview(&self, origin: &str) -> bool {
        if self.preview_prefix.is_empty() {
            return false;
        }
        let origin = origin.to_ascii_lowercase();
        let Some(label) = origin
            .strip_prefix("https://")
            .and_then(|host| host.strip_suffix(PREVIEW_DOMAIN))
        else {
            return false;
        };
        let Some(rest) = label
            .strip_prefix(self.preview_prefix.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            return false;
        };

        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

/// Request guard that lets same-origin and server-to-server calls through
/// and rejects browsers calling from an origin that is not allowed.
#[derive(Debug)]
pub struct AllowedOrigin(pub Option<String>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AllowedOrigin {
    type Error = Error;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(origin) = req.headers().get_one("Origin") else {
            return Outcome::Success(AllowedOrigin(None));
        };
        let Some(policy) = req.rocket().state::<CorsPolicy>() else {
            return Outcome::Error((Status::Forbidden, Error::OriginNotAllowed(origin.into())));
        };

        if policy.allows(origin) {
            Outcome::Success(AllowedOrigin(Some(origin.into())))
        } else {
            warn!("Rejected request from origin {origin}");
            Outcome::Error((Status::Forbidden, Error::OriginNotAllowed(origin.into())))
        }
    }
}

pub struct CorsFairing {
    policy: CorsPolicy,
}

impl CorsFairing {
    pub fn fairing(policy: CorsPolicy) -> Self {
        Self { policy }
    }
}

#[rocket::async_trait]
impl Fairing for CorsFairing {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Ignite | Kind::Response | Kind::Singleton,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
        info!(
            "CORS allows {} origin(s) and '{}-*' previews",
            self.policy.origins.len(),
            self.policy.preview_prefix
        );
        Ok(rocket
            .mount("/", routes![preflight])
            .manage(self.policy.clone()))
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let Some(origin) = req.headers().get_one("Origin") else {
            return;
        };
        res.set_header(Header::new("Vary", "Origin"));
        if !self.policy.allows(origin) {
            return;
        }

        res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
        res.set_header(Header::new("Access-Control-Allow-Credentials", "true"));

        if req.method() == Method::Options {
            let headers = req
                .headers()
                .get_one("Access-Control-Request-Headers")
                .unwrap_or(DEFAULT_ALLOWED_HEADERS)
                .to_string();
            res.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
            res.set_header(Header::new("Access-Control-Allow-Headers", headers));
            res.set_header(Header::new("Access-Control-Max-Age", MAX_AGE_SECS));
        }
    }
}

#[options("/<_..>")]
fn preflight(_origin: AllowedOrigin) -> Status {
    Status::NoContent
}
