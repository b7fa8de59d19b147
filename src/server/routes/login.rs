//! Form login endpoints

use crate::auth::{AUTHORIZATION_HEADER, bind_to_response};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{info, warn};

/// Login form body
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Flags shown on the login page after a redirect
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
    pub logout: Option<String>,
}

/// `GET /login`
pub async fn login_page(query: web::Query<LoginQuery>) -> HttpResponse {
    let notice = if query.error.is_some() {
        r#"<p class="notice error">Bad credentials</p>"#
    } else if query.logout.is_some() {
        r#"<p class="notice">You have been signed out</p>"#
    } else {
        ""
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Please sign in</title>
  <link rel="stylesheet" href="/css/site.css">
</head>
<body>
  <form class="login" method="post" action="/login">
    <h2>Please sign in</h2>
    {notice}
    <label for="username">Username</label>
    <input type="text" id="username" name="username" required autofocus>
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required>
    <button type="submit">Sign in</button>
  </form>
</body>
</html>
"#
        ))
}

/// `POST /login`: mint a token and hand it over as a cookie
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse> {
    info!("User login attempt: {}", form.username);

    if !state.login.matches(&form.username, &form.password) {
        warn!("Login failed for user: {}", form.username);
        return Ok(redirect("/login?error"));
    }

    let header_value = state.tokens.mint(&form.username, state.login.role)?;

    let mut response = redirect("/");
    bind_to_response(&header_value, &mut response);

    info!("User logged in successfully: {}", form.username);
    Ok(response)
}

/// `GET|POST /logout`: expire the auth cookie
pub async fn logout() -> HttpResponse {
    let mut removal = Cookie::build(AUTHORIZATION_HEADER, "").path("/").finish();
    removal.make_removal();

    HttpResponse::Found()
        .insert_header((header::LOCATION, "/login?logout"))
        .cookie(removal)
        .finish()
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
