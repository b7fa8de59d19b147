//! Protected pages

use crate::server::middleware::get_claims;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

/// `GET /`
pub async fn index(req: HttpRequest) -> Result<HttpResponse> {
    let claims = get_claims(&req)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Home</title>
  <link rel="stylesheet" href="/css/site.css">
</head>
<body>
  <h2>Hello, {}</h2>
  <p>Role: {}</p>
  <form method="post" action="/logout"><button type="submit">Sign out</button></form>
</body>
</html>
"#,
            escape_html(&claims.sub),
            claims.auth
        )))
}

/// `GET /api/me`: the verified claims of the caller
pub async fn me(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let claims = get_claims(&req)?;
    let expires_in = state.tokens.time_until_expiry(&claims);

    Ok(HttpResponse::Ok().json(json!({
        "sub": claims.sub,
        "auth": claims.auth,
        "iat": claims.iat,
        "exp": claims.exp,
        "expires_in": expires_in,
    })))
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
