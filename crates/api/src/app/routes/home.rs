use axum::response::Html;

/// `GET /` — embedded landing page describing the demo surface.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Vulnerable API Demo</title>
  <style>
    body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
    code { background: #f2f2f2; padding: 0 0.25rem; }
    .warn { border: 2px solid #c0392b; padding: 0.75rem; background: #fdecea; }
  </style>
</head>
<body>
  <h1>Vulnerable API Demo</h1>
  <p class="warn"><strong>Warning:</strong> this service intentionally contains
  OWASP Top 10 vulnerabilities for educational purposes. Do not deploy it
  anywhere that matters.</p>
  <h2>Exhibits</h2>
  <ul>
    <li><code>GET /admin/users/</code> — broken access control (A01)</li>
    <li><code>POST /login</code> — authentication / cryptographic failures (A02, A07)</li>
    <li><code>GET /posts/search/?query=</code> — SQL injection (A03)</li>
    <li><code>POST /password/reset?username=&amp;new_password=</code> — insecure design (A04)</li>
    <li><code>GET /debug/config</code> — security misconfiguration (A05)</li>
    <li><code>GET /system/check?command=</code> — command injection (A06)</li>
    <li><code>POST /register?username=&amp;password=&amp;email=</code> — plaintext credentials (A02, A07)</li>
    <li><code>POST /import/data?data=</code> — integrity failures (A08)</li>
    <li><code>GET /users/{id}</code> — logging &amp; monitoring failures (A09)</li>
    <li><code>GET /fetch-resource/?url=</code> — server-side request forgery (A10)</li>
  </ul>
  <p>Try <code>' OR 1=1 --</code> as a search query to get started.</p>
</body>
</html>
"#;
