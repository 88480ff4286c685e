// routes/home.rs
// GET / -> small HTML page that calls /api/setup and /api/verify.

use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html(r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>TOTP</title>
</head>
<body>
  <main>
    <form id="setup-form">
      <label>Issuer <input name="issuer" value="MyApp" required></label>
      <label>Label <input name="label" value="User" required></label>
      <button type="submit">Create secret</button>
    </form>
    <pre id="setup-result"></pre>

    <form id="verify-form">
      <label>Secret <input name="secret" required></label>
      <label>Code <input name="token" inputmode="numeric" pattern="\d*" required></label>
      <button type="submit">Verify</button>
    </form>
    <pre id="verify-result"></pre>
  </main>
  <script>
    async function post(path, body, out) {
      try {
        const response = await fetch(path, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(body)
        });
        out.textContent = await response.text();
      } catch (err) {
        out.textContent = 'Request failed';
      }
    }

    const setup = document.getElementById('setup-form');
    setup.addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/setup', {
        issuer: setup.issuer.value.trim(),
        label: setup.label.value.trim()
      }, document.getElementById('setup-result'));
    });

    const verify = document.getElementById('verify-form');
    verify.addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/verify', {
        secret: verify.secret.value.trim(),
        token: verify.token.value.trim()
      }, document.getElementById('verify-result'));
    });
  </script>
</body>
</html>
"#)
}

pub async fn health() -> &'static str {
    "ok"
}
