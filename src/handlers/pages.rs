//! Browser UI pages
//!
//! Two-view shell (Home, Prediction) served straight from the binary. The
//! Prediction view posts to the JSON API and renders the verdict banner plus
//! a per-class confidence bar chart. Markup is static; the only dynamic part
//! is the fetch call in the page script.

use axum::response::Html;

const PAGE_SHELL: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>NewsShield - Fake News Detector</title>
<style>
  body { font-family: "Segoe UI", Arial, sans-serif; margin: 0; background: #f4f6f8; color: #2c3e50; }
  .wrap { max-width: 760px; margin: 0 auto; padding: 16px; }
  .banner-head { background-color: #2c3e50; padding: 18px 10px; border-radius: 10px; text-align: center; }
  .banner-head h1 { color: white; margin: 0 0 6px 0; }
  .banner-head h4 { color: white; margin: 0; font-weight: normal; }
  nav { margin: 14px 0; }
  nav a { color: #2c3e50; text-decoration: none; font-weight: bold; margin-right: 16px; }
  nav a:hover { text-decoration: underline; }
  textarea { width: 100%; min-height: 140px; padding: 10px; border: 1px solid #ccd4da; border-radius: 6px; box-sizing: border-box; font-size: 15px; }
  button { margin-top: 10px; background: #2c3e50; color: white; border: none; border-radius: 6px; padding: 10px 24px; font-size: 15px; cursor: pointer; }
  button:hover { background: #3d5166; }
  .banner { margin-top: 14px; padding: 12px; border-radius: 6px; display: none; }
  .banner.show { display: block; }
  .banner.success { background: #d4efdf; border: 1px solid #27ae60; }
  .banner.error { background: #fadbd8; border: 1px solid #e74c3c; }
  .banner.warning { background: #fcf3cf; border: 1px solid #f1c40f; }
  .bar-row { display: flex; align-items: center; margin-top: 8px; }
  .bar-label { width: 52px; font-weight: bold; }
  .bar-track { flex: 1; background: #e5e8eb; border-radius: 4px; height: 18px; margin: 0 8px; }
  .bar-fill { height: 100%; border-radius: 4px; }
  .bar-value { width: 64px; text-align: right; font-variant-numeric: tabular-nums; }
  footer { margin-top: 28px; border-top: 1px solid #dde3e8; padding-top: 12px; text-align: center; font-size: 14px; }
  footer ul { list-style-type: none; padding: 0; margin: 6px 0 0 0; }
</style>
</head>
<body>
<div class="wrap">
  <div class="banner-head">
    <h1>Fake News Detector</h1>
    <h4>Built with Rust &amp; Axum</h4>
  </div>
  <nav><a href="/">Home</a><a href="/prediction">Prediction</a></nav>
<!--BODY-->
  <footer>
    <p><strong>Created by Team Sigma Male</strong></p>
    <ul>
      <li>1. Hafidz Akbar Faridzi R.</li>
      <li>2. Muhammad Bagus Kurniawan</li>
      <li>3. Nurul Alpi Najam</li>
      <li>4. Ryan Rasyid Azizi</li>
    </ul>
  </footer>
</div>
</body>
</html>
"#;

const HOME_BODY: &str = r#"  <h2>Home</h2>
  <h3>Welcome!</h3>
  <p>This app uses a <strong>TF-IDF + LinearSVC</strong> model to classify news content as
  <strong>FAKE</strong> or <strong>REAL</strong>.</p>
  <h4>Model Info</h4>
  <p>Trained on a cleaned and preprocessed English-language fake news dataset. The reported
  confidence is a sigmoid of the decision score, not a calibrated probability.</p>
"#;

const PREDICTION_BODY: &str = r#"  <h2>Fake News Prediction</h2>
  <p>Enter a news headline or article (English only):</p>
  <textarea id="news-text"></textarea>
  <br>
  <button onclick="detect()">Detect</button>
  <div id="result" class="banner"></div>
  <div id="chart"></div>
  <script>
    function bar(name, pct, color) {
      return '<div class="bar-row"><span class="bar-label">' + name +
        '</span><div class="bar-track"><div class="bar-fill" style="width:' + pct.toFixed(1) +
        '%;background:' + color + '"></div></div><span class="bar-value">' + pct.toFixed(2) +
        '%</span></div>';
    }

    async function detect() {
      var result = document.getElementById('result');
      var chart = document.getElementById('chart');
      var text = document.getElementById('news-text').value;
      chart.innerHTML = '';

      if (text.trim() === '') {
        result.className = 'banner warning show';
        result.textContent = 'Text cannot be empty.';
        return;
      }

      try {
        var res = await fetch('/api/v1/predict', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ text: text })
        });
        var data = await res.json();

        if (!res.ok) {
          result.className = 'banner warning show';
          result.textContent = data.warning || data.error || 'Request failed.';
          return;
        }

        var real = data.label.toUpperCase() === 'REAL';
        result.className = 'banner show ' + (real ? 'success' : 'error');
        result.innerHTML = 'Prediction: <strong>' + data.label + '</strong> (' +
          data.confidence.toFixed(2) + '% confident)';

        chart.innerHTML =
          bar('FAKE', data.prob_fake * 100, '#e74c3c') +
          bar('REAL', data.prob_real * 100, '#27ae60');
      } catch (e) {
        result.className = 'banner error show';
        result.textContent = 'Server unreachable.';
      }
    }
  </script>
"#;

fn render(body: &str) -> Html<String> {
    Html(PAGE_SHELL.replace("<!--BODY-->", body))
}

pub async fn home() -> Html<String> {
    render(HOME_BODY)
}

pub async fn prediction() -> Html<String> {
    render(PREDICTION_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pages_render_both_views() {
        let Html(home) = home().await;
        assert!(home.contains("Fake News Detector"));
        assert!(home.contains("TF-IDF + LinearSVC"));
        assert!(home.contains("Team Sigma Male"));

        let Html(prediction) = prediction().await;
        assert!(prediction.contains("Detect"));
        assert!(prediction.contains("/api/v1/predict"));
        assert!(!prediction.contains("<!--BODY-->"));
    }
}
