// Chart page - static layout that polls /chart with its own query string
use axum::response::Html;

const PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Signal Generator</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body { margin: 0; font-family: system-ui, -apple-system, sans-serif; }
    h1 { font-size: 17px; margin: 16px 20px 0; }
    #main-graph { width: 100%; height: 80vh; }
    #status { margin: 0 20px; font-size: 11px; color: #7f8ba0; }
  </style>
</head>
<body>
  <h1>Signal Generator App</h1>
  <div id="main-graph"></div>
  <div id="status"></div>
  <script>
    let timer = null;

    async function updateChart() {
      const status = document.getElementById("status");
      try {
        const response = await fetch("/chart" + window.location.search);
        if (!response.ok) {
          status.textContent = "Chart request failed: " + response.status;
          return;
        }
        const chart = await response.json();
        Plotly.react("main-graph", chart.figure.data, chart.figure.layout, { responsive: true });
        document.body.style.background = chart.figure.layout.paper_bgcolor;
        document.body.style.color = chart.figure.layout.font.color;
        status.textContent = chart.live.enabled
          ? "Live, refreshing every " + chart.live.intervalMs + " ms"
          : "";

        if (chart.live.enabled && timer === null) {
          timer = setInterval(updateChart, chart.live.intervalMs);
        } else if (!chart.live.enabled && timer !== null) {
          clearInterval(timer);
          timer = null;
        }
      } catch (err) {
        status.textContent = "Chart request failed: " + err;
      }
    }

    updateChart();
  </script>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(PAGE)
}
