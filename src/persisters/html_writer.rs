use std::path::Path;

use crate::error::{ApiError, Result};

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// A chart mounted on the page: element id and ECharts option.
pub struct PageChart<'a> {
    pub id: &'a str,
    pub options: String,
}

pub struct HtmlWriter {}

impl HtmlWriter {
    pub fn save_charts_page(title: &str, charts: &[PageChart<'_>], path: &Path) -> Result<()> {
        std::fs::write(path, HtmlWriter::charts_page(title, charts)).map_err(|e| {
            ApiError::Export {
                file_name: path.display().to_string(),
                message: e.to_string(),
            }
        })
    }

    pub fn charts_page(title: &str, charts: &[PageChart<'_>]) -> String {
        let containers = charts
            .iter()
            .map(|chart| {
                format!(
                    r#"    <div id="{}" style="width: 100%; height: 380px;"></div>"#,
                    chart.id
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let scripts = charts
            .iter()
            .map(|chart| {
                format!(
                    r#"      (function() {{
        const chart = echarts.init(document.getElementById("{}"));
        chart.setOption({});
        window.addEventListener('resize', chart.resize);
      }})();"#,
                    chart.id, chart.options
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <script src="{script}"></script>
  </head>
  <body>
    <h2>{title}</h2>
{containers}
    <script>
      document.addEventListener('DOMContentLoaded', function() {{
{scripts}
      }});
    </script>
  </body>
</html>
"#,
            title = escape_html(title),
            script = ECHARTS_SCRIPT,
            containers = containers,
            scripts = scripts
        )
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
