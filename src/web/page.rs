//! Main page template.
//!
//! The template is compiled once at startup and owned by the page controller.
//! It is rendered with a [`PageData`] context: the summary table rows under
//! `table`, chart points under `longitude_chart` and `district_chart`.
//! Autoescaping is on, so chart data embedded with `json_encode()` is safe
//! inside HTML attributes.

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use crate::stats::{GraphPoint, SettlementTypeStats};

const PAGE: &str = "index.html";

#[derive(Debug, Clone)]
pub struct PageTemplate {
    tera: Tera,
}

/// Values exposed to the page template.
#[derive(Debug, Default, Serialize)]
pub struct PageData {
    pub table: Vec<SettlementTypeStats>,
    pub longitude_chart: Vec<GraphPoint>,
    pub district_chart: Vec<GraphPoint>,
}

impl PageTemplate {
    /// Compiles the template file at `path`.
    pub fn load(path: &Path) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_template_file(path, Some(PAGE))?;
        tracing::debug!(path = ?path, "Page template loaded");
        Ok(Self { tera })
    }

    /// Compiles an in-memory template.
    pub fn from_source(source: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE, source)?;
        Ok(Self { tera })
    }

    pub fn render(&self, data: &PageData) -> Result<String, tera::Error> {
        let context = Context::from_serialize(data)?;
        self.tera.render(PAGE, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Axis;

    fn row(kind: &str) -> SettlementTypeStats {
        SettlementTypeStats {
            kind: kind.into(),
            avg_population: 1500.0,
            avg_children: 200.0,
            min_population: 1000,
            max_population: 2000,
        }
    }

    #[test]
    fn test_render_table_rows() {
        let page = PageTemplate::from_source(
            "{% for row in table %}<td>{{ row.type }}</td><td>{{ row.maxPopulation }}</td>{% endfor %}",
        )
        .unwrap();

        let html = page
            .render(&PageData {
                table: vec![row("city"), row("village")],
                ..PageData::default()
            })
            .unwrap();

        assert_eq!(
            html,
            "<td>city</td><td>2000</td><td>village</td><td>2000</td>"
        );
    }

    #[test]
    fn test_chart_data_is_escaped() {
        let page = PageTemplate::from_source(
            r#"<canvas data-points="{{ district_chart | json_encode() }}"></canvas>"#,
        )
        .unwrap();

        let html = page
            .render(&PageData {
                district_chart: vec![GraphPoint {
                    x: Axis::Categorical("</script>".into()),
                    y: 1,
                }],
                ..PageData::default()
            })
            .unwrap();

        assert!(!html.contains("</script>"));
        assert!(html.contains("&quot;x&quot;:&quot;&lt;&#x2F;script&gt;&quot;"));
    }

    #[test]
    fn test_syntax_error_rejected() {
        assert!(PageTemplate::from_source("{% for row in table %}").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(PageTemplate::load(Path::new("/definitely/not/here.html")).is_err());
    }
}
