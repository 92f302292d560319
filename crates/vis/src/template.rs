use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::chart::ChartView;
use crate::error::Result;

const INDEX_TEMPLATE_NAME: &str = "index";
const INDEX_TEMPLATE: &str = include_str!("./template/index.html.tt");
const STYLE: &str = include_str!("./template/style.css");
const SCRIPT: &str = include_str!("./template/interaction.js");

pub(crate) struct TemplateEngine<'a> {
    index_file_path: &'a Path,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(index_file_path: &'a Path) -> TemplateEngine<'a> {
        Self { index_file_path }
    }

    /// Writes the page to the index file, replacing any previous page.
    pub fn render(&self, chart: &ChartView) -> Result<()> {
        let text = render_page(chart)?;

        let mut file = File::create(self.index_file_path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

pub(crate) fn render_page(chart: &ChartView) -> Result<String> {
    let mut template = TinyTemplate::new();
    template.add_formatter("unescaped", tinytemplate::format_unescaped);
    template.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;

    let context = Context {
        chart,
        style: STYLE,
        script: SCRIPT,
    };

    Ok(template.render(INDEX_TEMPLATE_NAME, &context)?)
}

#[derive(Serialize)]
struct Context<'a> {
    chart: &'a ChartView,
    style: &'static str,
    script: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    use racevis_dataset::Dataset;
    use racevis_dataset::record::RawRecord;

    use crate::config::ChartConfig;

    fn record(time: &str, year: i32, doping: &str, url: &str) -> RawRecord {
        RawRecord {
            time: time.to_owned(),
            place: 1,
            seconds: 0,
            name: String::from("Marco Pantani"),
            year,
            nationality: String::from("ITA"),
            doping: doping.to_owned(),
            url: url.to_owned(),
        }
    }

    fn page(raw: Vec<RawRecord>) -> String {
        let dataset = Dataset::from_raw(raw).unwrap();
        let chart = ChartView::new(&dataset, &ChartConfig::default()).unwrap();

        render_page(&chart).unwrap()
    }

    #[test]
    fn single_record_page() {
        let page = page(vec![record("36:50", 1995, "", "")]);

        assert_eq!(page.matches("<circle").count(), 1);
        assert!(page.contains(r#"class="dot no-doping""#));
        assert!(page.contains("No doping allegations (1)"));
        assert!(page.contains("Doping allegations (0)"));
        assert!(page.contains(r#"id="x-axis""#));
        assert!(page.contains(r#"id="y-axis""#));
        assert!(page.contains(r#"id="legend""#));
        assert!(!page.contains("data-url"));
    }

    #[test]
    fn tooltip_settings_are_embedded() {
        let page = page(vec![record("36:50", 1995, "", "")]);

        assert!(page.contains(r#"data-offset-x="10.0""#));
        assert!(page.contains(r#"data-offset-y="-28.0""#));
        assert!(page.contains(r#"data-opacity="0.9""#));
        assert!(page.contains(r#"data-hidden-opacity="0.0""#));
    }

    #[test]
    fn script_reads_the_embedded_settings() {
        let page = page(vec![record("36:50", 1995, "", "")]);

        for key in ["offsetX", "offsetY", "opacity", "hiddenOpacity", "tooltip", "url"] {
            assert!(
                page.contains(&format!("dataset.{key}")),
                "script should read data-* key {key}"
            );
        }
        assert!(page.contains(r#"window.open(url, "_blank", "noopener")"#));
    }

    #[test]
    fn source_link_is_attached_to_the_dot() {
        let page = page(vec![
            record("36:50", 1995, "EPO", "https://example.org/pantani"),
            record("37:15", 2004, "", ""),
        ]);

        assert_eq!(page.matches("data-url=").count(), 1);
        assert!(page.contains(r#"data-url="https://example.org/pantani""#));
        assert!(page.contains(r#"class="dot doping""#));
        assert!(page.contains("(click to see source)"));
    }

    #[test]
    fn record_text_is_escaped() {
        let mut raw = record("36:50", 1995, "<script>alert(1)</script>", "");
        raw.name = String::from("Tom & Jerry");

        let page = page(vec![raw]);

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("Tom &amp; Jerry"));
    }
}
