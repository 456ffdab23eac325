// src/report/map.rs
//
// Self-contained Leaflet page: one circle marker per site, coloured by
// category, with a legend. Site data is embedded as JSON and turned into DOM
// text nodes by the page script, so names never reach the HTML parser.

use std::path::Path;

use serde::Serialize;

use crate::config::options::MapOptions;
use crate::core::sanitize::escape_html;
use crate::dataset::Dataset;
use crate::error::ExportError;
use crate::geo::bounds;
use crate::stats::category_counts;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const FULLSCREEN_CSS: &str = "https://unpkg.com/leaflet.fullscreen@3.0.2/Control.FullScreen.css";
const FULLSCREEN_JS: &str = "https://unpkg.com/leaflet.fullscreen@3.0.2/Control.FullScreen.js";
const MINIMAP_CSS: &str = "https://unpkg.com/leaflet-minimap@3.6.1/dist/Control.MiniMap.min.css";
const MINIMAP_JS: &str = "https://unpkg.com/leaflet-minimap@3.6.1/dist/Control.MiniMap.min.js";

const STYLE: &str = r#"
html, body { height: 100%; margin: 0; }
#map { height: 100%; }
.legend {
  position: fixed; bottom: 30px; left: 30px; z-index: 1000;
  background: white; padding: 10px 14px; border: 2px solid #888;
  border-radius: 5px; font: 14px Arial, sans-serif;
}
.legend h4 { margin: 0 0 6px; }
.legend .dot {
  display: inline-block; width: 12px; height: 12px;
  border-radius: 50%; margin-right: 6px;
}
.legend .total { margin-top: 6px; font-weight: bold; }
"#;

const SCRIPT: &str = r#"
const map = L.map('map').setView(CONFIG.center, CONFIG.zoom);
L.tileLayer(CONFIG.tiles, { attribution: CONFIG.attribution, maxZoom: 19 }).addTo(map);
L.control.scale().addTo(map);
// Plugin scripts come from a CDN; the map still works if one fails to load.
if (L.control.fullscreen) L.control.fullscreen({ position: 'topleft' }).addTo(map);
if (L.Control.MiniMap) {
  const mini = L.tileLayer(CONFIG.tiles, { attribution: CONFIG.attribution });
  new L.Control.MiniMap(mini, { toggleDisplay: true }).addTo(map);
}

function line(parent, text) {
  parent.appendChild(document.createElement('br'));
  parent.appendChild(document.createTextNode(text));
}

for (const s of SITES) {
  const popup = document.createElement('div');
  const title = document.createElement('b');
  title.textContent = s.name;
  popup.appendChild(title);
  line(popup, 'Région : ' + s.region);
  line(popup, 'Type : ' + s.category);
  line(popup, 'Année : ' + (s.year === null ? 'N/A' : s.year));
  if (s.imputed) line(popup, 'Position approximative');

  const tip = document.createElement('span');
  tip.textContent = s.name;

  L.circleMarker([s.lat, s.lon], {
    radius: 7, color: s.color, weight: 1, fillColor: s.color, fillOpacity: 0.8
  }).bindTooltip(tip).bindPopup(popup).addTo(map);
}
"#;

#[derive(Serialize)]
struct PageConfig<'a> {
    center: [f64; 2],
    zoom: u8,
    tiles: &'a str,
    attribution: &'a str,
}

#[derive(Serialize)]
struct Marker<'a> {
    name: &'a str,
    region: &'a str,
    category: &'static str,
    year: Option<i32>,
    lat: f64,
    lon: f64,
    color: &'static str,
    imputed: bool,
}

/// Rendered page plus marker accounting.
#[derive(Clone, Debug)]
pub struct MapRender {
    pub html: String,
    pub placed: usize,
    /// Records left off the map by the territory filter.
    pub skipped: usize,
}

pub fn render_map(ds: &Dataset, opts: &MapOptions) -> Result<MapRender, ExportError> {
    let mut markers = Vec::with_capacity(ds.len());
    let mut skipped = 0usize;

    for r in ds {
        let Some(p) = r.point() else {
            skipped += 1;
            continue;
        };
        if opts.france_only && !bounds::in_france(&p) {
            logw!("Map: `{}` at ({p}) is outside the French territories, not placed", r.name);
            skipped += 1;
            continue;
        }
        markers.push(Marker {
            name: &r.name,
            region: &r.region,
            category: r.category.label(),
            year: r.inscription_year,
            lat: p.lat,
            lon: p.lon,
            color: r.category.color(),
            imputed: r.is_imputed(),
        });
    }

    let config = PageConfig {
        center: [opts.center.lat, opts.center.lon],
        zoom: opts.zoom,
        tiles: &opts.tiles_url,
        attribution: &opts.tiles_attribution,
    };

    let config = script_json(&config)?;
    let sites = script_json(&markers)?;
    let title = escape_html(&opts.title);
    let legend = legend_html(ds, &opts.title);

    let html = format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\">\n\
         <script src=\"{LEAFLET_JS}\"></script>\n\
         <link rel=\"stylesheet\" href=\"{FULLSCREEN_CSS}\">\n\
         <script src=\"{FULLSCREEN_JS}\"></script>\n\
         <link rel=\"stylesheet\" href=\"{MINIMAP_CSS}\">\n\
         <script src=\"{MINIMAP_JS}\"></script>\n\
         <style>{STYLE}</style>\n</head>\n<body>\n<div id=\"map\"></div>\n{legend}\n\
         <script>\nconst CONFIG = {config};\nconst SITES = {sites};\n{SCRIPT}</script>\n\
         </body>\n</html>\n"
    );

    logf!("Map: placed={} skipped={}", markers.len(), skipped);
    Ok(MapRender { html, placed: markers.len(), skipped })
}

/// Render and write the page. Parent directories are created.
pub fn write_map(ds: &Dataset, opts: &MapOptions, path: &Path) -> Result<MapRender, ExportError> {
    let render = render_map(ds, opts)?;
    crate::file::write_text(path, &render.html)?;
    Ok(render)
}

// JSON for an inline <script>: `</` would let data close the element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn legend_html(ds: &Dataset, title: &str) -> String {
    let mut out = join!("<div class=\"legend\">\n<h4>", &escape_html(title), "</h4>\n");
    for (cat, n) in category_counts(ds) {
        out.push_str(&format!(
            "<div><span class=\"dot\" style=\"background:{}\"></span>{} ({n})</div>\n",
            cat.color(),
            cat.label()
        ));
    }
    out.push_str(&format!("<div class=\"total\">Total : {} sites</div>\n</div>", ds.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::AssembleOptions;
    use crate::dataset::assemble;
    use crate::site::{Category, SiteRecord};

    fn dataset() -> Dataset {
        assemble(
            vec![
                SiteRecord::new(
                    s!("Mont-Saint-Michel </script><b>"),
                    s!("Normandie"),
                    Some(1979),
                    Category::Cultural,
                    s!("48° 38′ 8″ N, 1° 30′ 39″ O"),
                ),
                SiteRecord::new(s!("Lagons"), s!("Nouvelle-Calédonie"), Some(2008), Category::Natural, s!("-21.0, 165.5")),
                SiteRecord::new(s!("Bad cell"), s!("?"), None, Category::Mixed, s!("10, 10")),
            ],
            &AssembleOptions::default(),
        )
    }

    #[test]
    fn filters_out_of_territory_markers() {
        let ds = dataset();
        let r = render_map(&ds, &MapOptions::default()).unwrap();
        assert_eq!((r.placed, r.skipped), (2, 1));

        let all = MapOptions { france_only: false, ..Default::default() };
        let r = render_map(&ds, &all).unwrap();
        assert_eq!((r.placed, r.skipped), (3, 0));
    }

    #[test]
    fn embedded_data_cannot_close_script() {
        let r = render_map(&dataset(), &MapOptions::default()).unwrap();
        assert!(r.html.contains(r#"Mont-Saint-Michel <\/script><b>"#));
        // three library tags plus the inline one
        assert_eq!(r.html.matches("</script>").count(), 4);
    }

    #[test]
    fn page_has_settings_and_legend() {
        let r = render_map(&dataset(), &MapOptions::default()).unwrap();
        assert!(r.html.contains(r#""center":[46.6,2.5],"zoom":6"#));
        assert!(r.html.contains("basemaps.cartocdn.com/light_all"));
        assert!(r.html.contains("#3498db\"></span>Culturel (1)"));
        assert!(r.html.contains("Mixte (1)"));
        assert!(r.html.contains("Total : 3 sites"));
        assert!(r.html.contains("\"year\":null"));
    }

    #[test]
    fn page_loads_fullscreen_and_minimap_controls() {
        let html = render_map(&dataset(), &MapOptions::default()).unwrap().html;
        assert!(html.contains(FULLSCREEN_CSS) && html.contains(FULLSCREEN_JS));
        assert!(html.contains(MINIMAP_CSS) && html.contains(MINIMAP_JS));
        assert!(html.contains("L.control.fullscreen("));
        assert!(html.contains("new L.Control.MiniMap(mini, { toggleDisplay: true })"));
    }
}
